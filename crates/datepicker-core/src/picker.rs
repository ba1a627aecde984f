//! The assembled date-picker core: widget state, two-phase lifecycle,
//! display labels, and outward notifications.
//!
//! The picker owns the mutable state (visible-month cursor, selection,
//! dialog visibility, pending notifications) and delegates every
//! computation to the pure modules: [`crate::grid`] for the cell grid and
//! [`crate::validate`] for acceptance checks.

use std::collections::VecDeque;

use crate::config::Constraints;
use crate::date::{self, CalendarDate};
use crate::grid::{self, DateCell};
use crate::nav::{DialogState, DismissReason, VisibleMonth};
use crate::validate::{self, Validity};

/// Month names, indexed by 0-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "Ianuarie",
    "Februarie",
    "Martie",
    "Aprilie",
    "Mai",
    "Iunie",
    "Iulie",
    "August",
    "Septembrie",
    "Octombrie",
    "Noiembrie",
    "Decembrie",
];

/// Weekday abbreviations in Sunday-first order, matching the grid layout.
pub const WEEKDAY_LABELS: [&str; 7] = ["Du", "Lu", "Ma", "Mi", "Jo", "Vi", "Sâ"];

/// Outward notification, queued during an update and drained by the host
/// in FIFO order via [`DatePicker::take_events`].
#[derive(Debug, Clone, PartialEq)]
pub enum PickerEvent {
    /// A pick was accepted and committed. `localized_date` is the picked
    /// calendar day as ISO "YYYY-MM-DD", independent of host timezone.
    SelectionCommitted {
        localized_date: String,
        selected_date: CalendarDate,
    },
    /// The validity of the current selection changed.
    ValidationChanged {
        is_valid: bool,
        error_reason: Option<String>,
    },
}

/// Date-picker core state.
///
/// Lifecycle is two-phase: construct (with the system clock's "today" or
/// an explicit one), then call [`DatePicker::attach`] exactly once when
/// the host has configuration available. The constraint set is immutable
/// from that point on.
#[derive(Debug)]
pub struct DatePicker {
    today: CalendarDate,
    visible: VisibleMonth,
    constraints: Constraints,
    selection: Option<CalendarDate>,
    validity: Validity,
    dialog: DialogState,
    events: VecDeque<PickerEvent>,
    attached: bool,
}

impl DatePicker {
    /// Construct with "today" read from the system clock.
    pub fn new() -> Self {
        Self::with_today(CalendarDate::today())
    }

    /// Construct with an explicit "today". The visible month starts on the
    /// month containing it.
    pub fn with_today(today: CalendarDate) -> Self {
        Self {
            today,
            visible: VisibleMonth::containing(today),
            constraints: Constraints::default(),
            selection: None,
            validity: Validity::valid(),
            dialog: DialogState::default(),
            events: VecDeque::new(),
            attached: false,
        }
    }

    /// Supply configuration and an optional previously committed
    /// selection. Must be called once; the constraint set is immutable for
    /// the life of the instance, so calls after the first are ignored.
    ///
    /// Returns the validity of the initial selection (valid when there is
    /// none). A change in validity also queues a
    /// [`PickerEvent::ValidationChanged`] notification.
    pub fn attach(
        &mut self,
        constraints: Constraints,
        initial_selection: Option<CalendarDate>,
    ) -> Validity {
        if self.attached {
            return self.validity.clone();
        }
        self.attached = true;
        self.constraints = constraints;

        if let Some(initial) = initial_selection {
            self.selection = Some(initial);
            let verdict = validate::validate(initial, &self.constraints);
            self.set_validity(verdict);
        }
        self.validity.clone()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn today(&self) -> CalendarDate {
        self.today
    }

    pub fn visible_month(&self) -> VisibleMonth {
        self.visible
    }

    pub fn selection(&self) -> Option<CalendarDate> {
        self.selection
    }

    pub fn validity(&self) -> &Validity {
        &self.validity
    }

    pub fn dialog_state(&self) -> DialogState {
        self.dialog
    }

    /// The 42-cell grid for the visible month, recomputed from current
    /// state on every call.
    pub fn grid(&self) -> Vec<DateCell> {
        grid::build_grid(self.visible, self.today, &self.constraints, self.selection)
    }

    /// Name of the visible month.
    pub fn month_label(&self) -> &'static str {
        MONTH_NAMES[self.visible.month as usize % 12]
    }

    /// Year of the visible month as display text, suppressed (empty) when
    /// it equals the current year.
    pub fn year_label(&self) -> String {
        if self.visible.year == self.today.year {
            String::new()
        } else {
            self.visible.year.to_string()
        }
    }

    /// Weekday abbreviations in Sunday-first order.
    pub fn weekday_labels(&self) -> [&'static str; 7] {
        WEEKDAY_LABELS
    }

    pub fn go_to_next_month(&mut self) {
        self.visible.advance();
    }

    pub fn go_to_prev_month(&mut self) {
        self.visible.retreat();
    }

    /// Jump the visible month to the one containing `date`, leaving the
    /// selection untouched. Used when the host's input field receives a
    /// typed value.
    pub fn reveal(&mut self, date: CalendarDate) {
        self.visible = VisibleMonth::containing(date);
    }

    /// Open the picking dialog.
    pub fn show_dialog(&mut self) {
        self.dialog = DialogState::Open;
    }

    /// Close the dialog. Closing without a fresh pick re-checks the
    /// committed selection against the minimum-date rule only.
    pub fn dismiss(&mut self, reason: DismissReason) {
        if self.dialog == DialogState::Closed {
            return;
        }
        self.dialog = DialogState::Closed;
        if reason != DismissReason::SelectionCompleted {
            let verdict = validate::revalidate_on_close(self.selection, &self.constraints);
            self.set_validity(verdict);
        }
    }

    /// Attempt to pick `day` in the visible month.
    ///
    /// An accepted pick commits the selection, queues a
    /// [`PickerEvent::SelectionCommitted`] notification, and closes the
    /// dialog. A rejected pick leaves the selection untouched and reports
    /// the failure through the validity state. A day number outside the
    /// visible month is rejected without touching any state.
    pub fn select_day(&mut self, day: u32) -> Validity {
        if day == 0 || day > date::days_in_month(self.visible.year, self.visible.month) {
            return Validity::invalid("invalid day");
        }
        let candidate = CalendarDate::new(self.visible.year, self.visible.month, day);
        let verdict = validate::validate(candidate, &self.constraints);

        if verdict.is_valid {
            self.selection = Some(candidate);
            self.events.push_back(PickerEvent::SelectionCommitted {
                localized_date: candidate.to_iso(),
                selected_date: candidate,
            });
            self.set_validity(Validity::valid());
            self.dismiss(DismissReason::SelectionCompleted);
        } else {
            self.set_validity(verdict.clone());
        }
        verdict
    }

    /// Drain pending notifications in the order they were queued.
    pub fn take_events(&mut self) -> Vec<PickerEvent> {
        self.events.drain(..).collect()
    }

    /// Record a new validity, queuing a notification only when it actually
    /// changed.
    fn set_validity(&mut self, verdict: Validity) {
        if verdict != self.validity {
            self.validity = verdict;
            self.events.push_back(PickerEvent::ValidationChanged {
                is_valid: self.validity.is_valid,
                error_reason: self.validity.error_reason.clone(),
            });
        }
    }
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new()
    }
}
