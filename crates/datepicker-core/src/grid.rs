//! Fixed 6×7 month-grid construction with per-cell semantic flags.
//!
//! `build_grid` is a pure function of the visible month, "today", the
//! constraint set, and the current selection. The host re-renders from its
//! output; nothing here is cached or mutated.

use serde::Serialize;

use crate::config::Constraints;
use crate::date::{self, CalendarDate};
use crate::nav::VisibleMonth;

/// A month grid always has exactly 42 cells (6 rows of 7 columns).
pub const GRID_CELLS: usize = 42;

/// Semantic classification of a single grid cell. Exactly one flag applies
/// to each cell; when several conditions hold for a day, precedence is
/// `Selected > Blocked > Weekend > Today > Past > Usable`. `Padding` only
/// ever appears on the leading/trailing filler cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellFlag {
    Padding,
    Selected,
    Blocked,
    Weekend,
    Today,
    Past,
    Usable,
}

/// One grid cell, ready for rendering. `display` is empty for padding
/// cells; `tooltip` carries the blocked reason on blocked cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateCell {
    pub display: String,
    pub flag: CellFlag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl DateCell {
    fn padding() -> Self {
        Self {
            display: String::new(),
            flag: CellFlag::Padding,
            tooltip: None,
        }
    }

    fn day(day: u32, flag: CellFlag) -> Self {
        Self {
            display: day.to_string(),
            flag,
            tooltip: None,
        }
    }

    fn blocked(day: u32, reason: &str) -> Self {
        Self {
            display: day.to_string(),
            flag: CellFlag::Blocked,
            tooltip: Some(reason.to_string()),
        }
    }
}

/// Day numbers (1-based) that fall on Saturday or Sunday, derived from the
/// weekday of the 1st.
///
/// Saturday/Sunday pairs are collected while both members stay ≤ 31; a
/// trailing Saturday whose Sunday partner would land past 31 is not
/// flagged.
fn weekend_day_numbers(first_weekday: u32) -> Vec<u32> {
    let first_saturday = if first_weekday == 0 {
        7
    } else {
        7 - first_weekday
    };
    let first_sunday = if first_weekday == 0 {
        1
    } else {
        first_saturday + 1
    };

    let mut days = Vec::new();
    let mut week = 0;
    loop {
        let saturday = week * 7 + first_saturday;
        let sunday = week * 7 + first_sunday;
        if saturday > 31 || sunday > 31 {
            break;
        }
        days.push(saturday);
        days.push(sunday);
        week += 1;
    }
    days
}

/// Build the 42-cell grid for the visible month.
///
/// Cells are emitted in row-major order: a run of leading `Padding` cells,
/// one cell per day of the month with exactly one semantic flag, then
/// trailing `Padding` up to 42. A month starting on Sunday gets a full
/// leading week of padding.
pub fn build_grid(
    visible: VisibleMonth,
    today: CalendarDate,
    constraints: &Constraints,
    selection: Option<CalendarDate>,
) -> Vec<DateCell> {
    let mut cells = Vec::with_capacity(GRID_CELLS);

    let first_weekday = date::weekday_of_first(visible.year, visible.month);
    let left_padding = if first_weekday == 0 { 7 } else { first_weekday };
    for _ in 0..left_padding {
        cells.push(DateCell::padding());
    }

    let weekend_days = weekend_day_numbers(first_weekday);
    let is_current_month = visible.contains(today);
    let is_in_the_past = visible.is_before_month_of(today);

    for day in 1..=date::days_in_month(visible.year, visible.month) {
        let selected = selection.is_some_and(|s| {
            s.year == visible.year && s.month == visible.month && s.day == day
        });

        let cell = if selected {
            DateCell::day(day, CellFlag::Selected)
        } else if let Some(reason) = constraints.blocked.lookup(visible.month, day) {
            DateCell::blocked(day, reason)
        } else if weekend_days.contains(&day) {
            DateCell::day(day, CellFlag::Weekend)
        } else if is_current_month && day == today.day {
            DateCell::day(day, CellFlag::Today)
        } else if (is_current_month && day < today.day) || is_in_the_past {
            DateCell::day(day, CellFlag::Past)
        } else {
            DateCell::day(day, CellFlag::Usable)
        };
        cells.push(cell);
    }

    while cells.len() < GRID_CELLS {
        cells.push(DateCell::padding());
    }

    cells
}
