//! WASM bindings for datepicker-core.
//!
//! Exposes the calendar-grid engine to JavaScript via `wasm-bindgen`. The
//! host constructs one handle per widget instance, attaches configuration
//! once, and re-renders from `cellsData()` after every interaction. All
//! complex types cross the boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p datepicker-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/datepicker_wasm.wasm
//! ```

use datepicker_core::{
    resolve, CalendarDate, ConfigIssue, DatePicker, DismissReason, PickerConfig, PickerEvent,
    Validity,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidityDto {
    is_valid: bool,
    error_reason: Option<String>,
}

impl From<&Validity> for ValidityDto {
    fn from(v: &Validity) -> Self {
        Self {
            is_valid: v.is_valid,
            error_reason: v.error_reason.clone(),
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
enum PickerEventDto {
    #[serde(rename_all = "camelCase")]
    Set {
        localized_date: String,
        selected_date: CalendarDate,
    },
    #[serde(rename_all = "camelCase")]
    ValidationChanged {
        is_valid: bool,
        error_reason: Option<String>,
    },
}

impl From<&PickerEvent> for PickerEventDto {
    fn from(event: &PickerEvent) -> Self {
        match event {
            PickerEvent::SelectionCommitted {
                localized_date,
                selected_date,
            } => Self::Set {
                localized_date: localized_date.clone(),
                selected_date: *selected_date,
            },
            PickerEvent::ValidationChanged {
                is_valid,
                error_reason,
            } => Self::ValidationChanged {
                is_valid: *is_valid,
                error_reason: error_reason.clone(),
            },
        }
    }
}

/// One dropped configuration item, reported back from `attach`.
fn issue_text(issue: &ConfigIssue) -> String {
    match issue {
        ConfigIssue::BlockedDate(rejected) => format!(
            "blocked date {:?} dropped: {}",
            rejected.record.day, rejected.error
        ),
        ConfigIssue::MinDate { raw, error } => format!("min date {:?} ignored: {}", raw, error),
        ConfigIssue::InitialValue { raw, error } => {
            format!("initial value {:?} ignored: {}", raw, error)
        }
    }
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// One date-picker widget instance.
#[wasm_bindgen]
pub struct DatePickerHandle {
    inner: DatePicker,
}

#[wasm_bindgen]
impl DatePickerHandle {
    /// Construct a picker. `today` overrides the reference day (ISO
    /// "YYYY-MM-DD"); when omitted, the system clock is used.
    #[wasm_bindgen(constructor)]
    pub fn new(today: Option<String>) -> Result<DatePickerHandle, JsValue> {
        let inner = match today.as_deref() {
            Some(s) => {
                let date = CalendarDate::parse_iso(s)
                    .map_err(|e| JsValue::from_str(&e.to_string()))?;
                DatePicker::with_today(date)
            }
            None => DatePicker::new(),
        };
        Ok(Self { inner })
    }

    /// Attach host configuration, supplied as one JSON document:
    /// `{"blocked_dates": [{"day", "reason"}, ...], "min": ..., "value": ...}`.
    ///
    /// Returns a JSON array of strings describing every configuration item
    /// that was dropped because its date did not parse (empty when the
    /// whole document resolved cleanly).
    pub fn attach(&mut self, config_json: &str) -> Result<String, JsValue> {
        let config = PickerConfig::from_json(config_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let resolved = resolve(&config);
        let issues: Vec<String> = resolved.issues.iter().map(issue_text).collect();

        self.inner
            .attach(resolved.constraints, resolved.initial_selection);

        serde_json::to_string(&issues)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// The 42-cell grid for the visible month, as a JSON array of
    /// `{display, flag, tooltip?}` objects in render order.
    #[wasm_bindgen(js_name = "cellsData")]
    pub fn cells_data(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.grid())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = "monthLabel")]
    pub fn month_label(&self) -> String {
        self.inner.month_label().to_string()
    }

    /// Year display text; empty when the visible year is the current year.
    #[wasm_bindgen(js_name = "yearLabel")]
    pub fn year_label(&self) -> String {
        self.inner.year_label()
    }

    /// Weekday abbreviations, Sunday first, as a JSON array.
    #[wasm_bindgen(js_name = "weekDays")]
    pub fn week_days(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.weekday_labels())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = "goToNextMonth")]
    pub fn go_to_next_month(&mut self) {
        self.inner.go_to_next_month();
    }

    #[wasm_bindgen(js_name = "goToPrevMonth")]
    pub fn go_to_prev_month(&mut self) {
        self.inner.go_to_prev_month();
    }

    /// Jump the visible month to the month of a typed input value, leaving
    /// the committed selection untouched.
    #[wasm_bindgen(js_name = "handleChange")]
    pub fn handle_change(&mut self, value: &str) -> Result<(), JsValue> {
        let date =
            CalendarDate::parse_iso(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner.reveal(date);
        Ok(())
    }

    #[wasm_bindgen(js_name = "showDialog")]
    pub fn show_dialog(&mut self) {
        self.inner.show_dialog();
    }

    /// Close the dialog without a fresh pick. `reason` is `"outside"` for
    /// an outside-pointer interaction or `"escape"` for the escape key.
    pub fn collapse(&mut self, reason: &str) -> Result<(), JsValue> {
        let reason = match reason {
            "outside" => DismissReason::OutsideInteraction,
            "escape" => DismissReason::Escape,
            other => {
                return Err(JsValue::from_str(&format!(
                    "unknown dismiss reason: {:?}",
                    other
                )))
            }
        };
        self.inner.dismiss(reason);
        Ok(())
    }

    /// Attempt to pick a day in the visible month. Returns the resulting
    /// validity as a JSON `{isValid, errorReason}` object.
    #[wasm_bindgen(js_name = "selectDay")]
    pub fn select_day(&mut self, day: u32) -> Result<String, JsValue> {
        let verdict = self.inner.select_day(day);
        serde_json::to_string(&ValidityDto::from(&verdict))
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Drain pending notifications in FIFO order, as a JSON array of
    /// tagged event objects.
    #[wasm_bindgen(js_name = "takeEvents")]
    pub fn take_events(&mut self) -> Result<String, JsValue> {
        let events = self.inner.take_events();
        let dtos: Vec<PickerEventDto> = events.iter().map(PickerEventDto::from).collect();
        serde_json::to_string(&dtos)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}
