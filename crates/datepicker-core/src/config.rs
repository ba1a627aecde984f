//! Host-supplied configuration: the wire bundle, its resolution, and the
//! immutable constraint set handed to the grid builder and validator.
//!
//! Configuration is always passed in explicitly — the engine never reads
//! ambient global state. Absent items fall back to documented defaults:
//! no minimum date, no blocked days, no initial selection.

use serde::{Deserialize, Serialize};

use crate::blocked::{BlockedDateIndex, BlockedDateRecord, RejectedRecord};
use crate::date::CalendarDate;
use crate::error::{PickerError, Result};

/// Configuration as the host supplies it: attribute strings plus the
/// blocked-date list, typically handed over as one JSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Blocked-day records (`{day, reason}` with an ISO 8601 `day`).
    pub blocked_dates: Vec<BlockedDateRecord>,
    /// Earliest selectable day, ISO "YYYY-MM-DD".
    pub min: Option<String>,
    /// Previously committed selection, ISO "YYYY-MM-DD".
    pub value: Option<String>,
}

impl PickerConfig {
    /// Parse a configuration document from JSON.
    ///
    /// # Errors
    /// Returns [`PickerError::ConfigParse`] when the document is not valid
    /// JSON. Unparseable *dates* inside a valid document are not errors
    /// here; they surface as [`ConfigIssue`]s during [`resolve`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The constraint set a widget instance lives with. Built once during
/// [`resolve`] and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    pub min_date: Option<CalendarDate>,
    pub blocked: BlockedDateIndex,
}

/// A configuration item that had to be dropped because its date string
/// did not parse.
#[derive(Debug)]
pub enum ConfigIssue {
    BlockedDate(RejectedRecord),
    MinDate { raw: String, error: PickerError },
    InitialValue { raw: String, error: PickerError },
}

/// Outcome of resolving a raw configuration bundle.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub constraints: Constraints,
    pub initial_selection: Option<CalendarDate>,
    /// Every item that was dropped on parse failure, in input order.
    pub issues: Vec<ConfigIssue>,
}

/// Resolve raw host configuration into the immutable constraint set plus
/// the parsed initial selection.
///
/// Unparseable items are dropped and reported as issues rather than
/// propagated into the constraint set; nothing here fails the widget.
pub fn resolve(config: &PickerConfig) -> ResolvedConfig {
    let (blocked, rejected) = BlockedDateIndex::build(&config.blocked_dates);
    let mut issues: Vec<ConfigIssue> = rejected.into_iter().map(ConfigIssue::BlockedDate).collect();

    let min_date = match config.min.as_deref() {
        Some(raw) => match CalendarDate::parse_iso(raw) {
            Ok(date) => Some(date),
            Err(error) => {
                issues.push(ConfigIssue::MinDate {
                    raw: raw.to_string(),
                    error,
                });
                None
            }
        },
        None => None,
    };

    let initial_selection = match config.value.as_deref() {
        Some(raw) => match CalendarDate::parse_iso(raw) {
            Ok(date) => Some(date),
            Err(error) => {
                issues.push(ConfigIssue::InitialValue {
                    raw: raw.to_string(),
                    error,
                });
                None
            }
        },
        None => None,
    };

    ResolvedConfig {
        constraints: Constraints { min_date, blocked },
        initial_selection,
        issues,
    }
}
