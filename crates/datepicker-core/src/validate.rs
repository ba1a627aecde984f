//! Selection acceptance rules: minimum-date and blocked-date checks.
//!
//! Validation failures are ordinary reported state, not errors — the user
//! retries with a different day and the host restyles its input from the
//! resulting [`Validity`].

use crate::config::Constraints;
use crate::date::CalendarDate;

/// Reason text reported when a candidate falls before the minimum date.
pub const BEFORE_MINIMUM: &str = "before minimum";

/// Acceptability of a candidate or committed selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validity {
    pub is_valid: bool,
    pub error_reason: Option<String>,
}

impl Validity {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_reason: None,
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_reason: Some(reason.into()),
        }
    }
}

/// Check a candidate pick against the constraint set.
///
/// The minimum-date rule is evaluated first, so a day that is both before
/// the minimum and blocked reports [`BEFORE_MINIMUM`]. Blocked lookup is
/// by (month, day) only — a blocked day matches in every year.
pub fn validate(candidate: CalendarDate, constraints: &Constraints) -> Validity {
    if let Some(min) = constraints.min_date {
        if candidate < min {
            return Validity::invalid(BEFORE_MINIMUM);
        }
    }
    if let Some(reason) = constraints.blocked.lookup(candidate.month, candidate.day) {
        return Validity::invalid(reason);
    }
    Validity::valid()
}

/// Re-check a previously committed selection when the dialog closes
/// without a fresh pick.
///
/// Only the minimum-date rule runs here; blocked days are not re-checked
/// on close. With no committed selection there is nothing to fail.
pub fn revalidate_on_close(
    selection: Option<CalendarDate>,
    constraints: &Constraints,
) -> Validity {
    match (selection, constraints.min_date) {
        (Some(selected), Some(min)) if selected < min => Validity::invalid(BEFORE_MINIMUM),
        _ => Validity::valid(),
    }
}
