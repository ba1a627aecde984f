//! Canonical calendar-day type and month arithmetic.
//!
//! `CalendarDate` identifies a calendar day without any timezone attached.
//! Months are 0-based (0 = January) throughout the engine, matching the
//! grid and blocked-index conventions.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PickerError, Result};

/// A timezone-agnostic calendar day.
///
/// Ordering and equality are by (year, month, day), so `<` compares
/// chronologically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CalendarDate {
    pub year: i32,
    /// 0-based month (0 = January … 11 = December).
    pub month: u32,
    /// 1-based day of month.
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Parse an ISO 8601 calendar-day string.
    ///
    /// Accepts both zero-padded ("2020-04-02") and unpadded ("2020-04-2")
    /// month/day components; host configuration contains both spellings.
    ///
    /// # Errors
    /// Returns [`PickerError::InvalidDate`] when the string does not
    /// describe a real calendar day.
    pub fn parse_iso(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self::from_naive)
            .map_err(|_| PickerError::InvalidDate(s.to_string()))
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
            day: date.day(),
        }
    }

    /// Today according to the system clock, in local time.
    pub fn today() -> Self {
        Self::from_naive(chrono::Local::now().date_naive())
    }

    /// Format as ISO "YYYY-MM-DD". Because `CalendarDate` carries no
    /// timezone, the formatted day is always the day that was stored.
    pub fn to_iso(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}

/// Day count of a (year, 0-based month) pair, accounting for leap years.
///
/// Out-of-range input degrades to 0 rather than panicking; the grid then
/// renders as all padding.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    if month > 11 {
        return 0;
    }
    let (next_year, next_month) = if month == 11 {
        (year + 1, 0)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month + 1, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

/// Weekday of the 1st of the given month, 0 = Sunday … 6 = Saturday.
pub fn weekday_of_first(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .map(|first| first.weekday().num_days_from_sunday())
        .unwrap_or(0)
}
