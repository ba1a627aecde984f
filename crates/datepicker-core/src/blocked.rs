//! Blocked-date records and the (month, day) lookup index.
//!
//! The index deliberately discards the year of each entry: a blocked
//! April 2 recurs on April 2 of every year. Lookups are O(1) on
//! (0-based month, day-of-month).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::error::PickerError;

/// A blocked-day record as the host supplies it: an ISO date string plus
/// a human-readable reason shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedDateRecord {
    pub day: String,
    pub reason: String,
}

/// A record whose `day` failed to parse and was dropped from the index.
#[derive(Debug)]
pub struct RejectedRecord {
    pub record: BlockedDateRecord,
    pub error: PickerError,
}

/// Lookup structure for blocked days, keyed by (month, day) only.
#[derive(Debug, Clone, Default)]
pub struct BlockedDateIndex {
    by_month: HashMap<u32, HashMap<u32, String>>,
}

impl BlockedDateIndex {
    /// Build an index from raw records.
    ///
    /// Records whose `day` does not parse as a calendar date are dropped
    /// and returned separately instead of being indexed. When two records
    /// land on the same (month, day) slot, the later one wins.
    pub fn build(records: &[BlockedDateRecord]) -> (Self, Vec<RejectedRecord>) {
        let mut index = Self::default();
        let mut rejected = Vec::new();

        for record in records {
            match CalendarDate::parse_iso(&record.day) {
                Ok(date) => {
                    index
                        .by_month
                        .entry(date.month)
                        .or_default()
                        .insert(date.day, record.reason.clone());
                }
                Err(error) => rejected.push(RejectedRecord {
                    record: record.clone(),
                    error,
                }),
            }
        }

        (index, rejected)
    }

    /// Reason text for a blocked (0-based month, day) slot, if any.
    pub fn lookup(&self, month: u32, day: u32) -> Option<&str> {
        self.by_month
            .get(&month)
            .and_then(|days| days.get(&day))
            .map(String::as_str)
    }

    /// Number of indexed (month, day) slots.
    pub fn len(&self) -> usize {
        self.by_month.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_month.values().all(HashMap::is_empty)
    }
}
