//! Error types for the date-picker core.

use thiserror::Error;

/// Errors that can occur while parsing host-supplied configuration.
///
/// Nothing in the core is fatal: a failed parse drops the offending item
/// and is reported back to the host; validation failures are not errors at
/// all, they travel as [`crate::validate::Validity`].
#[derive(Error, Debug)]
pub enum PickerError {
    /// A date string did not parse as an ISO 8601 calendar day.
    #[error("invalid date string: {0:?}")]
    InvalidDate(String),

    /// The host-supplied configuration document was not valid JSON.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Convenience alias used throughout datepicker-core.
pub type Result<T> = std::result::Result<T, PickerError>;
