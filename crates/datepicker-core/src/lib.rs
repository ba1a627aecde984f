//! # datepicker-core
//!
//! Calendar grid and date-validation engine for a date-picker widget.
//!
//! Given a visible month, "today", a set of blocked dates, and an optional
//! minimum date and previously committed selection, the engine produces a
//! fixed 42-cell month grid with per-cell semantic flags and decides
//! whether a candidate pick is acceptable. Rendering, DOM wiring, and
//! styling belong to the host; everything here is synchronous pure
//! computation over explicit inputs.
//!
//! ## Quick start
//!
//! ```rust
//! use datepicker_core::{
//!     BlockedDateIndex, BlockedDateRecord, CalendarDate, Constraints, DatePicker,
//! };
//!
//! let records = vec![BlockedDateRecord {
//!     day: "2020-04-02".to_string(),
//!     reason: "closed".to_string(),
//! }];
//! let (blocked, rejected) = BlockedDateIndex::build(&records);
//! assert!(rejected.is_empty());
//!
//! let mut picker = DatePicker::with_today(CalendarDate::new(2020, 2, 15));
//! picker.attach(
//!     Constraints {
//!         min_date: None,
//!         blocked,
//!     },
//!     None,
//! );
//!
//! assert_eq!(picker.grid().len(), 42);
//! assert_eq!(picker.month_label(), "Martie");
//! ```
//!
//! ## Modules
//!
//! - [`date`] — canonical calendar-day type and month arithmetic
//! - [`blocked`] — blocked-date records and the (month, day) lookup index
//! - [`config`] — host configuration, resolution, and the constraint set
//! - [`grid`] — 42-cell month-grid construction with semantic flags
//! - [`validate`] — minimum-date and blocked-date acceptance rules
//! - [`nav`] — visible-month cursor and dialog open/closed state
//! - [`picker`] — the assembled widget core with lifecycle and events
//! - [`error`] — error types

pub mod blocked;
pub mod config;
pub mod date;
pub mod error;
pub mod grid;
pub mod nav;
pub mod picker;
pub mod validate;

pub use blocked::{BlockedDateIndex, BlockedDateRecord, RejectedRecord};
pub use config::{resolve, ConfigIssue, Constraints, PickerConfig, ResolvedConfig};
pub use date::CalendarDate;
pub use error::PickerError;
pub use grid::{build_grid, CellFlag, DateCell, GRID_CELLS};
pub use nav::{DialogState, DismissReason, VisibleMonth};
pub use picker::{DatePicker, PickerEvent, MONTH_NAMES, WEEKDAY_LABELS};
pub use validate::{revalidate_on_close, validate, Validity, BEFORE_MINIMUM};
