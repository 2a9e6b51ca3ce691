//! # settled-core
//!
//! Continuous-residence calculator for UK settled-status eligibility.
//!
//! Takes a chronological history of UK entry/exit dates and determines
//! whether the continuous-residence rule has held (no single absence longer
//! than 180 days), how much of the trailing 12-month absence budget
//! remains, and the earliest date a settled-status application can be made
//! after the 5-year qualifying period.
//!
//! All functions are pure: the caller supplies the history and the
//! reference "today" date, and results are computed fresh each call. Dates
//! are day-granularity [`chrono::NaiveDate`]s; there are no timezones and
//! no clock access anywhere in this crate.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use settled_core::{evaluate_continuity, normalize, ContinuityPolicy, ResidenceInterval};
//!
//! let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
//!
//! let history = normalize(&[
//!     ResidenceInterval::new(date(2020, 1, 1), date(2020, 1, 10)),
//!     ResidenceInterval::open(date(2020, 2, 1)),
//! ]);
//!
//! let assessment =
//!     evaluate_continuity(&history, date(2021, 1, 15), &ContinuityPolicy::default()).unwrap();
//! assert!(assessment.rule_maintained);
//! assert_eq!(assessment.days_remaining_in_window, Some(164));
//! ```
//!
//! ## Modules
//!
//! - [`mod@normalize`] -- sort raw records and repair inverted entry/exit pairs
//! - [`qualifying`] -- earliest application date after the 5-year period
//! - [`continuity`] -- the absence-budget and continuity-rule evaluator
//! - [`report`] -- per-period day counts for display
//! - [`records`] -- the line-oriented dates-file codec
//! - [`error`] -- error types

pub mod continuity;
pub mod error;
pub mod normalize;
pub mod qualifying;
pub mod records;
pub mod report;
pub mod types;

pub use continuity::{evaluate_continuity, ContinuityAssessment, ContinuityBreak, ContinuityPolicy};
pub use error::SettledError;
pub use normalize::normalize;
pub use qualifying::{is_leap_year, qualifying_date};
pub use records::{format_records, parse_records};
pub use report::{assemble_report, PeriodSummary, Presence, ResidenceReport};
pub use types::ResidenceInterval;
