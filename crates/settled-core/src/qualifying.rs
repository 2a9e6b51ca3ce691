//! Earliest application date after the 5-year qualifying period.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{Result, SettledError};
use crate::types::ResidenceInterval;

/// Days in the qualifying period before leap adjustment.
const QUALIFYING_PERIOD_DAYS: i64 = 5 * 365;

/// Compute the earliest settled-status application date: five years after
/// the first entry date in the history.
///
/// The qualifying period is counted as `5 * 365` days plus one extra day for
/// each leap year whose year number falls in the half-open range
/// `[entry_year, entry_year + 5)`. Counting days this way, rather than
/// adding five calendar years, can land the result a day or two off the
/// entry anniversary; the drift is part of the rule as applied here.
///
/// The history must already be normalized: the first interval is taken as
/// the earliest entry.
///
/// # Errors
///
/// Returns [`SettledError::EmptyHistory`] if `intervals` is empty.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use settled_core::{qualifying_date, ResidenceInterval};
///
/// let history = [ResidenceInterval::open(
///     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
/// )];
/// // 2020 and 2024 are leap years within [2020, 2025): 1825 + 2 days.
/// assert_eq!(
///     qualifying_date(&history).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
/// );
/// ```
pub fn qualifying_date(intervals: &[ResidenceInterval]) -> Result<NaiveDate> {
    let first = intervals.first().ok_or(SettledError::EmptyHistory)?;
    let entry_year = first.entry.year();
    let leap_days = (entry_year..entry_year + 5)
        .filter(|&year| is_leap_year(year))
        .count() as i64;
    Ok(first.entry + Duration::days(QUALIFYING_PERIOD_DAYS + leap_days))
}

/// Whether `year` contains a Feb 29 under Gregorian rules: divisible by 4,
/// except century years, unless divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
