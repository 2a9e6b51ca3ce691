//! Continuous-residence evaluation over a normalized travel history.
//!
//! Walks adjacent interval pairs, measuring each gap: the time outside the
//! UK between one stay's exit and the next stay's entry. Two independent
//! checks run over the gaps:
//!
//! - **Absolute**: any single gap strictly longer than the policy limit
//!   breaks the continuity rule, wherever it falls in the history.
//! - **Trailing window**: gaps overlapping the trailing 12-month window
//!   spend a cumulative absence budget; the remainder is reported while the
//!   rule holds.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::error::{Result, SettledError};
use crate::types::ResidenceInterval;

/// Limits applied by [`evaluate_continuity`]. Passed explicitly so callers
/// can evaluate against jurisdictional variants or test thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContinuityPolicy {
    /// Maximum days a single absence may last without breaking the rule.
    pub max_days_outside: i64,
    /// Length, in days, of the trailing window over which cumulative
    /// absence is budgeted.
    pub window_days: i64,
}

impl Default for ContinuityPolicy {
    /// UK settled-status limits: 180 days outside in any 12-month window.
    fn default() -> Self {
        Self {
            max_days_outside: 180,
            window_days: 365,
        }
    }
}

/// One absence long enough to break the continuity rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContinuityBreak {
    /// The day the person left the UK (or "today" if the stay had no
    /// recorded exit).
    pub left: NaiveDate,
    /// The day they re-entered.
    pub returned: NaiveDate,
    /// Length of the absence in days.
    pub days_outside: i64,
}

/// Outcome of a continuity evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContinuityAssessment {
    /// `true` when no single absence exceeded the policy limit.
    pub rule_maintained: bool,
    /// Every absence that exceeded the limit, in history order. Empty iff
    /// `rule_maintained` is `true`.
    pub breaks: Vec<ContinuityBreak>,
    /// Days of absence budget left in the trailing window. `None` when no
    /// budget figure was computed at all: fewer than two intervals, no gap
    /// overlapping the window, or the rule already broken. May be negative
    /// when cumulative short absences overrun the budget.
    pub days_remaining_in_window: Option<i64>,
}

/// Evaluate the continuous-residence rule over a normalized history.
///
/// `today` anchors two things: it stands in for the exit date of any stay
/// without one, and it ends the trailing absence window
/// `[today - window_days, today]`.
///
/// Each adjacent pair of intervals defines a gap from the earlier stay's
/// (effective) exit to the later stay's entry; the last interval never
/// contributes a gap on its trailing side. Gap lengths may be zero or
/// negative when stays touch or overlap; they flow through the same
/// arithmetic with no special casing.
///
/// A gap strictly longer than `policy.max_days_outside` is recorded as a
/// [`ContinuityBreak`]; a gap of exactly the limit is not. Independently,
/// any gap overlapping the trailing window adds a clipped contribution to
/// the running absence total, and the remaining budget is recomputed after
/// each addition. The clip is the minimum of the gap's own length, the days
/// from window start to the re-entry, and the days from the exit to today;
/// a gap only partly inside the window is therefore not counted in full.
/// No `max()` clamp is applied on the window-start side; the two companion
/// terms are the only bounds.
///
/// # Errors
///
/// Returns [`SettledError::EmptyHistory`] when `intervals` is empty.
pub fn evaluate_continuity(
    intervals: &[ResidenceInterval],
    today: NaiveDate,
    policy: &ContinuityPolicy,
) -> Result<ContinuityAssessment> {
    if intervals.is_empty() {
        return Err(SettledError::EmptyHistory);
    }

    let window_start = today - Duration::days(policy.window_days);

    let mut breaks: Vec<ContinuityBreak> = Vec::new();
    let mut total_outside_in_window: i64 = 0;
    // Stays `None` until a gap actually overlaps the window. A single
    // interval, or a history whose gaps all predate the window, yields no
    // budget figure rather than a default of the full allowance.
    let mut days_remaining_in_window: Option<i64> = None;

    for pair in intervals.windows(2) {
        let left = pair[0].effective_exit(today);
        let returned = pair[1].entry;
        let gap_days = (returned - left).num_days();

        if left > window_start || returned > window_start {
            let counted = gap_days
                .min((returned - window_start).num_days())
                .min((today - left).num_days());
            total_outside_in_window += counted;
            days_remaining_in_window = Some(policy.max_days_outside - total_outside_in_window);
        }

        if gap_days > policy.max_days_outside {
            breaks.push(ContinuityBreak {
                left,
                returned,
                days_outside: gap_days,
            });
        }
    }

    if breaks.is_empty() {
        Ok(ContinuityAssessment {
            rule_maintained: true,
            breaks,
            days_remaining_in_window,
        })
    } else {
        // The budget figure carries no meaning once the rule is broken.
        Ok(ContinuityAssessment {
            rule_maintained: false,
            breaks,
            days_remaining_in_window: None,
        })
    }
}
