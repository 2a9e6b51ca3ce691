//! Per-period day counts and closing figures for display.
//!
//! Purely derived from the evaluator's and the qualifying-date calculator's
//! outputs; no decision logic of its own.

use chrono::NaiveDate;
use serde::Serialize;

use crate::continuity::ContinuityAssessment;
use crate::types::ResidenceInterval;

/// Which side of the border a period was spent on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Presence {
    Inside,
    Outside,
}

/// One contiguous period of the history with its day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodSummary {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub days: i64,
    pub presence: Presence,
}

/// Everything the shell needs to render an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResidenceReport {
    /// Alternating inside/outside periods in history order.
    pub periods: Vec<PeriodSummary>,
    /// The continuity verdict the report was assembled from.
    pub assessment: ContinuityAssessment,
    /// Earliest date a settled-status application can be made.
    pub earliest_application: NaiveDate,
}

/// Assemble per-period day counts plus the closing figures.
///
/// Each interval yields an inside-UK period from its entry to its exit (or
/// `today` while the stay is open). Every interval except the last is
/// followed by the outside-UK period up to the next entry.
pub fn assemble_report(
    intervals: &[ResidenceInterval],
    today: NaiveDate,
    assessment: &ContinuityAssessment,
    earliest_application: NaiveDate,
) -> ResidenceReport {
    let mut periods = Vec::with_capacity(intervals.len() * 2);

    for (i, interval) in intervals.iter().enumerate() {
        let stay_end = interval.effective_exit(today);
        periods.push(PeriodSummary {
            from: interval.entry,
            to: stay_end,
            days: (stay_end - interval.entry).num_days(),
            presence: Presence::Inside,
        });

        if let Some(next) = intervals.get(i + 1) {
            periods.push(PeriodSummary {
                from: stay_end,
                to: next.entry,
                days: (next.entry - stay_end).num_days(),
                presence: Presence::Outside,
            });
        }
    }

    ResidenceReport {
        periods,
        assessment: assessment.clone(),
        earliest_application,
    }
}
