//! Chronological normalization of raw travel records.
//!
//! Raw records may arrive in any order, and occasionally with an exit date
//! earlier than its entry date (the two dates typed the wrong way round).
//! Normalization repairs inverted pairs and sorts the result by entry date.
//! Nothing is merged or deduplicated: the output is the same multiset of
//! intervals, reordered.

use tracing::warn;

use crate::types::ResidenceInterval;

/// Return a copy of `intervals` with inverted entry/exit pairs swapped and
/// the whole sequence sorted by entry date ascending.
///
/// An interval whose exit precedes its entry is treated as a data-entry slip,
/// not an error: the two dates are swapped and a warning is emitted for
/// operator visibility. Swaps happen before the sort, so the output order
/// reflects the corrected entry dates.
///
/// The sort is stable: exact duplicates and intervals sharing an entry date
/// keep their relative input order.
pub fn normalize(intervals: &[ResidenceInterval]) -> Vec<ResidenceInterval> {
    let mut normalized: Vec<ResidenceInterval> = intervals
        .iter()
        .map(|interval| match interval.exit {
            Some(exit) if exit < interval.entry => {
                warn!(
                    "exit date {} is before entry date {}, swapping them",
                    exit, interval.entry
                );
                ResidenceInterval::new(exit, interval.entry)
            }
            _ => *interval,
        })
        .collect();

    normalized.sort_by_key(|interval| interval.entry);
    normalized
}
