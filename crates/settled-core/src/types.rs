//! Core data model: one linear travel history of entry/exit intervals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One continuous stay inside the UK, bounded by an entry date and an
/// optional exit date. `exit: None` means the stay is still ongoing.
///
/// A normalized history is ordered by non-decreasing entry date, and an open
/// interval (if any) is expected to be the last one. Consumers tolerate
/// histories that break the second expectation by treating the missing exit
/// as "today". Dates are day-granularity civil dates; there is no
/// time-of-day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidenceInterval {
    /// The date the person arrived in the UK.
    pub entry: NaiveDate,
    /// The date they left, or `None` while still resident.
    pub exit: Option<NaiveDate>,
}

impl ResidenceInterval {
    /// A closed stay with both entry and exit dates.
    pub fn new(entry: NaiveDate, exit: NaiveDate) -> Self {
        Self {
            entry,
            exit: Some(exit),
        }
    }

    /// An open stay: entered and still resident.
    pub fn open(entry: NaiveDate) -> Self {
        Self { entry, exit: None }
    }

    /// The exit date to use in gap arithmetic: the recorded exit, or
    /// `today` while the stay is ongoing.
    pub fn effective_exit(&self, today: NaiveDate) -> NaiveDate {
        self.exit.unwrap_or(today)
    }
}
