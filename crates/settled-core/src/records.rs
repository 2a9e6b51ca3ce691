//! Line-oriented travel record codec.
//!
//! The dates file holds one record per line:
//!
//! ```text
//! entered UK 01/01/2020
//! left UK 10/01/2020
//! entered UK 01/02/2020
//! ```
//!
//! An `entered UK` line opens an interval; an immediately following
//! `left UK` line closes it. A final `entered UK` with no matching
//! `left UK` is an open interval (still resident). Dates are dd/mm/yyyy
//! with day granularity. This module is the pure text codec; reading and
//! writing actual files is the shell's job.

use chrono::NaiveDate;

use crate::error::{Result, SettledError};
use crate::types::ResidenceInterval;

/// Line prefix for an entry record.
pub const ENTERED_PREFIX: &str = "entered UK ";
/// Line prefix for an exit record.
pub const LEFT_PREFIX: &str = "left UK ";
/// Date layout used throughout the record format.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse record text into residence intervals.
///
/// Blank lines and surrounding whitespace are ignored. Every failure is
/// [`SettledError::InvalidInterval`] with the 1-based line number: an exit
/// line with no open entry before it, a date that does not parse as
/// dd/mm/yyyy, or a line with neither known prefix.
pub fn parse_records(text: &str) -> Result<Vec<ResidenceInterval>> {
    let mut intervals: Vec<ResidenceInterval> = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let number = index + 1;

        if let Some(date_text) = line.strip_prefix(ENTERED_PREFIX) {
            let entry = parse_record_date(date_text, number)?;
            intervals.push(ResidenceInterval::open(entry));
        } else if let Some(date_text) = line.strip_prefix(LEFT_PREFIX) {
            let exit = parse_record_date(date_text, number)?;
            match intervals.last_mut() {
                Some(last) if last.exit.is_none() => last.exit = Some(exit),
                _ => {
                    return Err(SettledError::InvalidInterval {
                        line: number,
                        message: "exit record with no entry date before it".to_string(),
                    })
                }
            }
        } else {
            return Err(SettledError::InvalidInterval {
                line: number,
                message: format!("unrecognized record '{line}'"),
            });
        }
    }

    Ok(intervals)
}

/// Render intervals in the canonical record format: one line per date,
/// newline terminated. The inverse of [`parse_records`].
pub fn format_records(intervals: &[ResidenceInterval]) -> String {
    let mut out = String::new();
    for interval in intervals {
        out.push_str(ENTERED_PREFIX);
        out.push_str(&interval.entry.format(DATE_FORMAT).to_string());
        out.push('\n');
        if let Some(exit) = interval.exit {
            out.push_str(LEFT_PREFIX);
            out.push_str(&exit.format(DATE_FORMAT).to_string());
            out.push('\n');
        }
    }
    out
}

fn parse_record_date(date_text: &str, line: usize) -> Result<NaiveDate> {
    let trimmed = date_text.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|err| SettledError::InvalidInterval {
        line,
        message: format!("bad date '{trimmed}': {err}"),
    })
}
