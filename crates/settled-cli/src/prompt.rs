//! Interactive collection of travel records from stdin.
//!
//! Prompts and complaints go to stderr so stdout stays clean for the report
//! (or JSON) output.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::NaiveDate;
use settled_core::records::DATE_FORMAT;
use settled_core::ResidenceInterval;

const ENTRY_PROMPT: &str =
    "Enter the date you came to the UK (format: dd/mm/yyyy or 'stop' to finish): ";
const EXIT_PROMPT: &str =
    "Enter the date you left the UK (or press Enter if you're currently in the UK): ";
const BAD_DATE: &str = "Invalid date format. Please use dd/mm/yyyy.";

/// Collect travel records until the user types `stop` or input ends.
///
/// Each round asks for an entry date and then an exit date; an empty exit
/// means the stay is still open. A round with an unparseable date is
/// discarded with a complaint and collection continues.
pub fn collect_history() -> Result<Vec<ResidenceInterval>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut history = Vec::new();

    loop {
        let Some(entry_text) = ask(&mut lines, ENTRY_PROMPT)? else {
            break;
        };
        if entry_text.eq_ignore_ascii_case("stop") {
            break;
        }
        let Ok(entry) = NaiveDate::parse_from_str(&entry_text, DATE_FORMAT) else {
            eprintln!("{}", BAD_DATE);
            continue;
        };

        let Some(exit_text) = ask(&mut lines, EXIT_PROMPT)? else {
            // Input ended mid-round: treat the stay as still open.
            history.push(ResidenceInterval::open(entry));
            break;
        };
        if exit_text.is_empty() {
            history.push(ResidenceInterval::open(entry));
            continue;
        }
        match NaiveDate::parse_from_str(&exit_text, DATE_FORMAT) {
            Ok(exit) => history.push(ResidenceInterval::new(entry, exit)),
            Err(_) => eprintln!("{}", BAD_DATE),
        }
    }

    Ok(history)
}

/// Print a prompt on stderr and read one trimmed line. `None` at end of
/// input.
fn ask(lines: &mut io::Lines<io::StdinLock<'_>>, prompt: &str) -> Result<Option<String>> {
    eprint!("{}", prompt);
    io::stderr().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}
