//! Flat-file persistence for the dates file.
//!
//! Wraps the record codec with the actual file I/O so the rest of the shell
//! never touches the filesystem directly.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use settled_core::{format_records, parse_records, ResidenceInterval};

/// Load the travel history, or `None` when the file does not exist yet.
pub fn load_history(path: &Path) -> Result<Option<Vec<ResidenceInterval>>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read file: {}", path.display()))
        }
    };
    let history =
        parse_records(&text).with_context(|| format!("Malformed dates file: {}", path.display()))?;
    Ok(Some(history))
}

/// Write the whole history back in canonical record format.
pub fn save_history(path: &Path, history: &[ResidenceInterval]) -> Result<()> {
    fs::write(path, format_records(history))
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Append one record to the dates file, creating it if missing.
pub fn append_record(path: &Path, interval: &ResidenceInterval) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    file.write_all(format_records(std::slice::from_ref(interval)).as_bytes())
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
