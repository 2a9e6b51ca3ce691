//! Error types for residence-history operations.

use thiserror::Error;

/// Errors produced by the calculator and the record codec.
#[derive(Error, Debug)]
pub enum SettledError {
    /// A travel record could not become a residence interval: an exit line
    /// with no entry before it, an unparseable date, or an unknown line.
    /// Includes the 1-based line number where the record was found.
    #[error("invalid interval at line {line}: {message}")]
    InvalidInterval { line: usize, message: String },

    /// An operation that needs at least one interval was given none.
    #[error("empty travel history: at least one entry date is required")]
    EmptyHistory,
}

/// Convenience alias used throughout settled-core.
pub type Result<T> = std::result::Result<T, SettledError>;
