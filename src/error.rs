// File: ./src/error.rs
//! Shared error taxonomy for all three tools.
//!
//! Library operations return `Result<_, Error>`; only the binaries turn an
//! `Error` into a printed message and an exit code.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Input path does not exist or is not a regular file.
    #[error("input file '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    /// A from-date or derived range bound that is not a usable calendar date.
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    /// Every decoding fallback was exhausted. The final ASCII-with-substitution
    /// fallback accepts any byte sequence, so this is not expected in practice.
    #[error("input could not be decoded as text")]
    DecodeFailure,

    /// The calendar document failed to parse.
    #[error("malformed calendar document: {0}")]
    MalformedDocument(String),

    /// The record input was empty or not a JSON array of records.
    #[error("no records found or input is not a JSON array")]
    EmptyOrInvalidInput,

    /// The record input was a JSON array but its contents did not deserialize.
    #[error("invalid record set: {0}")]
    InvalidRecords(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("csv output error: {0}")]
    Csv(#[from] csv::Error),
}
