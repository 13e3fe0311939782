// File: ./src/flatten.rs
//! Projection of extracted records onto a fixed-column CSV.

use crate::error::{Error, Result};
use crate::model::ExtractedRecord;
use crate::storage;
use chrono::{DateTime, NaiveDateTime};
use serde::Serialize;
use std::path::Path;

/// Default output filename when none is given on the command line.
pub const DEFAULT_OUTPUT: &str = "events.csv";

/// One CSV row. Field order here is the column order in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatRow {
    pub datetime: String,
    pub duration_minutes: String,
    pub title: String,
    pub meeting_type: String,
    pub attendee_emails: String,
}

impl FlatRow {
    pub fn from_record(record: &ExtractedRecord) -> Self {
        let attendee_emails = record
            .attendees
            .iter()
            .map(|a| a.email.trim())
            .filter(|email| !email.is_empty())
            .collect::<Vec<_>>()
            .join(";");

        FlatRow {
            datetime: reformat_start_time(&record.start_time),
            duration_minutes: format_minutes(record.duration_minutes),
            title: record.title.clone(),
            meeting_type: record.meeting_type.to_string(),
            attendee_emails,
        }
    }
}

/// Reformat an ISO-like start time to `YYYY-MM-DD HH:MM:SS`; anything that
/// does not parse passes through unchanged.
pub fn reformat_start_time(start_time: &str) -> String {
    let normalized = start_time.replace('Z', "+00:00");
    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return dt.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(start_time, "%Y-%m-%dT%H:%M:%S") {
        return dt.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    start_time.to_string()
}

fn format_minutes(minutes: f64) -> String {
    if minutes.fract() == 0.0 && minutes.abs() <= i64::MAX as f64 {
        format!("{}", minutes as i64)
    } else {
        format!("{minutes}")
    }
}

/// Load the record array written by the extractor. The input must be a
/// non-empty JSON array; each element may be partial (serde defaults fill
/// the gaps).
pub fn load_records(path: &Path) -> Result<Vec<ExtractedRecord>> {
    let text = storage::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&text)?;

    let Some(items) = value.as_array() else {
        return Err(Error::EmptyOrInvalidInput);
    };
    if items.is_empty() {
        return Err(Error::EmptyOrInvalidInput);
    }

    Ok(serde_json::from_value(value)?)
}

/// Flatten records into rows. An empty record set is an error, matching the
/// loader's contract.
pub fn flatten_records(records: &[ExtractedRecord]) -> Result<Vec<FlatRow>> {
    if records.is_empty() {
        return Err(Error::EmptyOrInvalidInput);
    }
    Ok(records.iter().map(FlatRow::from_record).collect())
}

/// Serialize rows to CSV (header row included) and write atomically.
pub fn write_csv(rows: &[FlatRow], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let buffer = writer
        .into_inner()
        .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))?;
    storage::atomic_write(path, buffer)
}

/// File-level entry point; returns the number of rows written.
pub fn flatten_file(input: &Path, output: &Path) -> Result<usize> {
    let records = load_records(input)?;
    let rows = flatten_records(&records)?;
    write_csv(&rows, output)?;
    Ok(rows.len())
}
