// File: ./src/filter.rs
//! Date-range filtering of whole calendar documents.
//!
//! Keeps the container intact: calendar metadata properties are copied
//! verbatim, timezone definitions are copied unconditionally (kept events
//! may reference any of them), and kept VEVENTs are carried over unchanged.

use crate::error::{Error, Result};
use crate::model::{CalendarEntry, parse_date_property};
use crate::storage;
use chrono::{Days, NaiveDate};
use icalendar::{Calendar, CalendarComponent, Component, Event};
use std::fmt;
use std::path::Path;

/// Calendar-level properties carried over to the filtered document.
const COPIED_CALENDAR_PROPERTIES: &[&str] = &["VERSION", "PRODID", "CALSCALE", "METHOD"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub total: usize,
    pub kept: usize,
}

/// Why an event was kept or dropped. Surfaced in verbose output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    InRange(NaiveDate),
    BeforeStart(NaiveDate),
    AfterEnd(NaiveDate),
    NoStart,
}

impl Disposition {
    pub fn keeps(&self) -> bool {
        matches!(self, Disposition::InRange(_))
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disposition::InRange(d) => write!(f, "{d} in range"),
            Disposition::BeforeStart(d) => write!(f, "{d} before start date"),
            Disposition::AfterEnd(d) => write!(f, "{d} after end date"),
            Disposition::NoStart => write!(f, "no usable start date"),
        }
    }
}

/// Parse the user-facing from-date argument.
pub fn parse_from_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| Error::InvalidDateFormat(value.to_string()))
}

/// Compute the inclusive upper bound, when a duration was given.
pub fn range_end(from: NaiveDate, duration_days: Option<u32>) -> Result<Option<NaiveDate>> {
    match duration_days {
        Some(days) => from
            .checked_add_days(Days::new(u64::from(days)))
            .map(Some)
            .ok_or_else(|| Error::InvalidDateFormat(format!("{from} + {days} days"))),
        None => Ok(None),
    }
}

fn classify_event(event: &Event, from: NaiveDate, to: Option<NaiveDate>) -> Disposition {
    let start = event
        .properties()
        .get("DTSTART")
        .and_then(parse_date_property);
    let Some(start) = start else {
        return Disposition::NoStart;
    };

    // Comparison is on the date portion only; time-of-day never decides
    // membership.
    let date = start.date_naive();
    if date < from {
        return Disposition::BeforeStart(date);
    }
    if let Some(to) = to
        && date > to
    {
        return Disposition::AfterEnd(date);
    }
    Disposition::InRange(date)
}

/// Filter a parsed calendar, producing a new document and keep/total counts.
/// The input calendar is left untouched.
pub fn filter_calendar(
    calendar: &Calendar,
    from: NaiveDate,
    duration_days: Option<u32>,
) -> Result<(Calendar, FilterStats)> {
    let to = range_end(from, duration_days)?;

    let mut filtered = Calendar::new();
    for property in &calendar.properties {
        if COPIED_CALENDAR_PROPERTIES.contains(&property.key()) {
            filtered.append_property(property.clone());
        }
    }

    // Timezone definitions come before any event, unconditionally: a kept
    // event may reference any of them via TZID.
    for component in &calendar.components {
        if let CalendarComponent::Other(other) = component
            && other.component_kind() == "VTIMEZONE"
        {
            filtered.push(component.clone());
        }
    }

    let mut stats = FilterStats::default();
    for component in &calendar.components {
        let CalendarComponent::Event(event) = component else {
            continue;
        };
        stats.total += 1;

        let disposition = classify_event(event, from, to);
        log::debug!(
            "Event {}: {} - {} ({})",
            stats.total,
            event.get_summary().unwrap_or("[No Summary]"),
            if disposition.keeps() { "KEEP" } else { "REMOVE" },
            disposition,
        );

        if disposition.keeps() {
            filtered.push(event.clone());
            stats.kept += 1;
        }
    }

    Ok((filtered, stats))
}

/// File-level entry point: parse the date first, then read, filter and write
/// atomically. Nothing is written unless the whole transformation succeeds.
pub fn filter_file(
    input: &Path,
    output: &Path,
    date_from: &str,
    duration_days: Option<u32>,
) -> Result<FilterStats> {
    let from = parse_from_date(date_from)?;

    let bytes = storage::read_bytes(input)?;
    let raw = String::from_utf8(bytes)
        .map_err(|_| Error::MalformedDocument("input is not valid UTF-8".to_string()))?;
    let calendar: Calendar = raw.parse().map_err(Error::MalformedDocument)?;

    let (filtered, stats) = filter_calendar(&calendar, from, duration_days)?;
    storage::atomic_write(output, filtered.to_string())?;
    Ok(stats)
}

/// Entries visible to the extractor after filtering; exposed for tests and
/// for callers that want the records without re-parsing the output file.
pub fn entries_of(calendar: &Calendar) -> Vec<CalendarEntry> {
    crate::model::events_of(calendar)
        .map(CalendarEntry::from_event)
        .collect()
}
