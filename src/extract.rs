// File: ./src/extract.rs
//! Conversion of calendar documents into normalized, sorted records.
//!
//! This is where the lossy text policy, duration arithmetic and
//! internal/external classification live. The output order is fixed:
//! ascending by timezone-agnostic start, unparsable starts last (stable).

use crate::config::Config;
use crate::encoding;
use crate::error::{Error, Result};
use crate::model::{
    Attendee, CalendarEntry, ExtractedRecord, IcalDuration, MeetingType, StartTime,
};
use crate::storage;
use chrono::NaiveDateTime;
use icalendar::Calendar;
use std::cmp::Ordering;
use std::path::Path;

/// Read, decode and extract a calendar file.
pub fn extract_file(path: &Path, config: &Config) -> Result<Vec<ExtractedRecord>> {
    let bytes = storage::read_bytes(path)?;
    let (text, text_encoding) = encoding::decode_text(&bytes);
    log::debug!("decoded '{}' as {}", path.display(), text_encoding);
    extract_records(&text, config)
}

/// Extract every VEVENT of an already-decoded document, sorted by start.
pub fn extract_records(raw: &str, config: &Config) -> Result<Vec<ExtractedRecord>> {
    let calendar: Calendar = raw.parse().map_err(Error::MalformedDocument)?;

    let mut keyed: Vec<(Option<NaiveDateTime>, ExtractedRecord)> = crate::model::events_of(
        &calendar,
    )
    .map(|event| {
        let entry = CalendarEntry::from_event(event);
        let sort_key = entry.dtstart.as_ref().map(StartTime::sort_key);
        (sort_key, record_from_entry(&entry, config))
    })
    .collect();

    // Stable sort: unparsable starts go last, keeping their input order.
    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}

fn record_from_entry(entry: &CalendarEntry, config: &Config) -> ExtractedRecord {
    let title = entry
        .summary
        .clone()
        .unwrap_or_else(|| "No Title".to_string());

    let start_time = match &entry.dtstart {
        Some(start) => start.to_iso_string(),
        None => entry.dtstart_raw.clone().unwrap_or_default(),
    };

    let (duration, duration_minutes) = resolve_duration(entry);
    let meeting_type = classify(&entry.attendees, &config.internal_domains);

    let mut record = ExtractedRecord {
        title,
        start_time,
        duration,
        duration_minutes,
        attendees: entry.attendees.clone(),
        notes: entry.description.clone().unwrap_or_default(),
        location: entry.location.clone(),
        uid: entry.uid.clone(),
        meeting_type,
    };
    if config.ascii_fold {
        fold_record(&mut record);
    }
    record
}

/// Duration label and minute count, in priority order: explicit end, then a
/// DURATION token, then unknown.
fn resolve_duration(entry: &CalendarEntry) -> (String, f64) {
    if let (Some(start), Some(end)) = (&entry.dtstart, &entry.dtend) {
        return duration_between(start, end);
    }
    if let Some(token) = &entry.duration {
        let minutes = token
            .parse::<IcalDuration>()
            .map(|d| d.total_minutes())
            .unwrap_or(0.0);
        return (token.clone(), minutes);
    }
    ("Unknown".to_string(), 0.0)
}

fn duration_between(start: &StartTime, end: &StartTime) -> (String, f64) {
    if start.has_time() && end.has_time() {
        // Timed on both ends: clock-time label plus whole minutes.
        let seconds = (end.sort_key() - start.sort_key()).num_seconds();
        let label = format!(
            "{}{}:{:02}:{:02}",
            if seconds < 0 { "-" } else { "" },
            seconds.abs() / 3600,
            (seconds.abs() % 3600) / 60,
            seconds.abs() % 60,
        );
        return (label, (seconds / 60) as f64);
    }

    // Either end is date-only: coerce both to dates and count whole days.
    let days = (end.date_naive() - start.date_naive()).num_days();
    (format!("{days} days"), (days * 24 * 60) as f64)
}

/// An entry is internal iff every attendee with a non-empty email matches
/// one of the internal domains. No attendees means nothing external was
/// invited, so the entry counts as internal.
pub fn classify(attendees: &[Attendee], internal_domains: &[String]) -> MeetingType {
    let has_external = attendees.iter().any(|attendee| {
        let email = attendee.email.trim().to_lowercase();
        !email.is_empty()
            && !internal_domains
                .iter()
                .any(|domain| email.ends_with(&format!("@{}", domain.to_lowercase())))
    });

    if has_external {
        MeetingType::External
    } else {
        MeetingType::Internal
    }
}

fn fold_record(record: &mut ExtractedRecord) {
    record.title = encoding::fold_ascii(&record.title);
    record.duration = encoding::fold_ascii(&record.duration);
    record.notes = encoding::fold_ascii(&record.notes);
    if let Some(location) = &record.location {
        record.location = Some(encoding::fold_ascii(location));
    }
    if let Some(uid) = &record.uid {
        record.uid = Some(encoding::fold_ascii(uid));
    }
    for attendee in &mut record.attendees {
        attendee.email = encoding::fold_ascii(&attendee.email);
        if let Some(name) = &attendee.name {
            attendee.name = Some(encoding::fold_ascii(name));
        }
    }
}
