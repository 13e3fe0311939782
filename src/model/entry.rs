// File: ./src/model/entry.rs
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::str::FromStr;
use strum::EnumString;

// --- DATE TYPES ---

/// Start (or end) of an event as it appears in the document.
///
/// The all-day/timed distinction propagates through every downstream
/// computation: duration units, sort keys and the rendered ISO string.
/// `Z`-suffixed and TZID-qualified date-times are normalized to UTC;
/// date-times with no zone stay floating.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum StartTime {
    AllDay(NaiveDate),
    Floating(NaiveDateTime),
    Utc(DateTime<Utc>),
}

impl StartTime {
    /// Date portion, dropping time-of-day. Zoned values are referenced to UTC.
    pub fn date_naive(&self) -> NaiveDate {
        match self {
            StartTime::AllDay(d) => *d,
            StartTime::Floating(dt) => dt.date(),
            StartTime::Utc(dt) => dt.naive_utc().date(),
        }
    }

    /// Timezone-agnostic instant used for ordering. All-day values count as
    /// midnight.
    pub fn sort_key(&self) -> NaiveDateTime {
        match self {
            StartTime::AllDay(d) => d.and_hms_opt(0, 0, 0).expect("midnight is always valid"),
            StartTime::Floating(dt) => *dt,
            StartTime::Utc(dt) => dt.naive_utc(),
        }
    }

    /// Whether this value carries a time of day.
    pub fn has_time(&self) -> bool {
        !matches!(self, StartTime::AllDay(_))
    }

    /// ISO rendering for the record output. All-day starts render at
    /// midnight; UTC instants keep their `+00:00` offset.
    pub fn to_iso_string(&self) -> String {
        match self {
            StartTime::AllDay(d) => format!("{}T00:00:00", d.format("%Y-%m-%d")),
            StartTime::Floating(dt) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
            StartTime::Utc(dt) => dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
        }
    }
}

// --- ATTENDEES ---

/// RFC 5545 participation status, with everything unrecognized collapsed
/// into `Unknown`.
#[derive(
    Debug, Clone, Copy, Default, Eq, PartialEq, EnumString, Serialize, Deserialize, strum::Display,
)]
pub enum ParticipationStatus {
    #[strum(serialize = "ACCEPTED")]
    #[serde(rename = "ACCEPTED")]
    Accepted,
    #[strum(serialize = "DECLINED")]
    #[serde(rename = "DECLINED")]
    Declined,
    #[strum(serialize = "TENTATIVE")]
    #[serde(rename = "TENTATIVE")]
    Tentative,
    #[strum(serialize = "NEEDS-ACTION")]
    #[serde(rename = "NEEDS-ACTION")]
    NeedsAction,
    #[default]
    #[strum(serialize = "UNKNOWN")]
    #[serde(rename = "UNKNOWN")]
    #[serde(other)]
    Unknown,
}

impl ParticipationStatus {
    pub fn parse(value: &str) -> Self {
        Self::from_str(value.trim()).unwrap_or(Self::Unknown)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub status: ParticipationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// --- CLASSIFICATION ---

/// Derived internal/external label. `Unknown` never comes out of
/// classification; it only fills in for records that are missing the field.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MeetingType {
    Internal,
    External,
    #[default]
    #[serde(other)]
    Unknown,
}

// --- ENTRIES ---

/// One VEVENT, read straight out of the document. Raw start text is kept
/// alongside the parsed value so unparsable starts can pass through to the
/// record output unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarEntry {
    pub summary: Option<String>,
    pub dtstart: Option<StartTime>,
    pub dtstart_raw: Option<String>,
    pub dtend: Option<StartTime>,
    pub duration: Option<String>,
    pub attendees: Vec<Attendee>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub uid: Option<String>,
}

// --- EXTRACTED RECORDS ---

fn default_title() -> String {
    "No Title".to_string()
}

fn default_duration_label() -> String {
    "Unknown".to_string()
}

/// Serialize whole minute counts as integers so a 30-minute meeting reads
/// `30`, not `30.0`; fractional counts (from sub-minute duration tokens)
/// keep their decimals.
fn serialize_minutes<S: Serializer>(minutes: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if minutes.fract() == 0.0 && minutes.abs() <= i64::MAX as f64 {
        serializer.serialize_i64(*minutes as i64)
    } else {
        serializer.serialize_f64(*minutes)
    }
}

/// Normalized, flattened view of a calendar entry.
///
/// Every field carries a serde default so a partial record still
/// deserializes; the flattener leans on that for its missing-field rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default = "default_duration_label")]
    pub duration: String,
    #[serde(default, serialize_with = "serialize_minutes")]
    pub duration_minutes: f64,
    #[serde(default)]
    pub attendees: Vec<Attendee>,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default)]
    pub meeting_type: MeetingType,
}
