// File: tests/record_format_tests.rs
//
// The JSON record layout is an interchange contract: the extractor writes
// it, the flattener (and whatever else people have pointed at these files)
// reads it. Pin the field names, the status strings and the
// omit-when-absent rules.

use calsift::config::Config;
use calsift::extract::extract_records;
use calsift::model::{ExtractedRecord, MeetingType, ParticipationStatus};

const SINGLE_EVENT: &str = "BEGIN:VCALENDAR
VERSION:2.0
BEGIN:VEVENT
UID:review-42
SUMMARY:Design Review
DTSTART:20240312T130000Z
DTEND:20240312T143000Z
DESCRIPTION:Agenda attached
LOCATION:Board Room
ATTENDEE;PARTSTAT=ACCEPTED;CN=Alice Example:mailto:alice@ten10.com
ATTENDEE;PARTSTAT=NEEDS-ACTION:mailto:dan@customer.example
END:VEVENT
END:VCALENDAR";

#[test]
fn record_json_field_layout() {
    let records = extract_records(SINGLE_EVENT, &Config::default()).unwrap();
    let value = serde_json::to_value(&records).unwrap();
    let record = &value[0];

    assert_eq!(record["title"], "Design Review");
    assert_eq!(record["start_time"], "2024-03-12T13:00:00+00:00");
    assert_eq!(record["duration"], "1:30:00");
    assert_eq!(record["duration_minutes"], 90);
    assert_eq!(record["notes"], "Agenda attached");
    assert_eq!(record["location"], "Board Room");
    assert_eq!(record["uid"], "review-42");
    assert_eq!(record["meeting_type"], "external");

    let attendees = record["attendees"].as_array().unwrap();
    assert_eq!(attendees.len(), 2);
    assert_eq!(attendees[0]["email"], "alice@ten10.com");
    assert_eq!(attendees[0]["status"], "ACCEPTED");
    assert_eq!(attendees[0]["name"], "Alice Example");
    assert_eq!(attendees[1]["status"], "NEEDS-ACTION");
    // No CN parameter: the key must be absent, not null.
    assert!(attendees[1].get("name").is_none());
}

#[test]
fn optional_fields_omitted_when_absent() {
    let minimal = "BEGIN:VCALENDAR
BEGIN:VEVENT
DTSTART:20240312T130000Z
END:VEVENT
END:VCALENDAR";

    let records = extract_records(minimal, &Config::default()).unwrap();
    let value = serde_json::to_value(&records).unwrap();
    let record = &value[0];

    assert_eq!(record["title"], "No Title");
    assert_eq!(record["notes"], "");
    assert_eq!(record["duration"], "Unknown");
    assert_eq!(record["duration_minutes"], 0);
    assert!(record.get("location").is_none());
    assert!(record.get("uid").is_none());
    assert_eq!(record["meeting_type"], "internal");
}

#[test]
fn unknown_status_strings_deserialize_to_unknown() {
    let json = r#"[{
        "title": "Handoff",
        "start_time": "2024-03-12T13:00:00",
        "attendees": [{"email": "eve@ten10.com", "status": "DELEGATED"}]
    }]"#;

    let records: Vec<ExtractedRecord> = serde_json::from_str(json).unwrap();
    assert_eq!(
        records[0].attendees[0].status,
        ParticipationStatus::Unknown
    );
    assert_eq!(records[0].meeting_type, MeetingType::Unknown);
}

#[test]
fn unknown_meeting_type_round_trips_through_flat_row() {
    let json = r#"[{"title": "Orphan"}]"#;
    let records: Vec<ExtractedRecord> = serde_json::from_str(json).unwrap();
    let row = calsift::flatten::FlatRow::from_record(&records[0]);

    assert_eq!(row.meeting_type, "unknown");
    assert_eq!(row.datetime, "");
    assert_eq!(row.duration_minutes, "0");
    assert_eq!(row.attendee_emails, "");
}
