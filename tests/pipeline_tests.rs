// File: tests/pipeline_tests.rs
//
// End-to-end coverage of the intended composition: filter an ICS export to a
// window, extract the survivors to JSON records, flatten those records to
// CSV. Every step hands a file to the next, as the tools are used in anger.

use calsift::config::Config;
use calsift::{extract, filter, flatten, storage};
use std::fs;

const EXPORT: &str = "BEGIN:VCALENDAR
VERSION:2.0
PRODID:-//Example Corp//Scheduler//EN
BEGIN:VTIMEZONE
TZID:Europe/London
BEGIN:STANDARD
DTSTART:19701025T020000
TZOFFSETFROM:+0100
TZOFFSETTO:+0000
END:STANDARD
END:VTIMEZONE
BEGIN:VEVENT
UID:old-planning
SUMMARY:January Planning
DTSTART:20240110T100000Z
DTEND:20240110T110000Z
END:VEVENT
BEGIN:VEVENT
UID:standup
SUMMARY:Standup
DTSTART:20240304T091500Z
DTEND:20240304T093000Z
ATTENDEE;PARTSTAT=ACCEPTED:mailto:alice@ten10.com
ATTENDEE;PARTSTAT=TENTATIVE:mailto:bob@ten10.com
END:VEVENT
BEGIN:VEVENT
UID:partner-sync
SUMMARY:Partner Sync
DTSTART:20240305T140000Z
DTEND:20240305T150000Z
ATTENDEE;PARTSTAT=ACCEPTED:mailto:alice@ten10.com
ATTENDEE;PARTSTAT=NEEDS-ACTION:mailto:carol@partner.example
END:VEVENT
END:VCALENDAR";

#[test]
fn filter_extract_flatten_by_file_handoff() {
    let dir = tempfile::tempdir().unwrap();
    let export = dir.path().join("calendar.ics");
    let filtered = dir.path().join("filtered_calendar.ics");
    let records_json = dir.path().join("records.json");
    let csv_out = dir.path().join("events.csv");

    fs::write(&export, EXPORT).unwrap();

    // Step 1: keep the first week of March only.
    let stats = filter::filter_file(&export, &filtered, "2024-03-01", Some(7)).unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.kept, 2);

    // Step 2: extract the filtered document to records.
    let records = extract::extract_file(&filtered, &Config::default()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Standup");
    assert_eq!(records[0].duration_minutes, 15.0);
    assert_eq!(records[0].meeting_type.to_string(), "internal");
    assert_eq!(records[1].title, "Partner Sync");
    assert_eq!(records[1].meeting_type.to_string(), "external");

    storage::atomic_write(&records_json, serde_json::to_string(&records).unwrap()).unwrap();

    // Step 3: flatten the records file to CSV.
    let rows = flatten::flatten_file(&records_json, &csv_out).unwrap();
    assert_eq!(rows, 2);

    let csv = fs::read_to_string(&csv_out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "datetime,duration_minutes,title,meeting_type,attendee_emails"
    );
    assert_eq!(
        lines[1],
        "2024-03-04 09:15:00,15,Standup,internal,alice@ten10.com;bob@ten10.com"
    );
    assert_eq!(
        lines[2],
        "2024-03-05 14:00:00,60,Partner Sync,external,alice@ten10.com;carol@partner.example"
    );
}

#[test]
fn filtered_document_reparses_and_refilters_identically() {
    let dir = tempfile::tempdir().unwrap();
    let export = dir.path().join("calendar.ics");
    let once = dir.path().join("once.ics");
    let twice = dir.path().join("twice.ics");

    fs::write(&export, EXPORT).unwrap();

    let first = filter::filter_file(&export, &once, "2024-03-01", None).unwrap();
    let second = filter::filter_file(&once, &twice, "2024-03-01", None).unwrap();

    assert_eq!(second.total, first.kept);
    assert_eq!(second.kept, first.kept);

    let records_once = extract::extract_records(
        &fs::read_to_string(&once).unwrap(),
        &Config::default(),
    )
    .unwrap();
    let records_twice = extract::extract_records(
        &fs::read_to_string(&twice).unwrap(),
        &Config::default(),
    )
    .unwrap();
    assert_eq!(records_once, records_twice);
}

#[test]
fn extractor_output_deserializes_into_flattener_input() {
    let records = extract::extract_records(EXPORT, &Config::default()).unwrap();
    let json = serde_json::to_string_pretty(&records).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    fs::write(&path, &json).unwrap();

    let reloaded = flatten::load_records(&path).unwrap();
    assert_eq!(reloaded, records);
}
