// File: ./src/model/adapter.rs
use crate::model::entry::{Attendee, CalendarEntry, ParticipationStatus, StartTime};
use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use icalendar::{Component, Event, Property};

/// Parse a DTSTART/DTEND property value into a typed start.
///
/// Handles the three shapes RFC 5545 allows: `VALUE=DATE` (or a bare
/// 8-digit value), UTC date-times with a `Z` suffix, and local date-times
/// with or without a `TZID` parameter. TZID-qualified values are resolved
/// through the IANA database and referenced to UTC; unknown zone names
/// degrade to a floating time.
pub fn parse_date_property(prop: &Property) -> Option<StartTime> {
    let val = prop.value().trim();

    let is_date = prop
        .params()
        .get("VALUE")
        .map(|p| p.value().eq_ignore_ascii_case("DATE"))
        .unwrap_or(false)
        || val.len() == 8;
    if is_date {
        return NaiveDate::parse_from_str(val, "%Y%m%d")
            .ok()
            .map(StartTime::AllDay);
    }

    if let Some(stripped) = val.strip_suffix('Z') {
        return NaiveDateTime::parse_from_str(stripped, "%Y%m%dT%H%M%S")
            .ok()
            .map(|dt| StartTime::Utc(Utc.from_utc_datetime(&dt)));
    }

    let naive = NaiveDateTime::parse_from_str(val, "%Y%m%dT%H%M%S").ok()?;
    if let Some(tzid) = prop.params().get("TZID")
        && let Ok(tz) = tzid.value().parse::<chrono_tz::Tz>()
        && let Some(zoned) = tz.from_local_datetime(&naive).earliest()
    {
        return Some(StartTime::Utc(zoned.with_timezone(&Utc)));
    }
    Some(StartTime::Floating(naive))
}

impl Attendee {
    /// Build an attendee from an ATTENDEE property: strip the literal
    /// `mailto:` prefix from the value, map PARTSTAT, capture CN.
    pub fn from_property(prop: &Property) -> Self {
        let raw = prop.value().trim();
        let email = raw.strip_prefix("mailto:").unwrap_or(raw).to_string();

        let status = prop
            .params()
            .get("PARTSTAT")
            .map(|p| ParticipationStatus::parse(p.value()))
            .unwrap_or(ParticipationStatus::Unknown);

        let name = prop
            .params()
            .get("CN")
            .map(|p| p.value().trim_matches('"').to_string())
            .filter(|n| !n.is_empty());

        Attendee {
            email,
            status,
            name,
        }
    }
}

impl CalendarEntry {
    pub fn from_event(event: &Event) -> Self {
        let props = event.properties();

        let dtstart_prop = props.get("DTSTART");
        let dtstart = dtstart_prop.and_then(parse_date_property);
        let dtstart_raw = dtstart_prop.map(|p| p.value().to_string());

        // ATTENDEE is a multi-property; check the single-property map too in
        // case a producer emitted exactly one and the parser filed it there.
        let mut attendees = Vec::new();
        if let Some(multi) = event.multi_properties().get("ATTENDEE") {
            attendees.extend(multi.iter().map(Attendee::from_property));
        }
        if let Some(prop) = props.get("ATTENDEE") {
            attendees.push(Attendee::from_property(prop));
        }

        CalendarEntry {
            summary: event.get_summary().map(str::to_string),
            dtstart,
            dtstart_raw,
            dtend: props.get("DTEND").and_then(parse_date_property),
            duration: props.get("DURATION").map(|p| p.value().to_string()),
            attendees,
            description: event.get_description().map(str::to_string),
            location: props.get("LOCATION").map(|p| p.value().to_string()),
            uid: event.get_uid().map(str::to_string),
        }
    }
}

/// The VEVENT components of a calendar, in document order.
pub fn events_of(calendar: &icalendar::Calendar) -> impl Iterator<Item = &Event> {
    calendar.components.iter().filter_map(|component| {
        if let icalendar::CalendarComponent::Event(event) = component {
            Some(event)
        } else {
            None
        }
    })
}
