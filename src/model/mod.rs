pub mod adapter;
pub mod duration;
pub mod entry;

pub use adapter::{events_of, parse_date_property};
pub use duration::{IcalDuration, InvalidDuration};
pub use entry::{
    Attendee, CalendarEntry, ExtractedRecord, MeetingType, ParticipationStatus, StartTime,
};
