//! The event record produced by the ICS extractor.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Location stored when a VEVENT block carries no LOCATION line.
pub const UNSPECIFIED_LOCATION: &str = "Non précisé";

/// A single timetable entry, in the order it appeared in the source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// SUMMARY line, trimmed
    pub subject: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// LOCATION line, trimmed, or [`UNSPECIFIED_LOCATION`]
    pub location: String,
}

impl Event {
    /// Calendar day the event starts on.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// "09:30–11:00"
    pub fn time_range_label(&self) -> String {
        format!("{}–{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }

    pub fn has_location(&self) -> bool {
        self.location != UNSPECIFIED_LOCATION
    }
}

/// Group events by start day. Days come out in calendar order; within a day,
/// events are ordered by start time (ties keep their source order).
pub fn group_by_day(events: &[Event]) -> BTreeMap<NaiveDate, Vec<&Event>> {
    let mut days: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();

    for event in events {
        days.entry(event.date()).or_default().push(event);
    }

    for day in days.values_mut() {
        day.sort_by_key(|event| event.start);
    }

    days
}
