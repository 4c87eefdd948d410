//! Calendar text → ordered list of events.

use std::path::Path;

use tracing::{debug, info};

use super::blocks::split_events;
use super::datetime::parse_datetime;
use super::fields::RawFields;
use crate::error::{TimetableError, TimetableResult};
use crate::event::{Event, UNSPECIFIED_LOCATION};

/// Read a calendar file and extract its events.
///
/// The whole file is loaded into memory and the handle is closed before
/// parsing starts.
pub fn read_events(path: &Path) -> TimetableResult<Vec<Event>> {
    let content = std::fs::read_to_string(path).map_err(|source| TimetableError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = content.len(), "Read calendar file");

    parse_events(&content)
}

/// Extract events from calendar text, in source order.
///
/// Blocks missing DTSTART, DTEND or SUMMARY are skipped. A DTSTART or DTEND
/// value that is not a recognized date-time fails the whole call: no events
/// are returned in that case, not even the ones parsed before it.
pub fn parse_events(content: &str) -> TimetableResult<Vec<Event>> {
    let mut events = Vec::new();
    let mut blocks = 0;

    for (index, block) in split_events(content).enumerate() {
        blocks += 1;

        let fields = RawFields::extract(block);
        let (Some(dtstart), Some(dtend), Some(summary)) =
            (fields.dtstart, fields.dtend, fields.summary)
        else {
            debug!(block = index, missing = ?fields.missing(), "Skipping VEVENT");
            continue;
        };

        let start = parse_datetime(dtstart)?;
        let end = parse_datetime(dtend)?;

        let location = fields
            .location
            .map(|location| location.trim().to_string())
            .unwrap_or_else(|| UNSPECIFIED_LOCATION.to_string());

        events.push(Event {
            subject: summary.trim().to_string(),
            start,
            end,
            location,
        });
    }

    info!(blocks, events = events.len(), "Parsed calendar");

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::io::Write;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    const CALENDAR: &str = r#"BEGIN:VCALENDAR
METHOD:REQUEST
PRODID:-//ADE/version 6.0
VERSION:2.0
CALSCALE:GREGORIAN
BEGIN:VEVENT
DTSTAMP:20240110T120000Z
DTSTART:20240116T130000Z
DTEND:20240116T150000Z
SUMMARY:Physique
LOCATION:Amphi B
DESCRIPTION:\nGroupe 1\n
UID:ADE1
END:VEVENT
BEGIN:VEVENT
DTSTART:20240115T093000Z
DTEND:20240115T110000Z
SUMMARY:  Maths
LOCATION:Room 204
UID:ADE2
END:VEVENT
BEGIN:VEVENT
DTSTART;VALUE=DATE:20240117
DTEND;VALUE=DATE:20240118
SUMMARY:Journée portes ouvertes
UID:ADE3
END:VEVENT
END:VCALENDAR
"#;

    #[test]
    fn test_parse_keeps_source_order() {
        let events = parse_events(CALENDAR).expect("Should parse");

        let subjects: Vec<_> = events.iter().map(|e| e.subject.as_str()).collect();
        assert_eq!(subjects, vec!["Physique", "Maths", "Journée portes ouvertes"]);
    }

    #[test]
    fn test_parse_fields() {
        let events = parse_events(CALENDAR).expect("Should parse");

        assert_eq!(
            events[1],
            Event {
                subject: "Maths".to_string(),
                start: dt(2024, 1, 15, 9, 30),
                end: dt(2024, 1, 15, 11, 0),
                location: "Room 204".to_string(),
            }
        );

        let all_day = &events[2];
        assert_eq!(all_day.start, dt(2024, 1, 17, 0, 0));
        assert_eq!(all_day.end, dt(2024, 1, 18, 0, 0));
        assert_eq!(all_day.location, UNSPECIFIED_LOCATION);
    }

    #[test]
    fn test_location_is_trimmed() {
        let ics = "BEGIN:VEVENT\nDTSTART:20240115T093000Z\nDTEND:20240115T110000Z\n\
SUMMARY:Maths\nLOCATION:  Room 204  \nEND:VEVENT\n\
BEGIN:VEVENT\r\nDTSTART:20240115T130000Z\r\nDTEND:20240115T140000Z\r\n\
SUMMARY:Anglais\r\nLOCATION:\tSalle 12 \r\nEND:VEVENT\r\n";

        let events = parse_events(ics).expect("Should parse");
        let locations: Vec<_> = events.iter().map(|e| e.location.as_str()).collect();
        assert_eq!(locations, vec!["Room 204", "Salle 12"]);
    }

    #[test]
    fn test_blocks_missing_required_fields_are_skipped() {
        let ics = "BEGIN:VCALENDAR\n\
BEGIN:VEVENT\nDTSTART:20240115T080000Z\nDTEND:20240115T090000Z\nSUMMARY:A\nEND:VEVENT\n\
BEGIN:VEVENT\nDTEND:20240115T100000Z\nSUMMARY:no start\nEND:VEVENT\n\
BEGIN:VEVENT\nDTSTART:20240115T100000Z\nSUMMARY:no end\nEND:VEVENT\n\
BEGIN:VEVENT\nDTSTART:20240115T100000Z\nDTEND:20240115T110000Z\nEND:VEVENT\n\
BEGIN:VEVENT\nDTSTART:20240115T120000Z\nDTEND:20240115T130000Z\nSUMMARY:B\nEND:VEVENT\n\
END:VCALENDAR\n";

        let events = parse_events(ics).expect("Should parse");
        let subjects: Vec<_> = events.iter().map(|e| e.subject.as_str()).collect();
        assert_eq!(subjects, vec!["A", "B"]);
    }

    #[test]
    fn test_skipped_block_with_bad_date_is_not_fatal() {
        // Presence is checked before normalization, so a malformed DTSTART in a
        // block without SUMMARY is dropped along with the block.
        let ics = "BEGIN:VEVENT\nDTSTART:garbage\nDTEND:20240115T090000Z\nEND:VEVENT\n\
BEGIN:VEVENT\nDTSTART:20240115T080000Z\nDTEND:20240115T090000Z\nSUMMARY:A\nEND:VEVENT\n";

        let events = parse_events(ics).expect("Should parse");
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_bad_datetime_fails_whole_parse() {
        let ics = "BEGIN:VEVENT\nDTSTART:20240115T080000Z\nDTEND:20240115T090000Z\n\
SUMMARY:A\nEND:VEVENT\n\
BEGIN:VEVENT\nDTSTART:not-a-date\nDTEND:20240115T090000Z\nSUMMARY:B\nEND:VEVENT\n";

        match parse_events(ics) {
            Err(TimetableError::InvalidDateTime { token }) => assert_eq!(token, "not-a-date"),
            other => panic!("Expected InvalidDateTime, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_dtend_fails_whole_parse() {
        let ics = "BEGIN:VEVENT\nDTSTART:20240115T080000Z\nDTEND:2024-01-15\n\
SUMMARY:A\nEND:VEVENT\n";
        assert!(matches!(
            parse_events(ics),
            Err(TimetableError::InvalidDateTime { .. })
        ));
    }

    #[test]
    fn test_crlf_matches_lf() {
        let crlf = CALENDAR.replace('\n', "\r\n");
        assert_eq!(
            parse_events(&crlf).expect("Should parse CRLF"),
            parse_events(CALENDAR).expect("Should parse LF")
        );
    }

    #[test]
    fn test_empty_calendar() {
        assert!(parse_events("").unwrap().is_empty());
        assert!(parse_events("BEGIN:VCALENDAR\nEND:VCALENDAR\n").unwrap().is_empty());
    }

    #[test]
    fn test_read_events_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CALENDAR.as_bytes()).unwrap();

        let events = read_events(file.path()).expect("Should read");
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn test_read_events_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ADECal (1).ics");

        match read_events(&path) {
            Err(TimetableError::Io { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}
