//! DTSTART/DTEND value normalization.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::error::{TimetableError, TimetableResult};

const UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";
const FLOATING_FORMAT: &str = "%Y%m%dT%H%M%S";
const DATE_FORMAT: &str = "%Y%m%d";

/// Parse a raw ICS date or date-time value.
///
/// Accepts `YYYYMMDD` (midnight), `YYYYMMDDTHHMMSSZ` and `YYYYMMDDTHHMMSS`.
/// The `Z` suffix only selects which pattern matches; no timezone
/// conversion is applied, so both date-time forms yield the same value.
/// Leap seconds (`SS` = `60`) are rejected.
pub fn parse_datetime(token: &str) -> TimetableResult<NaiveDateTime> {
    let parsed = if token.contains('T') {
        NaiveDateTime::parse_from_str(token, UTC_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(token, FLOATING_FORMAT))
            .ok()
    } else {
        NaiveDate::parse_from_str(token, DATE_FORMAT)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    };

    parsed
        .filter(|datetime| datetime.nanosecond() < 1_000_000_000)
        .ok_or_else(|| TimetableError::InvalidDateTime {
            token: token.to_string(),
        })
}
