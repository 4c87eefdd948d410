//! ICS event extraction.
//!
//! Parsing is shallow: the text is split on `BEGIN:VEVENT`
//! markers and each block is searched for the handful of properties a
//! timetable needs. No unfolding, unescaping or recurrence expansion is done.

mod blocks;
mod datetime;
mod fields;
mod parse;

pub use blocks::split_events;
pub use datetime::parse_datetime;
pub use fields::RawFields;
pub use parse::{parse_events, read_events};
