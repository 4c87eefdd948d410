//! Core types for the timetable viewer.
//!
//! - `event`: the `Event` record and day grouping
//! - `ics`: extraction of events from iCalendar text
//! - `config`: layered configuration (file + environment)

pub mod config;
pub mod date_filter;
pub mod error;
pub mod event;
pub mod ics;

pub use error::{TimetableError, TimetableResult};
pub use event::{Event, UNSPECIFIED_LOCATION, group_by_day};
