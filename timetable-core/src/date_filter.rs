//! Start-date filter for listing events.

use chrono::NaiveDate;

use crate::error::{TimetableError, TimetableResult};
use crate::event::Event;

/// Inclusive range of start dates.
/// None values mean unbounded in that direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateFilter {
    /// Build a filter from optional YYYY-MM-DD arguments.
    pub fn from_args(from: Option<&str>, to: Option<&str>) -> TimetableResult<Self> {
        Ok(DateFilter {
            from: from.map(parse_date_arg).transpose()?,
            to: to.map(parse_date_arg).transpose()?,
        })
    }

    /// A filter matching exactly one day.
    pub fn day(date: NaiveDate) -> Self {
        DateFilter {
            from: Some(date),
            to: Some(date),
        }
    }

    pub fn contains(&self, event: &Event) -> bool {
        let date = event.date();
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }

    /// Keep matching events without changing their order.
    pub fn apply(&self, events: Vec<Event>) -> Vec<Event> {
        events.into_iter().filter(|e| self.contains(e)).collect()
    }
}

/// Parse YYYY-MM-DD
pub fn parse_date_arg(s: &str) -> TimetableResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| TimetableError::InvalidDateArg(s.to_string()))
}
