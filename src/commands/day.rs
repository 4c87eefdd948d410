use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use timetable_core::Event;
use timetable_core::config::Language;
use timetable_core::date_filter::{DateFilter, parse_date_arg};

use crate::render;

/// Resolve the `day` argument: "today" (the default) or YYYY-MM-DD.
pub fn resolve_date(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        None | Some("today") => Ok(chrono::Local::now().date_naive()),
        Some(s) => Ok(parse_date_arg(s)?),
    }
}

pub fn run(events: Vec<Event>, date: NaiveDate, language: Language) -> Result<()> {
    let mut events = DateFilter::day(date).apply(events);
    events.sort_by_key(|event| event.start);

    println!("{}", render::day_header(date, language).bold());

    if events.is_empty() {
        println!("  {}", render::no_events(language));
        return Ok(());
    }

    for event in &events {
        println!("{}", render::agenda_line(event));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_date() {
        let today = chrono::Local::now().date_naive();
        assert_eq!(resolve_date(None).unwrap(), today);
        assert_eq!(resolve_date(Some("today")).unwrap(), today);
        assert_eq!(
            resolve_date(Some("2024-01-15")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(resolve_date(Some("tomorrow")).is_err());
    }
}
