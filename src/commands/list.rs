use anyhow::Result;
use timetable_core::Event;
use timetable_core::config::Language;
use timetable_core::date_filter::DateFilter;

use crate::render;

pub fn run(events: Vec<Event>, filter: &DateFilter, language: Language, json: bool) -> Result<()> {
    let events = filter.apply(events);

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    if events.is_empty() {
        println!("{}", render::no_events(language));
        return Ok(());
    }

    for event in &events {
        println!("{}", render::schedule_line(event, language));
    }

    Ok(())
}
