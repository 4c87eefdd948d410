use anyhow::Result;
use owo_colors::OwoColorize;
use timetable_core::config::Language;
use timetable_core::date_filter::DateFilter;
use timetable_core::{Event, group_by_day};

use crate::render;

pub fn run(events: Vec<Event>, filter: &DateFilter, language: Language) -> Result<()> {
    let events = filter.apply(events);

    if events.is_empty() {
        println!("{}", render::no_events(language));
        return Ok(());
    }

    // Group events by day and print
    for (i, (date, day_events)) in group_by_day(&events).into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", render::day_label(date, language).bold());

        for event in day_events {
            println!("{}", render::agenda_line(event));
        }
    }

    Ok(())
}
