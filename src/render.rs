//! Console rendering for timetable events.

use chrono::{Locale, NaiveDate, NaiveDateTime, NaiveTime};
use owo_colors::OwoColorize;
use timetable_core::Event;
use timetable_core::config::Language;

/// Locale and connecting words for one output language.
struct Wording {
    locale: Locale,
    until: &'static str,
    room: &'static str,
    events_on: &'static str,
    no_events: &'static str,
}

fn wording(language: Language) -> Wording {
    match language {
        Language::Fr => Wording {
            locale: Locale::fr_FR,
            until: "à",
            room: "Salle :",
            events_on: "Événements le",
            no_events: "Aucun événement",
        },
        Language::En => Wording {
            locale: Locale::en_US,
            until: "to",
            room: "Room:",
            events_on: "Events on",
            no_events: "No events found",
        },
    }
}

fn localized(datetime: NaiveDateTime, fmt: &str, locale: Locale) -> String {
    datetime.and_utc().format_localized(fmt, locale).to_string()
}

/// One schedule line, e.g.
/// `Maths — lundi 15 janvier 2024, 09:30 à 11:00 — Salle : Room 204`
pub fn schedule_line(event: &Event, language: Language) -> String {
    let w = wording(language);
    format!(
        "{} — {} {} {} — {} {}",
        event.subject,
        localized(event.start, "%A %d %B %Y, %H:%M", w.locale),
        w.until,
        event.end.format("%H:%M"),
        w.room,
        event.location
    )
}

/// "lundi 15 janvier"
pub fn day_label(date: NaiveDate, language: Language) -> String {
    localized(date.and_time(NaiveTime::default()), "%A %-d %B", wording(language).locale)
}

/// "Événements le 2024-01-15"
pub fn day_header(date: NaiveDate, language: Language) -> String {
    format!("{} {}", wording(language).events_on, date.format("%Y-%m-%d"))
}

/// Indented agenda entry used by the day and week views.
pub fn agenda_line(event: &Event) -> String {
    let mut line = format!("  {}  {}", event.time_range_label(), event.subject);
    if event.has_location() {
        line.push_str(&format!("  {}", format!("({})", event.location).dimmed()));
    }
    line
}

pub fn no_events(language: Language) -> String {
    wording(language).no_events.dimmed().to_string()
}
