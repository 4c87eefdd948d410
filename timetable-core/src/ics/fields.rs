//! Per-block property extraction.
//!
//! Every pattern is anchored to the start of a line and stops at the line
//! break, so a value never bleeds into the following property.

use std::sync::LazyLock;

use regex::Regex;

macro_rules! property {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

// DTSTART/DTEND may carry parameters (`DTSTART;TZID=Europe/Paris:...`), which are skipped.
property!(DTSTART, r"(?m)^DTSTART(?:;[^:\r\n]+)?:([^\r\n]+)");
property!(DTEND, r"(?m)^DTEND(?:;[^:\r\n]+)?:([^\r\n]+)");
property!(SUMMARY, r"(?m)^SUMMARY:([^\r\n]+)");
property!(LOCATION, r"(?m)^LOCATION:([^\r\n]+)");

/// Raw property values found in one VEVENT block, before any normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields<'a> {
    pub dtstart: Option<&'a str>,
    pub dtend: Option<&'a str>,
    pub summary: Option<&'a str>,
    pub location: Option<&'a str>,
}

impl<'a> RawFields<'a> {
    /// Pull DTSTART, DTEND, SUMMARY and LOCATION out of a block.
    /// The first occurrence of each property wins.
    pub fn extract(block: &'a str) -> Self {
        RawFields {
            dtstart: capture(&DTSTART, block),
            dtend: capture(&DTEND, block),
            summary: capture(&SUMMARY, block),
            location: capture(&LOCATION, block),
        }
    }

    /// Names of required properties that were not found.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("DTSTART", self.dtstart.is_none()),
            ("DTEND", self.dtend.is_none()),
            ("SUMMARY", self.summary.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect()
    }
}

fn capture<'a>(pattern: &Regex, block: &'a str) -> Option<&'a str> {
    pattern
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
