const VEVENT_MARKER: &str = "BEGIN:VEVENT";

/// Split calendar text into one raw block per `BEGIN:VEVENT` marker.
///
/// Each block runs from just after its marker up to the next marker (or the
/// end of the text). Anything before the first marker is calendar metadata
/// and is dropped.
pub fn split_events(content: &str) -> impl Iterator<Item = &str> {
    content.split(VEVENT_MARKER).skip(1)
}
