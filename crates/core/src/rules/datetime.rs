//! Session-time rule.

use chrono::NaiveDateTime;

use crate::types::Timestamp;
use crate::verdict::Verdict;

/// Accepted `datetime-local` layouts. No timezone marker; interpreted as UTC.
const DATETIME_LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Validate an optional session time.
///
/// An empty value is valid (the field is optional). A supplied value must
/// parse and lie strictly after `now`; a value equal to `now` fails.
pub fn session_time(value: &str, now: Timestamp) -> Verdict {
    if value.is_empty() {
        return Verdict::pass("Valid");
    }

    match parse_timestamp(value) {
        Some(at) if at > now => Verdict::pass("Valid"),
        _ => Verdict::fail("Please select a future date and time"),
    }
}

/// Parse an RFC 3339 or `datetime-local` string into a UTC timestamp.
fn parse_timestamp(value: &str) -> Option<Timestamp> {
    if let Ok(at) = chrono::DateTime::parse_from_rfc3339(value) {
        return Some(at.with_timezone(&chrono::Utc));
    }

    DATETIME_LOCAL_FORMATS.iter().find_map(|format| {
        NaiveDateTime::parse_from_str(value, format)
            .ok()
            .map(|naive| naive.and_utc())
    })
}
