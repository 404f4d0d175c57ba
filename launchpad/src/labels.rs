//! Human-readable time and date labels.
//!
//! The browser reports its offset from UTC in minutes; labels are rendered in
//! that local time. Out-of-range inputs fall back to placeholder text rather
//! than failing a render.

#[cfg(test)]
#[path = "labels_test.rs"]
mod labels_test;

use time::{OffsetDateTime, UtcOffset};

use crate::clock::Millis;

const PLACEHOLDER_CLOCK: &str = "--:--";
const PLACEHOLDER_DATE: &str = "--.--.----";

fn local(at: Millis, offset_minutes: i32) -> Option<OffsetDateTime> {
    let offset = UtcOffset::from_whole_seconds(offset_minutes.checked_mul(60)?).ok()?;
    let utc = OffsetDateTime::from_unix_timestamp_nanos(i128::from(at) * 1_000_000).ok()?;
    utc.checked_to_offset(offset)
}

/// "HH:MM" for a chat bubble timestamp.
#[must_use]
pub fn clock_label(at: Millis, offset_minutes: i32) -> String {
    match local(at, offset_minutes) {
        Some(t) => format!("{:02}:{:02}", t.hour(), t.minute()),
        None => PLACEHOLDER_CLOCK.to_owned(),
    }
}

/// "DD.MM.YYYY" for the page header.
#[must_use]
pub fn date_label(at: Millis, offset_minutes: i32) -> String {
    match local(at, offset_minutes) {
        Some(t) => format!("{:02}.{:02}.{:04}", t.day(), u8::from(t.month()), t.year()),
        None => PLACEHOLDER_DATE.to_owned(),
    }
}
