use chrono::{DateTime, Local, Utc};

/// Timestamp in the viewer's local time zone.
#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}
