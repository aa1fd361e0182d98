use chrono::{DateTime, Duration, Utc};

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.to_rfc3339()
}

/// `m:ss` for a non-negative duration; negative durations render as `0:00`.
#[must_use]
pub fn format_elapsed(value: Duration) -> String {
    let seconds = value.num_seconds().max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
