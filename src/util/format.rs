//! Pure display helpers: count abbreviation and relative timestamps.

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Abbreviate a count for display: `999` stays as-is, thousands become
/// `1.5k`, millions `1.5M`.
pub fn format_count(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}k", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Render an ISO-8601 timestamp relative to `now` ("just now",
/// "5 minutes ago", "2 years ago"). An unparseable timestamp is returned
/// unchanged rather than failing a render pass.
pub fn relative_time(timestamp: &str, now: DateTime<Utc>) -> String {
    let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) else {
        return timestamp.to_string();
    };
    let seconds = (now - parsed.with_timezone(&Utc)).num_seconds().max(0);

    if seconds < MINUTE {
        "just now".to_string()
    } else if seconds < HOUR {
        pluralize(seconds / MINUTE, "minute")
    } else if seconds < DAY {
        pluralize(seconds / HOUR, "hour")
    } else if seconds < MONTH {
        pluralize(seconds / DAY, "day")
    } else if seconds < YEAR {
        pluralize(seconds / MONTH, "month")
    } else {
        pluralize(seconds / YEAR, "year")
    }
}

fn pluralize(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
