//! Format - Formatting Utilities

use chrono::{DateTime, Local, Utc};

/// Format a UTC datetime for display
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    let local: DateTime<Local> = dt.with_timezone(&Local);
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// "3 minutes ago" style label for feed timestamps
pub fn format_relative(dt: &DateTime<Utc>) -> String {
    relative_from(Utc::now(), dt)
}

fn relative_from(now: DateTime<Utc>, dt: &DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(*dt);
    if elapsed.num_seconds() < 0 {
        return "just now".to_string();
    }

    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if elapsed.num_seconds() < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days < 30 {
        plural(days, "day")
    } else if days < 365 {
        plural(days / 30, "month")
    } else {
        plural(days / 365, "year")
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_relative_buckets() {
        let now = Utc::now();
        let cases = [
            (Duration::seconds(5), "just now"),
            (Duration::minutes(1), "1 minute ago"),
            (Duration::minutes(42), "42 minutes ago"),
            (Duration::hours(3), "3 hours ago"),
            (Duration::days(2), "2 days ago"),
            (Duration::days(90), "3 months ago"),
            (Duration::days(800), "2 years ago"),
        ];
        for (offset, expected) in cases {
            assert_eq!(relative_from(now, &(now - offset)), expected);
        }
    }

    #[test]
    fn test_future_timestamps_clamp_to_now() {
        let now = Utc::now();
        assert_eq!(relative_from(now, &(now + Duration::minutes(5))), "just now");
    }
}
