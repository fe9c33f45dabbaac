//! Duration parsing and formatting.

use chrono::Duration;

/// Format a duration as MM:SS.
#[must_use]
pub fn format_mmss(d: Duration) -> String {
    let total_seconds = d.num_seconds().abs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_seconds = d.num_seconds();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;

    if minutes == 0 {
        return format!("{seconds}s");
    }

    let hours = minutes / 60;
    let minutes = minutes % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 || hours == 0 {
        parts.push(format!("{minutes}m"));
    }
    if seconds > 0 {
        parts.push(format!("{seconds}s"));
    }

    parts.join(" ")
}

/// Parse a duration string like "25m", "1h30m", "90s".
///
/// A bare number is treated as minutes.
#[must_use]
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim().to_lowercase();

    // Try parsing as just a number (assume minutes)
    if let Ok(minutes) = s.parse::<i64>() {
        if minutes <= 0 {
            return None;
        }
        return Some(Duration::minutes(minutes));
    }

    let mut total_seconds: i64 = 0;
    let mut current_num = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            current_num.push(c);
        } else if !current_num.is_empty() {
            let num: i64 = current_num.parse().ok()?;
            current_num.clear();

            match c {
                'h' => total_seconds += num * 3600,
                'm' => total_seconds += num * 60,
                's' => total_seconds += num,
                _ => return None,
            }
        }
    }

    // Handle trailing number without unit (assume minutes)
    if !current_num.is_empty() {
        let num: i64 = current_num.parse().ok()?;
        total_seconds += num * 60;
    }

    if total_seconds > 0 {
        Some(Duration::seconds(total_seconds))
    } else {
        None
    }
}
