//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Local};

/// Format Unix timestamp (seconds) as local date/time.
///
/// Returns "N/A" if the timestamp is zero or out of range.
///
/// # Example output
/// `2025-01-15 14:30:00 -08:00`
pub fn format_unix_seconds_local(secs: i64) -> String {
    if secs == 0 {
        return "N/A".to_string();
    }

    match DateTime::from_timestamp(secs, 0) {
        Some(dt) => dt
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S %:z")
            .to_string(),
        None => "N/A".to_string(),
    }
}

/// Format duration in seconds to human-readable string.
///
/// Returns "N/A" if the duration is zero or invalid.
///
/// # Example output
/// - `8h 0m 0s` (hours, minutes, seconds)
/// - `5m 10s` (minutes, seconds)
/// - `45s` (seconds only)
pub fn format_duration_seconds(seconds_str: &str) -> String {
    let secs: u64 = seconds_str.trim().parse().unwrap_or(0);
    if secs == 0 {
        return "N/A".to_string();
    }

    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let secs = secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, mins, secs)
    } else if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_unix_seconds_local_valid() {
        // Jan 15, 2025 12:00:00 UTC; exact output depends on local TZ
        let result = format_unix_seconds_local(1736942400);
        assert!(result.starts_with("2025-01-1"));
    }

    #[test]
    fn test_format_unix_seconds_local_zero() {
        assert_eq!(format_unix_seconds_local(0), "N/A");
    }

    #[test]
    fn test_format_unix_seconds_local_out_of_range() {
        assert_eq!(format_unix_seconds_local(i64::MAX), "N/A");
    }

    #[test]
    fn test_format_duration_seconds_hours() {
        assert_eq!(format_duration_seconds("28800"), "8h 0m 0s");
        assert_eq!(format_duration_seconds("3661"), "1h 1m 1s");
    }

    #[test]
    fn test_format_duration_seconds_minutes() {
        assert_eq!(format_duration_seconds("125"), "2m 5s");
    }

    #[test]
    fn test_format_duration_seconds_only() {
        assert_eq!(format_duration_seconds("45"), "45s");
    }

    #[test]
    fn test_format_duration_seconds_invalid() {
        assert_eq!(format_duration_seconds("0"), "N/A");
        assert_eq!(format_duration_seconds(""), "N/A");
        assert_eq!(format_duration_seconds("soon"), "N/A");
    }
}
