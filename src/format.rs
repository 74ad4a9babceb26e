//! Formatting for pace, total time and interval figures.
//!
//! All figures are rendered with unlocalized decimal points. Times are
//! converted to whole hundredths before they are split into minutes and
//! seconds, so a value such as `59.996` renders as `1:00.00` and never as
//! `0:60.00`.

use std::time::Duration;

/// Reference distance for pace figures, in meters.
pub const PACE_REFERENCE_METERS: f64 = 500.0;

/// Normalize a time over a distance to seconds per 500m.
pub fn pace_per_500(seconds: f64, distance_meters: u32) -> f64 {
    if distance_meters == 0 {
        return 0.0;
    }
    seconds / f64::from(distance_meters) * PACE_REFERENCE_METERS
}

fn to_hundredths(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 { (seconds * 100.0).round() as u64 } else { 0 }
}

/// Format a pace in seconds as `M:SS.ss` (minutes unpadded).
///
/// ```rust
/// assert_eq!(splitwatch::format::format_pace(105.3), "1:45.30");
/// assert_eq!(splitwatch::format::format_pace(0.0), "0:00.00");
/// ```
pub fn format_pace(seconds: f64) -> String {
    let hundredths = to_hundredths(seconds);
    let minutes = hundredths / 6000;
    let rest = hundredths % 6000;
    format!("{}:{:02}.{:02}", minutes, rest / 100, rest % 100)
}

/// Format a total time in seconds as `MM:SS.cc`.
///
/// Centiseconds are truncated from the millisecond value, matching a
/// stopwatch display. Minutes keep counting past 59.
pub fn format_total_time(seconds: f64) -> String {
    let millis = if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0).round() as u64
    } else {
        0
    };
    format_millis(millis)
}

/// Format a stopwatch reading as `MM:SS.cc`.
pub fn format_clock(elapsed: Duration) -> String {
    format_millis(elapsed.as_millis() as u64)
}

fn format_millis(millis: u64) -> String {
    let centis = millis / 10;
    let minutes = centis / 6000;
    let rest = centis % 6000;
    format!("{:02}:{:02}.{:02}", minutes, rest / 100, rest % 100)
}

/// Format an interval difference with two decimals and a seconds suffix.
pub fn format_interval_diff(seconds: f64) -> String {
    format!("{:.2}s", seconds)
}

/// Format a raw seconds value with two decimals, no unit.
pub fn format_seconds(seconds: f64) -> String {
    format!("{:.2}", seconds)
}

/// Round to two decimal places.
pub fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
