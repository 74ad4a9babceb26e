//! Split records derived from a single stopwatch reading

use serde::{Deserialize, Serialize};

use crate::format::{format_interval_diff, format_pace, pace_per_500};

/// A recorded checkpoint at a multiple of the split distance.
///
/// Splits are produced by the timing engine and are never modified after
/// they are appended to a boat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct Split {
    /// 1-based position in the boat's split sequence
    pub index: usize,

    /// Distance covered at this split (`index * split_distance`)
    pub distance_meters: u32,

    /// Elapsed time from session start to this split
    pub cumulative_time_seconds: f64,

    /// Time since the previous split, or since the start for the first split
    pub interval_time_seconds: f64,

    /// Interval normalized to a 500m pace
    pub pace_seconds_per_500: f64,

    /// Pace formatted as `M:SS.ss`
    pub pace: String,

    /// Elapsed time minus the previous split's interval time.
    ///
    /// This is not the change in interval between consecutive splits; it is
    /// kept as recorded by the stopwatch workflow coaches already use.
    pub interval_diff_seconds: f64,

    /// Interval diff formatted with two decimals and an `s` suffix
    pub interval_diff: String,
}

impl Split {
    /// Derive the split that follows `previous` at `elapsed_seconds`.
    pub fn following(previous: Option<&Split>, elapsed_seconds: f64, split_distance: u32) -> Self {
        let (index, interval_time_seconds, interval_diff_seconds) = match previous {
            None => (1, elapsed_seconds, 0.0),
            Some(prev) => (
                prev.index + 1,
                elapsed_seconds - prev.cumulative_time_seconds,
                elapsed_seconds - prev.interval_time_seconds,
            ),
        };

        let pace_seconds_per_500 = pace_per_500(interval_time_seconds, split_distance);

        Self {
            index,
            distance_meters: split_distance.saturating_mul(index as u32),
            cumulative_time_seconds: elapsed_seconds,
            interval_time_seconds,
            pace_seconds_per_500,
            pace: format_pace(pace_seconds_per_500),
            interval_diff_seconds,
            interval_diff: format_interval_diff(interval_diff_seconds),
        }
    }
}
