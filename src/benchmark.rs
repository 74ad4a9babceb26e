//! Benchmark provider trait for world best times

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::trace;

use crate::types::boat_class;
use crate::{Result, TimingError};

/// Time answered for classes without a table entry
pub const DEFAULT_BENCHMARK_SECONDS: f64 = 360.0;

/// World best time for a boat class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct BenchmarkTime {
    pub boat_class: String,
    pub time_in_seconds: f64,
}

impl BenchmarkTime {
    pub fn new(boat_class: impl Into<String>, time_in_seconds: f64) -> Self {
        Self { boat_class: boat_class.into(), time_in_seconds }
    }

    /// Whether the time can be used for a percentage figure
    pub fn is_usable(&self) -> bool {
        self.time_in_seconds.is_finite() && self.time_in_seconds > 0.0
    }
}

/// Source of world best times
///
/// Lookups may be slow or fail. Callers make a single attempt per boat and
/// fall back to "no benchmark" rather than retrying.
#[async_trait::async_trait]
pub trait BenchmarkProvider: Send + Sync {
    /// Look up the world best time for a boat class
    async fn world_best_time(&self, boat_class: &str) -> Result<BenchmarkTime>;

    /// Boat classes this provider knows about
    async fn boat_classes(&self) -> Result<Vec<String>>;
}

/// In-memory benchmark table
///
/// Classes without an entry resolve to the fallback time when one is set,
/// and to [`TimingError::BenchmarkUnavailable`] otherwise.
#[derive(Debug, Clone)]
pub struct StaticBenchmarkProvider {
    times: HashMap<String, f64>,
    fallback: Option<f64>,
}

impl Default for StaticBenchmarkProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticBenchmarkProvider {
    /// Provider answering [`DEFAULT_BENCHMARK_SECONDS`] for every class
    pub fn new() -> Self {
        Self { times: HashMap::new(), fallback: Some(DEFAULT_BENCHMARK_SECONDS) }
    }

    /// Provider with no entries and no fallback
    pub fn empty() -> Self {
        Self { times: HashMap::new(), fallback: None }
    }

    /// Set the time for one class
    pub fn with_time(mut self, boat_class: &str, time_in_seconds: f64) -> Self {
        self.times.insert(normalize(boat_class), time_in_seconds);
        self
    }

    /// Set or clear the time used for classes without an entry
    pub fn with_fallback(mut self, fallback: Option<f64>) -> Self {
        self.fallback = fallback;
        self
    }
}

fn normalize(boat_class: &str) -> String {
    boat_class.trim().to_ascii_uppercase()
}

#[async_trait::async_trait]
impl BenchmarkProvider for StaticBenchmarkProvider {
    async fn world_best_time(&self, boat_class: &str) -> Result<BenchmarkTime> {
        let key = normalize(boat_class);
        let time = self.times.get(&key).copied().or(self.fallback).ok_or_else(|| {
            TimingError::benchmark_unavailable(boat_class, "no entry in benchmark table")
        })?;

        trace!("Benchmark for {}: {}s", key, time);
        Ok(BenchmarkTime::new(boat_class, time))
    }

    async fn boat_classes(&self) -> Result<Vec<String>> {
        let mut classes: Vec<String> = boat_class::catalogue().map(str::to_string).collect();
        let mut extra: Vec<&String> = self.times.keys().filter(|k| !classes.contains(*k)).collect();
        extra.sort();
        classes.extend(extra.into_iter().cloned());
        Ok(classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_provider_answers_every_class() {
        let provider = StaticBenchmarkProvider::new();
        let time = provider.world_best_time("W4-").await.expect("fallback time");

        assert_eq!(time.boat_class, "W4-");
        assert_eq!(time.time_in_seconds, DEFAULT_BENCHMARK_SECONDS);
        assert!(time.is_usable());
    }

    #[tokio::test]
    async fn table_entries_override_fallback() {
        let provider = StaticBenchmarkProvider::new().with_time("m1x", 392.0);

        let time = provider.world_best_time("M1X").await.expect("table entry");
        assert_eq!(time.time_in_seconds, 392.0);
    }

    #[tokio::test]
    async fn empty_provider_reports_unavailable() {
        let provider = StaticBenchmarkProvider::empty();
        let err = provider.world_best_time("M8+").await.unwrap_err();

        assert!(matches!(err, TimingError::BenchmarkUnavailable { .. }));
    }

    #[tokio::test]
    async fn boat_classes_include_catalogue_and_extras() {
        let provider = StaticBenchmarkProvider::new().with_time("LM2X", 380.0);
        let classes = provider.boat_classes().await.expect("classes");

        assert_eq!(classes.len(), 11);
        assert_eq!(classes.last().map(String::as_str), Some("LM2X"));
    }

    #[test]
    fn non_positive_times_are_not_usable() {
        assert!(!BenchmarkTime::new("M1X", 0.0).is_usable());
        assert!(!BenchmarkTime::new("M1X", -5.0).is_usable());
        assert!(!BenchmarkTime::new("M1X", f64::NAN).is_usable());
    }
}
