//! Test utilities shared by unit tests, integration tests and benches
//!
//! Provides a hand-driven [`Clock`], a benchmark provider that fails for
//! chosen boat classes, and helpers for building sessions with recorded splits.

#![cfg(any(test, feature = "benchmark"))]

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::benchmark::{BenchmarkProvider, BenchmarkTime, StaticBenchmarkProvider};
use crate::clock::Clock;
use crate::config::SessionConfig;
use crate::session::Session;
use crate::types::BoatId;
use crate::{Result, TimingError};

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    elapsed: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, elapsed: Duration) {
        *self.elapsed.lock().unwrap_or_else(PoisonError::into_inner) = elapsed;
    }

    pub fn set_seconds(&self, seconds: f64) {
        self.set(Duration::from_secs_f64(seconds));
    }

    pub fn advance(&self, by: Duration) {
        *self.elapsed.lock().unwrap_or_else(PoisonError::into_inner) += by;
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> Duration {
        *self.elapsed.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Benchmark provider that fails for selected boat classes
///
/// Every other class is answered by the wrapped [`StaticBenchmarkProvider`].
#[derive(Debug, Clone)]
pub struct FailingBenchmarkProvider {
    inner: StaticBenchmarkProvider,
    failing: HashSet<String>,
}

impl FailingBenchmarkProvider {
    pub fn new(inner: StaticBenchmarkProvider) -> Self {
        Self { inner, failing: HashSet::new() }
    }

    /// Make lookups for `boat_class` fail
    pub fn failing_for(mut self, boat_class: &str) -> Self {
        self.failing.insert(boat_class.to_uppercase());
        self
    }
}

#[async_trait::async_trait]
impl BenchmarkProvider for FailingBenchmarkProvider {
    async fn world_best_time(&self, boat_class: &str) -> Result<BenchmarkTime> {
        if self.failing.contains(&boat_class.to_uppercase()) {
            return Err(TimingError::benchmark_unavailable(boat_class, "service unreachable"));
        }
        self.inner.world_best_time(boat_class).await
    }

    async fn boat_classes(&self) -> Result<Vec<String>> {
        self.inner.boat_classes().await
    }
}

/// Start a session and record the given cumulative times per boat
///
/// # Errors
///
/// Propagates configuration and split recording errors.
pub fn session_with_splits(config: SessionConfig, splits: &[(u32, Vec<f64>)]) -> Result<Session> {
    let mut session = Session::new(config)?;
    session.start();
    for (slot, times) in splits {
        for time in times {
            session.record_split(BoatId::new(*slot), *time)?;
        }
    }
    Ok(session)
}

/// Evenly spaced cumulative times: `count` splits `gap` seconds apart
pub fn even_splits(count: usize, gap: f64) -> Vec<f64> {
    (1..=count).map(|i| i as f64 * gap).collect()
}
