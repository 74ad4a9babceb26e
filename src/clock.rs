//! Session clock
//!
//! The timing engine never owns time. It reads a [`Clock`] at the moment a
//! split is recorded, and the display ticker reads the same clock to refresh
//! the elapsed-time readout.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Monotonic elapsed time since session start
pub trait Clock: Send + Sync {
    /// Elapsed time since the clock was last started
    fn elapsed(&self) -> Duration;

    /// Elapsed time in fractional seconds
    fn elapsed_seconds(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

#[derive(Debug, Default)]
struct StopwatchInner {
    started: Option<Instant>,
    frozen: Duration,
}

/// Start/stop stopwatch backed by the tokio clock.
///
/// Starting always resets the origin to zero. Stopping freezes the reading
/// until the next start.
#[derive(Debug, Default)]
pub struct Stopwatch {
    inner: Mutex<StopwatchInner>,
}

impl Stopwatch {
    /// Create a stopped stopwatch reading zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the origin to now and start counting
    pub fn start(&self) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.started = Some(Instant::now());
        inner.frozen = Duration::ZERO;
        debug!("Stopwatch started");
    }

    /// Freeze the current reading
    pub fn stop(&self) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(started) = inner.started.take() {
            inner.frozen = started.elapsed();
            debug!("Stopwatch stopped at {:?}", inner.frozen);
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).started.is_some()
    }
}

impl Clock for Stopwatch {
    fn elapsed(&self) -> Duration {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.started.map_or(inner.frozen, |started| started.elapsed())
    }
}
