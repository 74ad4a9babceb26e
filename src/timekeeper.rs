//! Timekeeper wires a session to its stopwatch and display ticker

use futures::Stream;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::analysis::{AnalysisInput, PerformanceSummary, Summarizer, analyze_performance};
use crate::benchmark::BenchmarkProvider;
use crate::clock::{Clock, Stopwatch};
use crate::config::SessionConfig;
use crate::export::{SessionExport, build_export};
use crate::format::format_clock;
use crate::session::Session;
use crate::ticker::ElapsedTicker;
use crate::types::{BoatId, Split};
use crate::{Result, TimingError};

/// Stopwatch-driven front end for a [`Session`]
///
/// Starting resets the stopwatch to zero, starts the session and, when
/// called inside a tokio runtime, spawns an [`ElapsedTicker`] for the
/// display. Splits are stamped with the stopwatch reading.
pub struct Timekeeper {
    session: Session,
    stopwatch: Arc<Stopwatch>,
    ticker: Option<ElapsedTicker>,
}

impl Timekeeper {
    /// Create an idle timekeeper.
    ///
    /// # Errors
    ///
    /// Returns [`TimingError::InvalidConfiguration`] for an unusable configuration.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let session = Session::new(config)?;
        Ok(Self { session, stopwatch: Arc::new(Stopwatch::new()), ticker: None })
    }

    /// Start timing. A no-op while already running.
    pub fn start(&mut self) {
        if self.session.is_running() {
            return;
        }

        self.stopwatch.start();
        self.session.start();

        if tokio::runtime::Handle::try_current().is_ok() {
            let clock: Arc<dyn Clock> = self.stopwatch.clone();
            self.ticker = Some(ElapsedTicker::spawn(clock, self.session.config().tick_rate()));
        } else {
            debug!("No tokio runtime, display ticker disabled");
        }
    }

    /// Stop timing and the display ticker, keeping all splits
    pub fn stop(&mut self) {
        if !self.session.is_running() {
            return;
        }

        self.stopwatch.stop();
        self.session.stop();
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
        info!("Timekeeper stopped at {}", self.display());
    }

    /// Record a split for `boat` at the current stopwatch reading
    pub fn split(&mut self, boat: BoatId) -> Result<&Split> {
        self.session.record_split_now(boat, self.stopwatch.as_ref())
    }

    /// Current stopwatch reading
    pub fn elapsed(&self) -> Duration {
        self.stopwatch.elapsed()
    }

    /// Current stopwatch reading as `MM:SS.cc`
    pub fn display(&self) -> String {
        format_clock(self.elapsed())
    }

    /// Display ticker, present while running inside a tokio runtime
    pub fn ticker(&self) -> Option<&ElapsedTicker> {
        self.ticker.as_ref()
    }

    /// Elapsed-time readings for the display, `None` when no ticker runs
    pub fn elapsed_updates(&self) -> Option<impl Stream<Item = Duration> + 'static> {
        self.ticker.as_ref().map(ElapsedTicker::updates)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Change a boat's class. Only allowed while stopped.
    pub fn set_boat_class(&mut self, boat: BoatId, boat_class: impl Into<String>) -> Result<()> {
        self.session.set_boat_class(boat, boat_class)
    }

    /// Rename a boat
    pub fn set_boat_name(&mut self, boat: BoatId, boat_name: impl Into<String>) -> Result<()> {
        self.session.set_boat_name(boat, boat_name)
    }

    /// Replace the session configuration while stopped. See [`Session::configure`].
    pub fn configure(&mut self, config: SessionConfig) -> Result<()> {
        self.session.configure(config)
    }

    /// Build the CSV export with benchmarks from `provider`
    pub async fn export<P>(&self, provider: &P) -> Result<SessionExport>
    where
        P: BenchmarkProvider + ?Sized,
    {
        build_export(&self.session, provider).await
    }

    /// Summarize one boat's result against its world best time
    pub async fn analyze<P, S>(
        &self,
        boat: BoatId,
        provider: &P,
        summarizer: &S,
    ) -> Result<PerformanceSummary>
    where
        P: BenchmarkProvider + ?Sized,
        S: Summarizer + ?Sized,
    {
        let entry = self.session.boat(boat).ok_or(TimingError::UnknownBoat { boat })?;
        let input = AnalysisInput {
            boat_class: entry.boat_class().to_string(),
            total_time_seconds: entry.total_time_seconds(),
        };
        analyze_performance(provider, summarizer, input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::TemplateSummarizer;
    use crate::benchmark::StaticBenchmarkProvider;

    #[tokio::test(start_paused = true)]
    async fn splits_use_stopwatch_reading() {
        let mut keeper = Timekeeper::new(SessionConfig::default()).expect("valid config");
        keeper.start();
        assert!(keeper.ticker().is_some());

        tokio::time::advance(Duration::from_secs(95)).await;
        let split = keeper.split(BoatId::new(1)).expect("split").clone();

        assert_eq!(split.cumulative_time_seconds, 95.0);
        assert_eq!(split.pace, "1:35.00");
        assert_eq!(keeper.display(), "01:35.00");
    }

    #[tokio::test(start_paused = true)]
    async fn elapsed_updates_follow_stopwatch() {
        use futures::StreamExt;

        let mut keeper = Timekeeper::new(SessionConfig::default()).expect("valid config");
        assert!(keeper.elapsed_updates().is_none());
        keeper.start();

        let readings: Vec<Duration> =
            keeper.elapsed_updates().expect("ticker running").take(3).collect().await;
        assert_eq!(readings.len(), 3);
        assert!(readings.windows(2).all(|pair| pair[1] >= pair[0]));
    }

    #[tokio::test(start_paused = true)]
    async fn stop_freezes_display_and_drops_ticker() {
        let mut keeper = Timekeeper::new(SessionConfig::default()).expect("valid config");
        keeper.start();
        tokio::time::advance(Duration::from_secs(10)).await;
        keeper.stop();
        tokio::time::advance(Duration::from_secs(10)).await;

        assert!(keeper.ticker().is_none());
        assert_eq!(keeper.elapsed(), Duration::from_secs(10));
        assert!(matches!(keeper.split(BoatId::new(1)), Err(TimingError::SessionNotRunning)));
    }

    #[tokio::test(start_paused = true)]
    async fn edits_go_through_the_facade_and_keep_stopwatch_in_step() {
        let mut keeper = Timekeeper::new(SessionConfig::new(2, 2000, 500)).expect("valid config");
        keeper.configure(SessionConfig::new(2, 1000, 500)).expect("idle configure");
        keeper.set_boat_name(BoatId::new(1), "Blue").expect("rename");
        keeper.start();

        assert!(keeper.configure(SessionConfig::new(3, 1000, 500)).is_err());
        assert!(keeper.set_boat_class(BoatId::new(1), "W1X").is_err());
        keeper.set_boat_name(BoatId::new(1), "Navy").expect("rename while running");

        tokio::time::advance(Duration::from_secs(95)).await;
        let split = keeper.split(BoatId::new(1)).expect("split").clone();

        assert_eq!(keeper.elapsed(), Duration::from_secs(95));
        assert_eq!(split.cumulative_time_seconds, 95.0);
        assert_eq!(keeper.session().boats()[0].boat_name(), "Navy");
        assert_eq!(keeper.session().split_limit(), 2);
    }

    #[test]
    fn start_outside_runtime_skips_ticker() {
        let mut keeper = Timekeeper::new(SessionConfig::default()).expect("valid config");
        keeper.start();

        assert!(keeper.session().is_running());
        assert!(keeper.ticker().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn export_and_analyze() {
        let mut keeper = Timekeeper::new(SessionConfig::new(2, 1000, 500)).expect("valid config");
        keeper.set_boat_class(BoatId::new(2), "W1X").expect("idle edit");
        keeper.start();

        tokio::time::advance(Duration::from_secs(180)).await;
        keeper.split(BoatId::new(1)).expect("split 1");
        tokio::time::advance(Duration::from_secs(216)).await;
        keeper.split(BoatId::new(1)).expect("split 2");
        keeper.stop();

        let provider = StaticBenchmarkProvider::new();
        let export = keeper.export(&provider).await.expect("export");
        assert_eq!(export.max_splits, 2);
        assert_eq!(export.rows[0].percent_cell(), "90.00");
        assert_eq!(export.rows[1].boat_class, "W1X");

        let summary = keeper
            .analyze(BoatId::new(1), &provider, &TemplateSummarizer)
            .await
            .expect("summary");
        assert!(summary.summary.contains("10.00% slower"));
    }
}
