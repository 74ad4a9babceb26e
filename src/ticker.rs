//! Ticker publishes the elapsed-time readout for display

use futures::{Stream, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{MissedTickBehavior, interval};
use tokio_stream::wrappers::WatchStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace};

use crate::clock::Clock;
use crate::types::TickRate;

/// Background task refreshing the elapsed-time readout
///
/// The ticker only reads the clock. Split data is never touched, so a slow
/// or stalled display cannot delay split recording. The task stops when the
/// ticker is dropped or [`ElapsedTicker::cancel`] is called.
pub struct ElapsedTicker {
    elapsed: watch::Receiver<Duration>,
    rate: TickRate,
    cancel: CancellationToken,
}

impl ElapsedTicker {
    /// Spawn the tick task on the current tokio runtime
    pub fn spawn(clock: Arc<dyn Clock>, rate: TickRate) -> Self {
        let (elapsed_tx, elapsed_rx) = watch::channel(clock.elapsed());
        let cancel = CancellationToken::new();
        let cancel_task = cancel.clone();

        tokio::spawn(async move {
            Self::tick_task(clock, rate, elapsed_tx, cancel_task).await;
        });

        Self { elapsed: elapsed_rx, rate, cancel }
    }

    async fn tick_task(
        clock: Arc<dyn Clock>,
        rate: TickRate,
        elapsed_tx: watch::Sender<Duration>,
        cancel: CancellationToken,
    ) {
        info!("Ticker started at {}Hz", rate.hz());
        let mut ticks = interval(rate.interval());
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut tick_count = 0u64;

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("Ticker cancelled");
                    break;
                }
                _ = ticks.tick() => {}
            }

            tick_count += 1;
            let elapsed = clock.elapsed();
            trace!("Tick {}: {:?}", tick_count, elapsed);

            if elapsed_tx.send(elapsed).is_err() {
                debug!("Elapsed receiver dropped, shutting down");
                break;
            }
        }

        info!("Ticker ended after {} ticks", tick_count);
    }

    /// Latest published reading
    pub fn current(&self) -> Duration {
        *self.elapsed.borrow()
    }

    /// Readings as a stream, starting with the latest one
    pub fn updates(&self) -> impl Stream<Item = Duration> + 'static {
        WatchStream::new(self.elapsed.clone()).boxed()
    }

    /// Watch receiver for callers that poll instead of streaming
    pub fn subscribe(&self) -> watch::Receiver<Duration> {
        self.elapsed.clone()
    }

    pub fn rate(&self) -> TickRate {
        self.rate
    }

    /// Stop the tick task
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for ElapsedTicker {
    fn drop(&mut self) {
        debug!("Dropping elapsed ticker");
        self.cancel.cancel();
    }
}
