//! Coaching summaries comparing a result against the world best time
//!
//! Summary text comes from a [`Summarizer`], which may be a language model
//! service or the built-in [`TemplateSummarizer`]. The flow is always the
//! same: look up the benchmark for the boat class, then hand the numbers to
//! the summarizer.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::benchmark::BenchmarkProvider;
use crate::format::{format_total_time, round_hundredths};
use crate::{Result, TimingError};

/// Result to analyze
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct AnalysisInput {
    /// Boat class, e.g. `M1X`
    pub boat_class: String,
    /// Total time for the session in seconds
    pub total_time_seconds: f64,
}

/// Everything a summarizer gets to see
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct AnalysisContext {
    pub boat_class: String,
    pub total_time_seconds: f64,
    pub world_best_time_seconds: f64,
}

impl AnalysisContext {
    /// Percent slower (positive) or faster (negative) than the world best time
    pub fn percent_difference(&self) -> f64 {
        if self.world_best_time_seconds <= 0.0 {
            return 0.0;
        }
        round_hundredths(
            (self.total_time_seconds - self.world_best_time_seconds) / self.world_best_time_seconds
                * 100.0,
        )
    }
}

/// Generated summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct PerformanceSummary {
    pub summary: String,
}

/// Produces summary text for a result
#[async_trait::async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, context: &AnalysisContext) -> anyhow::Result<String>;
}

/// Deterministic summary built from a fixed template
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateSummarizer;

#[async_trait::async_trait]
impl Summarizer for TemplateSummarizer {
    async fn summarize(&self, context: &AnalysisContext) -> anyhow::Result<String> {
        anyhow::ensure!(
            context.world_best_time_seconds > 0.0,
            "world best time for {} must be positive",
            context.boat_class
        );

        let difference = context.percent_difference();
        let comparison = if difference > 0.0 {
            format!("{:.2}% slower than", difference)
        } else if difference < 0.0 {
            format!("{:.2}% faster than", -difference)
        } else {
            "level with".to_string()
        };

        Ok(format!(
            "{} finished in {}, {} the world best time of {}.",
            context.boat_class,
            format_total_time(context.total_time_seconds),
            comparison,
            format_total_time(context.world_best_time_seconds),
        ))
    }
}

/// Look up the benchmark for `input` and summarize the result.
///
/// # Errors
///
/// - [`TimingError::BenchmarkUnavailable`] if the lookup fails or returns a non-positive time
/// - [`TimingError::Summary`] if the summarizer fails
pub async fn analyze_performance<P, S>(
    provider: &P,
    summarizer: &S,
    input: AnalysisInput,
) -> Result<PerformanceSummary>
where
    P: BenchmarkProvider + ?Sized,
    S: Summarizer + ?Sized,
{
    let benchmark = provider.world_best_time(&input.boat_class).await?;
    if !benchmark.is_usable() {
        return Err(TimingError::benchmark_unavailable(
            &input.boat_class,
            format!("non-positive benchmark {}s", benchmark.time_in_seconds),
        ));
    }

    let context = AnalysisContext {
        boat_class: input.boat_class,
        total_time_seconds: input.total_time_seconds,
        world_best_time_seconds: benchmark.time_in_seconds,
    };
    debug!("Summarizing {} against {}s", context.boat_class, context.world_best_time_seconds);

    let summary = summarizer.summarize(&context).await.map_err(|e| {
        warn!("Summary generation failed: {:#}", e);
        TimingError::Summary { reason: e.to_string(), source: Some(e.into()) }
    })?;

    Ok(PerformanceSummary { summary })
}
