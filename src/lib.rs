//! Split timing for rowing sessions.
//!
//! Splitwatch records split times for several boats racing over a fixed
//! distance, derives interval times, pace per 500m and interval differences,
//! and exports the session as CSV compared against world best times.
//!
//! # Features
//!
//! - **Timing engine**: one [`Session`] owns every boat and split, with a hard
//!   per-boat split limit derived from the session and split distances
//! - **Pure derivations**: pace, interval and export rows are plain functions
//!   of the recorded history
//! - **Pluggable benchmarks**: world best times come from any [`BenchmarkProvider`]
//! - **Display ticker**: a tokio task publishes the elapsed time for UIs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use splitwatch::{BoatId, SessionConfig, StaticBenchmarkProvider, Timekeeper};
//!
//! #[tokio::main]
//! async fn main() -> splitwatch::Result<()> {
//!     let mut keeper = Timekeeper::new(SessionConfig::new(2, 2000, 500))?;
//!     keeper.start();
//!
//!     // Boat 1 passes the 500m marker
//!     let split = keeper.split(BoatId::new(1))?;
//!     println!("{}m in {} ({})", split.distance_meters, split.interval_time_seconds, split.pace);
//!
//!     keeper.stop();
//!     let export = keeper.export(&StaticBenchmarkProvider::new()).await?;
//!     export.write_csv_file(splitwatch::export::EXPORT_FILE_NAME)?;
//!     Ok(())
//! }
//! ```

// Core types and error handling
mod error;
pub mod format;
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;

// Timing engine
pub mod clock;
pub mod config;
pub mod session;
pub mod ticker;
pub mod timekeeper;

// Benchmarks and reporting
pub mod analysis;
pub mod benchmark;
pub mod export;

// Core exports
pub use error::*;
pub use types::*;

// Main API exports
pub use analysis::{AnalysisInput, PerformanceSummary, Summarizer, TemplateSummarizer, analyze_performance};
pub use benchmark::{BenchmarkProvider, BenchmarkTime, StaticBenchmarkProvider};
pub use clock::{Clock, Stopwatch};
pub use config::{BoatSetup, SessionConfig};
pub use export::{ExportRow, SessionExport, build_export, compute_export_row};
pub use session::Session;
pub use ticker::ElapsedTicker;
pub use timekeeper::Timekeeper;
