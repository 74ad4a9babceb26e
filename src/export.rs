//! CSV export of a session compared against world best times
//!
//! Export happens in two phases. [`build_export`] asks the benchmark provider
//! for every boat at once and assembles one [`ExportRow`] per boat. The
//! resulting [`SessionExport`] is then written with [`SessionExport::write_csv`].
//!
//! ```rust,no_run
//! use splitwatch::{Session, SessionConfig, StaticBenchmarkProvider, export::build_export};
//!
//! # #[tokio::main]
//! # async fn main() -> splitwatch::Result<()> {
//! let mut session = Session::new(SessionConfig::default())?;
//! session.start();
//! // ... record splits ...
//! let export = build_export(&session, &StaticBenchmarkProvider::new()).await?;
//! export.write_csv_file(splitwatch::export::EXPORT_FILE_NAME)?;
//! # Ok(())
//! # }
//! ```

use futures::future::join_all;
use serde::Serialize;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::benchmark::BenchmarkProvider;
use crate::format::{format_pace, format_seconds, format_total_time, pace_per_500, round_hundredths};
use crate::session::Session;
use crate::types::Boat;
use crate::{Result, TimingError};

/// Default export file name
pub const EXPORT_FILE_NAME: &str = "rowing_data.csv";

/// Columns preceding the per-split columns
pub const FIXED_HEADERS: [&str; 8] = [
    "Session Date",
    "Session Time",
    "Session Distance",
    "Boat Name",
    "Boat Class",
    "Total Time",
    "Average Pace",
    "WBT (%)",
];

/// Summary row for one boat
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct ExportRow {
    pub boat_name: String,
    pub boat_class: String,
    /// Total time as `MM:SS.cc`
    pub total_time: String,
    /// Average pace per 500m as `M:SS.ss`
    pub average_pace: String,
    /// 100 means matching the benchmark, higher is faster. Rounded to 2 decimals.
    pub percent_vs_benchmark: f64,
    /// Interval times with two decimals, `None` past the boat's last split
    pub split_times: Vec<Option<String>>,
}

impl ExportRow {
    /// WBT column text, two decimals without a percent sign
    pub fn percent_cell(&self) -> String {
        format!("{:.2}", self.percent_vs_benchmark)
    }
}

/// Percentage of benchmark performance.
///
/// Returns 0 when the benchmark is not a positive finite time.
pub fn percent_vs_benchmark(total_time_seconds: f64, benchmark_seconds: f64) -> f64 {
    if !(benchmark_seconds.is_finite() && benchmark_seconds > 0.0) {
        return 0.0;
    }
    round_hundredths((1.0 - (total_time_seconds - benchmark_seconds) / benchmark_seconds) * 100.0)
}

/// Build the export row for one boat.
///
/// Pure: the same boat history, distance, benchmark and column count always
/// give the same row.
pub fn compute_export_row(
    boat: &Boat,
    session_distance: u32,
    benchmark_seconds: f64,
    max_splits: usize,
) -> ExportRow {
    let total = boat.total_time_seconds();
    let average_pace = if total > 0.0 { pace_per_500(total, session_distance) } else { 0.0 };

    let mut split_times: Vec<Option<String>> = boat
        .splits()
        .iter()
        .map(|split| Some(format_seconds(split.interval_time_seconds)))
        .collect();
    if split_times.len() < max_splits {
        split_times.resize(max_splits, None);
    }

    ExportRow {
        boat_name: boat.boat_name().to_string(),
        boat_class: boat.boat_class().to_string(),
        total_time: format_total_time(total),
        average_pace: format_pace(average_pace),
        percent_vs_benchmark: percent_vs_benchmark(total, benchmark_seconds),
        split_times,
    }
}

/// Export-ready view of a whole session
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct SessionExport {
    /// Start date, `YYYY-MM-DD`
    pub session_date: String,
    /// Start time of day, `HH:MM:SS`
    pub session_time: String,
    pub session_distance: u32,
    /// Number of split columns
    pub max_splits: usize,
    pub rows: Vec<ExportRow>,
}

impl SessionExport {
    /// Header row: fixed columns then `Split Time 1..N`
    pub fn headers(&self) -> Vec<String> {
        FIXED_HEADERS
            .iter()
            .map(|h| h.to_string())
            .chain((1..=self.max_splits).map(|i| format!("Split Time {}", i)))
            .collect()
    }

    fn record(&self, row: &ExportRow) -> Vec<String> {
        let mut record = vec![
            self.session_date.clone(),
            self.session_time.clone(),
            self.session_distance.to_string(),
            row.boat_name.clone(),
            row.boat_class.clone(),
            row.total_time.clone(),
            row.average_pace.clone(),
            row.percent_cell(),
        ];
        record.extend(row.split_times.iter().map(|cell| cell.clone().unwrap_or_default()));
        record
    }

    /// Write the header and one row per boat, CRLF terminated
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut out =
            csv::WriterBuilder::new().terminator(csv::Terminator::CRLF).from_writer(writer);

        out.write_record(self.headers())?;
        for row in &self.rows {
            out.write_record(self.record(row))?;
        }
        out.flush()?;
        Ok(())
    }

    /// Render the CSV document in memory
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| TimingError::Parse {
            context: "CSV output".to_string(),
            details: e.to_string(),
        })
    }

    /// Write the CSV document to a file, replacing it if present
    pub fn write_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)
            .map_err(|e| TimingError::file_error(path.to_path_buf(), e))?;
        self.write_csv(file)?;
        info!("Exported {} boats to {}", self.rows.len(), path.display());
        Ok(())
    }
}

/// Look up one benchmark, falling back to 0 on any failure
async fn benchmark_seconds<P>(provider: &P, boat_class: &str) -> f64
where
    P: BenchmarkProvider + ?Sized,
{
    match provider.world_best_time(boat_class).await {
        Ok(time) if time.is_usable() => time.time_in_seconds,
        Ok(time) => {
            warn!("Ignoring non-positive benchmark {}s for {}", time.time_in_seconds, boat_class);
            0.0
        }
        Err(e) => {
            warn!("Benchmark lookup failed for {}: {}", boat_class, e);
            0.0
        }
    }
}

/// Assemble the export for a session.
///
/// Benchmark lookups for all boats run concurrently, one attempt each. A
/// failed lookup only zeroes that boat's WBT figure.
///
/// # Errors
///
/// Returns [`TimingError::SessionNotStarted`] if the session was never started.
pub async fn build_export<P>(session: &Session, provider: &P) -> Result<SessionExport>
where
    P: BenchmarkProvider + ?Sized,
{
    let started_at = session.started_at().ok_or(TimingError::SessionNotStarted)?;
    let max_splits = session.max_split_count();
    let session_distance = session.session_distance();

    debug!("Requesting {} benchmarks", session.boats().len());
    let benchmarks =
        join_all(session.boats().iter().map(|boat| benchmark_seconds(provider, boat.boat_class())))
            .await;

    let rows = session
        .boats()
        .iter()
        .zip(benchmarks)
        .map(|(boat, benchmark)| compute_export_row(boat, session_distance, benchmark, max_splits))
        .collect();

    Ok(SessionExport {
        session_date: started_at.format("%Y-%m-%d").to_string(),
        session_time: started_at.format("%H:%M:%S").to_string(),
        session_distance,
        max_splits,
        rows,
    })
}
