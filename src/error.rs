//! Error types for split timing and export.
//!
//! Every error in this crate is recoverable by the caller. Some of them are
//! guarded rejections: the engine refused a command and left its state
//! untouched (for example a split button pressed after the last split).
//!
//! ## Error Categories
//!
//! - **Configuration Errors**: distances or boat counts that cannot form a session
//! - **State Errors**: commands issued in the wrong session state
//! - **Split Errors**: split limit reached or out-of-order split times
//! - **Collaborator Errors**: benchmark lookups and summary generation
//! - **Output Errors**: CSV serialization and file access
//!
//! ```rust
//! use splitwatch::{BoatId, TimingError};
//!
//! let error = TimingError::split_limit_reached(BoatId::new(1), 4);
//! assert!(error.is_guarded_rejection());
//! for suggestion in error.recovery_suggestions() {
//!     println!("  - {}", suggestion);
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::types::BoatId;

/// Result type alias for timing operations.
pub type Result<T, E = TimingError> = std::result::Result<T, E>;

/// Main error type for timing operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TimingError {
    #[error("Invalid session configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Split limit reached for boat {boat}: {limit} splits already recorded")]
    SplitLimitReached { boat: BoatId, limit: usize },

    #[error("Session has not been started")]
    SessionNotStarted,

    #[error("Session is not running")]
    SessionNotRunning,

    #[error("Cannot {operation} while the session is running")]
    SessionRunning { operation: String },

    #[error("Split at {elapsed:.2}s for boat {boat} does not follow previous split at {previous:.2}s")]
    NonMonotonicSplit { boat: BoatId, previous: f64, elapsed: f64 },

    #[error("Boat {boat} does not exist in this session")]
    UnknownBoat { boat: BoatId },

    #[error("No benchmark available for boat class '{boat_class}': {reason}")]
    BenchmarkUnavailable {
        boat_class: String,
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Performance summary failed: {reason}")]
    Summary {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("CSV export failed")]
    Export {
        #[source]
        source: csv::Error,
    },

    #[error("File error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {context}: {details}")]
    Parse { context: String, details: String },
}

impl TimingError {
    /// Returns whether the engine refused the command without changing state.
    pub fn is_guarded_rejection(&self) -> bool {
        match self {
            TimingError::SplitLimitReached { .. } => true,
            TimingError::SessionNotRunning => true,
            TimingError::SessionRunning { .. } => true,
            TimingError::NonMonotonicSplit { .. } => true,
            TimingError::UnknownBoat { .. } => true,
            TimingError::SessionNotStarted => true,
            TimingError::InvalidConfiguration { .. } => true,
            TimingError::BenchmarkUnavailable { .. } => false,
            TimingError::Summary { .. } => false,
            TimingError::Export { .. } => false,
            TimingError::File { .. } => false,
            TimingError::Parse { .. } => false,
        }
    }

    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            TimingError::InvalidConfiguration { .. } => vec![
                "Use at least one boat",
                "Use a session distance of at least 100m",
                "Use a split distance of at least 50m and no longer than the session",
            ],
            TimingError::SplitLimitReached { .. } => vec![
                "All splits for the session distance are recorded",
                "Stop the session and export the results",
            ],
            TimingError::SessionNotStarted => vec!["Start the session before exporting data"],
            TimingError::SessionNotRunning => vec!["Start the session before recording splits"],
            TimingError::SessionRunning { .. } => {
                vec!["Stop the session before changing this setting"]
            }
            TimingError::NonMonotonicSplit { .. } => vec![
                "Check the session clock was not restarted",
                "Record splits in chronological order",
            ],
            TimingError::UnknownBoat { .. } => {
                vec!["Check the boat id against the configured number of boats"]
            }
            TimingError::BenchmarkUnavailable { .. } => vec![
                "Check the boat class spelling",
                "Verify the benchmark source is reachable",
            ],
            TimingError::Summary { .. } => vec![
                "Retry the summary request",
                "Fall back to the numeric WBT percentage",
            ],
            TimingError::Export { .. } => vec!["Check the export destination accepts writes"],
            TimingError::File { .. } => vec![
                "Check file exists and is readable",
                "Check file permissions",
                "Ensure sufficient disk space",
            ],
            TimingError::Parse { .. } => vec![
                "Check the configuration file is valid YAML",
                "Compare field names against the documented configuration keys",
            ],
        }
    }

    /// Helper constructor for configuration errors.
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        TimingError::InvalidConfiguration { reason: reason.into() }
    }

    /// Helper constructor for split limit rejections.
    pub fn split_limit_reached(boat: BoatId, limit: usize) -> Self {
        TimingError::SplitLimitReached { boat, limit }
    }

    /// Helper constructor for commands refused while running.
    pub fn session_running(operation: impl Into<String>) -> Self {
        TimingError::SessionRunning { operation: operation.into() }
    }

    /// Helper constructor for benchmark lookups that produced no usable time.
    pub fn benchmark_unavailable(boat_class: impl Into<String>, reason: impl Into<String>) -> Self {
        TimingError::BenchmarkUnavailable {
            boat_class: boat_class.into(),
            reason: reason.into(),
            source: None,
        }
    }

    /// Helper constructor for benchmark lookups that failed with an underlying error.
    pub fn benchmark_unavailable_with_source(
        boat_class: impl Into<String>,
        reason: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        TimingError::BenchmarkUnavailable {
            boat_class: boat_class.into(),
            reason: reason.into(),
            source: Some(source),
        }
    }

    /// Helper constructor for file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        TimingError::File { path, source }
    }
}

impl From<csv::Error> for TimingError {
    fn from(err: csv::Error) -> Self {
        TimingError::Export { source: err }
    }
}

impl From<std::io::Error> for TimingError {
    fn from(err: std::io::Error) -> Self {
        TimingError::File { path: PathBuf::from("<unknown>"), source: err }
    }
}
