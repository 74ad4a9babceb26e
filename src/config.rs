//! Session configuration
//!
//! The configuration is fixed before a session starts. It can be built in
//! code or loaded from YAML:
//!
//! ```yaml
//! number_of_boats: 2
//! session_distance_meters: 2000
//! split_distance_meters: 500
//! tick_rate_hz: 50
//! boats:
//!   - boat_class: W2X
//!     boat_name: Riverside
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::types::TickRate;
use crate::{Result, TimingError};

/// Shortest session distance accepted, in meters
pub const MIN_SESSION_DISTANCE: u32 = 100;

/// Shortest split distance accepted, in meters
pub const MIN_SPLIT_DISTANCE: u32 = 50;

/// Most boat slots a session can hold
pub const MAX_BOATS: u32 = 100;

/// Optional per-slot boat preset applied when boats are created
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(default)]
pub struct BoatSetup {
    pub boat_class: Option<String>,
    pub boat_name: Option<String>,
}

/// Distances and boat count for a timing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(default)]
pub struct SessionConfig {
    /// Number of boat slots
    pub number_of_boats: u32,
    /// Total race distance
    pub session_distance_meters: u32,
    /// Distance between recorded splits
    pub split_distance_meters: u32,
    /// Elapsed-time display refresh rate, 100Hz when absent
    pub tick_rate_hz: Option<u32>,
    /// Presets for the first boat slots, in slot order
    pub boats: Vec<BoatSetup>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            number_of_boats: 1,
            session_distance_meters: 2000,
            split_distance_meters: 500,
            tick_rate_hz: None,
            boats: Vec::new(),
        }
    }
}

impl SessionConfig {
    /// Configuration with the given distances and boat count, no presets
    pub fn new(number_of_boats: u32, session_distance_meters: u32, split_distance_meters: u32) -> Self {
        Self { number_of_boats, session_distance_meters, split_distance_meters, ..Self::default() }
    }

    /// Parse and validate a YAML configuration
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: SessionConfig =
            serde_yaml_ng::from_str(yaml).map_err(|e| TimingError::Parse {
                context: "Session configuration".to_string(),
                details: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading session configuration from {}", path.display());
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| TimingError::file_error(path.to_path_buf(), e))?;
        Self::from_yaml_str(&yaml)
    }

    /// Check the distances and boat count can form a session
    pub fn validate(&self) -> Result<()> {
        if self.number_of_boats == 0 {
            return Err(TimingError::invalid_configuration("number of boats must be at least 1"));
        }

        if self.number_of_boats > MAX_BOATS {
            return Err(TimingError::invalid_configuration(format!(
                "{} boats exceeds the maximum of {}",
                self.number_of_boats, MAX_BOATS
            )));
        }

        if self.session_distance_meters < MIN_SESSION_DISTANCE {
            return Err(TimingError::invalid_configuration(format!(
                "session distance {}m is below the {}m minimum",
                self.session_distance_meters, MIN_SESSION_DISTANCE
            )));
        }

        if self.split_distance_meters < MIN_SPLIT_DISTANCE {
            return Err(TimingError::invalid_configuration(format!(
                "split distance {}m is below the {}m minimum",
                self.split_distance_meters, MIN_SPLIT_DISTANCE
            )));
        }

        if self.split_distance_meters > self.session_distance_meters {
            return Err(TimingError::invalid_configuration(format!(
                "split distance {}m exceeds session distance {}m",
                self.split_distance_meters, self.session_distance_meters
            )));
        }

        if self.boats.len() > self.number_of_boats as usize {
            return Err(TimingError::invalid_configuration(format!(
                "{} boat presets given for {} boats",
                self.boats.len(),
                self.number_of_boats
            )));
        }

        if let Some(blank) = self
            .boats
            .iter()
            .position(|b| b.boat_class.as_deref().is_some_and(|c| c.trim().is_empty()))
        {
            return Err(TimingError::invalid_configuration(format!(
                "boat preset {} has an empty boat class",
                blank + 1
            )));
        }

        Ok(())
    }

    /// Number of splits that fit in the session distance
    pub fn split_limit(&self) -> usize {
        if self.split_distance_meters == 0 {
            return 0;
        }
        (self.session_distance_meters / self.split_distance_meters) as usize
    }

    /// Display refresh rate
    pub fn tick_rate(&self) -> TickRate {
        self.tick_rate_hz.map_or(TickRate::Default, TickRate::Hz)
    }
}
