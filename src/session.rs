//! Timing engine: boats, session state and split recording
//!
//! A [`Session`] owns every boat and every split. All mutation goes through
//! `&mut self`, so each command is applied in full before the next one is
//! looked at.

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::clock::Clock;
use crate::config::{BoatSetup, SessionConfig};
use crate::types::{Boat, BoatId, SessionState, Split};
use crate::{Result, TimingError};

/// Split-timing session for a fixed set of boats
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    boats: Vec<Boat>,
    state: SessionState,
    started_at: Option<DateTime<Local>>,
}

impl Session {
    /// Create an idle session with one boat per configured slot.
    ///
    /// # Errors
    ///
    /// Returns [`TimingError::InvalidConfiguration`] if the distances or boat
    /// count cannot form a session.
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let boats = create_boats(&config);
        Ok(Self { config, boats, state: SessionState::Idle, started_at: None })
    }

    /// Replace the configuration while idle.
    ///
    /// Changing the boat count recreates every boat and drops all split
    /// history. With the same count, presets are applied to the existing
    /// slots. Changing either distance keeps the boats but clears their
    /// splits, since splits recorded against the old distances no longer fit.
    pub fn configure(&mut self, config: SessionConfig) -> Result<()> {
        if self.state.is_running() {
            return Err(TimingError::session_running("change the session configuration"));
        }
        config.validate()?;

        if config.number_of_boats != self.config.number_of_boats {
            info!(
                "Boat count changed {} -> {}, resetting boats",
                self.config.number_of_boats, config.number_of_boats
            );
            self.boats = create_boats(&config);
        } else {
            for (boat, setup) in self.boats.iter_mut().zip(&config.boats) {
                apply_preset(boat, setup);
            }

            if config.session_distance_meters != self.config.session_distance_meters
                || config.split_distance_meters != self.config.split_distance_meters
            {
                info!(
                    "Distances changed {}m/{}m -> {}m/{}m, clearing splits",
                    self.config.session_distance_meters,
                    self.config.split_distance_meters,
                    config.session_distance_meters,
                    config.split_distance_meters
                );
                for boat in &mut self.boats {
                    boat.clear_splits();
                }
            }
        }
        self.config = config;
        Ok(())
    }

    /// Start the session now. See [`Session::start_at`].
    pub fn start(&mut self) {
        self.start_at(Local::now());
    }

    /// Start the session with an explicit wall-clock start time.
    ///
    /// Starting a running session changes nothing.
    pub fn start_at(&mut self, started_at: DateTime<Local>) {
        if self.state.is_running() {
            debug!("Start ignored, session already running");
            return;
        }

        self.state = SessionState::Running;
        self.started_at = Some(started_at);
        for boat in &mut self.boats {
            boat.set_running(true);
        }
        info!("Session started at {} with {} boats", started_at, self.boats.len());
    }

    /// Stop the session, keeping all split history
    pub fn stop(&mut self) {
        if !self.state.is_running() {
            return;
        }

        self.state = SessionState::Idle;
        for boat in &mut self.boats {
            boat.set_running(false);
        }
        info!("Session stopped");
    }

    /// Record a split for `boat` at `elapsed_seconds` since session start.
    ///
    /// # Errors
    ///
    /// All errors leave the boat's split history unchanged:
    /// - [`TimingError::UnknownBoat`] for an id outside the configured slots
    /// - [`TimingError::SessionNotRunning`] while idle
    /// - [`TimingError::SplitLimitReached`] once the next split would pass the session distance
    /// - [`TimingError::NonMonotonicSplit`] unless the time is after the boat's last split
    pub fn record_split(&mut self, boat: BoatId, elapsed_seconds: f64) -> Result<&Split> {
        let split_distance = self.config.split_distance_meters;
        let limit = self.split_limit();
        let running = self.state.is_running();
        let entry = self.boat_mut(boat)?;

        if !running {
            return Err(TimingError::SessionNotRunning);
        }

        if entry.split_count() >= limit {
            debug!("Split limit reached for boat {}", boat);
            return Err(TimingError::split_limit_reached(boat, limit));
        }

        let previous = entry.total_time_seconds();
        if !elapsed_seconds.is_finite() || elapsed_seconds <= previous {
            return Err(TimingError::NonMonotonicSplit { boat, previous, elapsed: elapsed_seconds });
        }

        let split = Split::following(entry.last_split(), elapsed_seconds, split_distance);
        debug!(
            "Boat {} split {}: {:.2}s interval, pace {}",
            boat, split.index, split.interval_time_seconds, split.pace
        );
        Ok(entry.push_split(split))
    }

    /// Record a split at the clock's current reading
    pub fn record_split_now<C>(&mut self, boat: BoatId, clock: &C) -> Result<&Split>
    where
        C: Clock + ?Sized,
    {
        self.record_split(boat, clock.elapsed_seconds())
    }

    /// Change a boat's class. Only allowed while idle.
    pub fn set_boat_class(&mut self, boat: BoatId, boat_class: impl Into<String>) -> Result<()> {
        let boat_class = boat_class.into();
        if self.state.is_running() {
            return Err(TimingError::session_running("change boat class"));
        }
        if boat_class.trim().is_empty() {
            return Err(TimingError::invalid_configuration("boat class must not be empty"));
        }
        self.boat_mut(boat)?.set_boat_class(boat_class.trim().to_string());
        Ok(())
    }

    /// Rename a boat. Allowed at any time.
    pub fn set_boat_name(&mut self, boat: BoatId, boat_name: impl Into<String>) -> Result<()> {
        self.boat_mut(boat)?.set_boat_name(boat_name.into());
        Ok(())
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn boats(&self) -> &[Boat] {
        &self.boats
    }

    pub fn boat(&self, boat: BoatId) -> Option<&Boat> {
        let index = (boat.get() as usize).checked_sub(1)?;
        self.boats.get(index)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Wall-clock time of the most recent start
    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.started_at
    }

    pub fn session_distance(&self) -> u32 {
        self.config.session_distance_meters
    }

    pub fn split_distance(&self) -> u32 {
        self.config.split_distance_meters
    }

    /// Number of splits that fit in the session distance
    pub fn split_limit(&self) -> usize {
        self.config.split_limit()
    }

    /// Largest split count across all boats
    pub fn max_split_count(&self) -> usize {
        self.boats.iter().map(Boat::split_count).max().unwrap_or(0)
    }

    /// Whether a split button for `boat` should be enabled
    pub fn can_record_split(&self, boat: BoatId) -> bool {
        self.is_running() && self.boat(boat).is_some_and(|b| b.split_count() < self.split_limit())
    }

    fn boat_mut(&mut self, boat: BoatId) -> Result<&mut Boat> {
        (boat.get() as usize)
            .checked_sub(1)
            .and_then(|index| self.boats.get_mut(index))
            .ok_or(TimingError::UnknownBoat { boat })
    }
}

fn create_boats(config: &SessionConfig) -> Vec<Boat> {
    (1..=config.number_of_boats)
        .map(|slot| {
            let mut boat = Boat::new(BoatId::new(slot));
            if let Some(setup) = config.boats.get(slot as usize - 1) {
                apply_preset(&mut boat, setup);
            }
            boat
        })
        .collect()
}

fn apply_preset(boat: &mut Boat, setup: &BoatSetup) {
    if let Some(boat_class) = &setup.boat_class {
        boat.set_boat_class(boat_class.trim().to_string());
    }
    if let Some(boat_name) = &setup.boat_name {
        boat.set_boat_name(boat_name.clone());
    }
}
