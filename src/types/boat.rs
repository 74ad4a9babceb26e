//! Boats and their split history

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Split;
use super::boat_class::DEFAULT_BOAT_CLASS;

/// Stable identifier of a boat slot, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(transparent)]
pub struct BoatId(u32);

impl BoatId {
    /// Create an id for the given slot number
    pub const fn new(slot: u32) -> Self {
        Self(slot)
    }

    /// Slot number
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for BoatId {
    fn from(slot: u32) -> Self {
        Self(slot)
    }
}

impl fmt::Display for BoatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One boat tracked by a session.
///
/// Split history is append-only: the session pushes new splits, callers only
/// ever see a shared slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct Boat {
    id: BoatId,
    boat_class: String,
    boat_name: String,
    splits: Vec<Split>,
    is_running: bool,
}

impl Boat {
    /// Create a boat with the default class and a slot-numbered name
    pub fn new(id: BoatId) -> Self {
        Self {
            id,
            boat_class: DEFAULT_BOAT_CLASS.to_string(),
            boat_name: format!("Boat {}", id),
            splits: Vec::new(),
            is_running: false,
        }
    }

    pub fn id(&self) -> BoatId {
        self.id
    }

    pub fn boat_class(&self) -> &str {
        &self.boat_class
    }

    pub fn boat_name(&self) -> &str {
        &self.boat_name
    }

    pub fn splits(&self) -> &[Split] {
        &self.splits
    }

    pub fn split_count(&self) -> usize {
        self.splits.len()
    }

    pub fn last_split(&self) -> Option<&Split> {
        self.splits.last()
    }

    /// Cumulative time of the last split, or 0 with no splits
    pub fn total_time_seconds(&self) -> f64 {
        self.last_split().map_or(0.0, |split| split.cumulative_time_seconds)
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub(crate) fn set_boat_class(&mut self, boat_class: String) {
        self.boat_class = boat_class;
    }

    pub(crate) fn set_boat_name(&mut self, boat_name: String) {
        self.boat_name = boat_name;
    }

    pub(crate) fn set_running(&mut self, running: bool) {
        self.is_running = running;
    }

    pub(crate) fn clear_splits(&mut self) {
        self.splits.clear();
    }

    pub(crate) fn push_split(&mut self, split: Split) -> &Split {
        self.splits.push(split);
        &self.splits[self.splits.len() - 1]
    }
}
