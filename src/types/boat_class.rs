//! Boat class catalogue
//!
//! Class identifiers follow the usual rowing shorthand: gender prefix, seat
//! count, then `X` for sculling, `+` for coxed or `-` for coxless sweep.

use serde::{Deserialize, Serialize};

/// Class given to freshly created boats
pub const DEFAULT_BOAT_CLASS: &str = "M1X";

/// Men's boat classes
pub const MEN_CLASSES: &[&str] = &["M1X", "M2X", "M4+", "M4-", "M8+"];

/// Women's boat classes
pub const WOMEN_CLASSES: &[&str] = &["W1X", "W2X", "W4+", "W4-", "W8+"];

/// Catalogue grouping for boat classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum BoatCategory {
    Men,
    Women,
}

impl BoatCategory {
    /// Classes in this category
    pub fn classes(self) -> &'static [&'static str] {
        match self {
            BoatCategory::Men => MEN_CLASSES,
            BoatCategory::Women => WOMEN_CLASSES,
        }
    }

    /// Category of a catalogue class, case-insensitive
    pub fn of(boat_class: &str) -> Option<Self> {
        let upper = boat_class.trim().to_ascii_uppercase();
        if MEN_CLASSES.contains(&upper.as_str()) {
            Some(BoatCategory::Men)
        } else if WOMEN_CLASSES.contains(&upper.as_str()) {
            Some(BoatCategory::Women)
        } else {
            None
        }
    }
}

/// All catalogue classes, men first
pub fn catalogue() -> impl Iterator<Item = &'static str> {
    MEN_CLASSES.iter().chain(WOMEN_CLASSES.iter()).copied()
}
