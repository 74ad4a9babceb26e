//! Core types for split timing.
//!
//! - [`BoatId`] identifies a boat slot for the lifetime of a session
//! - [`Boat`] owns its append-only [`Split`] history
//! - [`Split`] carries the derived interval, pace and interval-diff figures
//! - [`SessionState`] is the two-state session machine
//! - [`TickRate`] controls how often the elapsed-time display refreshes
//!
//! ## Usage Example
//!
//! ```rust
//! use splitwatch::types::Split;
//!
//! let first = Split::following(None, 60.0, 500);
//! let second = Split::following(Some(&first), 125.0, 500);
//!
//! assert_eq!(second.interval_time_seconds, 65.0);
//! assert_eq!(second.pace, "1:05.00");
//! ```

mod boat;
pub mod boat_class;
mod split;
mod tick_rate;

pub use boat::{Boat, BoatId};
pub use boat_class::{BoatCategory, DEFAULT_BOAT_CLASS};
pub use split::Split;
pub use tick_rate::TickRate;

use serde::{Deserialize, Serialize};

/// Session state machine: `Idle --start--> Running --stop--> Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum SessionState {
    #[default]
    Idle,
    Running,
}

impl SessionState {
    pub fn is_running(self) -> bool {
        matches!(self, SessionState::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    prop_compose! {
        fn arb_elapsed_sequence()(
            gaps in prop::collection::vec(0.5f64..400.0, 1..20)
        ) -> Vec<f64> {
            gaps.iter()
                .scan(0.0, |acc, gap| {
                    *acc += gap;
                    Some(*acc)
                })
                .collect()
        }
    }

    proptest! {
        #[test]
        fn prop_split_chain_is_contiguous_and_increasing(
            elapsed in arb_elapsed_sequence(),
            split_distance in 50u32..1000u32
        ) {
            let mut splits: Vec<Split> = Vec::new();
            for t in &elapsed {
                let next = Split::following(splits.last(), *t, split_distance);
                splits.push(next);
            }

            for (i, split) in splits.iter().enumerate() {
                prop_assert_eq!(split.index, i + 1);
                prop_assert_eq!(split.distance_meters, split_distance * (i as u32 + 1));
                prop_assert!(split.interval_time_seconds > 0.0);
            }
            for pair in splits.windows(2) {
                prop_assert!(pair[1].cumulative_time_seconds > pair[0].cumulative_time_seconds);
            }
        }

        #[test]
        fn prop_intervals_sum_to_cumulative(elapsed in arb_elapsed_sequence()) {
            let mut splits: Vec<Split> = Vec::new();
            for t in &elapsed {
                let next = Split::following(splits.last(), *t, 500);
                splits.push(next);
            }

            let sum: f64 = splits.iter().map(|s| s.interval_time_seconds).sum();
            let last = splits.last().map(|s| s.cumulative_time_seconds).unwrap_or(0.0);
            prop_assert!((sum - last).abs() < 1e-6);
        }
    }

    #[test]
    fn session_state_defaults_to_idle() {
        assert_eq!(SessionState::default(), SessionState::Idle);
        assert!(SessionState::Running.is_running());
    }
}
