//! Refresh rate for the elapsed-time display

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Highest display refresh rate accepted
pub const MAX_TICK_HZ: u32 = 1000;

/// Refresh rate for the elapsed-time ticker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum TickRate {
    /// 100Hz, one refresh every 10ms
    #[default]
    Default,

    /// Custom refresh rate in Hz, clamped to 1..=1000
    Hz(u32),
}

impl TickRate {
    /// Effective refresh rate in Hz
    pub fn hz(self) -> u32 {
        match self {
            TickRate::Default => 100,
            TickRate::Hz(hz) => hz.clamp(1, MAX_TICK_HZ),
        }
    }

    /// Time between two refreshes
    pub fn interval(self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.hz()))
    }
}
