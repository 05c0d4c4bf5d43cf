//! Trace playback: modes, step budget, and the token-checked scheduler.

mod scheduler;
mod sweep;

pub use scheduler::{Playback, PlaybackState, RunToken, Scheduler};
pub use sweep::inflate_by_dust;

use std::time::Duration;

use serde::Deserialize;

/// What a playback run does to the world as it replays a trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackMode {
    /// Record explored cells into the robot map on completion.
    Map,
    /// Clean dust as cells are visited; dusty cells replay slower.
    Sweep,
}

/// Playback timing configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct PlaybackConfig {
    /// Delay between consecutive frames in milliseconds (default: 5).
    #[serde(default = "default_speed_ms")]
    pub speed_ms: u64,
}

fn default_speed_ms() -> u64 {
    5
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed_ms: default_speed_ms(),
        }
    }
}

impl PlaybackConfig {
    /// Frame delay as a [`Duration`].
    pub fn speed(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }
}

/// Remaining distinct-visit events the robot may still perform.
///
/// Decremented once per distinct-visit event during playback, never per
/// raw expansion repeat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepBudget {
    available: u32,
    full: u32,
}

impl StepBudget {
    /// A full budget of `full` steps.
    pub fn new(full: u32) -> Self {
        Self {
            available: full,
            full,
        }
    }

    /// Steps remaining.
    pub fn available(&self) -> u32 {
        self.available
    }

    /// Is the budget used up?
    pub fn is_empty(&self) -> bool {
        self.available == 0
    }

    /// Spend one step. Returns false (and spends nothing) when empty.
    pub fn try_spend(&mut self) -> bool {
        if self.available == 0 {
            return false;
        }
        self.available -= 1;
        true
    }

    /// Remaining battery as a 0–100 percentage of the full budget.
    pub fn battery_percent(&self) -> u32 {
        if self.full == 0 {
            return 0;
        }
        self.available * 100 / self.full
    }

    /// Recharge to the full budget.
    pub fn recharge(&mut self) {
        self.available = self.full;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_spend_and_percent() {
        let mut budget = StepBudget::new(4);
        assert_eq!(budget.battery_percent(), 100);
        assert!(budget.try_spend());
        assert!(budget.try_spend());
        assert_eq!(budget.available(), 2);
        assert_eq!(budget.battery_percent(), 50);
        assert!(budget.try_spend());
        assert!(budget.try_spend());
        assert!(!budget.try_spend());
        assert!(budget.is_empty());
        budget.recharge();
        assert_eq!(budget.available(), 4);
    }

    #[test]
    fn test_playback_config_default_speed() {
        let config = PlaybackConfig::default();
        assert_eq!(config.speed(), Duration::from_millis(5));
    }
}
