//! Navigator configuration
//!
//! The configuration is serializable so a host application can embed it in
//! its own settings file. Missing fields fall back to their defaults.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default delay between two pushes of a batch navigation
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(700);

/// Configuration for a [`Navigator`](crate::Navigator)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigatorConfig {
    /// Delay in milliseconds between successive pushes of
    /// [`navigate_with_stack`](crate::Navigator::navigate_with_stack), long
    /// enough for the host's push transition to complete
    pub step_delay_ms: u64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: millis(DEFAULT_STEP_DELAY),
        }
    }
}

impl NavigatorConfig {
    /// Create a new navigator configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delay between batch navigation steps
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay_ms = millis(delay);
        self
    }

    /// Delay between batch navigation steps
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

/// Whole milliseconds in `delay`, saturating at `u64::MAX`
fn millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}
