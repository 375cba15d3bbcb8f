//! Statistics configuration

use serde::Deserialize;

/// Configuration controlling whether a cache tracks statistics
///
/// Tracking is off unless explicitly enabled, so a cache that never asks for
/// statistics pays nothing for them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Track operation counters for the owning cache
    pub enabled: bool,
}

impl StatsConfig {
    /// Config with tracking turned on
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Config with tracking turned off
    pub fn disabled() -> Self {
        Self { enabled: false }
    }
}

impl From<bool> for StatsConfig {
    fn from(enabled: bool) -> Self {
        Self { enabled }
    }
}
