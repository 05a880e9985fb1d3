//! Poll loop configuration.

use std::time::Duration;

use serde::Deserialize;

/// Cadence and recovery settings for the poll loop.
#[derive(Debug, Clone, Deserialize)]
pub struct PollConfig {
    /// Pause after a successful cycle, in seconds (default: 300).
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Pause after the first failed cycle, in seconds (default: 5).
    #[serde(default = "default_recovery_delay_secs")]
    pub recovery_delay_secs: u64,
    /// Growth factor of the recovery delay per consecutive failure (default: 2.0).
    /// `1.0` keeps the delay fixed.
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,
    /// Upper bound on the recovery delay, in seconds (default: 300).
    #[serde(default = "default_max_recovery_delay_secs")]
    pub max_recovery_delay_secs: u64,
}

const fn default_interval_secs() -> u64 {
    300
}

const fn default_recovery_delay_secs() -> u64 {
    5
}

const fn default_backoff_multiplier() -> f64 {
    2.0
}

const fn default_max_recovery_delay_secs() -> u64 {
    300
}

impl PollConfig {
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    #[must_use]
    pub const fn recovery_delay(&self) -> Duration {
        Duration::from_secs(self.recovery_delay_secs)
    }

    #[must_use]
    pub const fn max_recovery_delay(&self) -> Duration {
        Duration::from_secs(self.max_recovery_delay_secs)
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            recovery_delay_secs: default_recovery_delay_secs(),
            backoff_multiplier: default_backoff_multiplier(),
            max_recovery_delay_secs: default_max_recovery_delay_secs(),
        }
    }
}
