//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Tunables come from an optional TOML file; secrets come only from the
//! environment.
//!
//! # Example
//!
//! ```no_run
//! use reviewbot::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging(0)?;
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::credentials::{Credentials, API_URL_VAR};
use super::logging::LoggingConfig;
use super::telegram::TelegramAppConfig;
use crate::adapter::outbound::praktikum::ApiConfig;
use crate::application::poll::PollConfig;
use crate::error::{ConfigError, Result};

/// Longest sleep the poller may be configured for, in seconds.
pub const MAX_DELAY_SECS: u64 = 86_400;

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Review API endpoint and timeouts.
    #[serde(default)]
    pub api: ApiConfig,

    /// Poll cadence and recovery delays.
    #[serde(default)]
    pub poll: PollConfig,

    /// Telegram delivery settings.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Tokens and chat id, filled from the environment.
    #[serde(skip)]
    pub credentials: Credentials,
}

impl Config {
    /// Load configuration from a TOML file, then apply the process environment.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::from_toml_and_env(&content)
    }

    /// Build configuration from defaults and the process environment only.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_with(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML, apply the process environment and validate.
    pub fn from_toml_and_env(content: &str) -> Result<Self> {
        let mut config = Self::parse_toml(content)?;
        config.apply_env_with(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML without touching the environment or validating.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Fill credentials and overrides from `lookup`.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_VAR).filter(|url| !url.trim().is_empty()) {
            self.api.url = url.trim().to_string();
        }
        self.credentials = Credentials::from_lookup(lookup)?;
        Ok(())
    }

    /// Check value ranges; credentials are checked when they are read.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api.url).map_err(|e| ConfigError::InvalidValue {
            field: "api.url",
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "api.url",
                reason: format!("unsupported scheme `{}`", url.scheme()),
            }
            .into());
        }

        if let Some(url) = &self.telegram.api_url {
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ConfigError::InvalidValue {
                    field: "telegram.api_url",
                    reason: format!("unsupported scheme `{}`", url.scheme()),
                }
                .into());
            }
        }

        for (field, value) in [
            ("api.timeout_ms", self.api.timeout_ms),
            ("api.connect_timeout_ms", self.api.connect_timeout_ms),
            ("telegram.timeout_ms", self.telegram.timeout_ms),
            ("poll.interval_secs", self.poll.interval_secs),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be greater than 0".into(),
                }
                .into());
            }
        }

        for (field, value) in [
            ("poll.interval_secs", self.poll.interval_secs),
            ("poll.max_recovery_delay_secs", self.poll.max_recovery_delay_secs),
        ] {
            if value > MAX_DELAY_SECS {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be at most {MAX_DELAY_SECS}, got {value}"),
                }
                .into());
            }
        }

        let multiplier = self.poll.backoff_multiplier;
        if !multiplier.is_finite() || multiplier < 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "poll.backoff_multiplier",
                reason: format!("must be a finite number >= 1.0, got {multiplier}"),
            }
            .into());
        }

        if self.poll.max_recovery_delay_secs < self.poll.recovery_delay_secs {
            return Err(ConfigError::InvalidValue {
                field: "poll.max_recovery_delay_secs",
                reason: format!(
                    "must be at least poll.recovery_delay_secs ({})",
                    self.poll.recovery_delay_secs
                ),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging based on configuration and CLI verbosity.
    pub fn init_logging(&self, verbosity: u8) -> Result<()> {
        self.logging.init(verbosity)?;
        Ok(())
    }
}
