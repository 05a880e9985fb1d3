//! Telegram notification configuration.

use serde::Deserialize;
use url::Url;

/// Telegram settings read from the config file.
///
/// The bot token and chat id are secrets and come from the environment
/// (see [`Credentials`](super::credentials::Credentials)).
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Send timeout in milliseconds (default: 10000).
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Bot API server to use instead of the public one.
    #[serde(default)]
    pub api_url: Option<Url>,
}

const fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            api_url: None,
        }
    }
}
