//! Review API configuration.

use serde::Deserialize;

/// Default endpoint of the homework status API.
pub const DEFAULT_API_URL: &str = "https://praktikum.yandex.ru/api/user_api/homework_statuses/";

/// Connection settings for the review API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Full URL of the homework statuses endpoint.
    #[serde(default = "default_api_url")]
    pub url: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.into()
}

const fn default_timeout_ms() -> u64 {
    10_000
}

const fn default_connect_timeout_ms() -> u64 {
    5_000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}
