//! HTTP client for the homework review API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use super::dto::StatusesResponse;
use super::settings::ApiConfig;
use crate::domain::{FetchResult, Watermark};
use crate::error::{FetchError, ProtocolError};
use crate::port::HomeworkSource;

/// Authenticated client for the `homework_statuses` endpoint.
pub struct PraktikumClient {
    http: HttpClient,
    url: String,
    token: String,
}

impl PraktikumClient {
    /// Create a client with reqwest's default settings.
    #[must_use]
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            url: url.into(),
            token: token.into(),
        }
    }

    /// Create a client with the timeouts from `config`.
    #[must_use]
    pub fn from_config(config: &ApiConfig, token: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            url: config.url.clone(),
            token: token.into(),
        }
    }

    /// Endpoint this client queries.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn get_statuses(&self, since: Watermark) -> Result<FetchResult, FetchError> {
        debug!(url = %self.url, from_date = since.as_secs(), "Fetching homework statuses");

        let response = self
            .http
            .get(&self.url)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", since.as_secs())])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        let payload: StatusesResponse = match serde_json::from_str(&body) {
            Ok(payload) => payload,
            Err(_) if !status.is_success() => {
                return Err(ProtocolError::Status(status.as_u16()).into());
            }
            Err(err) => return Err(ProtocolError::Malformed(err.to_string()).into()),
        };

        let result = payload.into_fetch_result(status.as_u16(), since)?;
        debug!(
            count = result.homeworks.len(),
            watermark = %result.watermark,
            "Fetched homework statuses"
        );

        Ok(result)
    }
}

fn transport_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Transport(format!("request timed out: {err}"))
    } else {
        FetchError::Transport(err.to_string())
    }
}

#[async_trait]
impl HomeworkSource for PraktikumClient {
    async fn fetch(&self, since: Watermark) -> Result<FetchResult, FetchError> {
        self.get_statuses(since).await
    }

    fn source_name(&self) -> &'static str {
        "Praktikum"
    }
}
