//! Review API response types.

use serde::Deserialize;

use crate::domain::{FetchResult, HomeworkRecord, Watermark};
use crate::error::ProtocolError;

/// Body of a `homework_statuses` response.
///
/// A successful answer carries `homeworks` and `current_date`; an error
/// answer carries `code` (and usually `message`) instead.
#[derive(Debug, Default, Deserialize)]
pub struct StatusesResponse {
    #[serde(default)]
    pub homeworks: Option<Vec<HomeworkRecord>>,
    #[serde(default)]
    pub current_date: Option<i64>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl StatusesResponse {
    /// Validate the payload and convert it into a [`FetchResult`].
    ///
    /// `http_status` is the response status code; `since` is the watermark
    /// the request was made with and is kept when `current_date` is absent.
    pub fn into_fetch_result(
        self,
        http_status: u16,
        since: Watermark,
    ) -> Result<FetchResult, ProtocolError> {
        if let Some(code) = self.code {
            return Err(ProtocolError::Server {
                code,
                message: self.message.unwrap_or_default(),
            });
        }
        if !(200..300).contains(&http_status) {
            return Err(ProtocolError::Status(http_status));
        }
        let homeworks = self.homeworks.ok_or(ProtocolError::MissingHomeworks)?;
        let watermark = self.current_date.map_or(since, Watermark::new);

        Ok(FetchResult {
            homeworks,
            watermark,
        })
    }
}
