//! Homework source port.

use async_trait::async_trait;

use crate::domain::{FetchResult, Watermark};
use crate::error::FetchError;

/// Incremental source of homework status updates.
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    /// Fetch homeworks updated at or after `since`.
    ///
    /// On success the result carries the watermark for the next query; an
    /// implementation that gets no watermark from the server returns `since`.
    async fn fetch(&self, since: Watermark) -> Result<FetchResult, FetchError>;

    /// Human-readable name for logs.
    fn source_name(&self) -> &'static str;
}
