//! Builders for domain values.

use crate::domain::{FetchResult, HomeworkRecord, Watermark};

/// A fetch result with `(name, status)` homeworks, most recent first.
#[must_use]
pub fn batch(watermark: i64, homeworks: &[(&str, &str)]) -> FetchResult {
    FetchResult {
        homeworks: homeworks
            .iter()
            .map(|(name, status)| HomeworkRecord::new(*name, *status))
            .collect(),
        watermark: Watermark::new(watermark),
    }
}

/// A fetch result with no homeworks.
#[must_use]
pub fn empty_batch(watermark: i64) -> FetchResult {
    batch(watermark, &[])
}
