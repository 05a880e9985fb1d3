//! The incremental-fetch watermark.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Unix timestamp (seconds) bounding the next homework query.
///
/// The only piece of state that survives between poll cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watermark(i64);

impl Watermark {
    #[must_use]
    pub const fn new(secs: i64) -> Self {
        Self(secs)
    }

    /// Watermark at the current wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }

    #[must_use]
    pub const fn as_secs(self) -> i64 {
        self.0
    }

    /// Move forward to `other`; never moves backward.
    #[must_use]
    pub fn advance(self, other: Self) -> Self {
        self.max(other)
    }
}

impl fmt::Display for Watermark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_forward() {
        assert_eq!(Watermark::new(500).advance(Watermark::new(1000)), Watermark::new(1000));
    }

    #[test]
    fn advance_never_moves_backward() {
        assert_eq!(Watermark::new(1000).advance(Watermark::new(500)), Watermark::new(1000));
    }

    #[test]
    fn now_is_positive() {
        assert!(Watermark::now().as_secs() > 0);
    }
}
