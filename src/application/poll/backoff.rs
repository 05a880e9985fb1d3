//! Recovery delay after failed cycles.

use std::time::Duration;

/// Exponential recovery delay with a cap.
///
/// Each call to [`next_delay`](Self::next_delay) returns the current delay and
/// grows it by the multiplier for the next failure; [`reset`](Self::reset)
/// goes back to the initial delay once a cycle succeeds.
#[derive(Debug, Clone)]
pub struct RecoveryBackoff {
    initial: Duration,
    multiplier: f64,
    max: Duration,
    current: Duration,
    consecutive_failures: u32,
}

impl RecoveryBackoff {
    /// `multiplier` below 1.0 (or non-finite) is treated as 1.0, and `max` is
    /// raised to `initial` if it is smaller.
    #[must_use]
    pub fn new(initial: Duration, multiplier: f64, max: Duration) -> Self {
        let multiplier = if multiplier.is_finite() && multiplier >= 1.0 {
            multiplier
        } else {
            1.0
        };
        Self {
            initial,
            multiplier,
            max: max.max(initial),
            current: initial,
            consecutive_failures: 0,
        }
    }

    /// A backoff that always waits `delay`.
    #[must_use]
    pub fn fixed(delay: Duration) -> Self {
        Self::new(delay, 1.0, delay)
    }

    /// Delay to wait after the failure that just happened.
    pub fn next_delay(&mut self) -> Duration {
        let delay = self.current;
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);

        let grown = Duration::try_from_secs_f64(self.current.as_secs_f64() * self.multiplier)
            .unwrap_or(self.max);
        self.current = grown.min(self.max);

        delay
    }

    /// Forget previous failures.
    pub fn reset(&mut self) {
        self.current = self.initial;
        self.consecutive_failures = 0;
    }

    /// Number of failures since the last reset.
    #[must_use]
    pub const fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }
}
