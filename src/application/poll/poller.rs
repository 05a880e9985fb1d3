//! Poll loop state machine.
//!
//! One cycle is fetch → format the most recent homework → notify → advance
//! the watermark. A cycle that fails at any step leaves the watermark where
//! it was, so the next cycle asks the server for the same window again.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use super::backoff::RecoveryBackoff;
use super::config::PollConfig;
use crate::domain::{MessageFormatter, Watermark};
use crate::error::{Error, FetchError, Result};
use crate::port::{HomeworkSource, Notifier};

/// Where the poller currently is within a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Idle,
    Fetching,
    Notifying,
    /// Waiting out the poll interval after a successful cycle.
    Sleeping,
    /// Waiting out the recovery delay after a failed cycle.
    BackoffSleeping,
}

/// Result of a single cycle.
#[derive(Debug)]
pub enum CycleOutcome {
    /// A notification went out and the watermark moved.
    Delivered {
        homework: String,
        watermark: Watermark,
    },
    /// The server had nothing new.
    NoUpdates,
    /// The cycle was abandoned; the watermark is unchanged.
    Failed(Error),
}

/// A finished cycle together with how long to wait before the next one.
#[derive(Debug)]
pub struct Cycle {
    pub outcome: CycleOutcome,
    pub delay: Duration,
}

/// Drives the poll-evaluate-notify loop.
pub struct Poller {
    source: Box<dyn HomeworkSource>,
    notifier: Box<dyn Notifier>,
    formatter: MessageFormatter,
    interval: Duration,
    backoff: RecoveryBackoff,
    watermark: Watermark,
    state: PollState,
}

impl Poller {
    /// Create a poller that starts querying from `watermark`.
    #[must_use]
    pub fn new(
        source: Box<dyn HomeworkSource>,
        notifier: Box<dyn Notifier>,
        config: &PollConfig,
        watermark: Watermark,
    ) -> Self {
        Self {
            source,
            notifier,
            formatter: MessageFormatter::default(),
            interval: config.interval(),
            backoff: RecoveryBackoff::new(
                config.recovery_delay(),
                config.backoff_multiplier,
                config.max_recovery_delay(),
            ),
            watermark,
            state: PollState::Idle,
        }
    }

    /// Watermark the next cycle will query from.
    #[must_use]
    pub const fn watermark(&self) -> Watermark {
        self.watermark
    }

    #[must_use]
    pub const fn state(&self) -> PollState {
        self.state
    }

    /// Run one cycle and report how long to sleep afterwards.
    ///
    /// Never fails: errors are logged and returned as
    /// [`CycleOutcome::Failed`] with the recovery delay.
    pub async fn run_cycle(&mut self) -> Cycle {
        match self.attempt().await {
            Ok(outcome) => {
                self.backoff.reset();
                self.state = PollState::Sleeping;
                Cycle {
                    outcome,
                    delay: self.interval,
                }
            }
            Err(err) => {
                let delay = self.backoff.next_delay();
                self.log_failure(&err, delay);
                self.state = PollState::BackoffSleeping;
                Cycle {
                    outcome: CycleOutcome::Failed(err),
                    delay,
                }
            }
        }
    }

    /// Poll forever. Returns only if the surrounding task is cancelled.
    pub async fn run(&mut self) {
        info!(
            source = self.source.source_name(),
            notifier = self.notifier.notifier_name(),
            watermark = %self.watermark,
            interval_secs = self.interval.as_secs(),
            "Poller started"
        );

        loop {
            let cycle = self.run_cycle().await;
            sleep(cycle.delay).await;
            self.state = PollState::Idle;
        }
    }

    async fn attempt(&mut self) -> Result<CycleOutcome> {
        self.state = PollState::Fetching;
        let batch = self.source.fetch(self.watermark).await?;

        let Some(latest) = batch.latest() else {
            debug!(watermark = %self.watermark, "No homework updates");
            return Ok(CycleOutcome::NoUpdates);
        };

        let text = self.formatter.format(latest)?;

        self.state = PollState::Notifying;
        self.notifier.notify(&text).await?;

        self.watermark = self.watermark.advance(batch.watermark);
        let homework = latest.name.clone().unwrap_or_default();
        info!(
            homework = %homework,
            status = ?latest.status,
            watermark = %self.watermark,
            "Homework notification delivered"
        );

        Ok(CycleOutcome::Delivered {
            homework,
            watermark: self.watermark,
        })
    }

    fn log_failure(&self, err: &Error, delay: Duration) {
        let failures = self.backoff.consecutive_failures();
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);

        match err {
            Error::Fetch(FetchError::Transport(_)) | Error::Notify(_) => warn!(
                kind = err.kind(),
                error = %err,
                watermark = %self.watermark,
                failures,
                delay_ms,
                "Poll cycle failed, retrying"
            ),
            _ => error!(
                kind = err.kind(),
                error = %err,
                watermark = %self.watermark,
                failures,
                delay_ms,
                "Poll cycle failed, retrying"
            ),
        }
    }
}
