//! Recording notifier.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::NotifyError;
use crate::port::Notifier;

#[derive(Default)]
struct Inbox {
    sent: Vec<String>,
    failures: VecDeque<NotifyError>,
    attempts: usize,
}

/// Thread-safe message collector for notification assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    inbox: Arc<Mutex<Inbox>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next send fail with `error`. Failures queue up.
    #[must_use]
    pub fn failing_with(self, error: NotifyError) -> Self {
        self.inbox.lock().failures.push_back(error);
        self
    }

    /// Messages accepted so far.
    #[must_use]
    pub fn sent(&self) -> Vec<String> {
        self.inbox.lock().sent.clone()
    }

    /// Sends attempted so far, failed ones included.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.inbox.lock().attempts
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        let mut inbox = self.inbox.lock();
        inbox.attempts += 1;
        if let Some(error) = inbox.failures.pop_front() {
            return Err(error);
        }
        inbox.sent.push(text.to_string());
        Ok(())
    }

    fn notifier_name(&self) -> &'static str {
        "recording"
    }
}
