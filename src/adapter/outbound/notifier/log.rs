//! Dry-run notifier that writes messages to the log.

use async_trait::async_trait;
use tracing::info;

use crate::error::NotifyError;
use crate::port::Notifier;

/// A notifier that logs every message via tracing instead of sending it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        info!(text = %text, "Notification (dry run)");
        Ok(())
    }

    fn notifier_name(&self) -> &'static str {
        "log"
    }
}
