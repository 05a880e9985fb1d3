//! Notifier port for delivering homework notifications.

use async_trait::async_trait;

use crate::error::NotifyError;

/// Delivers a rendered message to the configured destination.
///
/// The destination is fixed when the implementation is constructed; the
/// relay only ever talks to one chat.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send `text`. Returns once the messaging service accepted it.
    async fn notify(&self, text: &str) -> Result<(), NotifyError>;

    /// Human-readable name for logs.
    fn notifier_name(&self) -> &'static str;
}
