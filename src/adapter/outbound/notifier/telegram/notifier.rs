//! Telegram notifier.
//!
//! Provides the [`TelegramNotifier`], which sends plain-text messages to a
//! single chat through the Bot API.

use std::time::Duration;

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::requests::Request;
use teloxide::RequestError;
use tokio::time::timeout;
use tracing::{debug, info};
use url::Url;

use crate::error::NotifyError;
use crate::port::Notifier;

/// Configuration for the Telegram notifier.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Target chat ID for notifications.
    pub chat_id: i64,
    /// Upper bound on a single send.
    pub timeout: Duration,
    /// Bot API server; the public one when `None`.
    pub api_url: Option<Url>,
}

/// Telegram notifier that sends messages to one chat.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
    timeout: Duration,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(config: TelegramConfig) -> Self {
        info!(chat_id = config.chat_id, "Telegram notifier ready");
        let bot = Bot::new(&config.bot_token);
        let bot = match config.api_url {
            Some(url) => bot.set_api_url(url),
            None => bot,
        };
        Self {
            bot,
            chat_id: ChatId(config.chat_id),
            timeout: config.timeout,
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        let request = self.bot.send_message(self.chat_id, text).send();

        match timeout(self.timeout, request).await {
            Ok(Ok(_)) => {
                debug!(chat_id = self.chat_id.0, "Telegram message sent");
                Ok(())
            }
            Ok(Err(err)) => Err(classify_request_error(&err)),
            Err(_) => Err(NotifyError::Timeout(self.timeout)),
        }
    }

    fn notifier_name(&self) -> &'static str {
        "telegram"
    }
}

fn classify_request_error(err: &RequestError) -> NotifyError {
    match err {
        RequestError::RetryAfter(_) => NotifyError::RateLimited(err.to_string()),
        RequestError::Network(_) | RequestError::Io(_) => NotifyError::Transport(err.to_string()),
        _ => NotifyError::Rejected(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::ApiError;

    #[test]
    fn api_errors_are_rejections() {
        let err = RequestError::Api(ApiError::ChatNotFound);
        assert!(matches!(classify_request_error(&err), NotifyError::Rejected(_)));
    }

    #[test]
    fn retry_after_is_rate_limit() {
        let err = RequestError::RetryAfter(teloxide::types::Seconds::from_seconds(5));
        assert!(matches!(classify_request_error(&err), NotifyError::RateLimited(_)));
    }

    #[tokio::test]
    async fn notifier_reports_its_name() {
        let notifier = TelegramNotifier::new(TelegramConfig {
            bot_token: "123:abc".into(),
            chat_id: 42,
            timeout: Duration::from_secs(1),
            api_url: None,
        });
        assert_eq!(notifier.notifier_name(), "telegram");
    }
}
