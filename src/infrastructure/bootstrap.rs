//! Infrastructure bootstrap helpers for runtime wiring.

use tracing::info;

use crate::adapter::outbound::notifier::LogNotifier;
#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::telegram::{TelegramConfig, TelegramNotifier};
use crate::adapter::outbound::praktikum::PraktikumClient;
use crate::application::poll::Poller;
use crate::domain::Watermark;
use crate::infrastructure::config::settings::Config;
use crate::port::{HomeworkSource, Notifier};

/// Build the review API source from configuration.
#[must_use]
pub fn build_source(config: &Config) -> PraktikumClient {
    PraktikumClient::from_config(&config.api, config.credentials.api_token.clone())
}

/// Build the notifier: the log sink for dry runs, Telegram otherwise.
///
/// Without the `telegram` feature every run is a dry run.
#[must_use]
pub fn build_notifier(config: &Config, dry_run: bool) -> Box<dyn Notifier> {
    if dry_run {
        info!("Dry run: notifications go to the log");
        return Box::new(LogNotifier);
    }
    telegram_notifier(config)
}

#[cfg(feature = "telegram")]
fn telegram_notifier(config: &Config) -> Box<dyn Notifier> {
    Box::new(TelegramNotifier::new(TelegramConfig {
        bot_token: config.credentials.bot_token.clone(),
        chat_id: config.credentials.chat_id,
        timeout: std::time::Duration::from_millis(config.telegram.timeout_ms),
        api_url: config.telegram.api_url.clone(),
    }))
}

#[cfg(not(feature = "telegram"))]
fn telegram_notifier(_config: &Config) -> Box<dyn Notifier> {
    tracing::warn!("Built without the `telegram` feature, notifications go to the log");
    Box::new(LogNotifier)
}

/// Wire a poller that starts from the current time.
#[must_use]
pub fn build_poller(config: &Config, dry_run: bool) -> Poller {
    let source: Box<dyn HomeworkSource> = Box::new(build_source(config));
    Poller::new(
        source,
        build_notifier(config, dry_run),
        &config.poll,
        Watermark::now(),
    )
}
