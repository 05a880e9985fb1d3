//! Telegram delivery of homework notifications.
//!
//! Requires the `telegram` feature to be enabled.

pub mod notifier;

pub use notifier::{TelegramConfig, TelegramNotifier};
