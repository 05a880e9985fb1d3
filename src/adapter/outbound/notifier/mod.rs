//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for the supported delivery backends.

mod log;

#[cfg(feature = "telegram")]
pub mod telegram;

pub use log::LogNotifier;
