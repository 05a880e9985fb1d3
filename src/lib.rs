//! Reviewbot - homework review status relay.
//!
//! Polls a homework-review API for status changes of the most recent
//! submission and forwards a human-readable verdict to a Telegram chat.
//!
//! # Architecture
//!
//! - [`domain`] - Homework records, the status catalog, message formatting
//!   and the incremental-fetch watermark
//! - [`port`] - `HomeworkSource` and `Notifier` traits
//! - [`adapter`] - Review API client, Telegram and log notifiers, CLI
//! - [`application`] - The poll loop and its recovery backoff
//! - [`infrastructure`] - Configuration, logging and runtime wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` (default) - Deliver notifications through the Telegram Bot API
//! - `testkit` - Expose test doubles to integration tests
//!
//! # Example
//!
//! ```no_run
//! use reviewbot::adapter::outbound::notifier::LogNotifier;
//! use reviewbot::adapter::outbound::praktikum::PraktikumClient;
//! use reviewbot::application::poll::{PollConfig, Poller};
//! use reviewbot::domain::Watermark;
//!
//! # async fn demo() {
//! let source = PraktikumClient::new(
//!     "https://praktikum.yandex.ru/api/user_api/homework_statuses/",
//!     "token",
//! );
//! let mut poller = Poller::new(
//!     Box::new(source),
//!     Box::new(LogNotifier),
//!     &PollConfig::default(),
//!     Watermark::now(),
//! );
//! poller.run().await;
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
