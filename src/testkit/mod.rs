//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`] — [`ScriptedSource`], a [`HomeworkSource`](crate::port::HomeworkSource)
//!   that replays canned fetch results.
//! - [`notifier`] — [`RecordingNotifier`], a [`Notifier`](crate::port::Notifier)
//!   that records messages and can be told to fail.
//! - [`domain`] — builders for fetch results.

pub mod domain;
pub mod notifier;
pub mod source;

pub use notifier::RecordingNotifier;
pub use source::ScriptedSource;
