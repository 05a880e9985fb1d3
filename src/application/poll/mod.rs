//! The poll-evaluate-notify loop.

mod backoff;
mod config;
mod poller;

pub use backoff::RecoveryBackoff;
pub use config::PollConfig;
pub use poller::{Cycle, CycleOutcome, PollState, Poller};
