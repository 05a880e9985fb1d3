//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                 ┌─────────────────────┐
//!                 │     Application     │
//!                 │   (Poller + domain) │
//!                 └──────────┬──────────┘
//!             ┌──────────────┴──────────────┐
//!             ▼                             ▼
//!     ┌───────────────┐             ┌───────────────┐
//!     │HomeworkSource │             │   Notifier    │
//!     │ (review API)  │             │  (Telegram)   │
//!     └───────────────┘             └───────────────┘
//! ```

pub mod outbound;

pub use outbound::notifier::Notifier;
pub use outbound::review::HomeworkSource;
