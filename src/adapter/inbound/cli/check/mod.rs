//! Diagnostic check command handlers.

mod api;
mod config;
mod telegram;

pub use api::execute_api;
pub use config::execute_config;
pub use telegram::execute_telegram;
