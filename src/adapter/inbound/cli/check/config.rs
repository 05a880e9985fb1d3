use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::infrastructure::config::credentials::mask_token;
use crate::infrastructure::config::settings::Config;

/// Show the validated configuration with secrets masked.
pub fn execute_config(config: &Config, path: Option<&Path>) {
    output::section("Configuration");
    output::field(
        "Source",
        path.map_or_else(|| "defaults + environment".to_string(), |p| p.display().to_string()),
    );
    output::field("API URL", &config.api.url);
    output::field("API token", mask_token(&config.credentials.api_token));
    output::field("Bot token", mask_token(&config.credentials.bot_token));
    output::field("Chat ID", config.credentials.chat_id);
    if let Some(url) = &config.telegram.api_url {
        output::field("Bot API", url);
    }
    output::field("Poll interval", format!("{}s", config.poll.interval_secs));
    output::field(
        "Recovery delay",
        format!(
            "{}s (x{}, max {}s)",
            config.poll.recovery_delay_secs,
            config.poll.backoff_multiplier,
            config.poll.max_recovery_delay_secs
        ),
    );
    if let Some(file) = &config.logging.file {
        output::field("Log file", file.display());
    }
    output::success("Configuration OK");
}
