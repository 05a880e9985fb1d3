use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::credentials::mask_token;
use crate::infrastructure::config::settings::Config;

const TEST_MESSAGE: &str = "reviewbot: test message";

/// Send a test message to the configured chat.
pub async fn execute_telegram(config: &Config) -> Result<()> {
    let notifier = bootstrap::build_notifier(config, false);
    notifier.notify(TEST_MESSAGE).await?;

    output::section("Telegram Check");
    output::field("Bot token", mask_token(&config.credentials.bot_token));
    output::field("Chat ID", config.credentials.chat_id);
    output::success("Test message sent");
    Ok(())
}
