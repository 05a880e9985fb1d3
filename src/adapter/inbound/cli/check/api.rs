use crate::adapter::inbound::cli::output;
use crate::domain::Watermark;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::HomeworkSource;

/// Fetch once from the current time and report what came back.
pub async fn execute_api(config: &Config) -> Result<()> {
    let source = bootstrap::build_source(config);
    let since = Watermark::now();
    let result = source.fetch(since).await?;

    output::section("API Check");
    output::field("Endpoint", source.url());
    output::field("From date", since);
    output::field("Homeworks", result.homeworks.len());
    output::field("Watermark", result.watermark);
    output::success("Review API reachable");
    Ok(())
}
