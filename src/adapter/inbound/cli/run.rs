//! Handler for the `run` command.

use tokio::signal;
use tracing::info;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Run the poll loop until Ctrl-C.
pub async fn execute(config: &Config, args: &RunArgs) -> Result<()> {
    info!(version = env!("CARGO_PKG_VERSION"), "reviewbot starting");
    let mut poller = bootstrap::build_poller(config, args.dry_run);

    tokio::select! {
        () = poller.run() => {}
        result = signal::ctrl_c() => {
            result?;
            info!("Shutdown signal received");
        }
    }

    info!(watermark = %poller.watermark(), "reviewbot stopped");
    Ok(())
}
