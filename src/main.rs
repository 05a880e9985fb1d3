use clap::Parser;
use reviewbot::adapter::inbound::cli::{self, command::Cli};
use tracing::error;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match cli::load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.init_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    if let Err(e) = cli::execute(cli, &config).await {
        error!(kind = e.kind(), error = %e, "Fatal error");
        std::process::exit(1);
    }
}
