//! CLI module graph.

pub mod check;
pub mod command;
pub mod output;
pub mod run;

use std::path::Path;

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

use self::command::{CheckCommand, Cli, Commands, RunArgs};

/// Load configuration from `path` if given, otherwise from defaults.
///
/// Either way the secrets are taken from the environment.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::from_env(),
    }
}

/// Dispatch the parsed command line. No subcommand means `run`.
pub async fn execute(cli: Cli, config: &Config) -> Result<()> {
    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => run::execute(config, &args).await,
        Commands::Check(CheckCommand::Config) => {
            check::execute_config(config, cli.config.as_deref());
            Ok(())
        }
        Commands::Check(CheckCommand::Api) => check::execute_api(config).await,
        Commands::Check(CheckCommand::Telegram) => check::execute_telegram(config).await,
    }
}
