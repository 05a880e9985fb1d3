//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Relays homework review status changes to a Telegram chat
#[derive(Parser, Debug)]
#[command(name = "reviewbot")]
#[command(version)]
pub struct Cli {
    /// TOML config file; defaults apply when omitted
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll the review API and send notifications (default)
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Arguments for `reviewbot run`.
#[derive(clap::Args, Debug, Default)]
pub struct RunArgs {
    /// Log notifications instead of sending them to Telegram
    #[arg(long)]
    pub dry_run: bool,
}

/// Subcommands for `reviewbot check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration and show the effective settings
    Config,
    /// Query the review API once
    Api,
    /// Send a test message to the configured chat
    Telegram,
}
