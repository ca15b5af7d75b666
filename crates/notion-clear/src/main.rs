//! notion-clear - Archive every page of the configured Notion databases.
//!
//! Intended for wiping synced data before a fresh historical import. The
//! purge is irreversible from this tool and always asks for a typed
//! confirmation first.

mod cli;
mod commands;
mod config;
mod output;
mod progress;
mod prompt;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{count, purge};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    config::load_env_file(cli.env_file.as_deref())?;

    match cli.command.unwrap_or_default() {
        Commands::Purge(args) => purge::run(args).await,
        Commands::Count(args) => count::run(args).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // Progress owns stdout; logs go to stderr.
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
