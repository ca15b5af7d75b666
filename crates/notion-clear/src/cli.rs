//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::count::CountArgs;
use crate::commands::purge::PurgeArgs;

/// Archive every page of the Notion databases named in the environment.
#[derive(Parser, Debug)]
#[command(name = "notion-clear")]
#[command(author, version = env!("NOTION_CLEAR_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Read environment variables from this file instead of ./.env
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Archive every page after typed confirmation (default)
    Purge(PurgeArgs),

    /// Count pages in each configured database without changing anything
    Count(CountArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Purge(PurgeArgs::default())
    }
}
