//! Purge command implementation.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use notion_core::{ArchiveSettings, PurgeOutcome, run_purge};
use notion_http::HttpWorkspace;

use crate::config::Config;
use crate::output;
use crate::progress::TerminalProgress;
use crate::prompt::StdinPrompt;

#[derive(Args, Debug)]
pub struct PurgeArgs {
    /// Pages requested per query
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub page_size: u32,

    /// Pause between queries, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub pause_ms: u64,
}

impl Default for PurgeArgs {
    fn default() -> Self {
        Self {
            page_size: 100,
            pause_ms: 500,
        }
    }
}

pub async fn run(args: PurgeArgs) -> Result<()> {
    let config = Config::from_env();
    let Some(token) = super::require_token(&config) else {
        return Ok(());
    };
    let api = config.api()?;

    let plan = config.plan();
    let settings = ArchiveSettings::new(args.page_size, Duration::from_millis(args.pause_ms))
        .context("Invalid page size")?;
    let workspace =
        HttpWorkspace::new(api, &token).context("Failed to create API client")?;

    let outcome = run_purge(
        &workspace,
        &plan,
        &mut StdinPrompt,
        settings,
        &mut TerminalProgress,
    )
    .await
    .context("Failed to read confirmation")?;

    match outcome {
        PurgeOutcome::NothingToDo => {
            output::warning("No databases configured; nothing to clear.");
        }
        PurgeOutcome::Cancelled => {
            output::error("Operation cancelled.");
        }
        PurgeOutcome::Completed(reports) => {
            println!();
            output::rule('=');
            let failed = reports.iter().filter(|r| !r.outcome.is_drained()).count();
            if failed == 0 {
                output::success("All data cleared. You can now run the historical sync.");
            } else {
                output::warning(&format!(
                    "{} of {} databases were not fully cleared; run again to continue.",
                    failed,
                    reports.len()
                ));
            }
            output::rule('=');
        }
    }

    Ok(())
}
