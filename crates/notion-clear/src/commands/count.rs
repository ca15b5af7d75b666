//! Count command implementation.
//!
//! Walks each configured database without archiving anything.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use futures_util::StreamExt;
use serde::Serialize;

use notion_core::{ArchiveSettings, Target, Workspace, pages};
use notion_http::HttpWorkspace;

use crate::config::Config;
use crate::output;

#[derive(Args, Debug)]
pub struct CountArgs {
    /// Print one JSON object per database
    #[arg(long)]
    pub json: bool,

    /// Pause between queries, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub pause_ms: u64,
}

/// Page count for one database.
#[derive(Debug, Serialize)]
struct CountReport<'a> {
    label: &'a str,
    database: &'a str,
    pages: u64,
    oldest: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub async fn run(args: CountArgs) -> Result<()> {
    let config = Config::from_env();
    let Some(token) = super::require_token(&config) else {
        return Ok(());
    };
    let api = config.api()?;

    let plan = config.plan();
    if plan.is_empty() {
        output::warning("No databases configured.");
        return Ok(());
    }

    let settings = ArchiveSettings::new(
        ArchiveSettings::default().page_size(),
        Duration::from_millis(args.pause_ms),
    )?;
    let workspace =
        HttpWorkspace::new(api, &token).context("Failed to create API client")?;

    for target in plan.targets() {
        let report = count_target(&workspace, target, settings).await;

        if args.json {
            output::json(&report)?;
            continue;
        }

        println!("{}", target.label.bold());
        output::field("Database", &target.id);
        output::field("Pages", &report.pages.to_string());
        if let Some(oldest) = report.oldest {
            output::field("Oldest", &oldest.to_rfc3339());
        }
        if let Some(error) = &report.error {
            output::warning(&format!("Error: {} (count is partial)", error));
        }
        println!();
    }

    Ok(())
}

async fn count_target<'a, W>(
    workspace: &W,
    target: &'a Target,
    settings: ArchiveSettings,
) -> CountReport<'a>
where
    W: Workspace + ?Sized,
{
    let mut report = CountReport {
        label: &target.label,
        database: &target.id,
        pages: 0,
        oldest: None,
        error: None,
    };

    let database = match target.database() {
        Ok(database) => database,
        Err(e) => {
            report.error = Some(e.to_string());
            return report;
        }
    };

    let mut stream = Box::pin(pages(workspace, &database, settings));
    while let Some(next) = stream.next().await {
        match next {
            Ok(page) => {
                report.pages += 1;
                if let Some(created) = page.created_time {
                    report.oldest = Some(report.oldest.map_or(created, |o| o.min(created)));
                }
            }
            Err(e) => {
                report.error = Some(e.to_string());
                break;
            }
        }
    }

    report
}
