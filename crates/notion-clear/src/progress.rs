//! Terminal progress reporting for archive runs.

use colored::Colorize;
use tracing::debug;

use notion_core::{ArchiveObserver, ArchiveOutcome};

use crate::output;

/// Prints archive progress to standard output.
#[derive(Debug, Default)]
pub struct TerminalProgress;

impl ArchiveObserver for TerminalProgress {
    fn started(&mut self, label: &str, database: &str) {
        println!();
        println!("{} Deleting all pages in {}...", "🗑".bold(), label.bold());
        debug!(%database, "Started");
    }

    fn progress(&mut self, _label: &str, archived: u64) {
        // Progress is cosmetic; a closed stdout must not abort the run.
        let _ = output::status_line(&format!("Deleted {} pages...", archived));
    }

    fn finished(&mut self, label: &str, outcome: &ArchiveOutcome) {
        if let Some(error) = outcome.error() {
            output::warning(&format!("Error: {}", error));
            if error.is_auth_error() {
                output::warning("Check that the integration is shared with this database.");
            }
        }
        output::success(&format!(
            "Deleted {} pages in {}",
            outcome.archived(),
            label
        ));
    }
}
