//! Confirmed purge of several databases.
//!
//! A [`PurgePlan`] lists the databases to clear in order. [`run_purge`] asks
//! the injected [`Prompt`] for confirmation and, only if the reply is exactly
//! [`CONFIRMATION_PHRASE`], archives each database in turn. A failure in one
//! database is recorded in its [`TargetReport`] and the run moves on.

use std::io;

use tracing::{info, warn};

use crate::Result;
use crate::archive::{ArchiveObserver, ArchiveOutcome, ArchiveSettings, Archiver};
use crate::traits::Workspace;
use crate::types::DatabaseId;

/// The exact text the user must type to proceed.
pub const CONFIRMATION_PHRASE: &str = "DELETE";

/// A database to clear, with the name shown to the user.
///
/// The identifier is kept as configured. It is validated when the target is
/// processed, so a malformed value fails only its own target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Display name, used only for output.
    pub label: String,
    /// The database identifier as configured.
    pub id: String,
}

impl Target {
    pub fn new(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
        }
    }

    /// The validated database identifier.
    pub fn database(&self) -> Result<DatabaseId> {
        DatabaseId::new(&self.id)
    }
}

/// Ordered list of databases to clear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurgePlan {
    targets: Vec<Target>,
}

impl PurgePlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a target if its database is configured.
    pub fn with_target(mut self, label: impl Into<String>, id: Option<String>) -> Self {
        if let Some(id) = id {
            self.targets.push(Target::new(label, id));
        }
        self
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Source of the user's confirmation.
///
/// Implementations show the plan and return the line the user typed.
pub trait Prompt {
    fn ask(&mut self, plan: &PurgePlan) -> io::Result<String>;
}

impl<F> Prompt for F
where
    F: FnMut(&PurgePlan) -> io::Result<String>,
{
    fn ask(&mut self, plan: &PurgePlan) -> io::Result<String> {
        self(plan)
    }
}

/// Returns true if `input` is exactly the confirmation phrase.
///
/// One trailing line terminator is ignored; nothing else is trimmed.
///
/// ```
/// use notion_core::is_confirmed;
///
/// assert!(is_confirmed("DELETE\n"));
/// assert!(!is_confirmed("delete\n"));
/// assert!(!is_confirmed(" DELETE"));
/// ```
pub fn is_confirmed(input: &str) -> bool {
    let line = match input.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => input,
    };
    line == CONFIRMATION_PHRASE
}

/// Result of clearing one target.
#[derive(Debug)]
pub struct TargetReport {
    pub target: Target,
    pub outcome: ArchiveOutcome,
}

/// How a purge run ended.
#[derive(Debug)]
pub enum PurgeOutcome {
    /// No database was configured; the user was not asked.
    NothingToDo,

    /// The user did not type the confirmation phrase.
    Cancelled,

    /// Every target was processed, in plan order.
    Completed(Vec<TargetReport>),
}

impl PurgeOutcome {
    /// Total pages archived across all targets.
    pub fn total_archived(&self) -> u64 {
        match self {
            PurgeOutcome::Completed(reports) => {
                reports.iter().map(|r| r.outcome.archived()).sum()
            }
            PurgeOutcome::NothingToDo | PurgeOutcome::Cancelled => 0,
        }
    }
}

/// Confirm with the user, then archive every page of every target.
///
/// Returns an error only if the prompt itself fails; remote failures are
/// reported per target.
pub async fn run_purge<W, P, O>(
    workspace: &W,
    plan: &PurgePlan,
    prompt: &mut P,
    settings: ArchiveSettings,
    observer: &mut O,
) -> io::Result<PurgeOutcome>
where
    W: Workspace + ?Sized,
    P: Prompt + ?Sized,
    O: ArchiveObserver + ?Sized,
{
    if plan.is_empty() {
        return Ok(PurgeOutcome::NothingToDo);
    }

    let answer = prompt.ask(plan)?;
    if !is_confirmed(&answer) {
        info!("Purge cancelled at confirmation prompt");
        return Ok(PurgeOutcome::Cancelled);
    }

    let archiver = Archiver::new(workspace).with_settings(settings);
    let mut reports = Vec::with_capacity(plan.targets().len());
    for target in plan.targets() {
        let outcome = match target.database() {
            Ok(database) => {
                archiver
                    .archive_all_observed(&database, &target.label, &mut *observer)
                    .await
            }
            Err(error) => {
                warn!(label = %target.label, %error, "Skipping database");
                let outcome = ArchiveOutcome::Interrupted { archived: 0, error };
                observer.started(&target.label, &target.id);
                observer.finished(&target.label, &outcome);
                outcome
            }
        };
        reports.push(TargetReport {
            target: target.clone(),
            outcome,
        });
    }

    Ok(PurgeOutcome::Completed(reports))
}
