//! Bulk archiving of every page in a database.
//!
//! The [`Archiver`] walks a database batch by batch, archives each page it
//! sees, and pauses between batches to stay under the service's rate limit.
//! A failed fetch or archive stops the run for that database; the pages
//! archived so far stay archived and are reported in the [`ArchiveOutcome`].

use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::error::{Error, InvalidInputError};
use crate::traits::Workspace;
use crate::types::{Cursor, DatabaseId};

/// Largest batch the service returns per query.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Pause between consecutive queries.
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(500);

/// A progress notification is emitted every this many archived pages.
pub const PROGRESS_INTERVAL: u64 = 10;

/// Batch size and pacing for walking a database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveSettings {
    page_size: u32,
    pause: Duration,
}

impl ArchiveSettings {
    /// Create settings, checking the batch size is one the service accepts.
    pub fn new(page_size: u32, pause: Duration) -> Result<Self, Error> {
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(InvalidInputError::PageSize {
                value: page_size,
                max: MAX_PAGE_SIZE,
            }
            .into());
        }
        Ok(Self { page_size, pause })
    }

    /// Entries requested per query.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Delay before each follow-up query.
    pub fn pause(&self) -> Duration {
        self.pause
    }
}

impl Default for ArchiveSettings {
    fn default() -> Self {
        Self {
            page_size: MAX_PAGE_SIZE,
            pause: DEFAULT_PAUSE,
        }
    }
}

/// Receives progress from an archive run.
///
/// All methods default to doing nothing.
pub trait ArchiveObserver {
    /// Called once before the first query.
    fn started(&mut self, _label: &str, _database: &str) {}

    /// Called every [`PROGRESS_INTERVAL`] archived pages with the running total.
    fn progress(&mut self, _label: &str, _archived: u64) {}

    /// Called once when the run stops, successfully or not.
    fn finished(&mut self, _label: &str, _outcome: &ArchiveOutcome) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ArchiveObserver for NoopObserver {}

/// How an archive run ended.
#[derive(Debug)]
pub enum ArchiveOutcome {
    /// The database reported no further pages.
    Drained {
        /// Pages archived during the run.
        archived: u64,
    },

    /// A fetch or archive call failed and the run stopped early.
    Interrupted {
        /// Pages archived before the failure.
        archived: u64,
        /// The failure that stopped the run.
        error: Error,
    },
}

impl ArchiveOutcome {
    /// Number of pages archived, whether or not the run completed.
    pub fn archived(&self) -> u64 {
        match self {
            ArchiveOutcome::Drained { archived } => *archived,
            ArchiveOutcome::Interrupted { archived, .. } => *archived,
        }
    }

    /// The error that stopped the run, if any.
    pub fn error(&self) -> Option<&Error> {
        match self {
            ArchiveOutcome::Drained { .. } => None,
            ArchiveOutcome::Interrupted { error, .. } => Some(error),
        }
    }

    /// Returns true if the database was walked to the end.
    pub fn is_drained(&self) -> bool {
        matches!(self, ArchiveOutcome::Drained { .. })
    }
}

/// Archives every page of a database through a [`Workspace`].
#[derive(Debug)]
pub struct Archiver<'a, W: ?Sized> {
    workspace: &'a W,
    settings: ArchiveSettings,
}

impl<'a, W: Workspace + ?Sized> Archiver<'a, W> {
    /// Create an archiver with the default batch size and pause.
    pub fn new(workspace: &'a W) -> Self {
        Self {
            workspace,
            settings: ArchiveSettings::default(),
        }
    }

    /// Replace the batch size and pause.
    pub fn with_settings(mut self, settings: ArchiveSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Archive every page of `database`, returning how far the run got.
    pub async fn archive_all(&self, database: &DatabaseId, label: &str) -> ArchiveOutcome {
        self.archive_all_observed(database, label, &mut NoopObserver)
            .await
    }

    /// Like [`archive_all`](Self::archive_all), reporting progress to `observer`.
    #[instrument(skip(self, observer), fields(%database))]
    pub async fn archive_all_observed<O>(
        &self,
        database: &DatabaseId,
        label: &str,
        observer: &mut O,
    ) -> ArchiveOutcome
    where
        O: ArchiveObserver + ?Sized,
    {
        observer.started(label, database.as_str());

        let mut archived = 0;
        let outcome = match self.drain(database, label, &mut archived, &mut *observer).await {
            Ok(()) => {
                info!(archived, "Database drained");
                ArchiveOutcome::Drained { archived }
            }
            Err(error) => {
                warn!(archived, %error, "Archive run interrupted");
                ArchiveOutcome::Interrupted { archived, error }
            }
        };

        observer.finished(label, &outcome);
        outcome
    }

    async fn drain<O>(
        &self,
        database: &DatabaseId,
        label: &str,
        archived: &mut u64,
        observer: &mut O,
    ) -> Result<(), Error>
    where
        O: ArchiveObserver + ?Sized,
    {
        let mut cursor: Option<Cursor> = None;

        loop {
            let output = self
                .workspace
                .query_database(database, cursor.as_ref(), self.settings.page_size)
                .await?;

            // Redundant with has_more, but an empty batch always means done.
            if output.pages.is_empty() {
                debug!("Empty batch, stopping");
                return Ok(());
            }

            debug!(batch = output.pages.len(), has_more = output.has_more, "Archiving batch");
            for page in &output.pages {
                self.workspace.archive_page(&page.id).await?;
                *archived += 1;
                if *archived % PROGRESS_INTERVAL == 0 {
                    observer.progress(label, *archived);
                }
            }

            match output.continuation()? {
                Some(next) => cursor = Some(next.clone()),
                None => return Ok(()),
            }

            tokio::time::sleep(self.settings.pause).await;
        }
    }
}
