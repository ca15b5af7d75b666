//! Streaming access to every page of a database.

use async_stream::try_stream;
use futures_core::Stream;
use tracing::debug;

use crate::Result;
use crate::archive::ArchiveSettings;
use crate::query::Page;
use crate::traits::Workspace;
use crate::types::{Cursor, DatabaseId};

/// Stream every page of `database`, following cursors across batches.
///
/// Queries are paced like the archiver's. The stream ends after the first
/// error.
///
/// # Example
///
/// ```no_run
/// use futures_util::TryStreamExt;
/// use notion_core::{ArchiveSettings, DatabaseId, Workspace, pages};
///
/// # async fn example(workspace: &impl Workspace) -> Result<(), notion_core::Error> {
/// let database = DatabaseId::new("db1")?;
/// let all: Vec<_> = pages(workspace, &database, ArchiveSettings::default())
///     .try_collect()
///     .await?;
/// println!("{} pages", all.len());
/// # Ok(())
/// # }
/// ```
pub fn pages<'a, W>(
    workspace: &'a W,
    database: &'a DatabaseId,
    settings: ArchiveSettings,
) -> impl Stream<Item = Result<Page>> + Send + 'a
where
    W: Workspace + ?Sized,
{
    try_stream! {
        let mut cursor: Option<Cursor> = None;

        loop {
            let output = workspace
                .query_database(database, cursor.as_ref(), settings.page_size())
                .await?;
            if output.pages.is_empty() {
                break;
            }

            let next = output.continuation()?.cloned();
            debug!(batch = output.pages.len(), "Fetched batch");
            for page in output.pages {
                yield page;
            }

            match next {
                Some(next) => cursor = Some(next),
                None => break,
            }
            tokio::time::sleep(settings.pause()).await;
        }
    }
}
