//! Workspace trait.

use async_trait::async_trait;

use crate::Result;
use crate::query::QueryOutput;
use crate::types::{Cursor, DatabaseId, PageId};

/// Remote access to databases and their pages.
///
/// Calls are issued one at a time by the archiver; implementations need not
/// handle concurrent use of a single database.
#[async_trait]
pub trait Workspace: Send + Sync {
    /// Fetch up to `page_size` entries of a database, starting at `cursor`.
    async fn query_database(
        &self,
        database: &DatabaseId,
        cursor: Option<&Cursor>,
        page_size: u32,
    ) -> Result<QueryOutput>;

    /// Mark a page as archived.
    async fn archive_page(&self, page: &PageId) -> Result<()>;
}

