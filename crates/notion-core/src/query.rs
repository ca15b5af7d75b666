//! Database query types.

use chrono::{DateTime, Utc};

use crate::types::{Cursor, PageId};

/// A page (entry) returned by a database query.
///
/// Only the identifier is needed to archive it; the remaining fields are
/// informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// The page identifier.
    pub id: PageId,

    /// Whether the page is already archived.
    pub archived: bool,

    /// When the page was created, if the service reported it.
    pub created_time: Option<DateTime<Utc>>,
}

impl Page {
    /// A live page with no timestamp.
    pub fn new(id: PageId) -> Self {
        Self {
            id,
            archived: false,
            created_time: None,
        }
    }
}

/// One page of results from a database query.
#[derive(Debug, Clone, Default)]
pub struct QueryOutput {
    /// The entries in this batch.
    pub pages: Vec<Page>,

    /// Whether the service holds more entries past this batch.
    pub has_more: bool,

    /// Cursor for the next batch, if more entries exist.
    pub next_cursor: Option<Cursor>,
}

impl QueryOutput {
    /// Returns the cursor for the next fetch, or `None` at the end.
    ///
    /// A reply that claims more entries without supplying a cursor is
    /// rejected, since following it would fetch the first batch again.
    pub fn continuation(&self) -> crate::Result<Option<&Cursor>> {
        match (self.has_more, &self.next_cursor) {
            (false, _) => Ok(None),
            (true, Some(cursor)) => Ok(Some(cursor)),
            (true, None) => Err(crate::Error::UnexpectedResponse {
                reason: "has_more is set but next_cursor is missing".to_string(),
            }),
        }
    }
}
