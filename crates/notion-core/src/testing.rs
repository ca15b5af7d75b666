//! In-memory workspace used by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::Result;
use crate::error::ApiError;
use crate::query::{Page, QueryOutput};
use crate::traits::Workspace;
use crate::types::{Cursor, DatabaseId, PageId};

/// A remote call observed by [`MemoryWorkspace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Query {
        database: String,
        cursor: Option<String>,
        page_size: u32,
    },
    Archive {
        page: String,
    },
}

/// Databases held in memory. Cursors are offsets into each database's
/// page list, so batches stay stable while pages are being archived.
#[derive(Default)]
pub(crate) struct MemoryWorkspace {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    databases: HashMap<String, Vec<Page>>,
    calls: Vec<Call>,
    failing_queries: HashMap<String, usize>,
    queries_seen: HashMap<String, usize>,
    failing_pages: Vec<String>,
}

impl MemoryWorkspace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a database holding `count` live pages named `{id}-p{n}`.
    pub(crate) fn with_database(self, id: &str, count: usize) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let pages = (0..count)
                .map(|n| Page::new(PageId::new(format!("{id}-p{n}")).unwrap()))
                .collect();
            state.databases.insert(id.to_string(), pages);
        }
        self
    }

    /// Make the `nth` (zero-based) query against `id` fail with a 429.
    pub(crate) fn fail_query(self, id: &str, nth: usize) -> Self {
        self.state
            .lock()
            .unwrap()
            .failing_queries
            .insert(id.to_string(), nth);
        self
    }

    /// Make archiving `page` fail with a 409.
    pub(crate) fn fail_archive(self, page: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .failing_pages
            .push(page.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Page ids passed to `archive_page`, in call order.
    pub(crate) fn archive_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Archive { page } => Some(page),
                Call::Query { .. } => None,
            })
            .collect()
    }

    /// Number of queries issued against `id`.
    pub(crate) fn queries(&self, id: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Query { database, .. } if database == id))
            .count()
    }

    /// Number of archived pages in `id`.
    pub(crate) fn archived(&self, id: &str) -> usize {
        let state = self.state.lock().unwrap();
        state
            .databases
            .get(id)
            .map(|pages| pages.iter().filter(|p| p.archived).count())
            .unwrap_or(0)
    }
}

#[async_trait]
impl Workspace for MemoryWorkspace {
    async fn query_database(
        &self,
        database: &DatabaseId,
        cursor: Option<&Cursor>,
        page_size: u32,
    ) -> Result<QueryOutput> {
        let mut state = self.state.lock().unwrap();
        let id = database.as_str().to_string();
        state.calls.push(Call::Query {
            database: id.clone(),
            cursor: cursor.map(|c| c.as_str().to_string()),
            page_size,
        });

        let seen = state.queries_seen.entry(id.clone()).or_insert(0);
        let index = *seen;
        *seen += 1;
        if state.failing_queries.get(&id) == Some(&index) {
            return Err(ApiError::new(
                429,
                Some("rate_limited".to_string()),
                Some("slow down".to_string()),
            )
            .into());
        }

        let pages = state
            .databases
            .get(&id)
            .ok_or_else(|| ApiError::new(404, Some("object_not_found".to_string()), None))?;

        let start = cursor
            .map(|c| c.as_str().parse::<usize>().unwrap())
            .unwrap_or(0);
        let end = (start + page_size as usize).min(pages.len());
        let has_more = end < pages.len();

        Ok(QueryOutput {
            pages: pages[start..end].to_vec(),
            has_more,
            next_cursor: has_more.then(|| Cursor::new(end.to_string())),
        })
    }

    async fn archive_page(&self, page: &PageId) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Archive {
            page: page.as_str().to_string(),
        });

        if state.failing_pages.iter().any(|p| p == page.as_str()) {
            return Err(ApiError::new(409, Some("conflict_error".to_string()), None).into());
        }

        let entry = state
            .databases
            .values_mut()
            .flat_map(|pages| pages.iter_mut())
            .find(|p| &p.id == page)
            .ok_or_else(|| ApiError::new(404, Some("object_not_found".to_string()), None))?;
        entry.archived = true;
        Ok(())
    }
}
