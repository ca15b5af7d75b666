//! Notion REST endpoint paths and request/response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use notion_core::{DatabaseId, Page, PageId, Result};

/// `POST /v1/databases/{id}/query`
pub fn query_database(database: &DatabaseId) -> String {
    format!("v1/databases/{}/query", database.as_str())
}

/// `PATCH /v1/pages/{id}`
pub fn page(page: &PageId) -> String {
    format!("v1/pages/{}", page.as_str())
}

/// Request body for a database query.
#[derive(Debug, Serialize)]
pub struct QueryDatabaseRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<&'a str>,
    pub page_size: u32,
}

/// Response from a database query.
#[derive(Debug, Deserialize)]
pub struct QueryDatabaseResponse {
    pub results: Vec<PageObject>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// A page object as returned by queries and page updates.
///
/// Properties are ignored; only identity and lifecycle fields are read.
#[derive(Debug, Deserialize)]
pub struct PageObject {
    pub id: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,
}

impl PageObject {
    pub fn into_page(self) -> Result<Page> {
        Ok(Page {
            id: PageId::new(&self.id)?,
            archived: self.archived,
            created_time: self.created_time,
        })
    }
}

/// Request body for a page update.
#[derive(Debug, Serialize)]
pub struct UpdatePageRequest {
    pub archived: bool,
}

/// Error body returned with non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
