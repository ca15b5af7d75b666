//! HTTP-backed workspace implementation.

use async_trait::async_trait;
use tracing::{debug, instrument};

use notion_core::{
    ApiUrl, Cursor, DatabaseId, Error, IntegrationToken, PageId, QueryOutput, Result, Workspace,
};

use crate::client::NotionClient;
use crate::endpoints::{self, PageObject, QueryDatabaseRequest, QueryDatabaseResponse, UpdatePageRequest};

/// A [`Workspace`] that talks to the Notion REST API.
#[derive(Debug, Clone)]
pub struct HttpWorkspace {
    client: NotionClient,
}

impl HttpWorkspace {
    /// Create a workspace for the API at `api`, authenticated with `token`.
    pub fn new(api: ApiUrl, token: &IntegrationToken) -> Result<Self> {
        Ok(Self {
            client: NotionClient::new(api, token)?,
        })
    }

    /// Returns the underlying HTTP client.
    pub fn client(&self) -> &NotionClient {
        &self.client
    }
}

#[async_trait]
impl Workspace for HttpWorkspace {
    #[instrument(skip(self), fields(%database))]
    async fn query_database(
        &self,
        database: &DatabaseId,
        cursor: Option<&Cursor>,
        page_size: u32,
    ) -> Result<QueryOutput> {
        debug!("Querying database");

        let request = QueryDatabaseRequest {
            start_cursor: cursor.map(Cursor::as_str),
            page_size,
        };

        let response: QueryDatabaseResponse = self
            .client
            .post(&endpoints::query_database(database), &request)
            .await?;

        let pages = response
            .results
            .into_iter()
            .map(PageObject::into_page)
            .collect::<Result<Vec<_>>>()?;

        Ok(QueryOutput {
            pages,
            has_more: response.has_more,
            next_cursor: response.next_cursor.map(Cursor::new),
        })
    }

    #[instrument(skip(self), fields(%page))]
    async fn archive_page(&self, page: &PageId) -> Result<()> {
        debug!("Archiving page");

        let response: PageObject = self
            .client
            .patch(&endpoints::page(page), &UpdatePageRequest { archived: true })
            .await?;

        if !response.archived {
            return Err(Error::UnexpectedResponse {
                reason: format!("page {} was not archived", page),
            });
        }
        Ok(())
    }
}
