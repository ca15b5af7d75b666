//! Notion HTTP client implementation.

use std::fmt;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use notion_core::error::{ApiError, InvalidInputError, TransportError};
use notion_core::{ApiUrl, Error, IntegrationToken, Result};

use crate::endpoints::ErrorResponse;

/// API version sent with every request.
pub const NOTION_VERSION: &str = "2022-06-28";

const NOTION_VERSION_HEADER: HeaderName = HeaderName::from_static("notion-version");

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Map a reqwest failure onto the transport error variants.
pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else if err.is_decode() {
        TransportError::Decode {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}

/// Authenticated HTTP client for the Notion API.
#[derive(Clone)]
pub struct NotionClient {
    client: reqwest::Client,
    api: ApiUrl,
}

impl NotionClient {
    /// Create a client that sends `token` with every request.
    pub fn new(api: ApiUrl, token: &IntegrationToken) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.expose())).map_err(
            |_| InvalidInputError::Token {
                reason: "cannot be used in an HTTP header".to_string(),
            },
        )?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            NOTION_VERSION_HEADER,
            HeaderValue::from_static(NOTION_VERSION),
        );

        let client = reqwest::Client::builder()
            .user_agent(concat!("notion-clear/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(transport_error)?;

        Ok(Self { client, api })
    }

    /// Returns the API base URL this client is configured for.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// Send a JSON body with POST and decode the JSON reply.
    #[instrument(skip(self, body), fields(api = %self.api))]
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!("POST");
        trace!(?body, "request body");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Send a JSON body with PATCH and decode the JSON reply.
    #[instrument(skip(self, body), fields(api = %self.api))]
    pub async fn patch<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!("PATCH");
        trace!(?body, "request body");

        let response = self
            .client
            .patch(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Decode a successful body, or turn the reply into an [`ApiError`].
    async fn handle_response<R: DeserializeOwned>(&self, response: reqwest::Response) -> Result<R> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            response.json::<R>().await.map_err(transport_error)
        } else {
            Err(Error::Api(self.parse_error_response(response).await))
        }
    }

    async fn parse_error_response(&self, response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        match response.json::<ErrorResponse>().await {
            Ok(body) => ApiError::new(status, body.code, body.message),
            Err(_) => ApiError::new(status, None, None),
        }
    }
}

impl fmt::Debug for NotionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotionClient")
            .field("api", &self.api)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
