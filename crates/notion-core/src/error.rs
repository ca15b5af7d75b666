//! Error types for notion-core.
//!
//! One error type with explicit variants for transport, API, response shape
//! and input validation failures.

use std::fmt;
use thiserror::Error;

/// The unified error type for workspace operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, body decoding).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The API answered with a non-success status.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The API answered successfully but the reply contradicts itself.
    #[error("unexpected response: {reason}")]
    UnexpectedResponse { reason: String },

    /// Input validation errors (identifiers, tokens, URLs).
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns true if the error came from the API rejecting our credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Api(e) if e.is_auth_error())
    }

    /// Returns true if the error is a rate-limit rejection.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::Api(e) if e.is_rate_limited())
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Response body could not be decoded.
    #[error("could not decode response: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Error reported by the API for a non-success response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Machine-readable error code (e.g. `rate_limited`), if present.
    pub code: Option<String>,
    /// Human-readable message from the server.
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, code: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    /// Check if the credential was rejected or lacks access.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
            || self.code.as_deref() == Some("unauthorized")
            || self.code.as_deref() == Some("restricted_resource")
    }

    /// Check if the request was throttled.
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429 || self.code.as_deref() == Some("rate_limited")
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid database identifier.
    #[error("invalid database id '{value}': {reason}")]
    DatabaseId { value: String, reason: String },

    /// Invalid page identifier.
    #[error("invalid page id '{value}': {reason}")]
    PageId { value: String, reason: String },

    /// Invalid integration token. The value itself is never echoed.
    #[error("invalid integration token: {reason}")]
    Token { reason: String },

    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid page size.
    #[error("invalid page size {value}: must be between 1 and {max}")]
    PageSize { value: u32, max: u32 },
}
