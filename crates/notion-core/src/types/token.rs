//! Integration token.

use std::fmt;

use crate::error::{Error, InvalidInputError};

/// Secret integration token used as the bearer credential.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone)]
pub struct IntegrationToken(String);

impl IntegrationToken {
    /// Create a token, checking it can be sent in an HTTP header.
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        let token: String = token.into();
        let token = token.trim();
        if token.is_empty() {
            return Err(InvalidInputError::Token {
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        if !token.chars().all(|c| c.is_ascii_graphic()) {
            return Err(InvalidInputError::Token {
                reason: "must contain only visible ASCII characters".to_string(),
            }
            .into());
        }
        Ok(Self(token.to_string()))
    }

    /// Returns the token value for use in authorization headers.
    ///
    /// # Security
    ///
    /// Use only when constructing HTTP authorization headers.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for IntegrationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntegrationToken")
            .field(&"[REDACTED]")
            .finish()
    }
}
