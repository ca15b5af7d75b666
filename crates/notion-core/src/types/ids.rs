//! Database and page identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Checks an opaque identifier and returns its trimmed form.
///
/// Identifiers are otherwise opaque, but they end up in a URL path segment.
fn validate(s: &str) -> Result<&str, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("must not be empty".to_string());
    }
    if let Some(c) = s
        .chars()
        .find(|&c| c.is_whitespace() || matches!(c, '/' | '?' | '#'))
    {
        return Err(format!("contains forbidden character {:?}", c));
    }
    Ok(s)
}

/// Identifier of a remote database (a collection of pages).
///
/// # Example
///
/// ```
/// use notion_core::DatabaseId;
///
/// let id = DatabaseId::new(" 8a1c2f0e9b7d4e6f8a1c2f0e9b7d4e6f\n").unwrap();
/// assert_eq!(id.as_str(), "8a1c2f0e9b7d4e6f8a1c2f0e9b7d4e6f");
/// assert!(DatabaseId::new("a/b").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DatabaseId(String);

impl DatabaseId {
    /// Create a database id, rejecting values that cannot be a path segment.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let raw = s.as_ref();
        let id = validate(raw).map_err(|reason| InvalidInputError::DatabaseId {
            value: raw.to_string(),
            reason,
        })?;
        Ok(Self(id.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a single page (entry) inside a database.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    /// Create a page id, rejecting values that cannot be a path segment.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let raw = s.as_ref();
        let id = validate(raw).map_err(|reason| InvalidInputError::PageId {
            value: raw.to_string(),
            reason,
        })?;
        Ok(Self(id.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatabaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DatabaseId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl FromStr for PageId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for DatabaseId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DatabaseId::new(&s).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for PageId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PageId::new(&s).map_err(serde::de::Error::custom)
    }
}
