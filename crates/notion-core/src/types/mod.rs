//! Core identifier and credential types.
//!
//! These types are validated at construction time, so anything that reaches
//! a URL path or an authorization header is already known to be well formed.

mod api_url;
mod cursor;
mod ids;
mod token;

pub use api_url::ApiUrl;
pub use cursor::Cursor;
pub use ids::{DatabaseId, PageId};
pub use token::IntegrationToken;
