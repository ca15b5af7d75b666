//! notion-http - Workspace implementation backed by the Notion REST API.

mod client;
mod endpoints;
mod workspace;

pub use client::{NOTION_VERSION, NotionClient};
pub use workspace::HttpWorkspace;
