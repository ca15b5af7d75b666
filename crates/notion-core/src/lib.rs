//! notion-core - Core types, traits and the bulk archiver.
//!
//! The remote service is reached only through the [`Workspace`] trait, so the
//! archiver and the purge driver can run against any backend.
//!
//! # Example
//!
//! ```no_run
//! use notion_core::{Archiver, DatabaseId, Workspace};
//!
//! # async fn example(workspace: &impl Workspace) -> Result<(), notion_core::Error> {
//! let database = DatabaseId::new("8a1c2f0e9b7d4e6f8a1c2f0e9b7d4e6f")?;
//! let outcome = Archiver::new(workspace).archive_all(&database, "Activities").await;
//!
//! println!("archived {} pages", outcome.archived());
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod error;
pub mod purge;
pub mod query;
pub mod stream;
pub mod traits;
pub mod types;

#[cfg(test)]
mod testing;

pub use archive::{ArchiveObserver, ArchiveOutcome, ArchiveSettings, Archiver, NoopObserver};
pub use error::Error;
pub use purge::{Prompt, PurgeOutcome, PurgePlan, Target, TargetReport, is_confirmed, run_purge};
pub use query::{Page, QueryOutput};
pub use stream::pages;
pub use traits::Workspace;
pub use types::{ApiUrl, Cursor, DatabaseId, IntegrationToken, PageId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
