//! Core traits for remote workspace behavior.

mod workspace;

pub use workspace::Workspace;
