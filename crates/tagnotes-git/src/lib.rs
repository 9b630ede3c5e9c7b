//! tagnotes Git - Commit sources for release note generation
//!
//! This crate defines the [`CommitSource`] seam through which the notes
//! pipeline receives the commits between two revision markers, and a local
//! implementation backed by a git2 repository.

mod commits;
mod repository;
mod source;
pub mod types;

pub use repository::{GitRepo, Result};
pub use source::CommitSource;
pub use types::CommitRecord;
