//! Commit message classification

mod pull_request;
mod registry;
mod tracker;

pub use pull_request::PullRequestParser;
pub use registry::ParserRegistry;
pub use tracker::TrackerParser;

use crate::types::Reference;

/// Trait for commit message grammars
pub trait ReferenceParser: Send + Sync {
    /// Name of the grammar, used in logs
    fn name(&self) -> &'static str;

    /// Extract the reference a commit message points at
    fn parse(&self, message: &str) -> Option<Reference>;
}
