//! Commit source trait

use tagnotes_core::Result;

use crate::types::CommitRecord;

/// Provider of the commits between two revision markers.
///
/// Implementations return commits oldest first, matching the order the
/// release notes are written in. Futures are not required to be `Send`
/// because git2 repositories cannot be shared across threads.
#[async_trait::async_trait(?Send)]
pub trait CommitSource {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Commits reachable from `to` but not from `from`
    async fn compare(&self, from: &str, to: &str) -> Result<Vec<CommitRecord>>;
}
