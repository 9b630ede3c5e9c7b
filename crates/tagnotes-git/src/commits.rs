//! Commit history operations

use chrono::{DateTime, TimeZone, Utc};
use git2::Sort;
use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use crate::source::CommitSource;
use crate::types::CommitRecord;

impl GitRepo {
    /// Get the commits reachable from `to` but not from `from`, oldest first
    #[instrument(skip(self))]
    pub fn commits_between(&self, from: &str, to: &str) -> Result<Vec<CommitRecord>> {
        let from_commit = self.resolve_commit(from)?;
        let to_commit = self.resolve_commit(to)?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)?;
        revwalk.push(to_commit.id())?;
        revwalk.hide(from_commit.id())?;

        let mut commits = Vec::new();

        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(commit_to_record(&commit));
        }

        debug!(count = commits.len(), "collected commits between revisions");
        Ok(commits)
    }
}

#[async_trait::async_trait(?Send)]
impl CommitSource for GitRepo {
    fn name(&self) -> &str {
        "git"
    }

    async fn compare(&self, from: &str, to: &str) -> tagnotes_core::Result<Vec<CommitRecord>> {
        Ok(self.commits_between(from, to)?)
    }
}

/// Convert a git2 Commit to CommitRecord
fn commit_to_record(commit: &git2::Commit<'_>) -> CommitRecord {
    let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();

    let mut record = CommitRecord::new(commit.id().to_string(), message);
    if let Some(timestamp) = commit_timestamp(commit.time().seconds()) {
        record = record.with_timestamp(timestamp);
    }

    match commit.author().name() {
        Some(name) => record.with_author(name),
        None => record,
    }
}

/// Commit time as UTC, if git recorded a representable value
fn commit_timestamp(seconds: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(seconds, 0).single()
}
