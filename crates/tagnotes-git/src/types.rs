//! Git types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A commit between two revision markers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Commit hash (full)
    pub sha: String,
    /// Full commit message, subject and body
    pub message: String,
    /// Author name, when the source reports it
    pub author: Option<String>,
    /// Commit timestamp, when the source reports it
    pub timestamp: Option<DateTime<Utc>>,
}

impl CommitRecord {
    /// Create a new CommitRecord
    pub fn new(sha: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sha: sha.into(),
            message: message.into(),
            author: None,
            timestamp: None,
        }
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the timestamp
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// First seven characters of the hash
    pub fn short_sha(&self) -> &str {
        let end = self
            .sha
            .char_indices()
            .nth(7)
            .map_or(self.sha.len(), |(i, _)| i);
        &self.sha[..end]
    }

    /// First line of the message
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_record() {
        let commit = CommitRecord::new("abc1234567890", "Fix parser\n\n[Bug #1]")
            .with_author("Author");
        assert_eq!(commit.short_sha(), "abc1234");
        assert_eq!(commit.subject(), "Fix parser");
        assert_eq!(commit.author.as_deref(), Some("Author"));
    }

    #[test]
    fn test_short_sha_of_short_hash() {
        assert_eq!(CommitRecord::new("abc", "msg").short_sha(), "abc");
    }
}
