//! Release note types

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a commit message points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// Ticket on the issue tracker (`[Bug #123]`)
    TrackerIssue,
    /// Pull request on the code host (`(#123)`)
    PullRequest,
}

impl ReferenceKind {
    /// Returns the string representation of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TrackerIssue => "tracker_issue",
            Self::PullRequest => "pull_request",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ticket or pull request referenced by a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Kind of reference
    pub kind: ReferenceKind,
    /// Digits as written in the message, leading zeros included
    pub id: String,
    /// Canonical page for the reference
    pub url: String,
}

impl Reference {
    /// Create a new reference
    pub fn new(kind: ReferenceKind, id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            url: url.into(),
        }
    }
}

/// Outcome of resolving a reference's title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TitleResult {
    /// Title fetched and cleaned
    Resolved { title: String },
    /// Page could not be fetched or had no title
    Failed { attempted_url: String, reason: String },
}

impl TitleResult {
    /// Create a resolved result
    pub fn resolved(title: impl Into<String>) -> Self {
        Self::Resolved {
            title: title.into(),
        }
    }

    /// Create a failed result
    pub fn failed(attempted_url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Failed {
            attempted_url: attempted_url.into(),
            reason: reason.into(),
        }
    }

    /// The cleaned title, if resolution succeeded
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Resolved { title } => Some(title),
            Self::Failed { .. } => None,
        }
    }

    /// Check if resolution failed
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// A single rendered line of the release note
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteEntry {
    /// Markdown list item
    pub rendered_line: String,
}

impl NoteEntry {
    /// Render `* [<title>](<url>)`
    pub fn new(title: &str, url: &str) -> Self {
        Self {
            rendered_line: format!("* [{}]({})", title, url),
        }
    }
}

/// The composed release note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseDocument {
    body: String,
    note_count: usize,
}

impl ReleaseDocument {
    pub(crate) fn new(body: String, note_count: usize) -> Self {
        Self { body, note_count }
    }

    /// Full markdown text
    pub fn as_str(&self) -> &str {
        &self.body
    }

    /// Number of note lines after deduplication
    pub fn note_count(&self) -> usize {
        self.note_count
    }
}

impl fmt::Display for ReleaseDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}
