//! Pull request parenthetical grammar
//!
//! Matches the `(#1234)` suffix that squash merges append to the subject.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::ReferenceParser;
use crate::types::{Reference, ReferenceKind};

static PULL_REQUEST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(#(?P<id>\d+)\)").expect("Invalid regex"));

/// Parser for pull request references
pub struct PullRequestParser {
    repository_url: String,
}

impl PullRequestParser {
    /// Create a parser for the repository at `repository_url`
    pub fn new(repository_url: impl Into<String>) -> Self {
        Self {
            repository_url: repository_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl ReferenceParser for PullRequestParser {
    fn name(&self) -> &'static str {
        "pull_request"
    }

    fn parse(&self, message: &str) -> Option<Reference> {
        let id = PULL_REQUEST_REGEX.captures(message)?.name("id")?.as_str();
        debug!(id, "matched pull request reference");

        Some(Reference::new(
            ReferenceKind::PullRequest,
            id,
            format!("{}/pull/{}", self.repository_url, id),
        ))
    }
}
