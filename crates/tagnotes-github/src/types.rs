//! GitHub REST API payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tagnotes_git::CommitRecord;

/// Response of `GET /repos/{owner}/{repo}/compare/{base}...{head}`
#[derive(Debug, Deserialize)]
pub struct CompareResponse {
    /// Commits in the whole range, across all pages
    pub total_commits: usize,
    /// Commits on this page, oldest first
    #[serde(default)]
    pub commits: Vec<ApiCommit>,
}

/// A commit entry in a compare response
#[derive(Debug, Deserialize)]
pub struct ApiCommit {
    pub sha: String,
    pub commit: ApiCommitDetail,
}

/// Git-level commit data
#[derive(Debug, Deserialize)]
pub struct ApiCommitDetail {
    pub message: String,
    pub author: Option<ApiSignature>,
}

/// Commit author signature
#[derive(Debug, Deserialize)]
pub struct ApiSignature {
    pub name: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl From<ApiCommit> for CommitRecord {
    fn from(api: ApiCommit) -> Self {
        let mut record = CommitRecord::new(api.sha, api.commit.message);
        if let Some(author) = api.commit.author {
            record.author = author.name;
            record.timestamp = author.date;
        }
        record
    }
}

/// Body of `POST /repos/{owner}/{repo}/releases`
#[derive(Debug, Serialize)]
pub struct CreateReleaseRequest<'a> {
    pub tag_name: &'a str,
    pub name: &'a str,
    pub body: &'a str,
}

/// A created release
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub id: u64,
    pub html_url: String,
    pub tag_name: String,
    pub name: Option<String>,
}

/// Error body returned by the API
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}
