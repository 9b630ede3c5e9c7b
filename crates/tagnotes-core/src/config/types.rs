//! Configuration types

use serde::{Deserialize, Serialize};

use super::defaults;

/// Main configuration for tagnotes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Repository identifier on the hosting platform (`owner/repo`)
    pub repository: String,

    /// Issue tracker configuration
    pub tracker: TrackerConfig,

    /// GitHub configuration
    pub github: GitHubConfig,

    /// Release note composition
    pub notes: NotesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repository: defaults::DEFAULT_REPOSITORY.to_string(),
            tracker: TrackerConfig::default(),
            github: GitHubConfig::default(),
            notes: NotesConfig::default(),
        }
    }
}

impl Config {
    /// Suffix stripped from pull request page titles.
    ///
    /// Falls back to `" · <owner/repo> · GitHub"` when not configured.
    pub fn pull_title_suffix(&self) -> String {
        self.github
            .pull_title_suffix
            .clone()
            .unwrap_or_else(|| format!(" · {} · GitHub", self.repository))
    }

    /// Web URL of the repository, without a trailing slash
    pub fn repository_url(&self) -> String {
        format!(
            "{}/{}",
            self.github.web_url.trim_end_matches('/'),
            self.repository
        )
    }
}

/// Issue tracker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Base URL the ticket number is appended to
    pub issue_url: String,

    /// Bracket labels recognised in commit messages (`[Bug #123]`)
    pub labels: Vec<String>,

    /// Suffix stripped from tracker page titles
    pub title_suffix: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            issue_url: defaults::DEFAULT_TRACKER_URL.to_string(),
            labels: defaults::DEFAULT_TRACKER_LABELS
                .iter()
                .map(|l| l.to_string())
                .collect(),
            title_suffix: defaults::DEFAULT_TRACKER_TITLE_SUFFIX.to_string(),
        }
    }
}

/// GitHub configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Web URL used for pull request and compare links
    pub web_url: String,

    /// REST API base URL
    pub api_url: String,

    /// Environment variable holding the access token
    pub token_env: String,

    /// User-Agent sent with every request
    pub user_agent: String,

    /// Override for the pull request title suffix
    pub pull_title_suffix: Option<String>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            web_url: defaults::DEFAULT_WEB_URL.to_string(),
            api_url: defaults::DEFAULT_API_URL.to_string(),
            token_env: defaults::DEFAULT_TOKEN_ENV.to_string(),
            user_agent: defaults::DEFAULT_USER_AGENT.to_string(),
            pull_title_suffix: None,
        }
    }
}

impl GitHubConfig {
    /// Read the access token from the configured environment variable
    pub fn token(&self) -> Option<String> {
        std::env::var(&self.token_env)
            .ok()
            .filter(|token| !token.is_empty())
    }
}

/// Release note composition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    /// Heading placed above the note list
    pub header: String,

    /// Sentence placed after the note list
    pub attribution: String,

    /// Number of title fetches allowed in flight
    pub concurrency: usize,

    /// Per-request timeout for title fetches
    pub fetch_timeout_secs: Option<u64>,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            header: defaults::DEFAULT_HEADER.to_string(),
            attribution: defaults::DEFAULT_ATTRIBUTION.to_string(),
            concurrency: 1,
            fetch_timeout_secs: None,
        }
    }
}
