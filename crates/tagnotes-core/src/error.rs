//! Error types for tagnotes

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using TagnotesError
pub type Result<T> = std::result::Result<T, TagnotesError>;

/// Main error type for tagnotes operations
#[derive(Debug, Error)]
pub enum TagnotesError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Local git errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Remote hosting platform errors
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// Revision marker could not be resolved to a commit
    #[error("Unknown revision: {0}")]
    UnknownRevision(String),

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Errors talking to the remote hosting platform
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Repository identifier is not `owner/repo`
    #[error("Invalid repository identifier: {0}")]
    InvalidRepository(String),

    /// Non-success response from the API
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Unexpected response from {url}: {message}")]
    Decode { url: String, message: String },

    /// Transport-level HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = TagnotesError::from(RemoteError::ApiError {
            status: 401,
            message: "Bad credentials".to_string(),
        });
        assert_eq!(err.to_string(), "API error: 401 - Bad credentials");
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            field: "repository".to_string(),
            message: "must be owner/repo".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration: repository - must be owner/repo"
        );
    }
}
