//! Configuration validation

use tracing::debug;
use url::Url;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_repository(config)?;
    validate_urls(config)?;
    validate_tracker(config)?;
    validate_notes(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.into(),
    }
}

fn validate_repository(config: &Config) -> Result<()> {
    let mut parts = config.repository.split('/');
    let well_formed = matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty()
    );

    if !well_formed {
        return Err(invalid("repository", "must be of the form owner/repo").into());
    }

    Ok(())
}

fn validate_urls(config: &Config) -> Result<()> {
    let urls = [
        ("tracker.issue_url", &config.tracker.issue_url),
        ("github.web_url", &config.github.web_url),
        ("github.api_url", &config.github.api_url),
    ];

    for (field, value) in urls {
        let parsed = Url::parse(value).map_err(|e| invalid(field, e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(field, "must be an http(s) URL").into());
        }
    }

    Ok(())
}

fn validate_tracker(config: &Config) -> Result<()> {
    if config.tracker.labels.is_empty() {
        return Err(invalid("tracker.labels", "at least one label is required").into());
    }

    if let Some(label) = config
        .tracker
        .labels
        .iter()
        .find(|l| l.trim().is_empty() || l.trim() != l.as_str() || l.contains(['[', ']', '#']))
    {
        return Err(invalid(
            "tracker.labels",
            format!(
                "label '{}' must be non-empty, unpadded and free of '[', ']' and '#'",
                label
            ),
        )
        .into());
    }

    Ok(())
}

fn validate_notes(config: &Config) -> Result<()> {
    if config.notes.concurrency == 0 {
        return Err(invalid("notes.concurrency", "must be at least 1").into());
    }

    Ok(())
}
