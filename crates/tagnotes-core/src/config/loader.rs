//! Locating and reading the config file

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::Config;
use super::validation::validate_config;

/// Read, parse and validate a config file. `.toml` files are read as TOML,
/// anything else as YAML.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    let config: Config = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(ConfigError::TomlError)?,
        _ => serde_yaml::from_str(&content).map_err(ConfigError::YamlError)?,
    };

    validate_config(&config)?;
    info!(path = %path.display(), repository = %config.repository, "loaded config");
    Ok(config)
}

/// Nearest config file at or above `start_dir`.
///
/// Each directory is checked for `<name>` then `.github/<name>`, for every
/// candidate name in order, before moving to its parent.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let found = start_dir.ancestors().find_map(|dir| {
        config_file_names().into_iter().find_map(|name| {
            [dir.join(name), dir.join(".github").join(name)]
                .into_iter()
                .find(|candidate| candidate.is_file())
        })
    });

    debug!(start_dir = %start_dir.display(), found = ?found, "config search finished");
    found
}

/// Load the nearest config file, or fall back to the built-in defaults when
/// there is none. A file that exists but is invalid is still an error.
pub fn load_config_or_default(dir: &Path) -> Result<(Config, Option<PathBuf>)> {
    let Some(path) = find_config(dir) else {
        info!(dir = %dir.display(), "no config found, using defaults");
        return Ok((Config::default(), None));
    };

    let config = load_config(&path)?;
    Ok((config, Some(path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("tagnotes.toml");
        std::fs::write(&config_path, "repository = \"owner/repo\"").unwrap();

        let found = find_config(temp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_prefers_toml_over_yaml() {
        let temp = TempDir::new().unwrap();
        let toml_path = temp.path().join("tagnotes.toml");
        let yaml_path = temp.path().join("tagnotes.yaml");
        std::fs::write(&toml_path, "repository = \"owner/repo\"").unwrap();
        std::fs::write(&yaml_path, "repository: owner/other").unwrap();

        let found = find_config(temp.path()).unwrap();
        assert_eq!(found, toml_path);
    }

    #[test]
    fn test_find_config_in_github_dir() {
        let temp = TempDir::new().unwrap();
        let github_dir = temp.path().join(".github");
        std::fs::create_dir_all(&github_dir).unwrap();
        let config_path = github_dir.join("tagnotes.toml");
        std::fs::write(&config_path, "repository = \"owner/repo\"").unwrap();

        assert_eq!(find_config(temp.path()), Some(config_path));
    }

    #[test]
    fn test_find_config_walks_parents() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("tagnotes.toml");
        std::fs::write(&config_path, "repository = \"owner/repo\"").unwrap();
        let nested = temp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_config(&nested), Some(config_path));
    }

    #[test]
    fn test_load_config_yaml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("tagnotes.yaml");
        std::fs::write(
            &config_path,
            "repository: rust-lang/cargo\nnotes:\n  concurrency: 8\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.repository, "rust-lang/cargo");
        assert_eq!(config.notes.concurrency, 8);
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("tagnotes.toml");
        std::fs::write(&config_path, "repository = \"no-slash\"").unwrap();

        assert!(load_config(&config_path).is_err());
    }

    #[test]
    fn test_load_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        let (config, path) = load_config_or_default(temp.path()).unwrap();
        assert!(path.is_none());
        assert_eq!(config.repository, "ruby/ruby");
    }

    #[test]
    fn test_load_or_default_rejects_invalid_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".tagnotes.yaml"), "notes:\n  concurrency: 0\n").unwrap();

        let err = load_config_or_default(temp.path()).unwrap_err();
        assert!(err.to_string().contains("notes.concurrency"));
    }

    #[test]
    fn test_nearest_config_wins() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("tagnotes.toml"), "repository = \"outer/repo\"").unwrap();
        let nested = temp.path().join("inner");
        std::fs::create_dir_all(nested.join(".github")).unwrap();
        let inner_path = nested.join(".github").join("tagnotes.yaml");
        std::fs::write(&inner_path, "repository: inner/repo\n").unwrap();

        let (config, path) = load_config_or_default(&nested).unwrap();
        assert_eq!(path, Some(inner_path));
        assert_eq!(config.repository, "inner/repo");
    }
}
