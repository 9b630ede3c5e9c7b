//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "tagnotes.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "tagnotes.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".tagnotes.toml",
        ".tagnotes.yaml",
    ]
}

pub const DEFAULT_REPOSITORY: &str = "ruby/ruby";

pub const DEFAULT_TRACKER_URL: &str = "https://bugs.ruby-lang.org/issues/";

pub const DEFAULT_TRACKER_LABELS: &[&str] = &["Backport", "Feature", "Bug"];

pub const DEFAULT_TRACKER_TITLE_SUFFIX: &str = " - Ruby master - Ruby Issue Tracking System";

pub const DEFAULT_WEB_URL: &str = "https://github.com";

pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

pub const DEFAULT_USER_AGENT: &str = concat!("tagnotes/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_HEADER: &str = "## What's Changed";

pub const DEFAULT_ATTRIBUTION: &str = "Note: This list is automatically generated by tagnotes. \
Because of this, some commits may be missing.";
