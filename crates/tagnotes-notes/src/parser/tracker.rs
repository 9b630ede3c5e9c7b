//! Issue tracker bracket grammar
//!
//! Matches tags such as `[Bug #18000]` or `[Feature #123]` anywhere in the
//! commit message.

use regex::Regex;
use tracing::debug;

use super::ReferenceParser;
use crate::types::{Reference, ReferenceKind};
use tagnotes_core::config::TrackerConfig;

/// Parser for issue tracker references
pub struct TrackerParser {
    pattern: Regex,
    issue_url: String,
}

impl TrackerParser {
    /// Create a parser for the given labels and tracker base URL
    pub fn new<S: AsRef<str>>(labels: &[S], issue_url: impl Into<String>) -> Self {
        let alternatives = labels
            .iter()
            .map(|l| regex::escape(l.as_ref()))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = Regex::new(&format!(r"\[(?:{}) #(?P<id>\d+)\]", alternatives))
            .expect("escaped labels form a valid regex");

        Self {
            pattern,
            issue_url: issue_url.into(),
        }
    }

    /// Create a parser from tracker configuration
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self::new(&config.labels, config.issue_url.clone())
    }
}

impl ReferenceParser for TrackerParser {
    fn name(&self) -> &'static str {
        "tracker"
    }

    fn parse(&self, message: &str) -> Option<Reference> {
        let id = self.pattern.captures(message)?.name("id")?.as_str();
        debug!(id, "matched tracker reference");

        Some(Reference::new(
            ReferenceKind::TrackerIssue,
            id,
            format!("{}{}", self.issue_url, id),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> TrackerParser {
        TrackerParser::from_config(&TrackerConfig::default())
    }

    #[test]
    fn test_parse_bug() {
        let reference = parser().parse("Fix crash [Bug #100]").unwrap();
        assert_eq!(reference.kind, ReferenceKind::TrackerIssue);
        assert_eq!(reference.id, "100");
        assert_eq!(reference.url, "https://bugs.ruby-lang.org/issues/100");
    }

    #[test]
    fn test_parse_each_label() {
        for label in ["Backport", "Feature", "Bug"] {
            let message = format!("Subject\n\n[{} #7]", label);
            assert_eq!(parser().parse(&message).unwrap().id, "7");
        }
    }

    #[test]
    fn test_unknown_label_ignored() {
        assert!(parser().parse("[Misc #12]").is_none());
        assert!(parser().parse("[bug #12]").is_none());
    }

    #[test]
    fn test_requires_digits() {
        assert!(parser().parse("[Bug #]").is_none());
        assert!(parser().parse("[Bug 12]").is_none());
    }

    #[test]
    fn test_first_tag_wins() {
        let reference = parser().parse("[Bug #1] [Feature #2]").unwrap();
        assert_eq!(reference.id, "1");
    }

    #[test]
    fn test_ids_pass_through_unvalidated() {
        assert_eq!(parser().parse("[Bug #007]").unwrap().id, "007");

        let huge = "123456789012345678901234567890";
        let reference = parser().parse(&format!("[Bug #{}]", huge)).unwrap();
        assert_eq!(reference.id, huge);
    }

    #[test]
    fn test_custom_labels_are_escaped() {
        let parser = TrackerParser::new(&["C++"], "https://tracker.example/t/");
        let reference = parser.parse("[C++ #5]").unwrap();
        assert_eq!(reference.url, "https://tracker.example/t/5");
        assert!(parser.parse("[CC #5]").is_none());
    }

    #[test]
    fn test_configured_labels_with_regex_metacharacters() {
        let config = TrackerConfig {
            labels: vec!["C++".to_string(), "Bug|Feature".to_string()],
            ..TrackerConfig::default()
        };
        let parser = TrackerParser::from_config(&config);

        assert_eq!(parser.parse("[Bug|Feature #9]").unwrap().id, "9");
        assert_eq!(parser.parse("[C++ #3]").unwrap().id, "3");
        assert!(parser.parse("[Bug #9]").is_none());
        assert!(parser.parse("[Feature #9]").is_none());
    }
}
