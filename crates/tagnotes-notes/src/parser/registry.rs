//! Parser registry

use std::sync::Arc;

use tracing::trace;

use super::{PullRequestParser, ReferenceParser, TrackerParser};
use crate::types::Reference;
use tagnotes_core::Config;

/// Ordered set of grammars; the first grammar that matches classifies the commit
pub struct ParserRegistry {
    parsers: Vec<Arc<dyn ReferenceParser>>,
}

impl ParserRegistry {
    /// Create the built-in registry: tracker tags take precedence over pull requests
    pub fn new(config: &Config) -> Self {
        Self {
            parsers: vec![
                Arc::new(TrackerParser::from_config(&config.tracker)),
                Arc::new(PullRequestParser::new(config.repository_url())),
            ],
        }
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Register a parser after the existing ones
    pub fn register<P: ReferenceParser + 'static>(&mut self, parser: P) {
        self.parsers.push(Arc::new(parser));
    }

    /// Get all registered parsers in precedence order
    pub fn all(&self) -> &[Arc<dyn ReferenceParser>] {
        &self.parsers
    }

    /// Classify a commit message, `None` when no grammar matches
    pub fn classify(&self, message: &str) -> Option<Reference> {
        self.parsers.iter().find_map(|parser| {
            let reference = parser.parse(message);
            if reference.is_some() {
                trace!(parser = parser.name(), "commit classified");
            }
            reference
        })
    }
}
