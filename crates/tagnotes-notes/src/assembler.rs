//! Markdown release note assembly

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::types::{NoteEntry, Reference, ReleaseDocument, TitleResult};
use tagnotes_core::Config;

/// Composes resolved references into the final release note
#[derive(Debug, Clone)]
pub struct NoteAssembler {
    header: String,
    attribution: String,
    repository_url: String,
}

impl NoteAssembler {
    /// Create an assembler
    pub fn new(
        header: impl Into<String>,
        attribution: impl Into<String>,
        repository_url: impl Into<String>,
    ) -> Self {
        Self {
            header: header.into(),
            attribution: attribution.into(),
            repository_url: repository_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create an assembler from configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.notes.header.clone(),
            config.notes.attribution.clone(),
            config.repository_url(),
        )
    }

    /// Link to the full comparison between two tags
    pub fn compare_url(&self, from: &str, to: &str) -> String {
        format!("{}/compare/{}...{}", self.repository_url, from, to)
    }

    /// Render successful pairs as list entries, dropping failures and duplicates
    pub fn entries(&self, pairs: &[(Reference, TitleResult)]) -> Vec<NoteEntry> {
        let mut seen = HashSet::new();

        pairs
            .iter()
            .filter_map(|(reference, result)| {
                result
                    .title()
                    .map(|title| NoteEntry::new(title, &reference.url))
            })
            .filter(|entry| seen.insert(entry.rendered_line.clone()))
            .collect()
    }

    /// Compose the release note for the range `from...to`
    #[instrument(skip(self, pairs), fields(pair_count = pairs.len()))]
    pub fn assemble(
        &self,
        pairs: &[(Reference, TitleResult)],
        from: &str,
        to: &str,
    ) -> ReleaseDocument {
        let entries = self.entries(pairs);
        let lines: Vec<&str> = entries.iter().map(|e| e.rendered_line.as_str()).collect();

        let mut output = String::new();
        output.push_str(&format!("{}\n\n", self.header));
        output.push_str(&lines.join("\n"));
        output.push('\n');
        output.push_str(&format!("{}\n\n", self.attribution));
        output.push_str("## Full Changelog\n\n");
        output.push_str(&format!("{}\n\n", self.compare_url(from, to)));

        debug!(
            note_count = entries.len(),
            output_len = output.len(),
            "release note assembled"
        );
        ReleaseDocument::new(output, entries.len())
    }
}
