//! Release note generation

use futures::stream::{self, StreamExt};
use tracing::{debug, info, instrument};

use crate::parser::ParserRegistry;
use crate::resolver::TitleResolver;
use crate::types::{Reference, TitleResult};
use tagnotes_git::CommitRecord;

/// Classifies commits and resolves a title for each reference
pub struct NotesGenerator<'a> {
    classifier: &'a ParserRegistry,
    resolver: &'a dyn TitleResolver,
    concurrency: usize,
}

impl<'a> NotesGenerator<'a> {
    /// Create a generator that resolves one title at a time
    pub fn new(classifier: &'a ParserRegistry, resolver: &'a dyn TitleResolver) -> Self {
        Self {
            classifier,
            resolver,
            concurrency: 1,
        }
    }

    /// Allow up to `concurrency` title fetches in flight
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Classify commits, skipping those that reference nothing
    pub fn classify(&self, commits: &[CommitRecord]) -> Vec<Reference> {
        commits
            .iter()
            .filter_map(|commit| {
                let reference = self.classifier.classify(&commit.message);
                if reference.is_none() {
                    debug!(sha = commit.short_sha(), "commit references nothing, skipping");
                }
                reference
            })
            .collect()
    }

    /// Resolve titles for every classified commit.
    ///
    /// Results come back in commit order whatever order the fetches finish in.
    #[instrument(skip(self, commits), fields(commit_count = commits.len(), concurrency = self.concurrency))]
    pub async fn generate(&self, commits: &[CommitRecord]) -> Vec<(Reference, TitleResult)> {
        let references = self.classify(commits);
        info!(
            commit_count = commits.len(),
            reference_count = references.len(),
            "resolving reference titles"
        );

        let resolver = self.resolver;
        let pairs: Vec<(Reference, TitleResult)> = stream::iter(references)
            .map(|reference| async move {
                let title = resolver.resolve(&reference).await;
                (reference, title)
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        let failed = pairs.iter().filter(|(_, title)| title.is_failed()).count();
        if failed > 0 {
            info!(failed, "some reference titles could not be resolved");
        }
        debug!(resolved = pairs.len() - failed, failed, "title resolution finished");

        pairs
    }
}
