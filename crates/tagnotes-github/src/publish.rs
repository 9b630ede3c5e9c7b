//! Release publishing

use std::io::Write;

use tracing::{info, instrument};

use crate::client::GitHubClient;
use tagnotes_notes::ReleaseDocument;

/// Trait for release sinks
#[async_trait::async_trait]
pub trait ReleasePublisher: Send + Sync {
    /// Create a release for `tag_name` and return its URL
    async fn create_release(
        &self,
        tag_name: &str,
        name: &str,
        body: &str,
    ) -> tagnotes_core::Result<String>;
}

#[async_trait::async_trait]
impl ReleasePublisher for GitHubClient {
    async fn create_release(
        &self,
        tag_name: &str,
        name: &str,
        body: &str,
    ) -> tagnotes_core::Result<String> {
        let release = self.post_release(tag_name, name, body).await?;
        Ok(release.html_url)
    }
}

/// What the gate did with the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Dry run: the document was written out
    Printed,
    /// The release was created
    Published { url: String },
}

/// Release name derived from a tag: `v3_4_0` becomes `3.4.0`
pub fn release_name(tag: &str) -> String {
    tag.strip_prefix('v').unwrap_or(tag).replace('_', ".")
}

/// Print the document on a dry run, otherwise publish it as a release.
///
/// Publisher failures are returned as-is; nothing is retried.
#[instrument(skip(document, publisher, out), fields(note_count = document.note_count()))]
pub async fn gate<W: Write>(
    document: &ReleaseDocument,
    from_tag: &str,
    to_tag: &str,
    dry_run: bool,
    publisher: &dyn ReleasePublisher,
    out: &mut W,
) -> tagnotes_core::Result<PublishOutcome> {
    if dry_run {
        info!(from_tag, to_tag, "dry run, printing release note");
        out.write_all(document.as_str().as_bytes())?;
        out.flush()?;
        return Ok(PublishOutcome::Printed);
    }

    let name = release_name(to_tag);
    info!(from_tag, to_tag, name = %name, "publishing release");

    let url = publisher
        .create_release(to_tag, &name, document.as_str())
        .await?;

    writeln!(out, "Created a release: {}", url)?;
    Ok(PublishOutcome::Published { url })
}
