//! Title resolution
//!
//! Fetches the page behind a reference and turns its `<title>` into the
//! text shown in the release note.

use std::sync::LazyLock;
use std::time::Duration;

use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, instrument};

use crate::types::{Reference, ReferenceKind, TitleResult};
use tagnotes_core::{Config, RemoteError};

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("Invalid selector"));

/// Trait for title resolvers
///
/// Resolution never fails the batch: problems are reported through
/// [`TitleResult::Failed`].
#[async_trait::async_trait]
pub trait TitleResolver: Send + Sync {
    /// Resolve the display title for a reference
    async fn resolve(&self, reference: &Reference) -> TitleResult;
}

/// Resolver that fetches the reference page over HTTP and reads its `<title>`
pub struct HtmlTitleResolver {
    client: Client,
    tracker_suffix: String,
    pull_suffix: String,
}

impl HtmlTitleResolver {
    /// Create a resolver with the given client and title suffixes
    pub fn new(
        client: Client,
        tracker_suffix: impl Into<String>,
        pull_suffix: impl Into<String>,
    ) -> Self {
        Self {
            client,
            tracker_suffix: tracker_suffix.into(),
            pull_suffix: pull_suffix.into(),
        }
    }

    /// Create a resolver from configuration
    pub fn from_config(config: &Config) -> Result<Self, RemoteError> {
        let mut builder = Client::builder().user_agent(config.github.user_agent.clone());
        if let Some(secs) = config.notes.fetch_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self::new(
            builder.build()?,
            config.tracker.title_suffix.clone(),
            config.pull_title_suffix(),
        ))
    }

    fn suffix_for(&self, kind: ReferenceKind) -> &str {
        match kind {
            ReferenceKind::TrackerIssue => &self.tracker_suffix,
            ReferenceKind::PullRequest => &self.pull_suffix,
        }
    }

    async fn fetch_page(&self, url: &str) -> Result<String, RemoteError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::ApiError {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait::async_trait]
impl TitleResolver for HtmlTitleResolver {
    #[instrument(skip(self, reference), fields(kind = %reference.kind, url = %reference.url))]
    async fn resolve(&self, reference: &Reference) -> TitleResult {
        let page = match self.fetch_page(&reference.url).await {
            Ok(page) => page,
            Err(e) => {
                debug!(url = %reference.url, error = %e, "failed to fetch reference page");
                return TitleResult::failed(&reference.url, e.to_string());
            }
        };

        match extract_title(&page) {
            Some(raw) => {
                let title = clean_title(&raw, self.suffix_for(reference.kind));
                debug!(title = %title, "resolved title");
                TitleResult::resolved(title)
            }
            None => {
                debug!(url = %reference.url, "reference page has no title");
                TitleResult::failed(&reference.url, "page has no <title> element")
            }
        }
    }
}

/// Text of the first `<title>` element in an HTML document
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| element.text().collect::<String>())
}

/// Remove the site suffix from a page title and trim surrounding whitespace
pub fn clean_title(raw: &str, suffix: &str) -> String {
    let stripped = if suffix.is_empty() {
        raw.to_string()
    } else {
        raw.replace(suffix, "")
    };
    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TRACKER_SUFFIX: &str = " - Ruby master - Ruby Issue Tracking System";
    const PULL_SUFFIX: &str = " · ruby/ruby · GitHub";

    fn resolver() -> HtmlTitleResolver {
        HtmlTitleResolver::new(Client::new(), TRACKER_SUFFIX, PULL_SUFFIX)
    }

    fn page(title: &str) -> String {
        format!(
            "<!DOCTYPE html><html><head><title>{}</title></head><body><h1>x</h1></body></html>",
            title
        )
    }

    #[test]
    fn test_extract_title() {
        assert_eq!(extract_title(&page("Hello")), Some("Hello".to_string()));
        assert_eq!(extract_title("<html><body>none</body></html>"), None);
    }

    #[test]
    fn test_extract_title_decodes_entities() {
        let html = page("Fix &lt;=&gt; for Float &amp; Integer");
        assert_eq!(
            extract_title(&html),
            Some("Fix <=> for Float & Integer".to_string())
        );
    }

    #[test]
    fn test_clean_title() {
        assert_eq!(
            clean_title(
                "Bug #100: Segfault in GC - Ruby master - Ruby Issue Tracking System",
                TRACKER_SUFFIX
            ),
            "Bug #100: Segfault in GC"
        );
        assert_eq!(
            clean_title("\n  Add foo · Pull Request #42 · ruby/ruby · GitHub\n", PULL_SUFFIX),
            "Add foo · Pull Request #42"
        );
        assert_eq!(clean_title("Unrelated page", PULL_SUFFIX), "Unrelated page");
        assert_eq!(clean_title(" Plain ", ""), "Plain");
    }

    #[tokio::test]
    async fn test_resolve_tracker_issue() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/issues/100"))
            .respond_with(ResponseTemplate::new(200).set_body_string(page(
                "Bug #100: Segfault in GC - Ruby master - Ruby Issue Tracking System",
            )))
            .mount(&server)
            .await;

        let reference = Reference::new(
            ReferenceKind::TrackerIssue,
            "100",
            format!("{}/issues/100", server.uri()),
        );
        let result = resolver().resolve(&reference).await;

        assert_eq!(result, TitleResult::resolved("Bug #100: Segfault in GC"));
    }

    #[tokio::test]
    async fn test_resolve_pull_request_uses_pull_suffix() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ruby/ruby/pull/42"))
            .respond_with(ResponseTemplate::new(200).set_body_string(page(
                "Add foo by someone · Pull Request #42 · ruby/ruby · GitHub",
            )))
            .mount(&server)
            .await;

        let reference = Reference::new(
            ReferenceKind::PullRequest,
            "42",
            format!("{}/ruby/ruby/pull/42", server.uri()),
        );
        let result = resolver().resolve(&reference).await;

        assert_eq!(
            result.title(),
            Some("Add foo by someone · Pull Request #42")
        );
    }

    #[tokio::test]
    async fn test_resolve_http_error_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let url = format!("{}/issues/9", server.uri());
        let reference = Reference::new(ReferenceKind::TrackerIssue, "9", &url);

        match resolver().resolve(&reference).await {
            TitleResult::Failed { attempted_url, reason } => {
                assert_eq!(attempted_url, url);
                assert!(reason.contains("404"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resolve_missing_title_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html><body/></html>"))
            .mount(&server)
            .await;

        let reference = Reference::new(
            ReferenceKind::PullRequest,
            "1",
            format!("{}/pull/1", server.uri()),
        );

        assert!(resolver().resolve(&reference).await.is_failed());
    }

    #[tokio::test]
    async fn test_resolve_connection_refused_is_failure() {
        let reference = Reference::new(
            ReferenceKind::PullRequest,
            "1",
            "http://127.0.0.1:9/pull/1",
        );

        assert!(resolver().resolve(&reference).await.is_failed());
    }
}
