//! GitHub REST client

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use crate::types::{ApiErrorBody, CompareResponse, CreateReleaseRequest, Release};
use tagnotes_core::{Config, RemoteError};
use tagnotes_git::{CommitRecord, CommitSource};

const PER_PAGE: usize = 100;

/// Client for one GitHub repository
pub struct GitHubClient {
    client: Client,
    api_url: String,
    repository: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a client for `repository` (`owner/repo`) against `api_url`
    pub fn new(
        api_url: impl Into<String>,
        repository: impl Into<String>,
        token: Option<String>,
        user_agent: &str,
    ) -> Result<Self, RemoteError> {
        let repository = repository.into();
        if repository.split('/').filter(|p| !p.is_empty()).count() != 2 {
            return Err(RemoteError::InvalidRepository(repository));
        }

        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            repository,
            token,
        })
    }

    /// Create a client from configuration, reading the token from the environment
    pub fn from_config(config: &Config) -> Result<Self, RemoteError> {
        let token = config.github.token();
        if token.is_none() {
            debug!(env = %config.github.token_env, "no GitHub token set, requests are unauthenticated");
        }

        Self::new(
            config.github.api_url.clone(),
            config.repository.clone(),
            token,
            &config.github.user_agent,
        )
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let request = self
            .client
            .request(method, url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28");

        match &self.token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn read_json<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, RemoteError> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|body| body.message)
                .unwrap_or(text);
            return Err(RemoteError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&text).map_err(|e| RemoteError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    /// Fetch every commit between two refs, following pagination
    #[instrument(skip(self), fields(repository = %self.repository))]
    pub async fn compare_commits(&self, base: &str, head: &str) -> Result<Vec<CommitRecord>, RemoteError> {
        let url = format!(
            "{}/repos/{}/compare/{}...{}",
            self.api_url, self.repository, base, head
        );

        let mut commits = Vec::new();
        let mut page = 1;

        loop {
            let per_page = PER_PAGE.to_string();
            let page_param = page.to_string();
            let response = self
                .request(Method::GET, &url)
                .query(&[("per_page", per_page.as_str()), ("page", page_param.as_str())])
                .send()
                .await?;

            let body: CompareResponse = Self::read_json(&url, response).await?;
            let received = body.commits.len();
            debug!(page, received, total = body.total_commits, "fetched compare page");

            commits.extend(body.commits.into_iter().map(CommitRecord::from));

            if received == 0 || received < PER_PAGE || commits.len() >= body.total_commits {
                break;
            }
            page += 1;
        }

        info!(count = commits.len(), base, head, "collected commits from compare API");
        Ok(commits)
    }

    /// Create a published release for an existing tag
    #[instrument(skip(self, body), fields(repository = %self.repository, body_len = body.len()))]
    pub async fn post_release(&self, tag_name: &str, name: &str, body: &str) -> Result<Release, RemoteError> {
        let url = format!("{}/repos/{}/releases", self.api_url, self.repository);
        info!(tag_name, name, "creating release");

        let response = self
            .request(Method::POST, &url)
            .json(&CreateReleaseRequest {
                tag_name,
                name,
                body,
            })
            .send()
            .await?;

        let release: Release = Self::read_json(&url, response).await?;
        debug!(id = release.id, url = %release.html_url, "release created");
        Ok(release)
    }
}

#[async_trait::async_trait(?Send)]
impl CommitSource for GitHubClient {
    fn name(&self) -> &str {
        "github"
    }

    async fn compare(&self, from: &str, to: &str) -> tagnotes_core::Result<Vec<CommitRecord>> {
        Ok(self.compare_commits(from, to).await?)
    }
}
