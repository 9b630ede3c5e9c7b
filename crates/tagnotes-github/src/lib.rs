//! tagnotes GitHub - GitHub integration for release notes
//!
//! Provides the compare API as a [`CommitSource`](tagnotes_git::CommitSource),
//! release creation as a [`ReleasePublisher`], and the [`gate`] that decides
//! between printing a release note and publishing it.
//!
//! ## Authentication
//!
//! The token is read from the environment variable named by
//! `github.token_env` (`GITHUB_TOKEN` by default) and sent as a bearer token.
//! A missing token is not an error locally; the API reports it.

mod client;
mod publish;
pub mod types;

pub use client::GitHubClient;
pub use publish::{gate, release_name, PublishOutcome, ReleasePublisher};
