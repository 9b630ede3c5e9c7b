//! tagnotes Core - Shared foundation for release note generation
//!
//! This crate provides the error taxonomy and configuration system used by
//! the commit sources, the notes pipeline and the GitHub publisher.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{ConfigError, GitError, RemoteError, Result, TagnotesError};
