//! Local repository access

use std::path::Path;

use git2::{ErrorCode, Repository};
use tracing::{debug, instrument};

use tagnotes_core::error::GitError;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// A local checkout that commit ranges are read from
pub struct GitRepo {
    pub(crate) repo: Repository,
}

impl GitRepo {
    /// Find the repository containing `start`, walking up parent directories
    #[instrument]
    pub fn discover(start: &Path) -> Result<Self> {
        let repo = Repository::discover(start).map_err(|e| match e.code() {
            ErrorCode::NotFound => GitError::NotARepository(start.to_path_buf()),
            _ => GitError::OpenFailed(e.to_string()),
        })?;
        debug!(git_dir = %repo.path().display(), "found repository");

        Ok(Self { repo })
    }

    /// Peel a tag, branch or hash to the commit it names
    pub(crate) fn resolve_commit(&self, revision: &str) -> Result<git2::Commit<'_>> {
        self.repo
            .revparse_single(revision)
            .and_then(|object| object.peel_to_commit())
            .map_err(|_| GitError::UnknownRevision(revision.to_string()))
    }
}
