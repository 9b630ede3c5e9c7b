//! Exit codes for the CLI
//!
//! Usage errors never reach this module: clap exits with status 2 itself.

use tagnotes_core::TagnotesError;

/// Success
pub const SUCCESS: u8 = 0;

/// General error
pub const ERROR: u8 = 1;

/// Configuration error
pub const CONFIG_ERROR: u8 = 3;

/// Local git error
pub const GIT_ERROR: u8 = 4;

/// GitHub API error (compare or release creation)
pub const REMOTE_ERROR: u8 = 5;

/// Map a run failure to an exit code
pub fn for_error(error: &anyhow::Error) -> u8 {
    let tagnotes_error = error.chain().find_map(|cause| {
        if let Some(e) = cause.downcast_ref::<TagnotesError>() {
            return Some(match e {
                TagnotesError::Config(_) => CONFIG_ERROR,
                TagnotesError::Git(_) => GIT_ERROR,
                TagnotesError::Remote(_) => REMOTE_ERROR,
                _ => ERROR,
            });
        }
        if cause.is::<tagnotes_core::ConfigError>() {
            return Some(CONFIG_ERROR);
        }
        if cause.is::<tagnotes_core::GitError>() {
            return Some(GIT_ERROR);
        }
        if cause.is::<tagnotes_core::RemoteError>() {
            return Some(REMOTE_ERROR);
        }
        None
    });

    tagnotes_error.unwrap_or(ERROR)
}
