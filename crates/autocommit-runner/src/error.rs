//! Error types for autocommit-runner

use autocommit_core::CoreError;
use autocommit_git::VcsError;

/// Reasons the change snapshot could not be taken
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to get git status: {0}")]
    Query(#[from] VcsError),

    #[error("Unreadable git status output: {0}")]
    Parse(#[from] CoreError),
}
