//! Error types for autocommit-git

use std::path::PathBuf;

/// Failures talking to the version-control client
#[derive(Debug, thiserror::Error)]
pub enum VcsError {
    #[error("No git repository found at {path:?}: {source}")]
    NotARepository {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("Repository at {0:?} has no working tree")]
    BareRepository(PathBuf),

    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {}: {stderr}", describe_exit(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {}", c),
        None => "signal".to_string(),
    }
}
