//! Core data models for a single run

use serde::{Serialize, Serializer};
use std::fmt;

/// Classification of a porcelain status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Deleted,
    Untracked,
    Renamed,
    Added,
    Modified,
}

/// The two status characters at the start of a porcelain line (index, work tree)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCode([char; 2]);

impl StatusCode {
    pub fn new(index: char, worktree: char) -> Self {
        Self([index, worktree])
    }

    pub fn index(&self) -> char {
        self.0[0]
    }

    pub fn worktree(&self) -> char {
        self.0[1]
    }

    fn has(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    /// Classifies the code. A `D` on either side wins over everything else,
    /// then `?`, `R`, `A`; anything left is treated as a modification.
    pub fn kind(&self) -> ChangeKind {
        if self.has('D') {
            ChangeKind::Deleted
        } else if self.has('?') {
            ChangeKind::Untracked
        } else if self.has('R') {
            ChangeKind::Renamed
        } else if self.has('A') {
            ChangeKind::Added
        } else {
            ChangeKind::Modified
        }
    }

    /// True for rename and copy codes, whose path field is `old -> new`
    pub fn has_source_path(&self) -> bool {
        self.has('R') || self.has('C')
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

impl Serialize for StatusCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One changed path reported by the status query
///
/// Entries are snapshotted once at the start of a run and never refreshed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeEntry {
    /// Raw status code (e.g. `M `, ` D`, `??`)
    pub status: StatusCode,

    /// Path relative to the repository root; the destination for renames
    pub path: String,

    /// Source path of a rename or copy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_path: Option<String>,
}

impl ChangeEntry {
    pub fn new(status: StatusCode, path: impl Into<String>) -> Self {
        Self {
            status,
            path: path.into(),
            original_path: None,
        }
    }

    pub fn kind(&self) -> ChangeKind {
        self.status.kind()
    }

    /// Final path segment. Untracked directories come back as `dir/`,
    /// so a trailing slash is ignored.
    pub fn basename(&self) -> &str {
        basename(&self.path)
    }
}

impl fmt::Display for ChangeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.original_path {
            Some(from) => write!(f, "({}) {} -> {}", self.status, from, self.path),
            None => write!(f, "({}) {}", self.status, self.path),
        }
    }
}

/// Returns the last `/`-separated segment of `path`
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    }
}
