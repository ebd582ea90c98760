//! Autocommit Core - Shared data models, status parsing and message rules
//!
//! This crate has no I/O. It turns porcelain status output into
//! `ChangeEntry` values, derives commit messages for them, and defines the
//! outcome types the runners report with.

mod error;
mod messages;
mod models;
mod outcome;
mod status;

pub use error::CoreError;
pub use messages::{per_file_message, MessageRule, PathMatch, RuleSet, BASENAME_PLACEHOLDER, SKIP_CI};
pub use models::{basename, ChangeEntry, ChangeKind, StatusCode};
pub use outcome::{EntryReport, RunMode, RunReport, StepOutcome};
pub use status::{parse_porcelain, unquote};
