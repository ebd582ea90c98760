//! Autocommit Runner - The batch committer and the per-file pusher
//!
//! Both components snapshot the pending changes once, then drive a
//! `VcsClient` step by step. They never return errors: every outcome,
//! including an aborted status query, is recorded in a `RunReport`.

mod batch;
mod error;
mod per_file;
mod snapshot;

pub use batch::BatchCommitter;
pub use error::SnapshotError;
pub use per_file::PerFilePusher;
