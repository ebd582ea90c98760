//! Autocommit Git - Version-control client used by the runners
//!
//! Exposes the `VcsClient` trait and `GitCli`, which invokes the installed
//! `git` binary against an explicit repository root.

mod client;
mod error;

pub use client::{CommandOutput, GitCli, VcsClient};
pub use error::VcsError;
