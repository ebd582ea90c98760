//! Autocommit CLI - Shared plumbing for the `commit-all` and `push-files` binaries
//!
//! Both binaries take the same options, open the repository, hand a
//! `GitCli` to their runner and render the resulting report.

mod args;
mod formatting;
mod output;

use anyhow::Result;
use autocommit_core::{RunMode, RunReport};
use autocommit_git::GitCli;
use std::process::ExitCode;

pub use args::CommonArgs;
pub use formatting::format_duration;
pub use output::{print_report, EntryRow};

/// Opens the repository, runs `run` against it and prints the report.
///
/// A repository that cannot be opened is reported like a failed status query.
pub fn execute<F>(mode: RunMode, args: &CommonArgs, run: F) -> Result<ExitCode>
where
    F: FnOnce(GitCli) -> RunReport,
{
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&args.log_level)
    ).init();

    let report = match GitCli::open(&args.repo) {
        Ok(git) => run(git),
        Err(e) => {
            log::error!("Failed to get git status: {}", e);
            let mut report = RunReport::new(mode);
            report.abort(e.to_string());
            report
        }
    };

    print_report(&report, args)?;
    Ok(ExitCode::from(report.exit_code() as u8))
}
