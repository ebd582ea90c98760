//! Helpers shared by both runners

use autocommit_core::{parse_porcelain, ChangeEntry, StepOutcome};
use autocommit_git::{CommandOutput, VcsClient, VcsError};

use crate::error::SnapshotError;

/// Reads the pending changes once. Later changes to the working tree are not
/// picked up by the run.
pub(crate) fn take_snapshot<C: VcsClient>(client: &C) -> Result<Vec<ChangeEntry>, SnapshotError> {
    let output = client.status()?;
    Ok(parse_porcelain(&output.stdout)?)
}

/// Maps a command result onto the log-and-continue policy
pub(crate) fn skip_on_error(result: Result<CommandOutput, VcsError>) -> StepOutcome {
    match result {
        Ok(_) => StepOutcome::Success,
        Err(e) => StepOutcome::Skipped(e.to_string()),
    }
}
