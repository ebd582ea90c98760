//! Per-file pusher: add, commit and push each changed path on its own

use autocommit_core::{per_file_message, ChangeEntry, EntryReport, RunMode, RunReport, StepOutcome};
use autocommit_git::VcsClient;

use crate::snapshot::{skip_on_error, take_snapshot};

/// Synchronises every pending change with the remote as soon as it is
/// committed, one network round trip per path.
pub struct PerFilePusher<C> {
    client: C,
}

impl<C: VcsClient> PerFilePusher<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn run(&self) -> RunReport {
        log::info!("Starting individual push process...");
        let mut report = RunReport::new(RunMode::PerFile);

        let entries = match take_snapshot(&self.client) {
            Ok(entries) => entries,
            Err(e) => {
                log::error!("{}", e);
                report.abort(e.to_string());
                return report;
            }
        };

        if entries.is_empty() {
            log::info!("No changes to commit.");
            report.finish();
            return report;
        }

        log::info!("Found {} files to process.", entries.len());

        for entry in entries {
            let outcome = self.process(entry);
            report.entries.push(outcome);
        }

        log::info!("All files processed.");
        report.finish();
        report
    }

    fn process(&self, entry: ChangeEntry) -> EntryReport {
        log::info!("Processing {}", entry);

        // Staged unconditionally; a failure only shows up through git's own message
        let stage = skip_on_error(self.client.stage(&entry.path));
        if let StepOutcome::Skipped(reason) = &stage {
            log::warn!("{}", reason);
        }

        let message = per_file_message(&entry);
        let commit = match self.client.commit(&message) {
            Ok(out) if !out.stdout.trim().is_empty() => StepOutcome::Success,
            Ok(_) => StepOutcome::Skipped("commit produced no output".to_string()),
            Err(e) => StepOutcome::Skipped(e.to_string()),
        };

        if !commit.is_success() {
            log::warn!("Failed to commit {}", entry.path);
            return EntryReport {
                entry,
                message,
                stage,
                commit: Some(commit),
                push: None,
            };
        }
        log::info!("Committed: {}", message);

        // A failed push leaves the commit in place
        let push = skip_on_error(self.client.push());
        match &push {
            StepOutcome::Success => log::info!("Pushed {}", entry.path),
            _ => log::warn!(
                "Failed to push {}: {}",
                entry.path,
                push.reason().unwrap_or("unknown error")
            ),
        }

        EntryReport {
            entry,
            message,
            stage,
            commit: Some(commit),
            push: Some(push),
        }
    }
}
