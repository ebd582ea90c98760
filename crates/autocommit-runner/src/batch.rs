//! Batch committer: one commit per changed path, one push at the end

use autocommit_core::{EntryReport, RuleSet, RunMode, RunReport, StepOutcome};
use autocommit_git::VcsClient;

use crate::snapshot::{skip_on_error, take_snapshot};

/// Commits every pending path separately with a rule-derived message,
/// then pushes all of them at once.
pub struct BatchCommitter<C> {
    client: C,
    rules: RuleSet,
}

impl<C: VcsClient> BatchCommitter<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            rules: RuleSet::batch_default(),
        }
    }

    /// Replaces the message rules
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Runs to completion. Only a failed status query stops the run early;
    /// every other failure is logged and recorded in the report.
    pub fn run(&self) -> RunReport {
        let mut report = RunReport::new(RunMode::Batch);

        let entries = match take_snapshot(&self.client) {
            Ok(entries) => entries,
            Err(e) => {
                log::error!("{}", e);
                report.abort(e.to_string());
                return report;
            }
        };

        log::info!("Found {} files to commit.", entries.len());

        for entry in entries {
            let message = self.rules.message_for(&entry.path);
            log::info!("Committing {}...", entry.path);

            let stage = skip_on_error(self.client.stage(&entry.path));
            if let StepOutcome::Skipped(reason) = &stage {
                log::warn!("Failed to stage {}: {}", entry.path, reason);
            }

            // Attempted even after a failed stage: each path gets exactly one commit attempt
            let commit = skip_on_error(self.client.commit(&message));
            if let StepOutcome::Skipped(reason) = &commit {
                log::warn!("Failed to commit {}: {}", entry.path, reason);
            }

            report.entries.push(EntryReport {
                entry,
                message,
                stage,
                commit: Some(commit),
                push: None,
            });
        }

        log::info!("Pushing all commits...");
        let push = skip_on_error(self.client.push());
        match &push {
            StepOutcome::Success => log::info!("Pushed {} commits", report.commits_succeeded()),
            other => log::error!("Push failed: {}", other.reason().unwrap_or("unknown error")),
        }
        report.final_push = Some(push);

        report.finish();
        report
    }
}
