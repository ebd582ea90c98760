//! Per-step outcomes and run reports
//!
//! Failures never escape a run as errors. Every step records what happened
//! and the caller decides the exit code from the report.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::ChangeEntry;

/// Result of a single external step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum StepOutcome {
    Success,
    /// The step failed; the run moves on
    Skipped(String),
    /// The step failed and the whole run stops
    FatalAbort(String),
}

impl StepOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, StepOutcome::Success)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            StepOutcome::Success => None,
            StepOutcome::Skipped(reason) | StepOutcome::FatalAbort(reason) => Some(reason),
        }
    }

    /// Short label for tables and logs
    pub fn label(&self) -> &'static str {
        match self {
            StepOutcome::Success => "ok",
            StepOutcome::Skipped(_) => "skipped",
            StepOutcome::FatalAbort(_) => "aborted",
        }
    }
}

/// Which component produced a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunMode {
    Batch,
    PerFile,
}

/// What happened to one change entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    pub entry: ChangeEntry,
    pub message: String,
    pub stage: StepOutcome,
    /// `None` when the commit was never attempted
    pub commit: Option<StepOutcome>,
    /// `None` when no push was attempted for this entry
    pub push: Option<StepOutcome>,
}

/// Outcome of a whole run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub mode: RunMode,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub status_query: StepOutcome,
    pub entries: Vec<EntryReport>,
    /// The single push issued after a batch run
    pub final_push: Option<StepOutcome>,
}

impl RunReport {
    pub fn new(mode: RunMode) -> Self {
        Self {
            mode,
            started_at: Utc::now(),
            finished_at: None,
            status_query: StepOutcome::Success,
            entries: Vec::new(),
            final_push: None,
        }
    }

    /// Marks the run as stopped because the status query could not be obtained
    pub fn abort(&mut self, reason: impl Into<String>) {
        self.status_query = StepOutcome::FatalAbort(reason.into());
        self.finish();
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self.status_query, StepOutcome::FatalAbort(_))
    }

    pub fn discovered(&self) -> usize {
        self.entries.len()
    }

    pub fn commits_attempted(&self) -> usize {
        self.entries.iter().filter(|e| e.commit.is_some()).count()
    }

    pub fn commits_succeeded(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.commit.as_ref().is_some_and(StepOutcome::is_success))
            .count()
    }

    /// Per-entry pushes plus the final batch push
    pub fn pushes_attempted(&self) -> usize {
        let per_entry = self.entries.iter().filter(|e| e.push.is_some()).count();
        per_entry + usize::from(self.final_push.is_some())
    }

    pub fn pushes_succeeded(&self) -> usize {
        let per_entry = self
            .entries
            .iter()
            .filter(|e| e.push.as_ref().is_some_and(StepOutcome::is_success))
            .count();
        let final_ok = self.final_push.as_ref().is_some_and(StepOutcome::is_success);
        per_entry + usize::from(final_ok)
    }

    /// Process exit code: 1 only when the status query failed
    pub fn exit_code(&self) -> i32 {
        if self.is_aborted() {
            1
        } else {
            0
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        let end = self.finished_at.unwrap_or_else(Utc::now);
        (end - self.started_at).to_std().unwrap_or_default()
    }
}
