//! In-memory `VcsClient` that records every call

#![allow(dead_code)]

use autocommit_git::{CommandOutput, VcsClient, VcsError};
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Status,
    Stage(String),
    Commit(String),
    Push,
}

#[derive(Default)]
pub struct FakeClient {
    /// `None` makes the status query fail
    status: Option<String>,
    failing_stages: Vec<String>,
    failing_commits: Vec<String>,
    silent_commits: Vec<String>,
    push_fails: bool,
    calls: RefCell<Vec<Call>>,
}

fn failed(command: &str, stderr: &str) -> VcsError {
    VcsError::CommandFailed {
        command: command.to_string(),
        code: Some(1),
        stderr: stderr.to_string(),
    }
}

fn ok(stdout: &str) -> Result<CommandOutput, VcsError> {
    Ok(CommandOutput {
        stdout: stdout.to_string(),
        stderr: String::new(),
    })
}

impl FakeClient {
    pub fn with_status(output: &str) -> Self {
        Self {
            status: Some(output.to_string()),
            ..Self::default()
        }
    }

    pub fn broken_status() -> Self {
        Self::default()
    }

    pub fn fail_stage(mut self, path: &str) -> Self {
        self.failing_stages.push(path.to_string());
        self
    }

    pub fn fail_commit(mut self, message: &str) -> Self {
        self.failing_commits.push(message.to_string());
        self
    }

    /// Commit exits 0 but prints nothing
    pub fn silent_commit(mut self, message: &str) -> Self {
        self.silent_commits.push(message.to_string());
        self
    }

    pub fn fail_push(mut self) -> Self {
        self.push_fails = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn pushes(&self) -> usize {
        self.count(|c| *c == Call::Push)
    }

    pub fn commits(&self) -> usize {
        self.count(|c| matches!(c, Call::Commit(_)))
    }

    pub fn stages(&self) -> usize {
        self.count(|c| matches!(c, Call::Stage(_)))
    }
}

impl VcsClient for FakeClient {
    fn status(&self) -> Result<CommandOutput, VcsError> {
        self.calls.borrow_mut().push(Call::Status);
        match &self.status {
            Some(out) => ok(out),
            None => Err(failed("git status --porcelain", "fatal: not a git repository")),
        }
    }

    fn stage(&self, path: &str) -> Result<CommandOutput, VcsError> {
        self.calls.borrow_mut().push(Call::Stage(path.to_string()));
        if self.failing_stages.iter().any(|p| p == path) {
            return Err(failed("git add", "fatal: pathspec did not match any files"));
        }
        ok("")
    }

    fn commit(&self, message: &str) -> Result<CommandOutput, VcsError> {
        self.calls.borrow_mut().push(Call::Commit(message.to_string()));
        if self.failing_commits.iter().any(|m| m == message) {
            return Err(failed("git commit", "nothing to commit"));
        }
        if self.silent_commits.iter().any(|m| m == message) {
            return ok("");
        }
        ok(&format!("[main abc1234] {}\n 1 file changed\n", message))
    }

    fn push(&self) -> Result<CommandOutput, VcsError> {
        self.calls.borrow_mut().push(Call::Push);
        if self.push_fails {
            return Err(failed("git push", "fatal: No configured push destination."));
        }
        ok("")
    }
}
