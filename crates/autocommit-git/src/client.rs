//! The version-control client seam
//!
//! Runners only see `VcsClient`. `GitCli` drives the installed `git` binary
//! with argument arrays, pinned to one repository root, so file names are
//! never interpreted by a shell.

use git2::Repository;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::VcsError;

/// Captured output of a successful command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Operations the runners need from a version-control client
pub trait VcsClient {
    /// Porcelain status of the working tree
    fn status(&self) -> Result<CommandOutput, VcsError>;

    /// Stages exactly one path
    fn stage(&self, path: &str) -> Result<CommandOutput, VcsError>;

    /// Commits whatever is staged
    fn commit(&self, message: &str) -> Result<CommandOutput, VcsError>;

    /// Pushes the current branch to its configured upstream
    fn push(&self) -> Result<CommandOutput, VcsError>;
}

impl<C: VcsClient + ?Sized> VcsClient for &C {
    fn status(&self) -> Result<CommandOutput, VcsError> {
        (**self).status()
    }

    fn stage(&self, path: &str) -> Result<CommandOutput, VcsError> {
        (**self).stage(path)
    }

    fn commit(&self, message: &str) -> Result<CommandOutput, VcsError> {
        (**self).commit(message)
    }

    fn push(&self) -> Result<CommandOutput, VcsError> {
        (**self).push()
    }
}

/// `git` command-line client bound to a repository root
#[derive(Debug, Clone)]
pub struct GitCli {
    root: PathBuf,
    program: PathBuf,
}

impl GitCli {
    /// Finds the repository containing `path` and binds to its work tree root
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, VcsError> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|source| VcsError::NotARepository {
            path: path.to_path_buf(),
            source,
        })?;
        let root = repo
            .workdir()
            .ok_or_else(|| VcsError::BareRepository(path.to_path_buf()))?
            .to_path_buf();

        log::debug!("Using repository root {:?}", root);
        Ok(Self::with_root(root))
    }

    /// Binds to `root` without checking that it is a repository
    pub fn with_root<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            program: PathBuf::from("git"),
        }
    }

    /// Uses a different `git` executable
    pub fn with_program<P: Into<PathBuf>>(mut self, program: P) -> Self {
        self.program = program.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn run(&self, args: &[&str]) -> Result<CommandOutput, VcsError> {
        let command = format!("git {}", args.join(" "));
        log::debug!("Running `{}` in {:?}", command, self.root);

        let output = Command::new(&self.program)
            .arg("-C")
            .arg(&self.root)
            .args(args)
            .output()
            .map_err(|source| VcsError::Spawn {
                command: command.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(VcsError::CommandFailed {
                command,
                code: output.status.code(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }
}

impl VcsClient for GitCli {
    fn status(&self) -> Result<CommandOutput, VcsError> {
        self.run(&["status", "--porcelain"])
    }

    fn stage(&self, path: &str) -> Result<CommandOutput, VcsError> {
        self.run(&["add", "--", path])
    }

    fn commit(&self, message: &str) -> Result<CommandOutput, VcsError> {
        self.run(&["commit", "-m", message])
    }

    fn push(&self) -> Result<CommandOutput, VcsError> {
        self.run(&["push"])
    }
}
