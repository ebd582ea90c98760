//! CLI integration tests
//!
//! These run the compiled binaries against throwaway repositories.
//! Tests that need `git` return early when it is not installed.

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

// ── fixtures ─────────────────────────────────────────────────────────────────

fn commit_all() -> Command {
    Command::new(env!("CARGO_BIN_EXE_commit-all"))
}

fn push_files() -> Command {
    Command::new(env!("CARGO_BIN_EXE_push-files"))
}

fn git_available() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str]) -> Output {
    let output = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .output()
        .expect("failed to run git");
    assert!(output.status.success(), "git {:?} failed", args);
    output
}

fn init_repo() -> TempDir {
    let tmp = TempDir::new().unwrap();
    git(tmp.path(), &["init", "--quiet"]);
    git(tmp.path(), &["config", "user.name", "Test User"]);
    git(tmp.path(), &["config", "user.email", "test@example.com"]);
    git(tmp.path(), &["config", "commit.gpgsign", "false"]);
    tmp
}

fn log_subjects(dir: &Path) -> Vec<String> {
    let out = git(dir, &["log", "--format=%s", "--reverse"]);
    String::from_utf8_lossy(&out.stdout).lines().map(str::to_string).collect()
}

fn run_json(mut cmd: Command, repo: &Path) -> (Output, Value) {
    let output = cmd
        .arg("--repo").arg(repo)
        .arg("--json")
        .output()
        .expect("failed to run binary");
    let report = serde_json::from_slice(&output.stdout).expect("stdout should be a JSON report");
    (output, report)
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn test_help_exits_zero() {
    assert!(commit_all().arg("--help").status().unwrap().success());
    assert!(push_files().arg("--help").status().unwrap().success());
}

#[test]
fn test_version_flag() {
    let output = push_files().arg("--version").output().expect("failed to run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("push-files"), "got: {}", stdout);
}

// ── status failures ───────────────────────────────────────────────────────────

#[test]
fn test_outside_repository_exits_one() {
    let tmp = TempDir::new().unwrap();
    if Command::new("git").arg("-C").arg(tmp.path()).args(["rev-parse"]).status()
        .map(|s| s.success()).unwrap_or(false)
    {
        // Temp dir lives inside a checkout, nothing to test here
        return;
    }

    for cmd in [commit_all(), push_files()] {
        let (output, report) = run_json(cmd, tmp.path());
        assert_eq!(output.status.code(), Some(1));
        assert_eq!(report["status_query"]["outcome"], "fatal_abort");
        assert_eq!(report["entries"].as_array().unwrap().len(), 0);
    }
}

// ── commit-all ────────────────────────────────────────────────────────────────

#[test]
fn test_commit_all_commits_each_file_and_tolerates_push_failure() {
    if !git_available() {
        return;
    }
    let repo = init_repo();
    fs::create_dir_all(repo.path().join("src/components")).unwrap();
    fs::write(repo.path().join("src/components/Chat.tsx"), "export {}\n").unwrap();
    git(repo.path(), &["add", "."]);
    git(repo.path(), &["commit", "--quiet", "-m", "seed"]);

    fs::write(repo.path().join("src/components/Chat.tsx"), "export default {}\n").unwrap();
    fs::write(repo.path().join("GUIDE.md"), "# Guide\n").unwrap();

    let (output, report) = run_json(commit_all(), repo.path());

    // No remote configured: the push fails but the exit code stays 0
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(report["mode"], "batch");
    assert_eq!(report["final_push"]["outcome"], "skipped");

    let mut subjects = log_subjects(repo.path());
    subjects.sort();
    assert_eq!(
        subjects,
        vec![
            "Add documentation: GUIDE.md".to_string(),
            "Fix chat UI overflow, scroll, and delete button visibility".to_string(),
            "seed".to_string(),
        ]
    );
}

// ── push-files ────────────────────────────────────────────────────────────────

#[test]
fn test_push_files_with_no_changes() {
    if !git_available() {
        return;
    }
    let repo = init_repo();

    let output = push_files().arg("--repo").arg(repo.path()).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No changes to commit"));
}

#[test]
fn test_push_files_commits_with_skip_ci_messages() {
    if !git_available() {
        return;
    }
    let repo = init_repo();
    fs::write(repo.path().join("notes.md"), "n\n").unwrap();
    fs::write(repo.path().join("old.txt"), "o\n").unwrap();
    git(repo.path(), &["add", "old.txt"]);
    git(repo.path(), &["commit", "--quiet", "-m", "seed"]);
    fs::remove_file(repo.path().join("old.txt")).unwrap();

    let (output, report) = run_json(push_files(), repo.path());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(report["mode"], "per-file");

    let entries = report["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    for entry in entries {
        assert_eq!(entry["commit"]["outcome"], "success");
        // Push attempted after every successful commit, fails without a remote
        assert_eq!(entry["push"]["outcome"], "skipped");
    }

    let subjects = log_subjects(repo.path());
    assert!(subjects.contains(&"Delete old.txt [skip ci]".to_string()));
    assert!(subjects.contains(&"Add notes.md [skip ci]".to_string()));
}

#[test]
fn test_summary_table_lists_paths() {
    if !git_available() {
        return;
    }
    let repo = init_repo();
    fs::write(repo.path().join("a.txt"), "a\n").unwrap();

    let output = push_files()
        .arg("--repo").arg(repo.path())
        .arg("--summary")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("a.txt"));
    assert!(stdout.contains("Update a.txt [skip ci]"));
}
