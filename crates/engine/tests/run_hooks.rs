//! Integration tests for hook discovery and execution
//!
//! These tests write real shell scripts into a temporary hooks root and run
//! them end to end through the loader and runner.

#![cfg(unix)]
#![allow(clippy::unwrap_used, clippy::panic)]

use hookhub_config::ReportOrder;
use hookhub_core::{Error, HookCategory, Outcome, Scope};
use hookhub_engine::{HookLoader, HookRunner, ProgressPhase, ProgressRenderer};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn write_script(root: &Path, category: &str, name: &str, body: &str) {
    let dir = root.join(category);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// Tracks how many hooks are running at once
#[derive(Default)]
struct ConcurrencyTracker {
    counts: Mutex<(usize, usize)>,
}

impl ProgressRenderer for ConcurrencyTracker {
    fn transition(&self, _key: &str, _label: &str, phase: ProgressPhase) {
        let mut counts = self.counts.lock().unwrap();
        match phase {
            ProgressPhase::Running => {
                counts.0 += 1;
                counts.1 = counts.1.max(counts.0);
            }
            ProgressPhase::Done(_) => counts.0 = counts.0.saturating_sub(1),
            ProgressPhase::Pending => {}
        }
    }
}

#[test]
fn test_pre_commit_with_disabled_hook() {
    let temp = TempDir::new().unwrap();
    write_script(temp.path(), "pre-commit", "lint", "exit 0");
    write_script(
        temp.path(),
        "pre-commit",
        "format",
        "echo 'trailing whitespace'; exit 1",
    );
    write_script(
        temp.path(),
        "pre-commit",
        "slow-check.disabled",
        "touch \"$(dirname \"$0\")/../spawned\"; exit 1",
    );

    let hooks = HookLoader::new(temp.path())
        .load(&Scope::Category(HookCategory::PreCommit))
        .unwrap();
    let names: Vec<&str> = hooks.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["format", "lint"]);

    let report = HookRunner::new().run(&hooks).unwrap();
    assert_eq!(report.total(), 2);
    assert!(!temp.path().join("spawned").exists());

    let failures = report.failures(ReportOrder::Arrival);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].name, "format");
    assert!(failures[0].output.contains("trailing whitespace"));
    assert!(matches!(
        report.verdict(),
        Err(Error::HooksFailed { failed: 1, total: 2 })
    ));
}

#[test]
fn test_some_hooks_fail() {
    let temp = TempDir::new().unwrap();
    write_script(temp.path(), "pre-commit", "a-pass", "exit 0");
    write_script(temp.path(), "pre-commit", "b-fail", "echo 'missing semicolon' >&2; exit 1");
    write_script(temp.path(), "pre-commit", "c-pass", "exit 0");
    write_script(temp.path(), "pre-commit", "d-fail", "echo 'bad format'; exit 3");

    let hooks = HookLoader::new(temp.path()).load(&Scope::All).unwrap();
    let report = HookRunner::new().run(&hooks).unwrap();

    assert_eq!(report.total(), 4);
    assert_eq!(report.failure_count(), 2);

    let failures = report.failures(ReportOrder::Discovery);
    assert_eq!(failures[0].name, "b-fail");
    assert_eq!(failures[0].output.trim(), "missing semicolon");
    assert_eq!(failures[1].name, "d-fail");
    assert_eq!(failures[1].output.trim(), "bad format");

    let err = report.verdict().unwrap_err();
    assert!(matches!(err, Error::HooksFailed { failed: 2, total: 4 }));
}

#[test]
fn test_successful_output_is_captured() {
    let temp = TempDir::new().unwrap();
    write_script(temp.path(), "pre-commit", "chatty", "echo out; echo err >&2");

    let hooks = HookLoader::new(temp.path()).load(&Scope::All).unwrap();
    let report = HookRunner::new().run(&hooks).unwrap();

    let result = &report.results()[0];
    assert_eq!(result.outcome, Outcome::Success);
    assert!(result.output.contains("out"));
    assert!(result.output.contains("err"));
}

#[test]
fn test_commit_message_reaches_only_commit_msg_hooks() {
    let temp = TempDir::new().unwrap();
    write_script(
        temp.path(),
        "commit-msg",
        "conventional",
        r#"case "$1" in feat:*) exit 0 ;; *) echo "got: $1"; exit 1 ;; esac"#,
    );
    write_script(
        temp.path(),
        "pre-commit",
        "no-args",
        r#"[ "$#" -eq 0 ] || { echo "unexpected args: $*"; exit 1; }"#,
    );

    let hooks = HookLoader::new(temp.path()).load(&Scope::All).unwrap();

    let good = HookRunner::builder()
        .commit_message(Some("feat: add parallel runner".to_string()))
        .build()
        .run(&hooks)
        .unwrap();
    assert!(good.is_success(), "{:?}", good.results());

    let bad = HookRunner::builder()
        .commit_message(Some("wip".to_string()))
        .build()
        .run(&hooks)
        .unwrap();
    let failures = bad.failures(ReportOrder::Arrival);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].name, "conventional");
    assert_eq!(failures[0].output.trim(), "got: wip");
}

#[test]
fn test_hook_identity_in_environment() {
    let temp = TempDir::new().unwrap();
    write_script(
        temp.path(),
        "pre-push",
        "whoami",
        r#"echo "$HOOKHUB_HOOK_CATEGORY/$HOOKHUB_HOOK_NAME""#,
    );

    let hooks = HookLoader::new(temp.path()).load(&Scope::All).unwrap();
    let report = HookRunner::new().run(&hooks).unwrap();
    assert_eq!(report.results()[0].output.trim(), "pre-push/whoami");
}

#[test]
fn test_no_hooks_in_scope() {
    let temp = TempDir::new().unwrap();
    write_script(temp.path(), "pre-commit", "only.disabled", "exit 1");

    let hooks = HookLoader::new(temp.path()).load(&Scope::All).unwrap();
    assert!(hooks.is_empty());

    let report = HookRunner::new().run(&hooks).unwrap();
    assert_eq!(report.total(), 0);
    assert!(report.verdict().is_ok());
}

#[test]
fn test_timeout_kills_hook() {
    let temp = TempDir::new().unwrap();
    write_script(temp.path(), "pre-commit", "hangs", "exec sleep 30");
    write_script(temp.path(), "pre-commit", "quick", "exit 0");

    let hooks = HookLoader::new(temp.path()).load(&Scope::All).unwrap();
    let start = Instant::now();
    let report = HookRunner::builder()
        .timeout(Some(Duration::from_millis(300)))
        .build()
        .run(&hooks)
        .unwrap();

    assert!(start.elapsed() < Duration::from_secs(10));
    assert_eq!(report.timed_out_count(), 1);

    let failures = report.failures(ReportOrder::Arrival);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].name, "hangs");
    assert!(failures[0].output.starts_with("timed out after"));
}

#[test]
fn test_timeout_returns_while_grandchild_runs() {
    let temp = TempDir::new().unwrap();
    write_script(temp.path(), "pre-commit", "forks", "sleep 5");

    let hooks = HookLoader::new(temp.path()).load(&Scope::All).unwrap();
    let start = Instant::now();
    let report = HookRunner::builder()
        .timeout(Some(Duration::from_millis(300)))
        .build()
        .run(&hooks)
        .unwrap();

    assert!(start.elapsed() < Duration::from_secs(4));
    assert_eq!(report.timed_out_count(), 1);
}

#[test]
fn test_parallelism_is_bounded() {
    let temp = TempDir::new().unwrap();
    for i in 0..6 {
        write_script(temp.path(), "pre-commit", &format!("hook-{i}"), "sleep 0.2");
    }

    let hooks = HookLoader::new(temp.path()).load(&Scope::All).unwrap();
    let tracker = ConcurrencyTracker::default();
    let report = HookRunner::builder()
        .max_parallel(2)
        .renderer(&tracker)
        .build()
        .run(&hooks)
        .unwrap();

    assert!(report.is_success());
    let (running, peak) = *tracker.counts.lock().unwrap();
    assert_eq!(running, 0);
    assert!(peak <= 2, "peak concurrency was {peak}");
}

#[test]
fn test_single_worker_runs_sequentially() {
    let temp = TempDir::new().unwrap();
    for i in 0..3 {
        write_script(temp.path(), "pre-commit", &format!("hook-{i}"), "sleep 0.2");
    }

    let hooks = HookLoader::new(temp.path()).load(&Scope::All).unwrap();
    let start = Instant::now();
    let report = HookRunner::builder().max_parallel(1).build().run(&hooks).unwrap();

    assert!(report.is_success());
    assert!(start.elapsed() >= Duration::from_millis(600));
}

#[test]
fn test_working_directory() {
    let temp = TempDir::new().unwrap();
    let workdir = temp.path().join("repo");
    fs::create_dir_all(&workdir).unwrap();
    write_script(&temp.path().join("hooks"), "pre-commit", "where", "pwd");

    let hooks = HookLoader::new(temp.path().join("hooks"))
        .load(&Scope::All)
        .unwrap();
    let report = HookRunner::builder()
        .working_dir(&workdir)
        .build()
        .run(&hooks)
        .unwrap();

    assert!(report.results()[0].output.trim().ends_with("/repo"));
}
