//! CLI interaction tests for the speed test simulator
//!
//! Exercises the compiled binary end-to-end with fast timer overrides
//! so a full simulated run completes in well under a second.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

/// Helper function to create a test command with isolated storage
fn create_test_cmd(storage_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("speedsim").unwrap();
    cmd.env("XDG_CACHE_HOME", storage_dir.path());
    cmd.env_remove("SPEEDSIM_GAUGE_MAX_MBPS");
    cmd.env_remove("SPEEDSIM_HISTORY_LIMIT");
    cmd.env_remove("SPEEDSIM_PING_DELAY_MS");
    cmd.env_remove("SPEEDSIM_TICK_INTERVAL_MS");
    cmd
}

/// Arguments for a complete run that finishes almost instantly
const FAST_RUN: &[&str] = &[
    "--no-color",
    "--tick-interval",
    "1",
    "--ping-delay",
    "1",
];

#[test]
fn test_help_lists_all_flags() {
    Command::cargo_bin("speedsim")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--history"))
        .stdout(predicate::str::contains("--clear-history"))
        .stdout(predicate::str::contains("--no-save"))
        .stdout(predicate::str::contains("--tick-interval"))
        .stdout(predicate::str::contains("--ping-delay"))
        .stdout(predicate::str::contains("--no-color"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("speedsim")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("speedsim"));
}

#[test]
fn test_conflicting_color_flags_fail() {
    let storage = TempDir::new().unwrap();
    create_test_cmd(&storage)
        .args(["--color", "--no-color"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--no-color"));
}

#[test]
fn test_conflicting_history_flags_fail() {
    let storage = TempDir::new().unwrap();
    create_test_cmd(&storage)
        .args(["--history", "--clear-history"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("clear-history"));
}

#[test]
fn test_history_on_fresh_storage_is_empty() {
    let storage = TempDir::new().unwrap();
    create_test_cmd(&storage)
        .args(["--no-color", "--history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No previous results."));
}

#[test]
fn test_full_run_renders_sequence_and_saves() {
    let storage = TempDir::new().unwrap();

    create_test_cmd(&storage)
        .args(FAST_RUN)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ping: --"))
        .stdout(predicate::str::is_match(r"Ping: \d+ ms").unwrap())
        .stdout(predicate::str::contains("Download"))
        .stdout(predicate::str::contains("Upload"))
        .stdout(predicate::str::contains("Recent results:"))
        .stdout(predicate::str::is_match(r"↓\d+\.\dMbps ↑\d+\.\dMbps").unwrap())
        .stdout(predicate::str::contains("Ready for another run."));

    // The result was persisted
    create_test_cmd(&storage)
        .args(["--no-color", "--history"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"1\. .+↓\d+\.\dMbps").unwrap());
}

#[test]
fn test_no_save_leaves_history_untouched() {
    let storage = TempDir::new().unwrap();

    let mut args = FAST_RUN.to_vec();
    args.push("--no-save");
    create_test_cmd(&storage).args(&args).assert().success();

    create_test_cmd(&storage)
        .args(["--no-color", "--history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No previous results."));
}

#[test]
fn test_history_is_bounded_to_five_entries() {
    let storage = TempDir::new().unwrap();

    for _ in 0..6 {
        create_test_cmd(&storage).args(FAST_RUN).assert().success();
    }

    let output = create_test_cmd(&storage)
        .args(["--no-color", "--history"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("  5. "));
    assert!(!stdout.contains("  6. "));
}

#[test]
fn test_clear_history_removes_entries() {
    let storage = TempDir::new().unwrap();

    create_test_cmd(&storage).args(FAST_RUN).assert().success();

    create_test_cmd(&storage)
        .args(["--no-color", "--clear-history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("History cleared."));

    create_test_cmd(&storage)
        .args(["--no-color", "--history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No previous results."));
}

#[test]
fn test_verbose_run_prints_completion_line() {
    let storage = TempDir::new().unwrap();

    let mut args = FAST_RUN.to_vec();
    args.push("--verbose");
    create_test_cmd(&storage)
        .args(&args)
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed:"));
}
