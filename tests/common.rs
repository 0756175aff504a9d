#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use tempfile::TempDir;

pub fn ow() -> Command {
    cargo_bin_cmd!("overwatcher")
}

/// A throwaway database inside its own temp dir. Keep the `TempDir` alive for
/// the duration of the test.
pub fn setup_test_db() -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir
        .path()
        .join("overwatcher_test.db")
        .to_string_lossy()
        .to_string();
    (dir, db_path)
}

/// `overwatcher --db <db> --test --now <now> <args...>`
pub fn ow_at(db_path: &str, now: &str, args: &[&str]) -> Command {
    let mut cmd = ow();
    cmd.args(["--db", db_path, "--test", "--now", now]).args(args);
    cmd
}

/// Record a full day through `update`.
pub fn add_day(db_path: &str, day: &str, enter: &str, leave: &str) {
    ow_at(
        db_path,
        "2024-01-31T20:00:00",
        &["update", "--day", day, "--enter", enter, "--leave", leave],
    )
    .assert()
    .success();
}
