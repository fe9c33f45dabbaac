//! End-to-end CLI tests.
//!
//! Each test runs the binary against a temporary `$HOME` so state never
//! leaks between tests or into the real user directory.

use assert_cmd::Command;
use chrono::Utc;
use predicates::prelude::*;
use tempfile::TempDir;

use focal::timer::{Category, SessionRecord};

fn focal_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("focal").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

fn seed_sessions(home: &TempDir, records: &[SessionRecord]) {
    let root = home.path().join(".focal");
    std::fs::create_dir_all(&root).unwrap();
    let json = serde_json::to_string(records).unwrap();
    std::fs::write(root.join("sessions.json"), json).unwrap();
}

fn record(category: Category, seconds: i64, distractions: u32) -> SessionRecord {
    SessionRecord {
        id: format!("test-{category}-{seconds}"),
        category,
        actual_duration: seconds,
        distraction_count: distractions,
        created_at: Utc::now(),
    }
}

#[test]
fn test_report_empty_history() {
    let home = TempDir::new().unwrap();

    focal_cmd(&home)
        .args(["report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Focus Report"))
        .stdout(predicate::str::contains("No sessions recorded yet"));
}

#[test]
fn test_report_json_totals() {
    let home = TempDir::new().unwrap();
    seed_sessions(
        &home,
        &[
            record(Category::General, 100, 2),
            record(Category::Study, 300, 1),
        ],
    );

    focal_cmd(&home)
        .args(["report", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"allTimeSeconds\": 400"))
        .stdout(predicate::str::contains("\"todaySeconds\": 400"))
        .stdout(predicate::str::contains("\"totalDistractions\": 3"));
}

#[test]
fn test_report_pretty_shows_categories() {
    let home = TempDir::new().unwrap();
    seed_sessions(&home, &[record(Category::Coding, 600, 0)]);

    focal_cmd(&home)
        .args(["report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coding"))
        .stdout(predicate::str::contains("100.00%"));
}

#[test]
fn test_report_survives_corrupt_store() {
    let home = TempDir::new().unwrap();
    let root = home.path().join(".focal");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("sessions.json"), "{not json").unwrap();

    focal_cmd(&home)
        .args(["report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions recorded yet"));
}

#[test]
fn test_categories_lists_all() {
    let home = TempDir::new().unwrap();

    focal_cmd(&home)
        .args(["categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Categories (6)"))
        .stdout(predicate::str::contains("General"))
        .stdout(predicate::str::contains("Other"));
}

#[test]
fn test_clear_requires_force() {
    let home = TempDir::new().unwrap();
    seed_sessions(&home, &[record(Category::Other, 60, 0)]);

    focal_cmd(&home)
        .args(["clear"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_clear_with_force_empties_history() {
    let home = TempDir::new().unwrap();
    seed_sessions(&home, &[record(Category::Other, 60, 0)]);

    focal_cmd(&home)
        .args(["clear", "--force"])
        .assert()
        .success();

    focal_cmd(&home)
        .args(["report", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"allTimeSeconds\": 0"));
}

#[test]
fn test_completions_generate() {
    let home = TempDir::new().unwrap();

    focal_cmd(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("focal"));
}

#[test]
fn test_invalid_duration_rejected() {
    let home = TempDir::new().unwrap();

    focal_cmd(&home)
        .args(["timer", "--duration", "nonsense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duration"));
}
