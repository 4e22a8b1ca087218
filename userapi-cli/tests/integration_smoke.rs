//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("userapi").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("userapi").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("--bind"));
}

#[test]
fn test_migrate_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.db");

    let mut cmd = Command::cargo_bin("userapi").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("DATABASE_URL")
        .arg("migrate")
        .arg("--database-url")
        .arg(format!("sqlite://{}", path.display()));

    cmd.assert().success();
    assert!(path.exists());
}

#[test]
fn test_migrate_is_repeatable() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("users.db").display());

    for _ in 0..2 {
        Command::cargo_bin("userapi")
            .unwrap()
            .current_dir(dir.path())
            .arg("migrate")
            .arg("--database-url")
            .arg(&url)
            .assert()
            .success();
    }
}

#[test]
fn test_migrate_rejects_non_sqlite_url() {
    let mut cmd = Command::cargo_bin("userapi").unwrap();
    cmd.arg("migrate")
        .arg("--database-url")
        .arg("postgres://localhost/users");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open database"));
}
