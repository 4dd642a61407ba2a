use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pomo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pomo").unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_mentions_pomodoro() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pomodoro"));
}

#[test]
fn test_config_show_defaults_as_json() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["config", "show", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"focus_minutes\": 25"))
        .stdout(predicate::str::contains("\"break_minutes\": 5"));
}

#[test]
fn test_config_show_reads_file() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".pomo");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.yaml"), "timer:\n  focus_minutes: 45\n").unwrap();

    pomo(&home)
        .args(["config", "show", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"focus_minutes\": 45"));
}

#[test]
fn test_invalid_config_fails() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".pomo");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.yaml"), "timer:\n  break_minutes: 30\n").unwrap();

    pomo(&home)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("break duration"));
}

#[test]
fn test_config_path() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".pomo").and(predicate::str::contains("config.yaml")));
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pomo"));
}

#[test]
fn test_run_rejects_out_of_range_focus() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["run", "--focus", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("focus duration"));
}

#[test]
fn test_run_zero_sessions_emits_start_state() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["run", "--sessions", "0", "--quiet", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"label\":\"focusing\""))
        .stdout(predicate::str::contains("\"time_remaining\":1500"));
}
