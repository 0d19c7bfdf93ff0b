//! End-to-end tests for the `backlog` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("backlog").unwrap();
        cmd.env("HOME", self.dir.path())
            .env_remove("BACKLOG_DB")
            .env_remove("BACKLOG_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    fn seed(&self) {
        for (id, points, priority) in [
            ("1", "3", "1"),
            ("2", "13", "1"),
            ("3", "1", "3"),
            ("4", "3", "10"),
            ("5", "20", "3"),
            ("6", "5", "3"),
        ] {
            self.cmd().args(["add", id, points, priority]).assert().success();
        }
    }

    fn sprint_ids(&self, capacity: &str) -> Vec<String> {
        let out = self
            .cmd()
            .args(["-o", "json", "sprint", capacity])
            .output()
            .unwrap();
        assert!(out.status.success());
        let value: Value = serde_json::from_slice(&out.stdout).unwrap();
        value["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["id"].as_str().unwrap().to_string())
            .collect()
    }
}

#[test]
fn add_and_list() {
    let env = Env::new();
    env.cmd()
        .args(["add", "1", "3", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Story 1: (Pr1 Pts3)"));

    env.cmd()
        .args(["--output", "json", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 1"));

    assert!(env.dir.path().join(".backlog").join("backlog.db").exists());
}

#[test]
fn sprint_scenarios() {
    let env = Env::new();
    env.seed();

    assert_eq!(env.sprint_ids("100"), ["2", "1", "5", "6", "3", "4"]);
    assert_eq!(env.sprint_ids("1"), ["3"]);
    assert_eq!(env.sprint_ids("3"), ["1"]);
    assert_eq!(env.sprint_ids("13"), ["2"]);
    assert!(env.sprint_ids("-1").is_empty());
}

#[test]
fn remove_then_sprint() {
    let env = Env::new();
    env.seed();

    env.cmd()
        .args(["remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));

    assert_eq!(env.sprint_ids("100"), ["2", "5", "6", "3", "4"]);
}

#[test]
fn remove_missing_story_fails() {
    let env = Env::new();
    env.cmd()
        .args(["rm", "ghost"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("story `ghost` was not found"));
}

#[test]
fn invalid_capacity_fails() {
    let env = Env::new();
    env.cmd()
        .args(["sprint", "twelve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid capacity"));
}

#[test]
fn sprint_uses_configured_capacity_and_output() {
    let env = Env::new();
    env.seed();

    let config = env.dir.path().join("custom.yaml");
    std::fs::write(
        &config,
        "general:\n  default_output: json\n  color: never\nsprint:\n  default_capacity: 13\n",
    )
    .unwrap();

    let out = env
        .cmd()
        .arg("--config")
        .arg(&config)
        .arg("sprint")
        .output()
        .unwrap();
    assert!(out.status.success());
    let value: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["capacity"], 13);
    assert_eq!(value["items"][0]["id"], "2");
}

#[test]
fn missing_explicit_config_fails() {
    let env = Env::new();
    env.cmd()
        .arg("--config")
        .arg(env.dir.path().join("typo.yaml"))
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn db_flag_overrides_location() {
    let env = Env::new();
    let db = env.dir.path().join("elsewhere").join("team.db");

    env.cmd()
        .arg("--db")
        .arg(&db)
        .args(["add", "x", "2", "1"])
        .assert()
        .success();

    assert!(db.exists());
    env.cmd()
        .args(["-o", "json", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 0"));
}

#[test]
fn completions_do_not_touch_database() {
    let env = Env::new();
    env.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("backlog"));

    assert!(!env.dir.path().join(".backlog").exists());
}
