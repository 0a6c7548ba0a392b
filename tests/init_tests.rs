//! Integration tests for init and config commands

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::taskroll_cmd;

#[test]
fn test_init_creates_config_and_folders() {
    let temp = TempDir::new().unwrap();

    taskroll_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success();

    assert!(temp.path().join(".taskroll").exists());

    let config_path = temp.path().join(".taskroll/config.toml");
    assert!(config_path.exists());

    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("marker = \"button-staskRollover\""));
    assert!(content.contains("[folders]"));

    for folder in ["daily", "weekly", "monthly", "annual"] {
        assert!(temp.path().join(folder).is_dir());
    }
}

#[test]
fn test_init_with_custom_marker() {
    let temp = TempDir::new().unwrap();

    taskroll_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--marker")
        .arg("my-anchor")
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join(".taskroll/config.toml")).unwrap();
    assert!(content.contains("marker = \"my-anchor\""));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    taskroll_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success();

    taskroll_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure();
}

#[test]
fn test_config_get_marker() {
    let temp = TempDir::new().unwrap();

    taskroll_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success();

    taskroll_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("marker")
        .assert()
        .success()
        .stdout(predicate::str::contains("button-staskRollover"));
}

#[test]
fn test_config_set_folder() {
    let temp = TempDir::new().unwrap();

    taskroll_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success();

    taskroll_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("folders.daily")
        .arg("journal/days")
        .assert()
        .success();

    taskroll_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("folders.daily")
        .assert()
        .success()
        .stdout(predicate::str::contains("journal/days"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();

    taskroll_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success();

    taskroll_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("marker"))
        .stdout(predicate::str::contains("folders.daily"))
        .stdout(predicate::str::contains("created"));
}

#[test]
fn test_config_outside_journal_fails() {
    let temp = TempDir::new().unwrap();

    taskroll_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Not a taskroll journal"));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();

    taskroll_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success();

    taskroll_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("no-such-key")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}
