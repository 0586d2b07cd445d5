//! Tests for error handling, exit codes and suggestions.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn helperkit(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("helperkit").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_fixture_is_not_found() {
    let home = TempDir::new().unwrap();
    helperkit(&home)
        .args(["debug", "absent.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read fixture"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn test_malformed_fixture_is_user_error() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    helperkit(&home)
        .arg("debug")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse fixture"));
}

#[test]
fn test_unsupported_fixture_extension() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("fixture.yaml");
    fs::write(&path, "nodes: []").unwrap();

    helperkit(&home)
        .arg("debug")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains(".json or .toml"));
}

#[test]
fn test_unregistered_helper_in_fixture() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("unknown.json");
    fs::write(&path, r#"{"nodes": [{"helper": "custom.unknown"}]}"#).unwrap();

    helperkit(&home)
        .arg("debug")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("custom.unknown"))
        .stderr(predicate::str::contains("helperkit helpers"));
}

#[test]
fn test_negative_count_is_rejected() {
    let home = TempDir::new().unwrap();
    helperkit(&home)
        .args(["replace", "aaa", "-s", "a", "-n", "-1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("'count'"))
        .stderr(predicate::str::contains("non-negative integer"));
}

#[test]
fn test_missing_substring_is_parse_error() {
    let home = TempDir::new().unwrap();
    helperkit(&home)
        .args(["replace", "aaa"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--substring"));
}

#[test]
fn test_missing_config_file_is_configuration_error() {
    let home = TempDir::new().unwrap();
    helperkit(&home)
        .args(["--config", "absent.toml", "helpers"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_invalid_config_value_is_configuration_error() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bad.toml");
    fs::write(&path, "[report]\ndump_depth = \"deep\"\n").unwrap();

    helperkit(&home)
        .arg("--config")
        .arg(&path)
        .arg("helpers")
        .assert()
        .code(4);
}

#[test]
fn test_unknown_config_key() {
    let home = TempDir::new().unwrap();
    helperkit(&home)
        .args(["config", "get", "report.colour"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_verbose_shows_error_chain() {
    let home = TempDir::new().unwrap();
    helperkit(&home)
        .args(["-v", "debug", "absent.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Caused by:"))
        .stderr(predicate::str::contains("--verbose for more details").not());
}
