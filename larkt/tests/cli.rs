//! CLI Interface E2E Tests
//!
//! These tests run the larkt binary against temporary source files and
//! check its output and exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get the path to the larkt binary
fn larkt_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_larkt"))
}

/// A larkt command running inside `dir`, unaffected by the caller's
/// environment.
fn larkt_in(dir: &Path) -> Command {
    let mut cmd = Command::new(larkt_bin());
    cmd.current_dir(dir)
        .env_remove("LARKT_VERBOSE")
        .env_remove("LARKT_CONFIG")
        .env_remove("LARKT_NO_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

fn write_source(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, text).expect("Failed to write source file");
    path
}

#[test]
fn test_cli_help() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    larkt_in(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("tokens")));
}

#[test]
fn test_cli_version() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    larkt_in(temp_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("larkt"));
}

#[test]
fn test_cli_tokens_from_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&temp_dir, "main.lark", "def x 42 // answer\n");

    larkt_in(temp_dir.path())
        .arg("tokens")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::eq("DEF\nNAME x\nINT 42\n"));
}

#[test]
fn test_cli_tokens_from_stdin() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    larkt_in(temp_dir.path())
        .args(["tokens", "-"])
        .write_stdin("fun(n){")
        .assert()
        .success()
        .stdout(predicate::eq("FUN\nOPAREN\nNAME n\nCPAREN\nOBRACE\n"));
}

#[test]
fn test_cli_tokens_with_spans() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    larkt_in(temp_dir.path())
        .args(["tokens", "--spans"])
        .write_stdin("if\n  15.41")
        .assert()
        .success()
        .stdout(predicate::eq("IF @1:1\nFLOAT 15.41 @2:3\n"));
}

#[test]
fn test_cli_tokens_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = larkt_in(temp_dir.path())
        .args(["tokens", "--format", "json"])
        .write_stdin("\"a\\nb\" -7")
        .output()
        .expect("Failed to run larkt");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value[0]["kind"], "STRING");
    assert_eq!(value[0]["value"], "a\nb");
    assert_eq!(value[1]["kind"], "INT");
    assert_eq!(value[1]["value"], -7);
}

#[test]
fn test_cli_tokens_unknown_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    larkt_in(temp_dir.path())
        .args(["tokens", "--format", "yaml"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}

#[test]
fn test_cli_tokens_invalid_reports_diagnostic() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&temp_dir, "bad.lark", "x \"open");

    larkt_in(temp_dir.path())
        .arg("tokens")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("INVALID \"\\\"open\""))
        .stderr(predicate::str::contains("error[E0102]").and(predicate::str::contains("bad.lark:1:3")));
}

#[test]
fn test_cli_check_ok() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let a = write_source(&temp_dir, "a.lark", "def f fun(n) { n }");
    let b = write_source(&temp_dir, "b.lark", "/* nothing */");

    larkt_in(temp_dir.path())
        .arg("check")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("a.lark: ok (9 tokens)"))
        .stdout(predicate::str::contains("b.lark: ok (0 tokens)"));
}

#[test]
fn test_cli_check_failure() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let good = write_source(&temp_dir, "good.lark", "x");
    let bad = write_source(&temp_dir, "bad.lark", "15x");

    larkt_in(temp_dir.path())
        .arg("check")
        .arg(&bad)
        .arg(&good)
        .assert()
        .failure()
        .stdout(predicate::str::contains("bad.lark: FAILED"))
        .stdout(predicate::str::contains("good.lark: ok"))
        .stderr(predicate::str::contains("error[E0101]"));
}

#[test]
fn test_cli_check_fail_fast() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let bad = write_source(&temp_dir, "bad.lark", "\"x\"y");
    let good = write_source(&temp_dir, "good.lark", "x");

    larkt_in(temp_dir.path())
        .args(["check", "--fail-fast"])
        .arg(&bad)
        .arg(&good)
        .assert()
        .failure()
        .stdout(predicate::str::contains("good.lark").not())
        .stderr(predicate::str::contains("error[E0103]"));
}

#[test]
fn test_cli_check_missing_file_does_not_stop_the_run() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let good = write_source(&temp_dir, "good.lark", "x");

    larkt_in(temp_dir.path())
        .args(["check", "missing.lark"])
        .arg(&good)
        .assert()
        .failure()
        .stdout(predicate::str::contains("missing.lark: FAILED"))
        .stdout(predicate::str::contains("good.lark: ok (1 tokens)"))
        .stderr(predicate::str::contains("Cannot read missing.lark"));
}

#[test]
fn test_cli_config_from_current_dir() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_source(&temp_dir, "larkt.toml", "[output]\nformat = \"json\"\n");

    larkt_in(temp_dir.path())
        .arg("tokens")
        .write_stdin("x")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"NAME\""));
}

#[test]
fn test_cli_flag_overrides_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = write_source(&temp_dir, "custom.toml", "[output]\nformat = \"json\"\n");

    larkt_in(temp_dir.path())
        .arg("--config")
        .arg(&config)
        .args(["tokens", "--format", "text"])
        .write_stdin("x")
        .assert()
        .success()
        .stdout(predicate::eq("NAME x\n"));
}

#[test]
fn test_cli_missing_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    larkt_in(temp_dir.path())
        .args(["--config", "nope.toml", "tokens"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_cli_init_then_refuse_overwrite() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    larkt_in(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("larkt.toml"));
    assert!(temp_dir.path().join("larkt.toml").exists());

    larkt_in(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
