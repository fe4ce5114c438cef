//! CLI Interface Tests
//!
//! These tests run the luffat binary against fixture and temporary files
//! and check its output and exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get the path to the luffat binary
fn luffat_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_luffat"))
}

/// A command running in `dir` with no luffat environment overrides.
fn luffat_in(dir: &TempDir) -> Command {
    let mut cmd = Command::new(luffat_bin());
    cmd.current_dir(dir.path())
        .env_remove("LUFFAT_VERBOSE")
        .env_remove("LUFFAT_CONFIG")
        .env_remove("LUFFAT_NO_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    luffat_in(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tokens").and(predicate::str::contains("names")));
}

#[test]
fn test_cli_version() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    luffat_in(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("luffat"));
}

#[test]
fn test_cli_tokens_text() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = temp_dir.path().join("input.txt");
    std::fs::write(&input, "x = 1.5; # note\ny").expect("Failed to write input");

    luffat_in(&temp_dir)
        .arg("tokens")
        .arg(&input)
        .assert()
        .success()
        .stdout(
            predicate::str::contains(":1:1\tname\t-\t'x'")
                .and(predicate::str::contains(":1:5\tnumber\tfloat\t'1.5'"))
                .and(predicate::str::contains(":2:1\tname\t-\t'y'"))
                .and(predicate::str::contains("note").not()),
        );
}

#[test]
fn test_cli_tokens_json_lua_fixture() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = luffat_in(&temp_dir)
        .args(["tokens", "--format", "json", "--comments", "lua"])
        .arg(fixtures_dir().join("window.lua"))
        .output()
        .expect("Failed to run luffat");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout is not UTF-8");
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("invalid JSON line"))
        .collect();

    let title = records
        .iter()
        .find(|r| r["kind"] == "string")
        .expect("no string token");
    assert_eq!(title["text"], "main window");
    assert_eq!(title["line"], 5);
    assert!(records.iter().all(|r| r["text"] != "shown"));
}

#[test]
fn test_cli_tokens_unterminated_string_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = temp_dir.path().join("bad.txt");
    std::fs::write(&input, "ok \"never closed").expect("Failed to write input");

    luffat_in(&temp_dir)
        .arg("--no-color")
        .arg("tokens")
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::contains("'ok'"))
        .stderr(predicate::str::contains(
            "No closing quote found for open quote on line 0, offset 3",
        ));
}

#[test]
fn test_cli_tokens_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    luffat_in(&temp_dir)
        .args(["tokens", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.txt"));
}

#[test]
fn test_cli_names() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(temp_dir.path().join("a.lua"), "alpha beta\nalpha").expect("write a.lua");
    std::fs::write(temp_dir.path().join("b.lua"), "beta gamma").expect("write b.lua");
    std::fs::write(temp_dir.path().join("skip.txt"), "delta").expect("write skip.txt");

    let output = luffat_in(&temp_dir)
        .args(["names", "."])
        .output()
        .expect("Failed to run luffat");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout is not UTF-8");
    let names: Vec<_> = stdout
        .lines()
        .map(|line| line.split('\t').next().unwrap_or_default())
        .collect();
    assert_eq!(names, ["alpha", "beta", "gamma"]);
}

#[test]
fn test_cli_names_uses_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(
        temp_dir.path().join("luffat.toml"),
        "[scanner]\ncomments = \"none\"\n\n[names]\nextension = \"txt\"\nmin_length = 2\n",
    )
    .expect("Failed to write config");
    std::fs::write(temp_dir.path().join("notes.txt"), "a bc # def").expect("write notes.txt");

    luffat_in(&temp_dir)
        .args(["names", "."])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("bc\t")
                .and(predicate::str::contains("def\t"))
                .and(predicate::str::contains("a\t").not()),
        );
}

#[test]
fn test_cli_explicit_config_missing() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    luffat_in(&temp_dir)
        .args(["--config", "missing.toml", "names", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}
