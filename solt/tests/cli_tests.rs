//! CLI Interface Tests
//!
//! These tests run the solt binary against the files in
//! `tests/fixtures` and check what it prints.

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

/// A solt command isolated from any configuration on the machine.
fn solt(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_solt"));
    cmd.current_dir(config_dir.path())
        .env("HOME", config_dir.path())
        .env("XDG_CONFIG_HOME", config_dir.path())
        .env_remove("SOLT_VERBOSE")
        .env_remove("SOLT_CONFIG")
        .env_remove("SOLT_NO_COLOR");
    cmd
}

// ==================== GENERAL ====================

#[test]
fn test_cli_help() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    solt(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("tokens")));
}

#[test]
fn test_cli_version() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    solt(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("solt"));
}

#[test]
fn test_cli_missing_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    solt(&temp_dir)
        .args(["tokens", "does-not-exist.sol"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.sol"));
}

// ==================== TOKENS ====================

#[test]
fn test_tokens_listing() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    solt(&temp_dir)
        .arg("tokens")
        .arg(fixtures_dir().join("Token.sol"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1:1\tKeyword\t\"pragma\"\n"))
        .stdout(predicate::str::contains("3:1\tKeyword\t\"contract\"\n"))
        .stdout(predicate::str::contains("4:13\tKeyword.Type\t\"address\"\n"))
        .stdout(predicate::str::contains("6:14\tName.Function\t\"transfer\"\n"))
        .stdout(predicate::str::contains("8:16\tName.Builtin\t\"true\"\n"));
}

#[test]
fn test_tokens_raw_splits_strings() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source = temp_dir.path().join("s.sol");
    std::fs::write(&source, "x = \"ab\";\n").unwrap();

    solt(&temp_dir)
        .args(["tokens", "s.sol"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1:5\tLiteral.String\t\"\\\"ab\\\"\"\n"));

    solt(&temp_dir)
        .args(["tokens", "--raw", "s.sol"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1:5\tLiteral.String\t\"\\\"\"\n"))
        .stdout(predicate::str::contains("1:6\tLiteral.String\t\"ab\"\n"));
}

#[test]
fn test_tokens_multiple_files_have_headers() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(temp_dir.path().join("a.sol"), "a;").unwrap();
    std::fs::write(temp_dir.path().join("b.sol"), "b;").unwrap();

    solt(&temp_dir)
        .args(["tokens", "-j", "2", "a.sol", "b.sol"])
        .assert()
        .success()
        .stdout(concat!(
            "==> a.sol <==\n",
            "1:1\tName\t\"a\"\n",
            "1:2\tPunctuation\t\";\"\n",
            "==> b.sol <==\n",
            "1:1\tName\t\"b\"\n",
            "1:2\tPunctuation\t\";\"\n",
        ));
}

// ==================== HIGHLIGHT ====================

#[test]
fn test_highlight_colors_keywords() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    solt(&temp_dir)
        .arg("highlight")
        .arg(fixtures_dir().join("Token.sol"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[1;34mcontract\x1b[0m"));
}

#[test]
fn test_highlight_no_color_is_identity() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = fixtures_dir().join("Token.sol");
    let original = std::fs::read_to_string(&path).unwrap();

    solt(&temp_dir)
        .arg("highlight")
        .arg(&path)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(original);
}

#[test]
fn test_highlight_uses_config_theme() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = temp_dir.path().join("custom.toml");
    std::fs::write(&config, "[theme]\nKeyword = \"red\"\n").unwrap();
    std::fs::write(temp_dir.path().join("c.sol"), "contract C {}").unwrap();

    solt(&temp_dir)
        .args(["highlight", "c.sol", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\x1b[31mcontract\x1b[0m"));
}

#[test]
fn test_highlight_rejects_unknown_theme_kind() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = temp_dir.path().join("bad.toml");
    std::fs::write(&config, "[theme]\n\"Keyword.Bogus\" = \"red\"\n").unwrap();
    std::fs::write(temp_dir.path().join("c.sol"), "contract C {}").unwrap();

    solt(&temp_dir)
        .args(["highlight", "c.sol", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Keyword.Bogus"));
}

// ==================== DETECT ====================

#[test]
fn test_detect_by_name_and_content() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    solt(&temp_dir)
        .arg("detect")
        .arg(fixtures_dir().join("Token.sol"))
        .arg(fixtures_dir().join("sniff.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Token.sol: solidity (by file name)"))
        .stdout(predicate::str::contains("sniff.txt: solidity (by content)"));
}

#[test]
fn test_detect_unknown_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    solt(&temp_dir)
        .arg("detect")
        .arg(fixtures_dir().join("notes.txt"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("notes.txt: unknown"));
}

// ==================== INIT ====================

#[test]
fn test_init_then_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    solt(&temp_dir).arg("init").assert().success();
    assert!(temp_dir.path().join("solt.toml").exists());

    solt(&temp_dir).arg("init").assert().failure();
    solt(&temp_dir).args(["init", "--force"]).assert().success();

    // the written file is picked up from the current directory
    std::fs::write(temp_dir.path().join("c.sol"), "contract C {}").unwrap();
    solt(&temp_dir)
        .args(["highlight", "c.sol"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[1;34mcontract\x1b[0m"));
}
