//! CLI output integration tests.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn signalcast() -> Command {
    let mut cmd = cargo_bin_cmd!("signalcast");
    cmd.env_remove("DISCORD_TOKEN")
        .env_remove("DISCORD_TOKEN_PART1")
        .env_remove("DISCORD_TOKEN_PART2")
        .env_remove("DISCORD_CLIENT_ID")
        .env_remove("DISCORD_CLIENT_ID_PART1")
        .env_remove("DISCORD_CLIENT_ID_PART2");
    cmd
}

#[test]
fn test_help() {
    signalcast()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("preview"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_version() {
    signalcast()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("signalcast"));
}

#[test]
fn test_preview_renders_levels_and_message() {
    signalcast()
        .args(["preview", "EURUSD", "1.2345", "buy_limit", "--roles", "@vip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1.2365"))
        .stdout(predicate::str::contains("$1.2295"))
        .stdout(predicate::str::contains("**Trade signal for: EURUSD**"))
        .stdout(predicate::str::contains("@vip"));
}

#[test]
fn test_preview_json() {
    let output = signalcast()
        .args(["--json", "preview", "xauusd", "2995.50", "sell_execution"])
        .output()
        .expect("run signalcast");
    assert!(output.status.success());

    let line = String::from_utf8(output.stdout).expect("utf8 stdout");
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("one JSON line");
    assert_eq!(value["type"], "preview");
    let payload = &value["payload"];
    assert_eq!(payload["pair"], "XAUUSD");
    assert_eq!(payload["decimals"], 2);
    assert_eq!(payload["tp1"], "$2993.50");
    assert_eq!(payload["tp3"], "$2985.50");
    assert_eq!(payload["sl"], "$3000.50");
}

#[test]
fn test_preview_custom_pair_uses_decimals() {
    signalcast()
        .args(["preview", "FOO", "10", "buy_limit", "--decimals", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$10.0"));
}

#[test]
fn test_preview_rejects_out_of_range_decimals() {
    signalcast()
        .args(["preview", "FOO", "10", "buy_limit", "--decimals", "40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("decimal count 40"));
}

#[test]
fn test_failure_names_the_subcommand() {
    signalcast()
        .args(["preview", "FOO", "10", "buy_limit", "--decimals", "40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("`preview` failed: "));
}

#[test]
fn test_check_config_without_file_uses_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("missing.toml");

    signalcast()
        .args(["check", "config", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("using defaults"))
        .stdout(predicate::str::contains("Discord token not configured"));
}

#[test]
fn test_check_config_reports_split_token() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[discord]\nregister_commands = false\n").expect("write config");

    signalcast()
        .env("DISCORD_TOKEN_PART1", "abc.")
        .env("DISCORD_TOKEN_PART2", "def")
        .env("DISCORD_CLIENT_ID", "123456789")
        .args(["check", "config", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Discord token detected"))
        .stdout(predicate::str::contains("123456789"))
        .stdout(predicate::str::contains("abc.def").not());
}

#[test]
fn test_check_config_rejects_invalid_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[logging]\nformat = \"xml\"\n").expect("write config");

    signalcast()
        .args(["check", "config", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("logging.format"));
}

#[test]
fn test_run_without_token_fails_fast() {
    let dir = TempDir::new().expect("temp dir");

    signalcast()
        .current_dir(dir.path())
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DISCORD_TOKEN"));
}
