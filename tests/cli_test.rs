//! Integration tests for the netflags binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const FLAGS: [&str; 4] = [
    "OPENCLAW_TELEGRAM_ENABLE_AUTO_SELECT_FAMILY",
    "OPENCLAW_TELEGRAM_DISABLE_AUTO_SELECT_FAMILY",
    "OPENCLAW_TELEGRAM_FORCE_CURL",
    "OPENCLAW_TELEGRAM_DISABLE_CURL",
];

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".netflags");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.yml"), config).unwrap();
    temp
}

/// A command with the toggle variables cleared.
fn netflags(dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(cargo_bin("netflags"));
    cmd.current_dir(dir).env("NO_COLOR", "1");
    for var in FLAGS {
        cmd.env_remove(var);
    }
    cmd
}

const CONFIG: &str = r#"
channels:
  telegram:
    network:
      autoSelectFamily: false
      forceCurl: true
"#;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("netflags"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Resolve Telegram network toggles"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("netflags"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_resolves() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    netflags(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("forceCurl"))
        .stdout(predicate::str::contains("false (default)"));
    Ok(())
}

#[test]
fn cli_resolve_json_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = netflags(temp.path())
        .args(["resolve", "--json", "--node-major", "22"])
        .output()?;
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        parsed,
        serde_json::json!({
            "autoSelectFamily": { "value": true, "source": "default-node22" },
            "forceCurl": { "value": false, "source": "default" },
        })
    );
    Ok(())
}

#[test]
fn cli_resolve_json_undecided_below_threshold() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = netflags(temp.path())
        .args(["resolve", "--json", "--node-major", "20"])
        .output()?;

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["autoSelectFamily"], serde_json::json!({ "value": null }));
    Ok(())
}

#[test]
fn cli_resolve_reads_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    netflags(temp.path())
        .args(["resolve", "--node-major", "22"])
        .assert()
        .success()
        .stdout(predicate::str::contains("false (config)"))
        .stdout(predicate::str::contains("true (config)"));
    Ok(())
}

#[test]
fn cli_env_flags_override_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    let output = netflags(temp.path())
        .env("OPENCLAW_TELEGRAM_ENABLE_AUTO_SELECT_FAMILY", "1")
        .env("OPENCLAW_TELEGRAM_DISABLE_AUTO_SELECT_FAMILY", "1")
        .env("OPENCLAW_TELEGRAM_DISABLE_CURL", "1")
        .args(["resolve", "--json", "--no-probe"])
        .output()?;

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        parsed,
        serde_json::json!({
            "autoSelectFamily": {
                "value": true,
                "source": "env:OPENCLAW_TELEGRAM_ENABLE_AUTO_SELECT_FAMILY",
            },
            "forceCurl": {
                "value": false,
                "source": "env:OPENCLAW_TELEGRAM_DISABLE_CURL",
            },
        })
    );
    Ok(())
}

#[test]
fn cli_project_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    let elsewhere = TempDir::new()?;
    netflags(elsewhere.path())
        .arg("--project")
        .arg(temp.path())
        .args(["resolve", "--no-probe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true (config)"));
    Ok(())
}

#[test]
fn cli_invalid_config_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("channels: [");
    netflags(temp.path())
        .args(["resolve", "--no-probe"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn cli_config_shows_network() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    netflags(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.yml"))
        .stdout(predicate::str::contains("autoSelectFamily"));
    Ok(())
}

#[test]
fn cli_config_without_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    netflags(temp.path())
        .arg("config")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No configuration found"));
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("netflags"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("netflags"));
    Ok(())
}

#[test]
fn cli_quiet_resolve_still_prints_decisions() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    netflags(temp.path())
        .args(["--quiet", "resolve", "--no-probe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("autoSelectFamily: false (config)"))
        .stdout(predicate::str::contains("forceCurl: true (config)"))
        .stdout(predicate::str::contains("Telegram network").not());
    Ok(())
}

#[test]
fn cli_local_only_config_is_read() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let dir = temp.path().join(".netflags");
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("config.local.yml"), CONFIG)?;
    netflags(temp.path())
        .args(["resolve", "--no-probe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true (config)"));
    Ok(())
}
