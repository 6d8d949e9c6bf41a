// Integration tests for CLI commands
// Each test runs the built binary against a config in a temp directory, so
// nothing touches the user's real data directory.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::{NamedTempFile, TempDir};

fn write_config(dir: &Path) -> std::path::PathBuf {
    let config_path = dir.join("config.toml");
    let config = format!(
        "[storage]\ndir = \"{}\"\n\n[simulation]\nvote_delay_ms = 0\nconnect_delay_ms = 0\nseed = 7\n\n[logging]\nlevel = \"warn\"\n",
        dir.join("state").display()
    );
    std::fs::write(&config_path, config).unwrap();
    config_path
}

fn run(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_daoscope"))
        .args(args)
        .arg("--config")
        .arg(config)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_daoscope"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("DAO governance dashboard"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("vote"));
    assert!(stdout.contains("watch"));
    assert!(stdout.contains("connect"));
}

#[test]
fn test_cli_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_daoscope"))
        .arg("version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("daoscope"));
}

#[test]
fn test_cli_list_active_json() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path());

    let output = run(&config, &["list", "--status", "active", "--json"]);
    assert!(output.status.success());

    let proposals: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = proposals
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "2", "4", "5"]);
}

#[test]
fn test_cli_show_unknown_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path());

    let output = run(&config, &["show", "42"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Proposal '42' not found"));
}

#[test]
fn test_cli_vote_reports_new_tally() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path());

    let output = run(&config, &["vote", "1", "yes"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("weight 100"));
    assert!(stdout.contains("Yes: 12600"));
}

#[test]
fn test_cli_vote_rejects_bad_choice() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path());

    let output = run(&config, &["vote", "1", "maybe"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_wallet_session_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path());
    let record = temp_dir.path().join("state").join("wallet_state.json");

    assert!(run(&config, &["connect"]).status.success());
    assert!(record.exists());

    let status = run(&config, &["wallet"]);
    let stdout = String::from_utf8_lossy(&status.stdout);
    assert!(stdout.contains("7xKX...gAsU"));

    // A connected wallet lends its voting power to votes
    let vote = run(&config, &["vote", "2", "no"]);
    let stdout = String::from_utf8_lossy(&vote.stdout);
    assert!(stdout.contains("weight 1250"));

    assert!(run(&config, &["disconnect"]).status.success());
    assert!(!record.exists());

    let status = run(&config, &["wallet"]);
    assert!(String::from_utf8_lossy(&status.stdout).contains("not connected"));
}

#[test]
fn test_cli_malformed_wallet_record_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path());
    std::fs::create_dir_all(temp_dir.path().join("state")).unwrap();
    std::fs::write(temp_dir.path().join("state").join("wallet_state.json"), "{oops").unwrap();

    let status = run(&config, &["wallet"]);
    assert!(status.status.success());
    assert!(String::from_utf8_lossy(&status.stdout).contains("not connected"));
}

#[test]
fn test_cli_with_invalid_config() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[simulation").unwrap();

    let output = run(temp_file.path(), &["list"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"));
}

#[test]
fn test_cli_power() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path());

    let output = run(
        &config,
        &["power", "--tokens", "1000", "--months", "12", "--delegate"],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2.0x"));
    assert!(stdout.contains("2200.00"));
}

#[test]
fn test_cli_daos_sorted_by_name() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path());

    let output = run(&config, &["daos", "--sort", "name", "--asc", "--json"]);
    assert!(output.status.success());

    let daos: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = daos
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Mango DAO", "Metaplex DAO", "Serum DAO", "Solana Foundation"]);
}

#[test]
fn test_cli_compare() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path());

    let output = run(&config, &["compare", "2", "3"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 selected, max 4"));
    assert!(stdout.contains("Serum DAO"));

    let output = run(&config, &["compare", "1", "42"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("DAO '42' not found"));
}
