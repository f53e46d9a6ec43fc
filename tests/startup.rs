// Startup tests: the relay must refuse to serve without credentials

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn run_relay_in(dir: &Path, env: &[(&str, &str)]) -> Output {
    // Empty environment; `dir` holds no .env and at most a config/ folder
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shiprate-relay"));
    cmd.env_clear().current_dir(dir).env("PORT", "0");
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to run relay binary")
}

fn run_relay(env: &[(&str, &str)]) -> Output {
    run_relay_in(&std::env::temp_dir(), env)
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("shiprate-relay-{}-{}", std::process::id(), name));
    std::fs::create_dir_all(dir.join("config")).unwrap();
    dir
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[test]
fn test_exits_without_credentials() {
    let output = run_relay(&[]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_exits_without_secret() {
    let output = run_relay(&[("SHIPSTATION_API_KEY", "key")]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_exits_without_key() {
    let output = run_relay(&[("SHIPSTATION_API_SECRET", "secret")]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_exits_with_empty_key() {
    let output = run_relay(&[
        ("SHIPSTATION_API_KEY", ""),
        ("SHIPSTATION_API_SECRET", "secret"),
    ]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_default_log_format_is_json() {
    let output = run_relay(&[]);
    let lines = stdout_lines(&output);

    assert!(!lines.is_empty());
    for line in &lines {
        let event: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(event.get("level").is_some());
    }
}

#[test]
fn test_log_format_from_prefixed_env() {
    let output = run_relay(&[("RELAY__LOGGING__FORMAT", "pretty")]);
    let lines = stdout_lines(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(lines.iter().any(|line| line.contains("ERROR")));
    assert!(lines.iter().all(|line| serde_json::from_str::<serde_json::Value>(line).is_err()));
}

#[test]
fn test_log_format_from_config_file() {
    let dir = scratch_dir("logging-file");
    std::fs::write(
        dir.join("config").join("default.toml"),
        "[logging]\nformat = \"pretty\"\n",
    )
    .unwrap();

    let output = run_relay_in(&dir, &[]);
    let lines = stdout_lines(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(lines.iter().any(|line| line.contains("ERROR")));
    assert!(lines.iter().all(|line| serde_json::from_str::<serde_json::Value>(line).is_err()));

    let _ = std::fs::remove_dir_all(dir);
}
