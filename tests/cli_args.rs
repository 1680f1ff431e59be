//! Tests for CLI argument parsing.
//!
//! Every case here fails or exits before the terminal is touched.

use std::process::Command;

fn hello_mvi_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hello-mvi"))
}

#[test]
fn test_help_lists_options() {
    let output = hello_mvi_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--tick-rate"));
    assert!(stdout.contains("--log-file"));
}

#[test]
fn test_version_flag() {
    let output = hello_mvi_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_config_file_exits_with_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = hello_mvi_cmd()
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: Failed to read config file"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_out_of_range_tick_rate_exits_with_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "").unwrap();

    let output = hello_mvi_cmd()
        .arg("--config")
        .arg(&config_path)
        .arg("--tick-rate")
        .arg("1")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ui.tick_rate_ms"), "unexpected stderr: {}", stderr);
}

#[test]
fn test_non_numeric_tick_rate_is_usage_error() {
    let output = hello_mvi_cmd()
        .arg("--tick-rate")
        .arg("fast")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--tick-rate"));
}
