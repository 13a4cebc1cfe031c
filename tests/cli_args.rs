//! Tests for CLI argument parsing against the built binary.
//!
//! Only paths that exit before the terminal is taken over are exercised.

mod common;

use common::temp_config;
use std::process::Command;

fn big_red_button_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_big-red-button"))
}

#[test]
fn help_lists_options() {
    let output = big_red_button_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--tick-ms"));
    assert!(stdout.contains("--particles"));
}

#[test]
fn version_matches_package() {
    let output = big_red_button_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_config_exits_with_error() {
    let output = big_red_button_cmd()
        .arg("--config")
        .arg("/nonexistent/big-red-button.toml")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to read config file"));
}

#[test]
fn invalid_override_exits_with_error() {
    let (_dir, path) = temp_config("");
    let output = big_red_button_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--tick-ms")
        .arg("0")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tick_ms must be greater than zero"));
}

#[test]
fn unknown_flag_is_rejected() {
    let output = big_red_button_cmd()
        .arg("--detonate-now")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}
