//! Integration tests for config warning behavior.
//!
//! These tests verify that the CLI properly warns users when the config file has errors.
//! `window close abc` loads config and then fails on the id without running any script.

use std::fs;
use std::process::Command;

fn run_close_invalid_id(home: &std::path::Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_arc"))
        .env("HOME", home)
        .args(["window", "close", "abc"])
        .output()
        .expect("Failed to execute arc")
}

#[test]
fn test_config_warning_on_invalid_toml() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_dir = temp_dir.path().join(".arc");
    fs::create_dir_all(&config_dir).expect("Failed to create .arc dir");
    fs::write(config_dir.join("config.toml"), "invalid toml [[[")
        .expect("Failed to write invalid config");

    let output = run_close_invalid_id(temp_dir.path());
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains("Warning: Could not load config"),
        "Expected warning in stderr, got: {}",
        stderr
    );
    assert!(
        stderr.contains("Tip: Check ~/.arc/config.toml"),
        "Expected tip in stderr, got: {}",
        stderr
    );
    // Falls back to defaults and keeps going to the id parse error.
    assert!(stderr.contains("Invalid window id 'abc'"));
}

#[test]
fn test_config_warning_on_invalid_values() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_dir = temp_dir.path().join(".arc");
    fs::create_dir_all(&config_dir).expect("Failed to create .arc dir");
    fs::write(config_dir.join("config.toml"), "[script]\ntimeout_secs = 2\n")
        .expect("Failed to write config");

    let output = run_close_invalid_id(temp_dir.path());
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains("Warning: Could not load config"),
        "Expected warning in stderr, got: {}",
        stderr
    );
    assert!(stderr.contains("script.timeout_secs"));
}

#[test]
fn test_no_warning_with_valid_config() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_dir = temp_dir.path().join(".arc");
    fs::create_dir_all(&config_dir).expect("Failed to create .arc dir");
    fs::write(config_dir.join("config.toml"), "[app]\nname = \"Arc\"\n")
        .expect("Failed to write config");

    let output = run_close_invalid_id(temp_dir.path());
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !stderr.contains("Warning: Could not load config"),
        "Unexpected warning in stderr: {}",
        stderr
    );
}

#[test]
fn test_no_warning_without_config_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = run_close_invalid_id(temp_dir.path());
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !stderr.contains("Warning: Could not load config"),
        "Unexpected warning in stderr: {}",
        stderr
    );
}
