//! Integration tests for the StopScout CLI

use std::process::Command;

/// Test that the CLI prints usage when run without arguments
#[test]
fn test_cli_usage_without_args() {
    let output = Command::new("cargo")
        .args(&["run"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("stopscout"));
    assert!(stdout.contains("<place name>"));
    assert!(stdout.contains("serve"));
}

/// Test that the help flag prints usage and the required variables
#[test]
fn test_cli_help_flag() {
    let output = Command::new("cargo")
        .args(&["run", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("MAPBOX_TOKEN"));
    assert!(stdout.contains("WEATHER_API_KEY"));
}

/// Test that a lookup without credentials fails naming the missing variable
#[test]
fn test_lookup_without_credentials_names_missing_variable() {
    let output = Command::new("cargo")
        .args(&["run", "--", "Boston Common"])
        .env_remove("MAPBOX_TOKEN")
        .env_remove("MBTA_API_KEY")
        .env_remove("WEATHER_API_KEY")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("MAPBOX_TOKEN"),
        "expected the missing variable to be named, got: {}",
        stderr
    );
}
