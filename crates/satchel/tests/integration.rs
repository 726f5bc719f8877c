//! End-to-end CLI tests for the `satchel` binary.
//!
//! Each test runs the demonstration binary as a subprocess via `assert_cmd`
//! and checks its output; file round-trip tests use their own temporary
//! directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Build a `Command` targeting the cargo-built `satchel` binary.
fn satchel() -> Command {
    Command::cargo_bin("satchel").unwrap()
}

#[test]
fn demo_prints_settings_and_instance_check() {
    satchel()
        .assert()
        .success()
        .stdout(predicate::str::contains("Current settings:"))
        .stdout(predicate::str::contains("AppName = My Application"))
        .stdout(predicate::str::contains("Version = 3.4"))
        .stdout(predicate::str::contains("Same instance: true"));
}

#[test]
fn quiet_mode_prints_only_settings_lines() {
    let output = satchel().arg("--quiet").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "AppName = My Application\nVersion = 3.4\n");
}

#[test]
fn json_mode_emits_settings_object() {
    let output = satchel().arg("--json").output().unwrap();
    assert!(
        output.status.success(),
        "demo failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["settings"]["AppName"], "My Application");
    assert_eq!(json["settings"]["Version"], "3.4");
    assert_eq!(json["same_instance"], true);
    // No --file given, so the round-trip fields are omitted entirely.
    assert!(json.get("file").is_none());
    assert!(json.get("reloaded").is_none());
}

#[test]
fn file_roundtrip_writes_properties_and_reloads() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("app.properties");

    satchel()
        .args(["--file", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Reloaded 2 settings from {}",
            path.display()
        )));

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# App configuration\n"));
    assert!(content.contains("AppName=My Application\n"));
    assert!(content.contains("Version=3.4\n"));
}

#[test]
fn file_roundtrip_json_includes_reloaded_settings() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("app.properties");

    let output = satchel()
        .args(["--json", "--file", path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["file"], path.display().to_string());
    assert_eq!(json["reloaded"]["AppName"], "My Application");
    assert_eq!(json["reloaded"]["Version"], "3.4");
}

#[test]
fn unwritable_file_path_fails_with_error() {
    satchel()
        .args(["--file", "/nonexistent/dir/app.properties"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to save settings"));
}

#[test]
fn json_mode_reports_errors_as_json() {
    let output = satchel()
        .args(["--json", "--file", "/nonexistent/dir/app.properties"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("failed to save settings")
    );
}
