//! Runs the `ddg` binary against a throwaway config file. No network access:
//! every case here stops before a request would be made.

use std::path::Path;
use std::process::{Command, Output, Stdio};

fn ddg(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ddg"))
        .args(args)
        .env("DDG_CONFIG", config)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run ddg")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn version_prints_package_version() {
    let dir = tempfile::tempdir().unwrap();
    let out = ddg(&dir.path().join(".ddg.conf"), &["version"]);

    assert!(out.status.success());
    assert!(stdout(&out).contains(&format!("ddg version {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn unknown_command_falls_through_to_help() {
    let dir = tempfile::tempdir().unwrap();
    let out = ddg(&dir.path().join(".ddg.conf"), &["frobnicate"]);

    assert!(out.status.success());
    assert!(stderr(&out).contains("Unknown command: frobnicate"));
    assert!(stdout(&out).contains("Usage: ddg <command>"));
}

#[test]
fn gen_without_setup_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join(".ddg.conf");
    let out = ddg(&config, &["gen"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Please run ddg to get started"));
    assert!(!config.exists());
}

#[test]
fn settings_show_and_update() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join(".ddg.conf");
    std::fs::write(
        &config,
        "api = A\nclipboard = yes\nddggen = yes\nsetupcomplete = true\n",
    )
    .unwrap();

    let out = ddg(&config, &["settings", "--clipboard", "no"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Settings updated."));
    assert_eq!(
        std::fs::read_to_string(&config).unwrap(),
        "api = A\nclipboard = no\nddggen = yes\nsetupcomplete = true\n"
    );

    let out = ddg(&config, &["SET"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("- API key: A"));
    assert!(text.contains("- Clipboard copy: no"));
}

#[test]
fn reset_without_confirmation_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join(".ddg.conf");
    let original = "api = A\nclipboard = yes\nddggen = yes\nsetupcomplete = true\n";
    std::fs::write(&config, original).unwrap();

    let out = ddg(&config, &["reset"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Reset cancelled."));
    assert_eq!(std::fs::read_to_string(&config).unwrap(), original);
}

#[test]
fn bare_run_with_empty_input_fails_setup() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join(".ddg.conf");
    let out = ddg(&config, &[]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("Enter your API key"));
    assert!(stderr(&out).contains("no API key provided"));
    assert!(!config.exists());
}

#[test]
fn bare_run_with_auto_generate_off_shows_help() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join(".ddg.conf");
    std::fs::write(
        &config,
        "api = A\nclipboard = yes\nddggen = no\nsetupcomplete = true\n",
    )
    .unwrap();

    let out = ddg(&config, &[]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Usage: ddg <command>"));
}
