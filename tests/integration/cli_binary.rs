//! End-to-end tests that run the compiled binary.

use serde_json::json;
use std::process::Command;
use tempfile::TempDir;

use crate::integration::{run_cli, TestRepo};

#[test]
fn test_cli_init_then_sync() {
    let repo = TestRepo::new();
    let paths = repo.paths();
    repo.write_json(&paths.working, &json!({"editor.fontSize": 14}));

    let output = run_cli(&repo, &["init"]);
    assert!(
        output.status.success(),
        "init should succeed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("settings-project.json"));
    assert!(stdout.contains("settings-local.json"));
    assert!(stdout.contains("settings.bak.json"));

    repo.write_json(&paths.local, &json!({"editor.fontSize": 16}));
    let output = run_cli(&repo, &["sync"]);
    assert!(output.status.success());
    assert_eq!(repo.read_json(&paths.working), json!({"editor.fontSize": 16}));
}

#[test]
fn test_cli_second_init_reports_nothing_created() {
    let repo = TestRepo::new();
    assert!(run_cli(&repo, &["init"]).status.success());

    let output = run_cli(&repo, &["init"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("All settings files already exist."));
    assert!(!stdout.contains("Created"));
}

#[test]
fn test_cli_sync_with_relative_dir() {
    let repo = TestRepo::new();
    let output = run_cli(&repo, &["sync", "--dir", "custom"]);
    assert!(output.status.success());
    assert!(repo.root().join("custom").join("settings.json").exists());
    assert!(!repo.root().join(".vscode").exists());
}

#[test]
fn test_cli_status_json() {
    let repo = TestRepo::new();
    assert!(run_cli(&repo, &["init"]).status.success());

    let output = run_cli(&repo, &["status", "--format", "json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["drift"]["in_sync"], json!(true));
    assert_eq!(value["ignore_entries"].as_array().unwrap().len(), 3);
}

#[test]
fn test_cli_malformed_settings_exit_non_zero() {
    let repo = TestRepo::new();
    let paths = repo.paths();
    repo.write(&paths.working, "{ nope");

    let output = run_cli(&repo, &["sync"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid JSON"), "stderr={}", stderr);
}

#[test]
fn test_cli_without_repository_fails_before_writing() {
    let temp = TempDir::new().unwrap();
    let outside = temp.path().join("not-a-repo");
    std::fs::create_dir_all(&outside).unwrap();

    let bin = env!("CARGO_BIN_EXE_vsettings");
    let output = Command::new(bin)
        .current_dir(&outside)
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"))
        .env("GIT_CEILING_DIRECTORIES", temp.path())
        .env("NO_COLOR", "1")
        .arg("init")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("repository root"), "stderr={}", stderr);
    assert!(!outside.join(".gitignore").exists());
    assert!(!outside.join(".vscode").exists());
}

#[test]
fn test_cli_output_ends_with_single_newline() {
    let repo = TestRepo::new();
    for args in [&["init"][..], &["init"][..], &["sync"][..], &["status"][..]] {
        let output = run_cli(&repo, args);
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.ends_with('\n'), "{:?}: {:?}", args, stdout);
        assert!(!stdout.ends_with("\n\n"), "{:?}: {:?}", args, stdout);
    }
}

#[test]
fn test_cli_status_rejects_unknown_format() {
    let repo = TestRepo::new();
    let output = run_cli(&repo, &["status", "--format", "yaml"]);
    assert!(!output.status.success());
    assert!(!repo.paths().base_dir.exists());
}
