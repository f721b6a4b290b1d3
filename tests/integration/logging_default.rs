//! Integration tests for logging destinations.
//!
//! Logs never land on stdout by default, so command output stays clean.

use crate::integration::{run_cli, TestRepo};

#[test]
fn test_default_logging_keeps_stdout_clean() {
    let repo = TestRepo::new();
    let output = run_cli(&repo, &["status", "--format", "json"]);
    assert!(output.status.success());
    // stdout must be exactly the JSON document
    let parsed: Result<serde_json::Value, _> = serde_json::from_slice(&output.stdout);
    assert!(parsed.is_ok(), "stdout={}", String::from_utf8_lossy(&output.stdout));
}

#[test]
fn test_verbose_logging_goes_to_stderr() {
    let repo = TestRepo::new();
    let output = run_cli(&repo, &["--verbose", "init"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Created"),
        "verbose mode should log created artifacts to stderr: {}",
        stderr
    );
}

#[test]
fn test_log_file_output() {
    let repo = TestRepo::new();
    let log_file = repo.root().join("logs").join("vsettings.log");
    let log_file_arg = log_file.display().to_string();
    let output = run_cli(
        &repo,
        &[
            "--log-level",
            "info",
            "--log-output",
            "file",
            "--log-file",
            &log_file_arg,
            "init",
        ],
    );
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).trim().is_empty());

    let content = std::fs::read_to_string(&log_file).unwrap();
    assert!(content.contains("vsettings starting"));
}

#[test]
fn test_quiet_suppresses_logs() {
    let repo = TestRepo::new();
    let output = run_cli(&repo, &["--quiet", "init"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).trim().is_empty());
}
