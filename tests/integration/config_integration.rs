//! Integration tests for configuration loading through the binary.

use serde_json::json;
use std::process::Command;

use crate::integration::TestRepo;

#[test]
fn test_repo_root_from_workspace_config_file() {
    let repo = TestRepo::new();
    let checkout = repo.root().join("checkout");
    std::fs::create_dir_all(&checkout).unwrap();
    repo.write(
        &repo.root().join(".vsettings.toml"),
        &format!("[workspace]\nrepo_root = {:?}\n", checkout.display().to_string()),
    );

    let bin = env!("CARGO_BIN_EXE_vsettings");
    let output = Command::new(bin)
        .current_dir(repo.root())
        .env("HOME", repo.home())
        .env("XDG_CONFIG_HOME", repo.home().join(".config"))
        .env("NO_COLOR", "1")
        .arg("init")
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(checkout.join(".gitignore").exists());
    assert_eq!(
        repo.read_json(&checkout.join(".vscode").join("settings.json")),
        json!({})
    );
}

#[test]
fn test_explicit_config_with_invalid_value_fails() {
    let repo = TestRepo::new();
    let config = repo.root().join("bad.toml");
    repo.write(&config, "[logging]\nformat = \"yaml\"\n");

    let bin = env!("CARGO_BIN_EXE_vsettings");
    let output = Command::new(bin)
        .current_dir(repo.root())
        .env("HOME", repo.home())
        .arg("--root")
        .arg(repo.root())
        .arg("--config")
        .arg(&config)
        .arg("status")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration error"), "stderr={}", stderr);
    assert!(!repo.root().join(".vscode").exists());
}
