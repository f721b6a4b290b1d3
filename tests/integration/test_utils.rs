//! Shared test utilities for integration tests
//!
//! A `TestRepo` is a temporary directory standing in for a repository root.
//! Binary runs get an isolated config and data home so a developer's own
//! vsettings configuration never leaks into a test.

use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;
use vsettings::settings::SettingsPaths;

pub struct TestRepo {
    pub dir: TempDir,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("home")).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn paths(&self) -> SettingsPaths {
        SettingsPaths::for_repo(self.root(), None)
    }

    pub fn home(&self) -> PathBuf {
        self.root().join("home")
    }

    /// Write raw text to a path, creating parent directories.
    pub fn write(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn write_json(&self, path: &Path, value: &Value) {
        self.write(path, &serde_json::to_string(value).unwrap());
    }

    pub fn read_json(&self, path: &Path) -> Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    pub fn read(&self, path: &Path) -> String {
        std::fs::read_to_string(path).unwrap()
    }
}

/// Run the vsettings binary against `repo` with `--root` so no git checkout is needed.
pub fn run_cli(repo: &TestRepo, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_vsettings");
    Command::new(bin)
        .current_dir(repo.root())
        .env("HOME", repo.home())
        .env("XDG_CONFIG_HOME", repo.home().join(".config"))
        .env("XDG_DATA_HOME", repo.home().join(".local/share"))
        .env_remove("VSETTINGS_LOG")
        .env("NO_COLOR", "1")
        .arg("--root")
        .arg(repo.root())
        .args(args)
        .output()
        .unwrap()
}
