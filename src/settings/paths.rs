//! Canonical artifact locations derived from a base directory and repository root.

use std::path::{Path, PathBuf};

/// Conventional name of the editor settings directory under the repository root.
pub const SETTINGS_DIR_NAME: &str = ".vscode";

pub const WORKING_FILE: &str = "settings.json";
pub const BACKUP_FILE: &str = "settings.bak.json";
pub const PROJECT_FILE: &str = "settings-project.json";
pub const LOCAL_FILE: &str = "settings-local.json";
pub const IGNORE_FILE: &str = ".gitignore";

/// Resolved locations of every artifact the tool reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsPaths {
    pub base_dir: PathBuf,
    pub ignore_file: PathBuf,
    pub working: PathBuf,
    pub backup: PathBuf,
    pub project: PathBuf,
    pub local: PathBuf,
}

impl SettingsPaths {
    /// Derive all artifact paths. Pure; touches nothing on disk.
    pub fn resolve(base_dir: &Path, repo_root: &Path) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            ignore_file: repo_root.join(IGNORE_FILE),
            working: base_dir.join(WORKING_FILE),
            backup: base_dir.join(BACKUP_FILE),
            project: base_dir.join(PROJECT_FILE),
            local: base_dir.join(LOCAL_FILE),
        }
    }

    /// `<repo_root>/.vscode`
    pub fn default_base_dir(repo_root: &Path) -> PathBuf {
        repo_root.join(SETTINGS_DIR_NAME)
    }

    /// Resolve with an optional explicit base directory, falling back to the
    /// conventional directory under the repository root.
    pub fn for_repo(repo_root: &Path, dir: Option<&Path>) -> Self {
        match dir {
            Some(dir) => Self::resolve(dir, repo_root),
            None => Self::resolve(&Self::default_base_dir(repo_root), repo_root),
        }
    }
}
