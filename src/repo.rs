//! Repository root resolution.
//!
//! An explicitly configured root always wins. Without one, the root is the top
//! of the git working tree containing the current directory. A failed lookup is
//! fatal and happens before any file is touched.

use crate::error::ApiError;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Resolve the repository root: explicit value first, then git.
pub fn resolve_repo_root(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf, ApiError> {
    match explicit {
        Some(root) => {
            let root = if root.is_absolute() {
                root.to_path_buf()
            } else {
                cwd.join(root)
            };
            debug!(root = %root.display(), "Using configured repository root");
            Ok(root)
        }
        None => git_toplevel(cwd),
    }
}

/// Run `git rev-parse --show-toplevel` in `cwd`.
pub fn git_toplevel(cwd: &Path) -> Result<PathBuf, ApiError> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(cwd)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| ApiError::RepoRootNotFound(format!("Failed to execute git: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ApiError::RepoRootNotFound(format!(
            "git rev-parse --show-toplevel failed: {}",
            stderr.trim()
        )));
    }

    let toplevel = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if toplevel.is_empty() {
        return Err(ApiError::RepoRootNotFound(
            "git rev-parse --show-toplevel returned no path".to_string(),
        ));
    }

    // git prints forward slashes on every platform; dunce keeps Windows paths
    // free of the verbatim prefix.
    let root = dunce::canonicalize(&toplevel).unwrap_or_else(|_| PathBuf::from(&toplevel));
    debug!(root = %root.display(), "Discovered repository root via git");
    Ok(root)
}
