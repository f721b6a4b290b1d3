//! Configuration System
//!
//! Layered configuration built with the `config` crate: merge-policy defaults,
//! then the user's global file, then the workspace `.vsettings.toml`, then
//! `VSETTINGS_*` environment variables. An explicit `--config` file replaces
//! both file layers.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Repository settings
    #[serde(default)]
    pub workspace: WorkspaceConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Repository settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Repository root. When unset, `git rev-parse --show-toplevel` decides.
    #[serde(default)]
    pub repo_root: Option<PathBuf>,
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Logging(String),
    Workspace(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
            ValidationError::Workspace(msg) => write!(f, "Workspace: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ToolConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if let Some(ref root) = self.workspace.repo_root {
            if root.as_os_str().is_empty() {
                errors.push(ValidationError::Workspace(
                    "repo_root cannot be empty".to_string(),
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
