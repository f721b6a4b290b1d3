//! CLI route: single route table and run context. Dispatches to the operations and presentation.

use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_init_summary, format_status_json, format_status_text, format_sync_summary,
};
use crate::config::{ConfigLoader, ToolConfig};
use crate::error::ApiError;
use crate::init::initialize;
use crate::repo::resolve_repo_root;
use crate::settings::SettingsPaths;
use crate::status::inspect;
use crate::sync::synchronize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info_span};

/// Runtime context for CLI execution: configuration, invocation directory, and
/// console preferences.
pub struct RunContext {
    config: ToolConfig,
    cwd: PathBuf,
    root_override: Option<PathBuf>,
    color: bool,
}

impl RunContext {
    /// Load configuration from an explicit file or the layered defaults for `cwd`.
    pub fn load_config(cwd: &Path, config_path: Option<&Path>) -> Result<ToolConfig, ApiError> {
        match config_path {
            Some(path) => ConfigLoader::load_from_file(path),
            None => ConfigLoader::load(cwd),
        }
    }

    pub fn new(config: ToolConfig, cwd: PathBuf, root_override: Option<PathBuf>, color: bool) -> Self {
        Self {
            config,
            cwd,
            root_override,
            color,
        }
    }

    /// Repository root: `--root`, then `workspace.repo_root`, then git.
    pub fn repo_root(&self) -> Result<PathBuf, ApiError> {
        let explicit = self
            .root_override
            .as_deref()
            .or(self.config.workspace.repo_root.as_deref());
        resolve_repo_root(explicit, &self.cwd)
    }

    /// Artifact paths for an optional `--dir`; relative directories resolve against cwd.
    pub fn settings_paths(&self, dir: Option<&Path>) -> Result<SettingsPaths, ApiError> {
        let root = self.repo_root()?;
        let dir = dir.map(|d| {
            if d.is_absolute() {
                d.to_path_buf()
            } else {
                self.cwd.join(d)
            }
        });
        Ok(SettingsPaths::for_repo(&root, dir.as_deref()))
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let span = info_span!("command", name = command_name(command));
        let _entered = span.enter();
        let started = Instant::now();

        let result = self.execute_inner(command);
        let elapsed_ms = started.elapsed().as_millis() as u64;
        match result {
            Ok(_) => debug!(elapsed_ms, "Command finished"),
            Err(ref e) => debug!(elapsed_ms, error = %e, "Command failed"),
        }
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        let paths = self.settings_paths(command.dir().map(PathBuf::as_path))?;
        debug!(
            base_dir = %paths.base_dir.display(),
            ignore_file = %paths.ignore_file.display(),
            "Resolved settings paths"
        );

        match command {
            Commands::Init { .. } => {
                let summary = initialize(&paths)?;
                Ok(format_init_summary(&summary, &paths.ignore_file, self.color))
            }
            Commands::Sync { .. } => {
                let summary = synchronize(&paths)?;
                Ok(format_sync_summary(&summary, &paths.working, self.color))
            }
            Commands::Status { format, .. } => {
                let status = inspect(&paths)?;
                if format == "json" {
                    format_status_json(&status)
                } else {
                    Ok(format_status_text(&status, self.color))
                }
            }
        }
    }
}
