//! Config loading entry points.

use super::merge::merge_policy;
use super::sources::{environment, global_file, workspace_file};
use super::ToolConfig;
use crate::error::ApiError;
use config::builder::DefaultState;
use config::{ConfigBuilder, File, FileFormat};
use std::path::Path;
use tracing::debug;

/// Loads `ToolConfig` from the layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, global file, workspace file (relative to `cwd`), then environment.
    pub fn load(cwd: &Path) -> Result<ToolConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, cwd)?;
        Self::finish(environment::add_to_builder(builder))
    }

    /// Load defaults, the given file (required), then environment.
    pub fn load_from_file(path: &Path) -> Result<ToolConfig, ApiError> {
        debug!(config_path = %path.display(), "Loading explicit configuration file");
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        Self::finish(environment::add_to_builder(builder))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<ToolConfig, ApiError> {
        let config: ToolConfig = builder.build()?.try_deserialize()?;
        config.validate().map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(messages.join("; "))
        })?;
        Ok(config)
    }
}
