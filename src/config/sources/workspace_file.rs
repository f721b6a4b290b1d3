//! Workspace config file source: `.vsettings.toml` in the invocation directory.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};
use std::path::Path;

pub const WORKSPACE_CONFIG_FILE: &str = ".vsettings.toml";

/// Add the workspace config file to builder when present.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    cwd: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = cwd.join(WORKSPACE_CONFIG_FILE);
    if !path.is_file() {
        return Ok(builder);
    }
    Ok(builder.add_source(File::from(path).format(FileFormat::Toml)))
}
