//! Settings status: artifact presence, ignore coverage, and drift.
//!
//! Read-only. Drift is measured between the working file and the merge of
//! project and local settings, the state `sync` would produce.

use crate::error::ApiError;
use crate::ignore::{present_entries, read_ignore_file};
use crate::settings::document::drifted_keys;
use crate::settings::{merge_settings, read_settings, SettingsPaths};
use serde::{Deserialize, Serialize};

/// Presence of one artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactStatus {
    pub name: String,
    pub path: String,
    pub exists: bool,
}

/// One seeded ignore entry and whether the ignore file mentions it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IgnoreEntryStatus {
    pub entry: String,
    pub present: bool,
}

/// Drift between working settings and `project ⊕ local`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftStatus {
    pub in_sync: bool,
    pub drifted_keys: Vec<String>,
}

/// Full status for `vsettings status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsStatus {
    pub base_dir: String,
    pub artifacts: Vec<ArtifactStatus>,
    pub ignore_entries: Vec<IgnoreEntryStatus>,
    /// Absent unless working, project, and local settings all exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drift: Option<DriftStatus>,
}

/// Inspect the settings directory without modifying anything.
pub fn inspect(paths: &SettingsPaths) -> Result<SettingsStatus, ApiError> {
    let artifacts = [
        ("working", &paths.working),
        ("project", &paths.project),
        ("local", &paths.local),
        ("backup", &paths.backup),
        ("ignore", &paths.ignore_file),
    ]
    .iter()
    .map(|(name, path)| ArtifactStatus {
        name: name.to_string(),
        path: path.display().to_string(),
        exists: path.exists(),
    })
    .collect();

    let ignore_content = read_ignore_file(&paths.ignore_file)?;
    let ignore_entries = present_entries(&ignore_content)
        .into_iter()
        .map(|(entry, present)| IgnoreEntryStatus {
            entry: entry.to_string(),
            present,
        })
        .collect();

    let drift = if paths.working.exists() && paths.project.exists() && paths.local.exists() {
        let working = read_settings(&paths.working)?;
        let expected = merge_settings(&read_settings(&paths.project)?, &read_settings(&paths.local)?);
        let drifted_keys = drifted_keys(&working, &expected);
        Some(DriftStatus {
            in_sync: drifted_keys.is_empty(),
            drifted_keys,
        })
    } else {
        None
    };

    Ok(SettingsStatus {
        base_dir: paths.base_dir.display().to_string(),
        artifacts,
        ignore_entries,
        drift,
    })
}
