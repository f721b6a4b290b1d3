//! Reconciliation: create whichever settings artifacts are missing.
//!
//! Safe to run any number of times. An artifact that already exists is never
//! rewritten, with one exception: the backup snapshot is refreshed whenever
//! local overrides are derived from a non-empty working file.

use crate::error::{ApiError, StorageError};
use crate::settings::document::{diff_settings, read_settings, write_settings, SettingsMap};
use crate::settings::paths::SettingsPaths;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// An artifact created during reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Directory,
    Working,
    Project,
    Backup,
    Local,
}

impl Artifact {
    pub fn label(&self) -> &'static str {
        match self {
            Artifact::Directory => "settings directory",
            Artifact::Working => "working settings",
            Artifact::Project => "project settings",
            Artifact::Backup => "backup settings",
            Artifact::Local => "local settings",
        }
    }

    pub fn path<'a>(&self, paths: &'a SettingsPaths) -> &'a Path {
        match self {
            Artifact::Directory => &paths.base_dir,
            Artifact::Working => &paths.working,
            Artifact::Project => &paths.project,
            Artifact::Backup => &paths.backup,
            Artifact::Local => &paths.local,
        }
    }
}

/// What a reconciliation pass created, in creation order.
#[derive(Debug, Clone, Default)]
pub struct ReconcileReport {
    pub created: Vec<(Artifact, PathBuf)>,
}

impl ReconcileReport {
    fn record(&mut self, artifact: Artifact, paths: &SettingsPaths) {
        let path = artifact.path(paths).to_path_buf();
        info!(artifact = artifact.label(), path = %path.display(), "Created");
        self.created.push((artifact, path));
    }

    pub fn created(&self, artifact: Artifact) -> bool {
        self.created.iter().any(|(a, _)| *a == artifact)
    }

    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
    }
}

/// Ensure the settings directory and all settings files exist and that local
/// overrides have been derived.
pub fn reconcile(paths: &SettingsPaths) -> Result<ReconcileReport, ApiError> {
    let mut report = ReconcileReport::default();

    if !paths.base_dir.is_dir() {
        fs::create_dir_all(&paths.base_dir).map_err(|e| StorageError::io(&paths.base_dir, e))?;
        report.record(Artifact::Directory, paths);
    }

    if !paths.working.exists() {
        write_settings(&paths.working, &SettingsMap::new())?;
        report.record(Artifact::Working, paths);
    }

    if !paths.project.exists() {
        fs::copy(&paths.working, &paths.project).map_err(|e| StorageError::io(&paths.project, e))?;
        report.record(Artifact::Project, paths);
    }

    if paths.local.exists() {
        debug!(path = %paths.local.display(), "Local settings present, skipping derivation");
        return Ok(report);
    }

    let working = read_settings(&paths.working)?;
    let project = read_settings(&paths.project)?;

    if !working.is_empty() {
        fs::copy(&paths.working, &paths.backup).map_err(|e| StorageError::io(&paths.backup, e))?;
        report.record(Artifact::Backup, paths);
    }

    let local = diff_settings(&working, &project);
    debug!(keys = local.len(), "Derived local overrides");
    write_settings(&paths.local, &local)?;
    report.record(Artifact::Local, paths);

    Ok(report)
}
