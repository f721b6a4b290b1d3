//! `sync`: rebuild working settings from the project baseline and local overrides.

use crate::error::ApiError;
use crate::settings::{
    merge_settings, read_settings, reconcile, write_settings, ReconcileReport, SettingsPaths,
};
use tracing::info;

/// Summary of a `sync` run
#[derive(Debug, Clone)]
pub struct SyncSummary {
    pub reconcile: ReconcileReport,
    /// Number of top-level keys written to the working file.
    pub merged_keys: usize,
    /// Keys contributed or overridden by local settings, in local order.
    pub overridden: Vec<String>,
}

/// Reconcile, then overwrite working settings with `project ⊕ local`.
///
/// The previous working content is not consulted; it is replaced wholesale.
pub fn synchronize(paths: &SettingsPaths) -> Result<SyncSummary, ApiError> {
    let reconcile = reconcile(paths)?;

    let project = read_settings(&paths.project)?;
    let local = read_settings(&paths.local)?;
    let merged = merge_settings(&project, &local);
    write_settings(&paths.working, &merged)?;

    info!(
        path = %paths.working.display(),
        keys = merged.len(),
        overrides = local.len(),
        "Wrote merged working settings"
    );

    Ok(SyncSummary {
        reconcile,
        merged_keys: merged.len(),
        overridden: local.keys().cloned().collect(),
    })
}
