//! `init`: seed the repository ignore file, then reconcile settings artifacts.
//!
//! Both steps are idempotent, so a failed run can simply be repeated. Nothing
//! is rolled back: if reconciliation fails, the ignore file update stays.

use crate::error::ApiError;
use crate::ignore::{seed_ignore_file, IgnoreSeedResult};
use crate::settings::{reconcile, ReconcileReport, SettingsPaths};
use tracing::info;

/// Summary of an `init` run
#[derive(Debug, Clone)]
pub struct InitSummary {
    pub ignore: IgnoreSeedResult,
    pub reconcile: ReconcileReport,
}

/// Seed ignore entries and reconcile the settings directory.
pub fn initialize(paths: &SettingsPaths) -> Result<InitSummary, ApiError> {
    let ignore = seed_ignore_file(&paths.ignore_file)?;
    for entry in &ignore.added {
        info!(entry = %entry, path = %paths.ignore_file.display(), "Added ignore entry");
    }

    let reconcile = reconcile(paths)?;

    Ok(InitSummary { ignore, reconcile })
}
