//! Sync command presentation.

use super::shared::{check, format_reconcile_report};
use crate::sync::SyncSummary;
use std::path::Path;

pub fn format_sync_summary(summary: &SyncSummary, working: &Path, color: bool) -> String {
    let mut output = format_reconcile_report(&summary.reconcile, color);
    output.push_str(&format!(
        "  {} Wrote {} ({} keys, {} from local settings)",
        check(color),
        working.display(),
        summary.merged_keys,
        summary.overridden.len()
    ));
    output
}
