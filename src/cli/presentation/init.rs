//! Init command presentation.

use super::shared::{check, format_reconcile_report, skip};
use crate::init::InitSummary;
use std::path::Path;

pub fn format_init_summary(summary: &InitSummary, ignore_file: &Path, color: bool) -> String {
    let mut output = String::from("Initializing editor settings...\n\n");

    output.push_str(&format!("Ignore file: {}\n", ignore_file.display()));
    for entry in &summary.ignore.added {
        output.push_str(&format!("  {} {}\n", check(color), entry));
    }
    for entry in &summary.ignore.present {
        output.push_str(&format!("  {} {} (already present, skipped)\n", skip(color), entry));
    }
    output.push('\n');

    if summary.reconcile.is_empty() {
        output.push_str("All settings files already exist.\n");
    } else {
        output.push_str("Settings files:\n");
        output.push_str(&format_reconcile_report(&summary.reconcile, color));
        output.push('\n');
        output.push_str("Initialization complete! Next:\n");
        output.push_str("  - edit settings-local.json for personal overrides\n");
        output.push_str("  - vsettings sync    # rebuild settings.json\n");
    }
    output
}
