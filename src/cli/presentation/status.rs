//! Status command presentation: comfy-table text and pretty JSON.

use super::shared::{check, heading, skip, warn};
use crate::error::{ApiError, StorageError};
use crate::status::SettingsStatus;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

pub fn format_status_text(status: &SettingsStatus, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", heading("Settings", color)));
    out.push_str(&format!("  Directory: {}\n\n", status.base_dir));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Artifact", "Path", "Exists"]);
    for row in &status.artifacts {
        table.add_row(vec![
            row.name.clone(),
            row.path.clone(),
            if row.exists { "yes" } else { "no" }.to_string(),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));

    out.push_str(&format!("{}\n\n", heading("Ignore entries", color)));
    for entry in &status.ignore_entries {
        let marker = if entry.present { check(color) } else { skip(color) };
        let note = if entry.present { "" } else { " (missing)" };
        out.push_str(&format!("  {} {}{}\n", marker, entry.entry, note));
    }
    out.push('\n');

    out.push_str(&format!("{}\n\n", heading("Drift", color)));
    match status.drift {
        None => out.push_str("  Not all settings files exist. Run vsettings init.\n"),
        Some(ref drift) if drift.in_sync => {
            out.push_str(&format!(
                "  {} settings.json matches project + local settings\n",
                check(color)
            ));
        }
        Some(ref drift) => {
            out.push_str(&format!(
                "  {} settings.json differs from project + local settings in {} key(s):\n",
                warn(color),
                drift.drifted_keys.len()
            ));
            for key in &drift.drifted_keys {
                out.push_str(&format!("    - {}\n", key));
            }
            out.push_str("  Run vsettings sync to rebuild it.\n");
        }
    }
    out
}

pub fn format_status_json(status: &SettingsStatus) -> Result<String, ApiError> {
    serde_json::to_string_pretty(status)
        .map_err(|e| ApiError::StorageError(StorageError::Serialize(e.to_string())))
}
