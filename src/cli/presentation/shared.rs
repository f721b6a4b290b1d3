//! Shared presentation: creation notices and styling helpers.

use crate::settings::{Artifact, ReconcileReport};
use owo_colors::OwoColorize;

/// Success marker, green when color is enabled.
pub(super) fn check(color: bool) -> String {
    if color {
        "✓".green().to_string()
    } else {
        "✓".to_string()
    }
}

/// Neutral marker for things left untouched.
pub(super) fn skip(color: bool) -> String {
    if color {
        "⊘".dimmed().to_string()
    } else {
        "⊘".to_string()
    }
}

/// Warning marker, yellow when color is enabled.
pub(super) fn warn(color: bool) -> String {
    if color {
        "!".yellow().to_string()
    } else {
        "!".to_string()
    }
}

pub(super) fn heading(title: &str, color: bool) -> String {
    if color {
        title.bold().underline().to_string()
    } else {
        title.to_string()
    }
}

/// One line per artifact created during reconciliation.
pub fn format_reconcile_report(report: &ReconcileReport, color: bool) -> String {
    let mut output = String::new();
    for (artifact, path) in &report.created {
        let verb = match artifact {
            Artifact::Directory => "Created directory",
            Artifact::Backup => "Backed up working settings to",
            _ => "Created",
        };
        output.push_str(&format!("  {} {} {}\n", check(color), verb, path.display()));
    }
    output
}
