//! Repository ignore file seeding.
//!
//! `init` makes sure the root `.gitignore` keeps the working and local settings
//! out of version control while forcing the project baseline in. Presence is a
//! plain substring check against the whole file: an entry already mentioned
//! anywhere (even inside a comment) is not appended again, and conflicting
//! lines are left in place.

use crate::error::{ApiError, StorageError};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Entries seeded into the ignore file, in the order they are appended.
pub const SETTINGS_IGNORE_ENTRIES: &[&str] = &[
    ".vscode/settings-local.json",
    "!.vscode/settings-project.json",
    ".vscode/settings.json",
];

/// Outcome of seeding the ignore file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSeedResult {
    pub added: Vec<String>,
    pub present: Vec<String>,
}

/// Read the ignore file, treating a missing file as empty.
pub fn read_ignore_file(path: &Path) -> Result<String, StorageError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(StorageError::io(path, e)),
    }
}

/// Append each missing entry followed by a newline. Returns the new content.
///
/// If the existing content is non-empty and lacks a trailing newline, one is
/// inserted before the first appended entry so the entry starts its own line.
pub fn seed_entries(content: &str, entries: &[&str]) -> (String, IgnoreSeedResult) {
    let mut out = content.to_string();
    let mut result = IgnoreSeedResult::default();

    for entry in entries {
        if out.contains(*entry) {
            result.present.push(entry.to_string());
            continue;
        }
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(entry);
        out.push('\n');
        result.added.push(entry.to_string());
    }

    (out, result)
}

/// Seed the settings entries into the ignore file and write it back.
pub fn seed_ignore_file(path: &Path) -> Result<IgnoreSeedResult, ApiError> {
    let content = read_ignore_file(path)?;
    let (updated, result) = seed_entries(&content, SETTINGS_IGNORE_ENTRIES);
    debug!(
        path = %path.display(),
        added = result.added.len(),
        present = result.present.len(),
        "Seeding ignore entries"
    );
    fs::write(path, updated).map_err(|e| StorageError::io(path, e))?;
    Ok(result)
}

/// Which of the settings entries the ignore file already mentions.
pub fn present_entries(content: &str) -> Vec<(&'static str, bool)> {
    SETTINGS_IGNORE_ENTRIES
        .iter()
        .map(|entry| (*entry, content.contains(*entry)))
        .collect()
}
