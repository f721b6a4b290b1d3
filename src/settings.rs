//! Settings artifacts: path layout, JSON document helpers, and reconciliation.
//!
//! Four files live in the editor settings directory. `settings.json` is what the
//! editor reads, `settings-project.json` is the committed baseline,
//! `settings-local.json` holds per-developer overrides, and `settings.bak.json`
//! is a snapshot taken the first time overrides are derived.

pub mod document;
pub mod paths;
pub mod reconcile;

pub use document::{
    diff_settings, merge_settings, read_settings, values_equal, write_settings, SettingsMap,
};
pub use paths::SettingsPaths;
pub use reconcile::{reconcile, Artifact, ReconcileReport};
