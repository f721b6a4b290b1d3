//! vsettings: shared and local editor settings reconciliation
//!
//! Keeps a committed baseline (`settings-project.json`) and a per-developer
//! override file (`settings-local.json`) in step with the working
//! `settings.json` the editor actually reads.

pub mod cli;
pub mod config;
pub mod error;
pub mod ignore;
pub mod init;
pub mod logging;
pub mod repo;
pub mod settings;
pub mod status;
pub mod sync;
