//! CLI presentation: text and json formatters per command.

mod init;
mod shared;
mod status;
mod sync;

pub use init::format_init_summary;
pub use shared::format_reconcile_report;
pub use status::{format_status_json, format_status_text};
pub use sync::format_sync_summary;
