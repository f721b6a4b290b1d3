//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to the operations.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_init_summary, format_reconcile_report, format_status_json, format_status_text,
    format_sync_summary,
};
pub use route::RunContext;
