//! CLI command-name contract for log spans.

use crate::cli::parse::Commands;

/// Command name string used in log spans (e.g. "init", "status").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Init { .. } => "init",
        Commands::Sync { .. } => "sync",
        Commands::Status { .. } => "status",
    }
}
