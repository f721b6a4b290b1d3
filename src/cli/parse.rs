//! CLI parse: clap types for vsettings. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// vsettings - keep shared and local editor settings in step
#[derive(Parser)]
#[command(name = "vsettings")]
#[command(about = "Reconcile shared project editor settings with developer-local overrides")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Repository root (skips `git rev-parse --show-toplevel`)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable colored console output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add settings entries to .gitignore and create missing settings files
    Init {
        /// Settings directory (default: <repo root>/.vscode)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Rewrite working settings as project settings overlaid with local settings
    Sync {
        /// Settings directory (default: <repo root>/.vscode)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Show which settings files exist and whether working settings have drifted
    Status {
        /// Settings directory (default: <repo root>/.vscode)
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

impl Commands {
    /// The `--dir` argument of any subcommand.
    pub fn dir(&self) -> Option<&PathBuf> {
        match self {
            Commands::Init { dir } | Commands::Sync { dir } | Commands::Status { dir, .. } => {
                dir.as_ref()
            }
        }
    }
}
