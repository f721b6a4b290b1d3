//! vsettings CLI Binary
//!
//! Command-line interface for reconciling shared and local editor settings.

use clap::Parser;
use std::process;
use tracing::{error, info};
use vsettings::cli::{Cli, RunContext};
use vsettings::config::ToolConfig;
use vsettings::logging::{init_logging, resolve_log_file_path, LoggingConfig};

fn main() {
    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: cannot read current directory: {}", e);
            process::exit(1);
        }
    };

    let config = match RunContext::load_config(&cwd, cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", vsettings::cli::map_error(&e));
            process::exit(1);
        }
    };

    // Initialize logging early
    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!(cwd = %cwd.display(), "vsettings starting");

    let color = !cli.no_color && std::env::var_os("NO_COLOR").is_none();
    let context = RunContext::new(config, cwd, cli.root.clone(), color);

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output.trim_end_matches('\n'));
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", vsettings::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and the loaded config.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: &ToolConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();

    if cli.quiet {
        logging.enabled = false;
    }
    if cli.verbose {
        logging.level = "debug".to_string();
        // Keep verbose output visible in the terminal when logs go to a file.
        if logging.output == "file" {
            logging.output = "file+stderr".to_string();
        }
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if cli.no_color {
        logging.color = false;
    }

    let output_uses_file = logging.output == "file" || logging.output == "file+stderr";
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    } else if logging.enabled && output_uses_file {
        logging.file = resolve_log_file_path(logging.file.clone()).ok();
    }

    logging
}
