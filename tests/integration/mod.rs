//! Integration tests for vsettings

mod cli_binary;
mod config_integration;
mod logging_default;
mod sync_command;
mod test_utils;

pub use test_utils::{run_cli, TestRepo};
