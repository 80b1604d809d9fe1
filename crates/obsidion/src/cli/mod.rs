//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the obsidion binary.

mod commands;
mod settings;

pub use commands::{Cli, Commands};
pub use settings::handle_settings_command;
