//! CLI command definitions.

use clap::{Parser, Subcommand};
use obsidion_core::{GuildId, SettingName};
use std::path::PathBuf;

/// Obsidion - guild settings administration
#[derive(Parser, Debug)]
#[command(name = "obsidion")]
#[command(about = "Inspect and change per-guild Obsidion settings", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (replaces ./obsidion.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply pending database migrations
    Migrate,

    /// Print the effective value of a setting
    Get {
        /// Guild to resolve for; omit for the default
        #[arg(long)]
        guild: Option<GuildId>,

        /// prefix, locale or regional_format
        setting: SettingName,
    },

    /// Store a new value for a guild
    Set {
        /// Guild that owns the setting
        #[arg(long)]
        guild: GuildId,

        /// prefix, locale or regional_format
        setting: SettingName,

        /// New value
        value: String,
    },

    /// Clear a guild's value so the default applies
    Reset {
        /// Guild that owns the setting
        #[arg(long)]
        guild: GuildId,

        /// prefix, locale or regional_format
        setting: SettingName,
    },
}
