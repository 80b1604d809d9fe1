//! Obsidion admin binary.
//!
//! Command-line access to the guild settings stack:
//! - Apply database migrations
//! - Read a setting for a guild or the default
//! - Change or reset a guild's setting

use clap::Parser;
use obsidion::cli::{Cli, Commands, handle_settings_command};
use obsidion::{ObsidionConfig, SettingsService, init_logging, migrate_pool, open_pool};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = ObsidionConfig::load(cli.config.as_deref())?;
    init_logging(config.logging(), cli.verbose)?;

    // Execute the requested command
    match &cli.command {
        Commands::Migrate => {
            let pool = open_pool(config.database()).await?;
            let applied = migrate_pool(&pool).await?;
            if applied.is_empty() {
                println!("Database is up to date");
            } else {
                for version in applied {
                    println!("Applied {version}");
                }
            }
        }
        command => {
            let service = SettingsService::connect(&config).await?;
            if let Some(line) = handle_settings_command(&service, command).await? {
                println!("{line}");
            }
        }
    }

    Ok(())
}
