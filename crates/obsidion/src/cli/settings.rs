//! Settings command handlers.

use crate::SettingsService;
use crate::cli::Commands;
use obsidion_error::ObsidionResult;

/// Run a `get`, `set` or `reset` command and return the line to print.
///
/// `migrate` needs no resolver and yields `None`.
pub async fn handle_settings_command(
    service: &SettingsService,
    command: &Commands,
) -> ObsidionResult<Option<String>> {
    let line = match command {
        Commands::Migrate => return Ok(None),
        Commands::Get { guild, setting } => {
            let value = service.get(*guild, *setting).await?;
            match guild {
                Some(guild) => format!("{setting} for guild {guild}: {value}"),
                None => format!("{setting} (default): {value}"),
            }
        }
        Commands::Set {
            guild,
            setting,
            value,
        } => {
            let value = service.update(*guild, *setting, Some(value)).await?;
            format!("{setting} for guild {guild} set to {value}")
        }
        Commands::Reset { guild, setting } => {
            let value = service.update(*guild, *setting, None).await?;
            format!("{setting} for guild {guild} reset to {value}")
        }
    };
    Ok(Some(line))
}
