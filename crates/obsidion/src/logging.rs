//! Tracing subscriber setup.

use derive_getters::Getters;
use obsidion_error::{ConfigError, ObsidionResult};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log level and output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    level: String,

    /// Emit one JSON object per event
    #[serde(default)]
    json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `config.level`; `verbose` forces `debug`.
///
/// # Errors
///
/// Returns [`ConfigError`] for an invalid filter directive or when a
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig, verbose: bool) -> ObsidionResult<()> {
    let filter = if verbose {
        EnvFilter::try_new("debug")
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(config.level()))
    }
    .map_err(|e| ConfigError::new(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json {
        registry.with(fmt::layer().json().with_target(false)).try_init()
    } else {
        registry.with(fmt::layer().with_target(false)).try_init()
    };

    result.map_err(|e| ConfigError::new(format!("Failed to install subscriber: {}", e)))?;
    Ok(())
}
