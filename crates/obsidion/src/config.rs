//! Layered configuration for the Obsidion process.
//!
//! Sources, lowest precedence first:
//! - Bundled defaults (include_str! from obsidion.toml)
//! - `~/.config/obsidion/obsidion.toml`
//! - `./obsidion.toml`, or the file passed with `--config`
//! - `OBSIDION__<SECTION>__<KEY>` environment variables

use crate::LoggingConfig;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use derive_getters::Getters;
use obsidion_cache::CacheConfig;
use obsidion_core::SettingDefaults;
use obsidion_database::DatabaseConfig;
use obsidion_error::{ConfigError, ObsidionError, ObsidionResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../obsidion.toml");

/// Complete process configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters)]
pub struct ObsidionConfig {
    /// Fallback setting values
    #[serde(default)]
    defaults: SettingDefaults,

    /// Fast cache selection and TTL
    #[serde(default)]
    cache: CacheConfig,

    /// Durable store connection
    #[serde(default)]
    database: DatabaseConfig,

    /// Log level and format
    #[serde(default)]
    logging: LoggingConfig,
}

impl ObsidionConfig {
    /// Load configuration from every source.
    ///
    /// `path` replaces `./obsidion.toml` and must exist when given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a file cannot be read or a value has the
    /// wrong type.
    #[instrument]
    pub fn load(path: Option<&Path>) -> ObsidionResult<Self> {
        debug!("Loading configuration with precedence: env > file > home dir > bundled defaults");

        let mut builder = Self::bundled();

        // Add user config from home directory (optional)
        if let Some(config_dir) = dirs::config_dir() {
            let home_config = config_dir.join("obsidion").join("obsidion.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("obsidion").required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix("OBSIDION")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        Self::finish(builder)
    }

    /// Load the bundled defaults overlaid with a single file.
    ///
    /// Ignores the home directory and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing or malformed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ObsidionResult<Self> {
        debug!("Loading configuration from file");
        Self::finish(Self::bundled().add_source(File::from(path.as_ref()).required(true)))
    }

    /// The bundled defaults alone.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the bundled file does not parse.
    pub fn bundled_defaults() -> ObsidionResult<Self> {
        Self::finish(Self::bundled())
    }

    fn bundled() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> ObsidionResult<Self> {
        builder
            .build()
            .map_err(|e| {
                ObsidionError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ObsidionError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
