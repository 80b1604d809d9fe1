//! Process bootstrap: wires the cache, the store and the resolver.

use crate::ObsidionConfig;
use derive_getters::Getters;
use obsidion_cache::connect_cache;
use obsidion_core::{GuildId, SettingName};
use obsidion_database::{
    DatabaseConfig, PgGuildSettingStore, PgPool, establish_pool, run_migrations,
};
use obsidion_error::{DatabaseError, DatabaseErrorKind, ObsidionResult};
use obsidion_interface::{GuildSettingStore, KeyValueCache};
use obsidion_settings::{GuildSettingResolver, I18nManager, PrefixManager};
use std::sync::Arc;
use tracing::{info, instrument};

/// Connected settings stack handed to the command layer.
#[derive(Debug, Clone, Getters)]
pub struct SettingsService {
    resolver: GuildSettingResolver,
    prefixes: PrefixManager,
    i18n: I18nManager,
}

impl SettingsService {
    /// Assemble a service over already-connected collaborators.
    ///
    /// Defaults and TTL come from `config`.
    pub fn from_parts(
        cache: Arc<dyn KeyValueCache>,
        store: Arc<dyn GuildSettingStore>,
        config: &ObsidionConfig,
    ) -> Self {
        let resolver = GuildSettingResolver::new(cache, store, config.defaults().clone())
            .with_ttl(config.cache().ttl());
        Self {
            prefixes: PrefixManager::new(resolver.clone()),
            i18n: I18nManager::new(resolver.clone()),
            resolver,
        }
    }

    /// Connect to the configured cache and database.
    ///
    /// Applies pending migrations first when `database.run_migrations` is set.
    ///
    /// # Errors
    ///
    /// Returns the cache or database error if either backend cannot be
    /// reached.
    #[instrument(skip(config), fields(cache = %config.cache().backend()))]
    pub async fn connect(config: &ObsidionConfig) -> ObsidionResult<Self> {
        let cache = connect_cache(config.cache()).await?;
        let pool = open_pool(config.database()).await?;

        if *config.database().run_migrations() {
            migrate_pool(&pool).await?;
        }

        info!("Settings service ready");
        Ok(Self::from_parts(
            cache,
            Arc::new(PgGuildSettingStore::new(pool)),
            config,
        ))
    }

    /// Effective value of `setting`, or the default outside a guild.
    pub async fn get(
        &self,
        guild: Option<GuildId>,
        setting: SettingName,
    ) -> ObsidionResult<String> {
        self.resolver.get(guild, setting).await
    }

    /// Validate and store `value` for `guild`, or reset it with `None`.
    ///
    /// Prefixes go through [`PrefixManager`]; locales and regional formats
    /// are normalised by [`I18nManager`]. Returns the value now in effect.
    ///
    /// # Errors
    ///
    /// Returns a settings error for an invalid value, or the cache or store
    /// error if the write fails.
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        guild: GuildId,
        setting: SettingName,
        value: Option<&str>,
    ) -> ObsidionResult<String> {
        match setting {
            SettingName::Prefix => {
                self.prefixes.set_prefix(guild, value).await?;
            }
            SettingName::Locale => {
                self.i18n.set_locale(guild, value).await?;
            }
            SettingName::RegionalFormat => {
                self.i18n.set_regional_format(guild, value).await?;
            }
        }
        self.resolver.get(Some(guild), setting).await
    }
}

/// Build the connection pool off the async runtime.
///
/// # Errors
///
/// Returns [`DatabaseErrorKind::Connection`] if the server is unreachable.
pub async fn open_pool(config: &DatabaseConfig) -> ObsidionResult<PgPool> {
    let config = config.clone();
    let pool = tokio::task::spawn_blocking(move || establish_pool(&config))
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Interrupted(e.to_string())))??;
    Ok(pool)
}

/// Apply pending migrations off the async runtime.
///
/// Returns the versions that ran.
pub async fn migrate_pool(pool: &PgPool) -> ObsidionResult<Vec<String>> {
    let pool = pool.clone();
    let applied = tokio::task::spawn_blocking(move || run_migrations(&pool))
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Interrupted(e.to_string())))??;
    Ok(applied)
}
