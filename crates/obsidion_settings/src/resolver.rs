//! Cache-aside resolver for per-guild settings.

use obsidion_cache::DEFAULT_TTL_SECONDS;
use obsidion_core::{GuildId, GuildSettingKey, SettingDefaults, SettingName};
use obsidion_error::{CacheError, ObsidionResult};
use obsidion_interface::{GuildSettingStore, KeyValueCache};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// Resolves per-guild settings through the cache, the store and the defaults.
///
/// Reads are cache-aside: a cache hit is returned as-is; a miss queries the
/// store, falls back to the default when the guild has no value, and
/// caches whatever it resolved. Writes go to the store first and then
/// overwrite the cache entry, so the writer always reads its own write.
///
/// Concurrent misses on the same key are not coalesced; each queries the
/// store and the last cache write wins. Cache and store errors are returned
/// unchanged and never retried.
#[derive(Clone)]
pub struct GuildSettingResolver {
    cache: Arc<dyn KeyValueCache>,
    store: Arc<dyn GuildSettingStore>,
    defaults: Arc<SettingDefaults>,
    ttl: Duration,
}

impl GuildSettingResolver {
    /// Create a resolver with the default eight hour TTL.
    pub fn new(
        cache: Arc<dyn KeyValueCache>,
        store: Arc<dyn GuildSettingStore>,
        defaults: SettingDefaults,
    ) -> Self {
        Self {
            cache,
            store,
            defaults: Arc::new(defaults),
            ttl: Duration::from_secs(DEFAULT_TTL_SECONDS),
        }
    }

    /// Use `ttl` for every cache write.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Static defaults this resolver falls back to.
    pub fn defaults(&self) -> &SettingDefaults {
        &self.defaults
    }

    /// TTL applied to cache writes.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Effective value of `setting` for `guild_id`.
    ///
    /// Outside a guild (`None`) the default is returned without touching
    /// the cache or the store. A guild with no stored value, or a null one,
    /// also resolves to the default; that is never an error.
    ///
    /// # Errors
    ///
    /// Returns the cache or store error when either cannot be reached, or a
    /// cache error if the cached bytes are not UTF-8.
    #[instrument(skip(self), fields(backend = self.cache.backend_name()))]
    pub async fn get(
        &self,
        guild_id: Option<GuildId>,
        setting: SettingName,
    ) -> ObsidionResult<String> {
        let Some(guild_id) = guild_id else {
            return Ok(self.defaults.for_setting(setting).to_string());
        };
        let key = cache_key(GuildSettingKey::new(guild_id, setting));

        if let Some(bytes) = self.cache.get(&key).await? {
            debug!(key = %key, "Cache hit");
            return Ok(String::from_utf8(bytes).map_err(CacheError::from)?);
        }

        let value = match self.store.fetch(guild_id, setting).await? {
            Some(value) => value,
            None => {
                debug!(key = %key, "No stored value, using default");
                self.defaults.for_setting(setting).to_string()
            }
        };

        self.cache.set(&key, value.as_bytes(), self.ttl).await?;
        debug!(key = %key, "Cached resolved value");
        Ok(value)
    }

    /// Store `value` for `setting` in `guild_id`, or reset it with `None`.
    ///
    /// The store row is created on first use. After the store write the
    /// cache entry is overwritten with the new value, or with the default
    /// when resetting.
    ///
    /// # Errors
    ///
    /// Returns the store error unchanged; the cache is then left untouched.
    /// A cache error after a successful store write is also returned.
    #[instrument(skip(self, value), fields(reset = value.is_none()))]
    pub async fn set(
        &self,
        guild_id: GuildId,
        setting: SettingName,
        value: Option<&str>,
    ) -> ObsidionResult<()> {
        self.store.upsert(guild_id, setting, value).await?;

        let key = cache_key(GuildSettingKey::new(guild_id, setting));
        let cached = value.unwrap_or_else(|| self.defaults.for_setting(setting));
        self.cache.set(&key, cached.as_bytes(), self.ttl).await?;

        tracing::info!(key = %key, "Guild setting updated");
        Ok(())
    }
}

impl std::fmt::Debug for GuildSettingResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuildSettingResolver")
            .field("cache", &self.cache.backend_name())
            .field("defaults", &self.defaults)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

/// Keys stay typed until they reach the cache.
fn cache_key(key: GuildSettingKey) -> String {
    key.to_string()
}
