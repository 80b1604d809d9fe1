//! Redis-backed cache.

use ::redis::AsyncCommands;
use ::redis::aio::{ConnectionManager, ConnectionManagerConfig};
use async_trait::async_trait;
use obsidion_error::{CacheError, CacheErrorKind, ObsidionResult};
use obsidion_interface::KeyValueCache;
use std::time::Duration;

use crate::CacheConfig;

/// Longest pause between reconnect attempts (milliseconds).
const MAX_RECONNECT_DELAY_MS: u64 = 500;

/// Cache backed by a shared Redis server.
///
/// Uses a multiplexed [`ConnectionManager`] that reconnects on its own.
/// Connection attempts, replies and reconnects are bounded by the timeouts
/// and retry count in [`CacheConfig`]; commands issued while the server is
/// down fail with [`CacheErrorKind::Unavailable`] instead of reading as
/// misses.
#[derive(Clone)]
pub struct RedisCache {
    manager: ConnectionManager,
}

impl RedisCache {
    /// Connect to the Redis server at `url` (e.g. `redis://redis:6379`).
    ///
    /// Gives up after `config.connect_timeout()` per attempt and
    /// `config.reconnect_retries()` retries.
    #[tracing::instrument(skip(url, config), fields(retries = *config.reconnect_retries()))]
    pub async fn connect(url: &str, config: &CacheConfig) -> ObsidionResult<Self> {
        let client = ::redis::Client::open(url)
            .map_err(|e| CacheError::new(CacheErrorKind::InvalidConfig(e.to_string())))?;

        let retries = *config.reconnect_retries();
        let manager_config = ConnectionManagerConfig::new()
            .set_connection_timeout(config.connect_timeout())
            .set_response_timeout(config.response_timeout())
            .set_number_of_retries(retries)
            .set_max_delay(MAX_RECONNECT_DELAY_MS);

        // Hard ceiling in case the backoff outlives the per-attempt timeouts
        let attempts = u32::try_from(retries).unwrap_or(u32::MAX).saturating_add(1);
        let deadline = (config.connect_timeout() + Duration::from_millis(MAX_RECONNECT_DELAY_MS))
            .saturating_mul(attempts);

        let connecting = ConnectionManager::new_with_config(client, manager_config);
        let manager = tokio::time::timeout(deadline, connecting)
            .await
            .map_err(|_| {
                CacheError::new(CacheErrorKind::Unavailable(format!(
                    "no connection within {:?}",
                    deadline
                )))
            })?
            .map_err(|e| CacheError::new(CacheErrorKind::Unavailable(e.to_string())))?;

        tracing::info!("Connected to Redis cache");
        Ok(Self { manager })
    }
}

impl std::fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCache").finish_non_exhaustive()
    }
}

#[async_trait]
impl KeyValueCache for RedisCache {
    #[tracing::instrument(skip(self))]
    async fn exists(&self, key: &str) -> ObsidionResult<bool> {
        let mut conn = self.manager.clone();
        let found: bool = conn.exists(key).await.map_err(CacheError::from)?;
        Ok(found)
    }

    #[tracing::instrument(skip(self))]
    async fn get(&self, key: &str) -> ObsidionResult<Option<Vec<u8>>> {
        let mut conn = self.manager.clone();
        let value: Option<Vec<u8>> = conn.get(key).await.map_err(CacheError::from)?;
        tracing::debug!(hit = value.is_some(), "Redis lookup");
        Ok(value)
    }

    #[tracing::instrument(skip(self, value), fields(size = value.len(), ttl = ?ttl))]
    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> ObsidionResult<()> {
        let mut conn = self.manager.clone();
        // EX rejects zero
        let seconds = ttl.as_secs().max(1);
        let _: () = conn
            .set_ex(key, value, seconds)
            .await
            .map_err(CacheError::from)?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
