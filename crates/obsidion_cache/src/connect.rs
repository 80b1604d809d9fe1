//! Backend selection.

use crate::{CacheBackend, CacheConfig, InMemoryCache};
use obsidion_error::{CacheError, CacheErrorKind, ObsidionResult};
use obsidion_interface::KeyValueCache;
use std::sync::Arc;

/// Build the cache backend named in `config`.
///
/// # Errors
///
/// Returns an error if the redis backend is selected without a URL, or if
/// the crate was built without the `redis` feature. An unreachable server
/// fails with [`CacheErrorKind::Unavailable`] once the configured timeouts
/// and retries are spent.
#[tracing::instrument(skip(config), fields(backend = %config.backend()))]
pub async fn connect_cache(config: &CacheConfig) -> ObsidionResult<Arc<dyn KeyValueCache>> {
    match config.backend() {
        CacheBackend::Memory => {
            tracing::info!(
                max_entries = config.max_entries(),
                "Using in-memory cache; entries are lost on restart"
            );
            Ok(Arc::new(InMemoryCache::new(config)))
        }
        CacheBackend::Redis => {
            let url = config.url().as_deref().ok_or_else(|| {
                CacheError::new(CacheErrorKind::InvalidConfig(
                    "cache.url is required for the redis backend".to_string(),
                ))
            })?;
            connect_redis(url, config).await
        }
    }
}

#[cfg(feature = "redis")]
async fn connect_redis(url: &str, config: &CacheConfig) -> ObsidionResult<Arc<dyn KeyValueCache>> {
    Ok(Arc::new(crate::RedisCache::connect(url, config).await?))
}

#[cfg(not(feature = "redis"))]
async fn connect_redis(
    _url: &str,
    _config: &CacheConfig,
) -> ObsidionResult<Arc<dyn KeyValueCache>> {
    Err(CacheError::new(CacheErrorKind::InvalidConfig(
        "built without the redis feature".to_string(),
    ))
    .into())
}
