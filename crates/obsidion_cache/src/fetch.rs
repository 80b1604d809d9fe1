//! Cache-aside for external API responses.

use obsidion_error::{JsonError, ObsidionResult};
use obsidion_interface::KeyValueCache;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;

/// Return the JSON value cached under `key`, or run `fetch` and cache its result.
///
/// Used in front of third-party lookups such as username to UUID
/// resolution (`username2uuid_<name>`). A failed fetch is returned as-is
/// and nothing is cached.
///
/// # Example
///
/// ```
/// use obsidion_cache::{cached_json, InMemoryCache};
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let cache = InMemoryCache::default();
/// let ttl = Duration::from_secs(60);
/// let uuid: String = cached_json(&cache, "username2uuid_notch", ttl, || async {
///     Ok("069a79f444e94726a5befca90e38aaf5".to_string())
/// })
/// .await?;
/// assert_eq!(uuid.len(), 32);
/// # Ok(())
/// # }
/// ```
#[tracing::instrument(skip(cache, fetch), fields(backend = cache.backend_name()))]
pub async fn cached_json<T, F, Fut>(
    cache: &dyn KeyValueCache,
    key: &str,
    ttl: Duration,
    fetch: F,
) -> ObsidionResult<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = ObsidionResult<T>>,
{
    if let Some(bytes) = cache.get(key).await? {
        tracing::debug!("Serving response from cache");
        return serde_json::from_slice(&bytes).map_err(|e| JsonError::from(e).into());
    }

    tracing::debug!("Cache miss, fetching");
    let value = fetch().await?;
    let bytes = serde_json::to_vec(&value).map_err(JsonError::from)?;
    cache.set(key, &bytes, ttl).await?;
    Ok(value)
}
