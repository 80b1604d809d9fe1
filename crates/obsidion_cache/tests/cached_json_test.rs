//! Tests for cache-aside JSON fetching and backend selection.

use obsidion_cache::{CacheBackend, CacheConfigBuilder, InMemoryCache, cached_json, connect_cache};
use obsidion_error::{ConfigError, ObsidionResult};
use obsidion_interface::KeyValueCache;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Profile {
    id: String,
    name: String,
}

fn notch() -> Profile {
    Profile {
        id: "069a79f444e94726a5befca90e38aaf5".to_string(),
        name: "Notch".to_string(),
    }
}

#[tokio::test]
async fn test_fetches_once_then_serves_cache() {
    let cache = InMemoryCache::default();
    let calls = AtomicUsize::new(0);
    let ttl = Duration::from_secs(28_800);

    for _ in 0..3 {
        let profile: Profile = cached_json(&cache, "username2uuid_notch", ttl, || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(notch())
        })
        .await
        .unwrap();
        assert_eq!(profile, notch());
    }

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(cache.exists("username2uuid_notch").await.unwrap());
}

#[tokio::test]
async fn test_fetch_error_is_not_cached() {
    let cache = InMemoryCache::default();

    let result: ObsidionResult<Profile> =
        cached_json(&cache, "username2uuid_ghost", Duration::from_secs(60), || async {
            Err(ConfigError::new("API returned invalid response").into())
        })
        .await;

    assert!(result.is_err());
    assert!(!cache.exists("username2uuid_ghost").await.unwrap());
}

#[tokio::test]
async fn test_corrupt_cached_json_is_an_error() {
    let cache = InMemoryCache::default();
    cache
        .set("username2uuid_notch", b"not json", Duration::from_secs(60))
        .await
        .unwrap();

    let result: ObsidionResult<Profile> =
        cached_json(&cache, "username2uuid_notch", Duration::from_secs(60), || async {
            Ok(notch())
        })
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_connect_memory_backend() {
    let config = CacheConfigBuilder::default().build().unwrap();
    let cache = connect_cache(&config).await.unwrap();
    assert_eq!(cache.backend_name(), "memory");
}

#[tokio::test]
async fn test_redis_backend_requires_url() {
    let config = CacheConfigBuilder::default()
        .backend(CacheBackend::Redis)
        .build()
        .unwrap();
    assert!(connect_cache(&config).await.is_err());
}
