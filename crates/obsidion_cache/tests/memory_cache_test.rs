//! Tests for the in-memory cache backend.

use obsidion_cache::{CacheConfig, CacheConfigBuilder, InMemoryCache};
use obsidion_interface::KeyValueCache;
use std::time::Duration;

const HOUR: Duration = Duration::from_secs(3600);

#[tokio::test]
async fn test_set_and_get() {
    let cache = InMemoryCache::default();

    cache.set("prefix_42", b"!", HOUR).await.unwrap();

    assert!(cache.exists("prefix_42").await.unwrap());
    assert_eq!(cache.get("prefix_42").await.unwrap(), Some(b"!".to_vec()));
}

#[tokio::test]
async fn test_missing_key() {
    let cache = InMemoryCache::default();

    assert!(!cache.exists("prefix_1").await.unwrap());
    assert_eq!(cache.get("prefix_1").await.unwrap(), None);
}

#[tokio::test]
async fn test_set_overwrites() {
    let cache = InMemoryCache::default();

    cache.set("locale_7", b"en-US", HOUR).await.unwrap();
    cache.set("locale_7", b"de-DE", HOUR).await.unwrap();

    assert_eq!(cache.get("locale_7").await.unwrap(), Some(b"de-DE".to_vec()));
    assert_eq!(cache.len().await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_entry_expires_after_ttl() {
    let cache = InMemoryCache::default();
    cache
        .set("prefix_42", b"?", Duration::from_secs(10))
        .await
        .unwrap();

    tokio::time::advance(Duration::from_secs(9)).await;
    assert!(cache.exists("prefix_42").await.unwrap());

    tokio::time::advance(Duration::from_secs(2)).await;
    assert!(!cache.exists("prefix_42").await.unwrap());
    assert_eq!(cache.get("prefix_42").await.unwrap(), None);
    assert!(cache.is_empty().await);
}

#[tokio::test(start_paused = true)]
async fn test_entry_time_remaining() {
    let cache = InMemoryCache::default();
    cache.set("k", b"v", Duration::from_secs(100)).await.unwrap();

    tokio::time::advance(Duration::from_secs(40)).await;

    let entry = cache.entry("k").await.unwrap();
    assert_eq!(entry.time_remaining(), Some(Duration::from_secs(60)));
    assert_eq!(entry.ttl(), &Duration::from_secs(100));
}

#[tokio::test]
async fn test_lru_eviction() {
    let cache = InMemoryCache::with_capacity(2);

    cache.set("a", b"1", HOUR).await.unwrap();
    cache.set("b", b"2", HOUR).await.unwrap();
    // Touch "a" so "b" becomes least recently used
    cache.get("a").await.unwrap();
    cache.set("c", b"3", HOUR).await.unwrap();

    assert!(cache.exists("a").await.unwrap());
    assert!(!cache.exists("b").await.unwrap());
    assert!(cache.exists("c").await.unwrap());
    assert_eq!(cache.len().await, 2);
}

#[tokio::test(start_paused = true)]
async fn test_expired_entries_purged_before_eviction() {
    let cache = InMemoryCache::with_capacity(2);

    cache.set("short", b"1", Duration::from_secs(5)).await.unwrap();
    cache.set("long", b"2", HOUR).await.unwrap();
    tokio::time::advance(Duration::from_secs(6)).await;

    cache.set("new", b"3", HOUR).await.unwrap();

    assert!(cache.exists("long").await.unwrap());
    assert!(cache.exists("new").await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_cleanup_expired() {
    let cache = InMemoryCache::default();
    cache.set("a", b"1", Duration::from_secs(1)).await.unwrap();
    cache.set("b", b"2", Duration::from_secs(1)).await.unwrap();
    cache.set("c", b"3", HOUR).await.unwrap();

    tokio::time::advance(Duration::from_secs(2)).await;

    assert_eq!(cache.cleanup_expired().await, 2);
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_clear() {
    let cache = InMemoryCache::default();
    cache.set("a", b"1", HOUR).await.unwrap();
    cache.clear().await;
    assert!(cache.is_empty().await);
}

#[test]
fn test_config_defaults() {
    let config = CacheConfig::default();
    assert_eq!(*config.ttl_seconds(), 28_800);
    assert_eq!(config.ttl(), Duration::from_secs(8 * 60 * 60));
    assert_eq!(*config.max_entries(), 10_000);
    assert!(config.url().is_none());
    assert_eq!(config.connect_timeout(), Duration::from_secs(2));
    assert_eq!(config.response_timeout(), Duration::from_secs(2));
    assert_eq!(*config.reconnect_retries(), 2);
}

#[test]
fn test_config_builder() {
    let config = CacheConfigBuilder::default()
        .ttl_seconds(60)
        .max_entries(5)
        .build()
        .unwrap();
    assert_eq!(*config.ttl_seconds(), 60);
    assert_eq!(*config.max_entries(), 5);

    let config = config.with_url(Some("redis://localhost:6379".to_string()));
    assert_eq!(config.url().as_deref(), Some("redis://localhost:6379"));
}
