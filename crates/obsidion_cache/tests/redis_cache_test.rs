//! Tests for the Redis backend that need no running server.

#![cfg(feature = "redis")]

use obsidion_cache::{CacheBackend, CacheConfigBuilder, connect_cache};
use std::time::{Duration, Instant};

#[tokio::test]
async fn test_unreachable_server_fails_fast_as_unavailable() {
    // Nothing listens on port 1
    let config = CacheConfigBuilder::default()
        .backend(CacheBackend::Redis)
        .url(Some("redis://127.0.0.1:1".to_string()))
        .connect_timeout_seconds(1u64)
        .response_timeout_seconds(1u64)
        .reconnect_retries(1usize)
        .build()
        .unwrap();

    let started = Instant::now();
    let err = connect_cache(&config).await.err().expect("expected connect_cache to fail");

    assert!(err.is_cache_unavailable(), "unexpected error: {err}");
    assert!(
        started.elapsed() < Duration::from_secs(10),
        "took {:?}",
        started.elapsed()
    );
}

#[tokio::test]
async fn test_malformed_url_is_invalid_config() {
    let config = CacheConfigBuilder::default()
        .backend(CacheBackend::Redis)
        .url(Some("not a url".to_string()))
        .build()
        .unwrap();

    let err = connect_cache(&config).await.err().expect("expected connect_cache to fail");
    assert!(!err.is_cache_unavailable());
}
