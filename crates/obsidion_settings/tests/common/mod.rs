//! Counting and failing collaborators for resolver tests.

#![allow(dead_code)]

use async_trait::async_trait;
use obsidion_cache::InMemoryCache;
use obsidion_core::{GuildId, SettingDefaults, SettingName};
use obsidion_error::{CacheError, CacheErrorKind, DatabaseError, DatabaseErrorKind, ObsidionResult};
use obsidion_interface::{GuildSettingStore, KeyValueCache};
use obsidion_settings::{GuildSettingResolver, InMemoryGuildSettingStore};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// In-memory cache that records every call.
#[derive(Debug, Default)]
pub struct CountingCache {
    pub inner: InMemoryCache,
    pub gets: AtomicUsize,
    pub sets: AtomicUsize,
    pub last_ttl: Mutex<Option<Duration>>,
}

impl CountingCache {
    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn sets(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.gets() + self.sets()
    }

    pub fn last_ttl(&self) -> Option<Duration> {
        *self.last_ttl.lock().unwrap()
    }

    pub async fn cached(&self, key: &str) -> Option<String> {
        self.inner
            .get(key)
            .await
            .unwrap()
            .map(|bytes| String::from_utf8(bytes).unwrap())
    }
}

#[async_trait]
impl KeyValueCache for CountingCache {
    async fn exists(&self, key: &str) -> ObsidionResult<bool> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.exists(key).await
    }

    async fn get(&self, key: &str) -> ObsidionResult<Option<Vec<u8>>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> ObsidionResult<()> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        *self.last_ttl.lock().unwrap() = Some(ttl);
        self.inner.set(key, value, ttl).await
    }

    fn backend_name(&self) -> &'static str {
        "counting"
    }
}

/// In-memory store that records every call.
#[derive(Debug, Default)]
pub struct CountingStore {
    pub inner: InMemoryGuildSettingStore,
    pub fetches: AtomicUsize,
    pub upserts: AtomicUsize,
}

impl CountingStore {
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn upserts(&self) -> usize {
        self.upserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GuildSettingStore for CountingStore {
    async fn fetch(
        &self,
        guild_id: GuildId,
        setting: SettingName,
    ) -> ObsidionResult<Option<String>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        // Yield so concurrent callers interleave at the store round-trip
        tokio::task::yield_now().await;
        self.inner.fetch(guild_id, setting).await
    }

    async fn upsert(
        &self,
        guild_id: GuildId,
        setting: SettingName,
        value: Option<&str>,
    ) -> ObsidionResult<()> {
        self.upserts.fetch_add(1, Ordering::SeqCst);
        self.inner.upsert(guild_id, setting, value).await
    }
}

/// Cache whose server is down.
#[derive(Debug, Default)]
pub struct DownCache;

#[async_trait]
impl KeyValueCache for DownCache {
    async fn exists(&self, _key: &str) -> ObsidionResult<bool> {
        Err(CacheError::new(CacheErrorKind::Unavailable("connection refused".into())).into())
    }

    async fn get(&self, _key: &str) -> ObsidionResult<Option<Vec<u8>>> {
        Err(CacheError::new(CacheErrorKind::Unavailable("connection refused".into())).into())
    }

    async fn set(&self, _key: &str, _value: &[u8], _ttl: Duration) -> ObsidionResult<()> {
        Err(CacheError::new(CacheErrorKind::Unavailable("connection refused".into())).into())
    }

    fn backend_name(&self) -> &'static str {
        "down"
    }
}

/// Store whose server is down.
#[derive(Debug, Default)]
pub struct DownStore;

#[async_trait]
impl GuildSettingStore for DownStore {
    async fn fetch(
        &self,
        _guild_id: GuildId,
        _setting: SettingName,
    ) -> ObsidionResult<Option<String>> {
        Err(DatabaseError::new(DatabaseErrorKind::Connection("timed out".into())).into())
    }

    async fn upsert(
        &self,
        _guild_id: GuildId,
        _setting: SettingName,
        _value: Option<&str>,
    ) -> ObsidionResult<()> {
        Err(DatabaseError::new(DatabaseErrorKind::Connection("timed out".into())).into())
    }
}

/// Resolver over counting collaborators with the stock defaults.
pub fn counting_resolver() -> (GuildSettingResolver, Arc<CountingCache>, Arc<CountingStore>) {
    let cache = Arc::new(CountingCache::default());
    let store = Arc::new(CountingStore::default());
    let resolver =
        GuildSettingResolver::new(cache.clone(), store.clone(), SettingDefaults::default());
    (resolver, cache, store)
}
