//! In-process TTL cache with LRU eviction.

use async_trait::async_trait;
use derive_getters::Getters;
use obsidion_error::ObsidionResult;
use obsidion_interface::KeyValueCache;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::CacheConfig;

/// Cache entry with value and expiration.
#[derive(Debug, Clone, Getters)]
pub struct CacheEntry {
    value: Vec<u8>,
    created_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    /// Check if this entry is expired.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }

    /// Get remaining time until expiration.
    pub fn time_remaining(&self) -> Option<Duration> {
        self.ttl.checked_sub(self.created_at.elapsed())
    }
}

#[derive(Debug, Default)]
struct Entries {
    entries: HashMap<String, CacheEntry>,
    access_order: Vec<String>,
}

impl Entries {
    fn touch(&mut self, key: &str) {
        if let Some(pos) = self.access_order.iter().position(|k| k == key) {
            let key = self.access_order.remove(pos);
            self.access_order.push(key);
        }
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        if let Some(pos) = self.access_order.iter().position(|k| k == key) {
            self.access_order.remove(pos);
        }
    }

    /// Drop the entry for `key` if it has expired. Returns whether a live entry remains.
    fn live(&mut self, key: &str) -> bool {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => return false,
        };
        if expired {
            tracing::debug!(key, "Cache entry expired, removing");
            self.remove(key);
        }
        !expired
    }

    fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let entries = &self.entries;
        self.access_order.retain(|key| entries.contains_key(key));
        before - self.entries.len()
    }

    fn evict_lru(&mut self) {
        if self.access_order.is_empty() {
            return;
        }
        let key = self.access_order.remove(0);
        tracing::warn!(key = %key, "Evicting least recently used cache entry");
        self.entries.remove(&key);
    }
}

/// In-memory key-value cache.
///
/// Entries expire after their TTL and read as absent from then on. When
/// the cache is full, expired entries are purged first and then the least
/// recently used entry is evicted.
///
/// # Example
///
/// ```
/// use obsidion_cache::{CacheConfig, InMemoryCache};
/// use obsidion_interface::KeyValueCache;
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let cache = InMemoryCache::new(&CacheConfig::default());
/// cache.set("prefix_42", b"!", Duration::from_secs(60)).await?;
/// assert_eq!(cache.get("prefix_42").await?, Some(b"!".to_vec()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct InMemoryCache {
    max_entries: usize,
    inner: Mutex<Entries>,
}

impl InMemoryCache {
    /// Create an empty cache sized from `config`.
    pub fn new(config: &CacheConfig) -> Self {
        Self::with_capacity(*config.max_entries())
    }

    /// Create an empty cache holding at most `max_entries` entries.
    pub fn with_capacity(max_entries: usize) -> Self {
        tracing::debug!(max_entries, "Creating new InMemoryCache");
        Self {
            max_entries: max_entries.max(1),
            inner: Mutex::new(Entries::default()),
        }
    }

    /// Remove expired entries from cache.
    pub async fn cleanup_expired(&self) -> usize {
        let mut inner = self.inner.lock().await;
        let removed = inner.cleanup_expired();
        if removed > 0 {
            tracing::info!(
                removed,
                remaining = inner.entries.len(),
                "Cleaned up expired cache entries"
            );
        }
        removed
    }

    /// Clear all cache entries.
    pub async fn clear(&self) {
        let mut inner = self.inner.lock().await;
        let count = inner.entries.len();
        inner.entries.clear();
        inner.access_order.clear();
        tracing::info!(cleared = count, "Cleared cache");
    }

    /// Snapshot of the live entry under `key`.
    pub async fn entry(&self, key: &str) -> Option<CacheEntry> {
        let mut inner = self.inner.lock().await;
        if !inner.live(key) {
            return None;
        }
        inner.entries.get(key).cloned()
    }

    /// Number of stored entries, including ones not yet purged.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.entries.len()
    }

    /// Check if cache is empty.
    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.entries.is_empty()
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

#[async_trait]
impl KeyValueCache for InMemoryCache {
    #[tracing::instrument(skip(self))]
    async fn exists(&self, key: &str) -> ObsidionResult<bool> {
        Ok(self.inner.lock().await.live(key))
    }

    #[tracing::instrument(skip(self))]
    async fn get(&self, key: &str) -> ObsidionResult<Option<Vec<u8>>> {
        let mut inner = self.inner.lock().await;
        if !inner.live(key) {
            return Ok(None);
        }
        inner.touch(key);

        let entry = inner.entries.get(key);
        if let Some(entry) = entry {
            tracing::debug!(time_remaining = ?entry.time_remaining(), "Cache hit");
        }
        Ok(entry.map(|entry| entry.value.clone()))
    }

    #[tracing::instrument(skip(self, value), fields(size = value.len(), ttl = ?ttl))]
    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> ObsidionResult<()> {
        let mut inner = self.inner.lock().await;

        // Evict if at capacity
        if inner.entries.len() >= self.max_entries
            && !inner.entries.contains_key(key)
            && inner.cleanup_expired() == 0
        {
            inner.evict_lru();
        }

        if let Some(pos) = inner.access_order.iter().position(|k| k == key) {
            inner.access_order.remove(pos);
        }
        inner.access_order.push(key.to_string());
        inner.entries.insert(
            key.to_string(),
            CacheEntry {
                value: value.to_vec(),
                created_at: Instant::now(),
                ttl,
            },
        );

        tracing::debug!(cache_size = inner.entries.len(), "Inserted entry into cache");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
