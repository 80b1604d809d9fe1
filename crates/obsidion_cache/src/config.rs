//! Cache configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default entry lifetime: eight hours.
pub const DEFAULT_TTL_SECONDS: u64 = 28_800;

/// Which cache implementation backs the resolver.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// In-process cache, lost on restart
    #[default]
    #[display("memory")]
    Memory,
    /// Shared Redis server
    #[display("redis")]
    Redis,
}

/// Configuration for the fast cache.
#[derive(
    Debug,
    Clone,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct CacheConfig {
    /// Backend selection
    #[serde(default)]
    #[builder(default)]
    backend: CacheBackend,

    /// Connection URL (required for the redis backend)
    #[serde(default)]
    #[builder(default)]
    url: Option<String>,

    /// TTL for cached entries (seconds)
    #[serde(default = "default_ttl")]
    #[builder(default = "default_ttl()")]
    ttl_seconds: u64,

    /// Maximum in-memory cache size (number of entries)
    #[serde(default = "default_max_entries")]
    #[builder(default = "default_max_entries()")]
    max_entries: usize,

    /// Seconds to wait for a Redis connection attempt
    #[serde(default = "default_connect_timeout")]
    #[builder(default = "default_connect_timeout()")]
    connect_timeout_seconds: u64,

    /// Seconds to wait for a Redis reply
    #[serde(default = "default_response_timeout")]
    #[builder(default = "default_response_timeout()")]
    response_timeout_seconds: u64,

    /// Reconnect attempts before a command fails as unavailable
    #[serde(default = "default_reconnect_retries")]
    #[builder(default = "default_reconnect_retries()")]
    reconnect_retries: usize,
}

fn default_ttl() -> u64 {
    DEFAULT_TTL_SECONDS
}

fn default_max_entries() -> usize {
    10_000
}

fn default_connect_timeout() -> u64 {
    2
}

fn default_response_timeout() -> u64 {
    2
}

fn default_reconnect_retries() -> usize {
    2
}

impl CacheConfig {
    /// Entry lifetime as a [`Duration`].
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }

    /// Connection attempt timeout as a [`Duration`].
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    /// Reply timeout as a [`Duration`].
    pub fn response_timeout(&self) -> Duration {
        Duration::from_secs(self.response_timeout_seconds)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            url: None,
            ttl_seconds: default_ttl(),
            max_entries: default_max_entries(),
            connect_timeout_seconds: default_connect_timeout(),
            response_timeout_seconds: default_response_timeout(),
            reconnect_retries: default_reconnect_retries(),
        }
    }
}
