//! TTL caching for guild settings and external API responses.
//!
//! This crate provides the fast cache that sits in front of the durable
//! settings store and in front of third-party API lookups.
//!
//! - [`InMemoryCache`] keeps entries in process with TTL expiry and LRU
//!   eviction. It stands in for Redis during development and tests.
//! - [`RedisCache`] (feature `redis`) talks to a shared Redis server.
//! - [`connect_cache`] picks a backend from [`CacheConfig`].
//! - [`cached_json`] applies cache-aside to any JSON-serializable fetch.

#![warn(missing_docs)]

mod config;
mod connect;
mod fetch;
mod memory;
#[cfg(feature = "redis")]
mod redis_cache;

pub use config::{CacheBackend, CacheConfig, CacheConfigBuilder, DEFAULT_TTL_SECONDS};
pub use connect::connect_cache;
pub use fetch::cached_json;
pub use memory::{CacheEntry, InMemoryCache};
#[cfg(feature = "redis")]
pub use redis_cache::RedisCache;
