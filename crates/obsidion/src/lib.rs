//! Obsidion - per-guild settings for the Obsidion Discord bot.
//!
//! Every message the bot handles needs its guild's command prefix, and most
//! replies need its locale. This crate assembles the pieces that answer
//! those lookups quickly and durably:
//!
//! - [`ObsidionConfig`] loads layered TOML and environment configuration
//! - [`init_logging`] installs the tracing subscriber
//! - [`SettingsService`] connects the cache and the database and exposes
//!   the resolver with its prefix and i18n managers
//! - [`cli`] defines the `obsidion` admin binary
//!
//! # Cargo Features
//!
//! - `redis` (default) - Redis cache backend
//!
//! # Architecture
//!
//! - `obsidion_error` - Error types
//! - `obsidion_core` - Guild ids, setting names, defaults, locale tags
//! - `obsidion_interface` - Cache and store traits
//! - `obsidion_cache` - In-memory and Redis caches, cached JSON fetches
//! - `obsidion_database` - PostgreSQL `guild` table store
//! - `obsidion_settings` - Resolver, managers, in-memory store
//!
//! This crate (`obsidion`) re-exports everything for convenience.

pub mod cli;
mod config;
mod logging;
mod service;

pub use config::ObsidionConfig;
pub use logging::{LoggingConfig, init_logging};
pub use service::{SettingsService, migrate_pool, open_pool};

// Re-export workspace crates
pub use obsidion_cache::{
    CacheBackend, CacheConfig, CacheConfigBuilder, InMemoryCache, cached_json, connect_cache,
};
#[cfg(feature = "redis")]
pub use obsidion_cache::RedisCache;
pub use obsidion_core::{GuildId, GuildSettingKey, LocaleTag, SettingDefaults, SettingName};
pub use obsidion_database::{DatabaseConfig, PgGuildSettingStore, PgPool};
pub use obsidion_error::{ObsidionError, ObsidionErrorKind, ObsidionResult};
pub use obsidion_interface::{GuildSettingStore, KeyValueCache};
pub use obsidion_settings::{
    GuildSettingResolver, I18nManager, InMemoryGuildSettingStore, PrefixManager,
};
