//! Guild setting resolution for Obsidion.
//!
//! Every incoming chat message needs its guild's prefix, and most replies
//! need its locale. [`GuildSettingResolver`] answers both from a fast
//! cache, falling back to the durable store and then to the static
//! defaults, and writes explicit changes through to both layers.
//!
//! [`PrefixManager`] and [`I18nManager`] are the thin per-setting entry
//! points the command layer calls.
//!
//! # Example
//!
//! ```
//! use obsidion_cache::InMemoryCache;
//! use obsidion_core::{GuildId, SettingDefaults, SettingName};
//! use obsidion_settings::{GuildSettingResolver, InMemoryGuildSettingStore};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = GuildSettingResolver::new(
//!     Arc::new(InMemoryCache::default()),
//!     Arc::new(InMemoryGuildSettingStore::new()),
//!     SettingDefaults::default(),
//! );
//!
//! let guild = Some(GuildId::new(42));
//! assert_eq!(resolver.get(guild, SettingName::Prefix).await?, "/");
//!
//! resolver.set(GuildId::new(42), SettingName::Prefix, Some("!")).await?;
//! assert_eq!(resolver.get(guild, SettingName::Prefix).await?, "!");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod in_memory_store;
mod managers;
mod resolver;

pub use in_memory_store::{GuildSettingsRow, InMemoryGuildSettingStore};
pub use managers::{I18nManager, PrefixManager};
pub use resolver::GuildSettingResolver;
