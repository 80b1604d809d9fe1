//! Core data types for Obsidion guild settings.
//!
//! This crate provides the identifiers and values shared by the cache, the
//! durable store and the resolver:
//!
//! - [`GuildId`] identifies the guild that owns a setting
//! - [`SettingName`] enumerates the per-guild settings
//! - [`GuildSettingKey`] is the typed composite cache key
//! - [`SettingDefaults`] holds the process-wide fallback values
//! - [`LocaleTag`] normalises `language-TERRITORY` tags

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod defaults;
mod guild;
mod key;
mod locale;
mod setting;

pub use defaults::SettingDefaults;
pub use guild::GuildId;
pub use key::GuildSettingKey;
pub use locale::LocaleTag;
pub use setting::SettingName;
