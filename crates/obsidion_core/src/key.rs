//! Composite cache keys.

use crate::{GuildId, SettingName};

/// Cache key for one guild's setting.
///
/// Kept typed inside the resolver and rendered as `{setting}_{guild}` only
/// when it reaches a cache backend.
///
/// # Examples
///
/// ```
/// use obsidion_core::{GuildId, GuildSettingKey, SettingName};
///
/// let key = GuildSettingKey::new(GuildId::new(42), SettingName::Prefix);
/// assert_eq!(key.to_string(), "prefix_42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{}_{}", setting, guild_id)]
pub struct GuildSettingKey {
    guild_id: GuildId,
    setting: SettingName,
}

impl GuildSettingKey {
    /// Create a key for `setting` in `guild_id`.
    pub fn new(guild_id: GuildId, setting: SettingName) -> Self {
        Self { guild_id, setting }
    }
}
