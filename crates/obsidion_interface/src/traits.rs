//! Cache and store capability traits.

use async_trait::async_trait;
use obsidion_core::{GuildId, SettingName};
use obsidion_error::ObsidionResult;
use std::time::Duration;

/// Key-value cache with per-entry expiry.
///
/// Failures to reach the backend are reported as errors, never as misses.
#[async_trait]
pub trait KeyValueCache: Send + Sync {
    /// Whether an unexpired entry exists for `key`.
    async fn exists(&self, key: &str) -> ObsidionResult<bool>;

    /// Raw bytes stored under `key`, or `None` when absent or expired.
    async fn get(&self, key: &str) -> ObsidionResult<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous entry, for `ttl`.
    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> ObsidionResult<()>;

    /// Backend name for diagnostics (e.g., "redis", "memory").
    fn backend_name(&self) -> &'static str;
}

/// Durable per-guild settings store.
///
/// One row per guild, one nullable column per [`SettingName`].
#[async_trait]
pub trait GuildSettingStore: Send + Sync {
    /// Stored value for `setting` in `guild_id`.
    ///
    /// Returns `None` both when the guild has no row and when the column is
    /// null.
    async fn fetch(&self, guild_id: GuildId, setting: SettingName)
    -> ObsidionResult<Option<String>>;

    /// Insert the guild row or update the column in place.
    ///
    /// `None` stores null, which readers treat as "use the default".
    async fn upsert(
        &self,
        guild_id: GuildId,
        setting: SettingName,
        value: Option<&str>,
    ) -> ObsidionResult<()>;
}
