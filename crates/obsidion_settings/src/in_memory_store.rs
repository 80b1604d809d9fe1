//! In-memory guild settings store.

use async_trait::async_trait;
use obsidion_core::{GuildId, SettingName};
use obsidion_error::{DatabaseError, DatabaseErrorKind, ObsidionResult};
use obsidion_interface::GuildSettingStore;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Columns of one stored guild row. An absent entry reads as null.
pub type GuildSettingsRow = HashMap<SettingName, Option<String>>;

/// Map-backed [`GuildSettingStore`] for tests and local development.
///
/// Mirrors the relational store: a row appears on the first upsert for a
/// guild, nulls read the same as missing rows, and guild ids beyond the
/// signed BIGINT range are rejected with
/// [`DatabaseErrorKind::GuildIdOutOfRange`]. All data is lost when the store
/// is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGuildSettingStore {
    rows: Arc<RwLock<HashMap<GuildId, GuildSettingsRow>>>,
}

impl InMemoryGuildSettingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a guild's row, if it has been created.
    pub async fn row(&self, guild_id: GuildId) -> Option<GuildSettingsRow> {
        self.rows.read().await.get(&guild_id).cloned()
    }

    /// Number of guild rows.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Check if no rows exist.
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

/// Same key range as the `guild.id` BIGINT column.
fn check_range(guild_id: GuildId) -> Result<(), DatabaseError> {
    match guild_id.as_i64() {
        Some(_) => Ok(()),
        None => Err(DatabaseError::new(DatabaseErrorKind::GuildIdOutOfRange(
            guild_id.get(),
        ))),
    }
}

#[async_trait]
impl GuildSettingStore for InMemoryGuildSettingStore {
    async fn fetch(
        &self,
        guild_id: GuildId,
        setting: SettingName,
    ) -> ObsidionResult<Option<String>> {
        check_range(guild_id)?;
        let rows = self.rows.read().await;
        Ok(rows
            .get(&guild_id)
            .and_then(|row| row.get(&setting))
            .cloned()
            .flatten())
    }

    async fn upsert(
        &self,
        guild_id: GuildId,
        setting: SettingName,
        value: Option<&str>,
    ) -> ObsidionResult<()> {
        check_range(guild_id)?;
        self.rows
            .write()
            .await
            .entry(guild_id)
            .or_default()
            .insert(setting, value.map(str::to_owned));
        Ok(())
    }
}
