//! PostgreSQL-backed guild settings store.

use crate::schema::guild;
use crate::{DatabaseResult, GuildRow, PgPool};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use obsidion_core::{GuildId, SettingName};
use obsidion_error::{DatabaseError, DatabaseErrorKind, ObsidionResult};
use obsidion_interface::GuildSettingStore;
use tracing::instrument;

/// Durable store for per-guild settings in the `guild` table.
///
/// Diesel calls are blocking, so each operation checks a connection out of
/// the pool inside [`tokio::task::spawn_blocking`].
#[derive(Clone)]
pub struct PgGuildSettingStore {
    pool: PgPool,
}

impl PgGuildSettingStore {
    /// Create a store over an established pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the full row for a guild, if one has been created.
    #[instrument(skip(self))]
    pub async fn load_guild(&self, guild_id: GuildId) -> ObsidionResult<Option<GuildRow>> {
        let id = row_id(guild_id)?;
        let row = run_blocking(&self.pool, move |conn| {
            guild::table
                .find(id)
                .select(GuildRow::as_select())
                .first::<GuildRow>(conn)
                .optional()
                .map_err(DatabaseError::from)
        })
        .await?;
        Ok(row)
    }
}

impl std::fmt::Debug for PgGuildSettingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgGuildSettingStore")
            .field("state", &self.pool.state())
            .finish()
    }
}

/// Guild ids are stored in a signed BIGINT column.
fn row_id(guild_id: GuildId) -> DatabaseResult<i64> {
    guild_id
        .as_i64()
        .ok_or_else(|| DatabaseError::new(DatabaseErrorKind::GuildIdOutOfRange(guild_id.get())))
}

/// Run a blocking diesel operation on a pooled connection.
async fn run_blocking<T, F>(pool: &PgPool, op: F) -> DatabaseResult<T>
where
    T: Send + 'static,
    F: FnOnce(&mut PgConnection) -> DatabaseResult<T> + Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || -> DatabaseResult<T> {
        let mut conn = pool.get()?;
        op(&mut conn)
    })
    .await
    .map_err(|e| DatabaseError::new(DatabaseErrorKind::Interrupted(e.to_string())))?
}

#[async_trait]
impl GuildSettingStore for PgGuildSettingStore {
    #[instrument(skip(self), fields(column = setting.column()))]
    async fn fetch(
        &self,
        guild_id: GuildId,
        setting: SettingName,
    ) -> ObsidionResult<Option<String>> {
        let id = row_id(guild_id)?;

        let value = run_blocking(&self.pool, move |conn| {
            let row = guild::table.find(id);
            let value = match setting {
                SettingName::Prefix => row
                    .select(guild::prefix)
                    .first::<Option<String>>(conn)
                    .optional()?,
                SettingName::Locale => row
                    .select(guild::locale)
                    .first::<Option<String>>(conn)
                    .optional()?,
                SettingName::RegionalFormat => row
                    .select(guild::regional)
                    .first::<Option<String>>(conn)
                    .optional()?,
            };
            // Missing row and null column both mean "no override"
            Ok(value.flatten())
        })
        .await?;

        tracing::debug!(found = value.is_some(), "Fetched guild setting");
        Ok(value)
    }

    #[instrument(skip(self, value), fields(column = setting.column(), reset = value.is_none()))]
    async fn upsert(
        &self,
        guild_id: GuildId,
        setting: SettingName,
        value: Option<&str>,
    ) -> ObsidionResult<()> {
        let id = row_id(guild_id)?;
        let value = value.map(str::to_owned);

        run_blocking(&self.pool, move |conn| {
            let value = value.as_deref();
            let insert = diesel::insert_into(guild::table);
            match setting {
                SettingName::Prefix => insert
                    .values((guild::id.eq(id), guild::prefix.eq(value)))
                    .on_conflict(guild::id)
                    .do_update()
                    .set(guild::prefix.eq(value))
                    .execute(conn)?,
                SettingName::Locale => insert
                    .values((guild::id.eq(id), guild::locale.eq(value)))
                    .on_conflict(guild::id)
                    .do_update()
                    .set(guild::locale.eq(value))
                    .execute(conn)?,
                SettingName::RegionalFormat => insert
                    .values((guild::id.eq(id), guild::regional.eq(value)))
                    .on_conflict(guild::id)
                    .do_update()
                    .set(guild::regional.eq(value))
                    .execute(conn)?,
            };
            Ok(())
        })
        .await?;

        tracing::debug!("Upserted guild setting");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_id_in_range() {
        assert_eq!(row_id(GuildId::new(42)).unwrap(), 42);
        assert_eq!(
            row_id(GuildId::new(i64::MAX as u64)).unwrap(),
            i64::MAX
        );
    }

    #[test]
    fn test_row_id_out_of_range() {
        let err = row_id(GuildId::new(u64::MAX)).unwrap_err();
        assert_eq!(err.kind, DatabaseErrorKind::GuildIdOutOfRange(u64::MAX));
    }
}
