//! Database connection utilities.

use crate::DatabaseResult;
use derive_getters::Getters;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use obsidion_error::{DatabaseError, DatabaseErrorKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Migrations bundled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Pooled PostgreSQL connections.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Connection settings for the durable store.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    #[serde(default = "default_url")]
    url: String,

    /// Maximum pooled connections
    #[serde(default = "default_max_connections")]
    max_connections: u32,

    /// Seconds to wait for a connection before failing
    #[serde(default = "default_connect_timeout")]
    connect_timeout_seconds: u64,

    /// Apply pending migrations at startup
    #[serde(default = "default_run_migrations")]
    run_migrations: bool,
}

fn default_url() -> String {
    "postgres://discord:hunter12@db:5432/discord".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_run_migrations() -> bool {
    true
}

impl DatabaseConfig {
    /// Configuration pointing at `url` with default pool settings.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
            connect_timeout_seconds: default_connect_timeout(),
            run_migrations: default_run_migrations(),
        }
    }
}

/// Build a connection pool for the configured database.
///
/// Blocks until the pool has opened its initial connections.
///
/// # Errors
///
/// Returns [`DatabaseErrorKind::Connection`] if the server cannot be reached
/// within the configured timeout.
#[tracing::instrument(skip(config), fields(max_connections = config.max_connections))]
pub fn establish_pool(config: &DatabaseConfig) -> DatabaseResult<PgPool> {
    let manager = ConnectionManager::<PgConnection>::new(config.url.as_str());

    let pool = Pool::builder()
        .max_size(config.max_connections.max(1))
        .connection_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .build(manager)
        .map_err(DatabaseError::from)?;

    tracing::info!("Database connection pool established");
    Ok(pool)
}

/// Apply pending migrations and return the versions that ran.
#[tracing::instrument(skip(pool))]
pub fn run_migrations(pool: &PgPool) -> DatabaseResult<Vec<String>> {
    let mut pooled = pool.get()?;
    let conn: &mut PgConnection = &mut pooled;

    let applied: Vec<String> = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Migration(e.to_string())))?
        .iter()
        .map(ToString::to_string)
        .collect();

    tracing::info!(count = applied.len(), "Applied pending migrations");
    Ok(applied)
}
