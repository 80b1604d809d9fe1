//! PostgreSQL integration for Obsidion guild settings.
//!
//! This crate provides the `guild` table schema, its embedded migration,
//! connection pooling, and [`PgGuildSettingStore`], the durable
//! [`GuildSettingStore`](obsidion_interface::GuildSettingStore) used by the
//! settings resolver.
//!
//! # Example
//!
//! ```rust,ignore
//! use obsidion_database::{DatabaseConfig, PgGuildSettingStore, establish_pool, run_migrations};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = establish_pool(&DatabaseConfig::default())?;
//! run_migrations(&pool)?;
//! let store = PgGuildSettingStore::new(pool);
//! # Ok(())
//! # }
//! ```

mod connection;
mod guild_settings;
mod models;

// Public modules for external access
pub mod schema;

pub use connection::{DatabaseConfig, MIGRATIONS, PgPool, establish_pool, run_migrations};
pub use guild_settings::PgGuildSettingStore;
pub use models::GuildRow;

use obsidion_error::DatabaseError;

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
