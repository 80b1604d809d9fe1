//! Top-level error wrapper types.

use crate::{CacheError, ConfigError, DatabaseError, JsonError, SettingsError};
use crate::{CacheErrorKind, DatabaseErrorKind};

/// Every error condition an Obsidion operation can surface.
///
/// # Examples
///
/// ```
/// use obsidion_error::{ConfigError, ObsidionError};
///
/// let err: ObsidionError = ConfigError::new("bad toml").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ObsidionErrorKind {
    /// Fast cache error
    #[from(CacheError)]
    Cache(CacheError),
    /// Durable store error
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Setting validation error
    #[from(SettingsError)]
    Settings(SettingsError),
}

/// Obsidion error with kind discrimination.
///
/// # Examples
///
/// ```
/// use obsidion_error::{DatabaseError, DatabaseErrorKind, ObsidionResult};
///
/// fn load() -> ObsidionResult<()> {
///     Err(DatabaseError::new(DatabaseErrorKind::Connection("refused".into())))?
/// }
///
/// assert!(load().unwrap_err().is_store_unavailable());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Obsidion Error: {}", _0)]
pub struct ObsidionError(Box<ObsidionErrorKind>);

impl ObsidionError {
    /// Create a new error from a kind.
    pub fn new(kind: ObsidionErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ObsidionErrorKind {
        &self.0
    }

    /// The fast cache could not be reached.
    pub fn is_cache_unavailable(&self) -> bool {
        matches!(
            self.kind(),
            ObsidionErrorKind::Cache(CacheError {
                kind: CacheErrorKind::Unavailable(_),
                ..
            })
        )
    }

    /// The durable store could not be reached.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(
            self.kind(),
            ObsidionErrorKind::Database(DatabaseError {
                kind: DatabaseErrorKind::Connection(_) | DatabaseErrorKind::Interrupted(_),
                ..
            })
        )
    }
}

// Generic From implementation for any type that converts to ObsidionErrorKind
impl<T> From<T> for ObsidionError
where
    T: Into<ObsidionErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Obsidion operations.
pub type ObsidionResult<T> = std::result::Result<T, ObsidionError>;
