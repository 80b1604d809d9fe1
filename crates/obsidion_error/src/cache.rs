//! Fast cache error types.

/// Kinds of cache errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CacheErrorKind {
    /// Cache backend cannot be reached or timed out
    #[display("Cache unavailable: {}", _0)]
    Unavailable(String),
    /// Cache backend rejected a command
    #[display("Cache command failed: {}", _0)]
    Command(String),
    /// Cached bytes could not be decoded
    #[display("Cached value could not be decoded: {}", _0)]
    Encoding(String),
    /// Invalid cache configuration
    #[display("Invalid cache configuration: {}", _0)]
    InvalidConfig(String),
}

/// Cache error with location tracking.
///
/// # Examples
///
/// ```
/// use obsidion_error::{CacheError, CacheErrorKind};
///
/// let err = CacheError::new(CacheErrorKind::Unavailable("timed out".to_string()));
/// assert!(format!("{}", err).contains("unavailable"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Cache Error: {} at line {} in {}", kind, line, file)]
pub struct CacheError {
    /// The kind of error that occurred
    pub kind: CacheErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CacheError {
    /// Create a new cache error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CacheErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

#[cfg(feature = "redis")]
impl From<redis::RedisError> for CacheError {
    #[track_caller]
    fn from(err: redis::RedisError) -> Self {
        if err.is_io_error() || err.is_timeout() || err.is_connection_dropped() {
            CacheError::new(CacheErrorKind::Unavailable(err.to_string()))
        } else {
            CacheError::new(CacheErrorKind::Command(err.to_string()))
        }
    }
}

impl From<std::string::FromUtf8Error> for CacheError {
    #[track_caller]
    fn from(err: std::string::FromUtf8Error) -> Self {
        CacheError::new(CacheErrorKind::Encoding(err.to_string()))
    }
}
