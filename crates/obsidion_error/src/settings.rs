//! Setting validation error types.

/// Setting validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SettingsErrorKind {
    /// Locale tag is malformed or lacks a territory
    #[display("Invalid locale '{}': {}", tag, reason)]
    InvalidLocale {
        /// The rejected tag
        tag: String,
        /// Why it was rejected
        reason: String,
    },
    /// Prefix is empty or whitespace
    #[display("Invalid prefix '{}'", _0)]
    InvalidPrefix(String),
    /// Setting name is not recognised
    #[display("Unknown setting '{}'", _0)]
    UnknownSetting(String),
}

/// Setting validation error with location tracking.
///
/// # Examples
///
/// ```
/// use obsidion_error::{SettingsError, SettingsErrorKind};
///
/// let err = SettingsError::new(SettingsErrorKind::InvalidPrefix(" ".to_string()));
/// assert!(format!("{}", err).contains("Invalid prefix"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Settings Error: {} at line {} in {}", kind, line, file)]
pub struct SettingsError {
    /// The kind of error that occurred
    pub kind: SettingsErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SettingsError {
    /// Create a new settings error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SettingsErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
