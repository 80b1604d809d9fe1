//! Setting names.

use obsidion_error::{SettingsError, SettingsErrorKind};
use serde::{Deserialize, Serialize};

/// Per-guild settings resolved through the cache.
///
/// The display form is the cache key namespace.
///
/// # Examples
///
/// ```
/// use obsidion_core::SettingName;
///
/// assert_eq!(SettingName::RegionalFormat.to_string(), "regional_format");
/// assert_eq!("prefix".parse::<SettingName>().unwrap(), SettingName::Prefix);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum SettingName {
    /// Command prefix
    #[display("prefix")]
    Prefix,
    /// Language used for replies
    #[display("locale")]
    Locale,
    /// Locale used for number and date formatting
    #[display("regional_format")]
    RegionalFormat,
}

impl SettingName {
    /// Column holding this setting in the `guild` table.
    pub fn column(&self) -> &'static str {
        match self {
            SettingName::Prefix => "prefix",
            SettingName::Locale => "locale",
            SettingName::RegionalFormat => "regional",
        }
    }
}

impl std::str::FromStr for SettingName {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prefix" => Ok(SettingName::Prefix),
            "locale" => Ok(SettingName::Locale),
            "regional_format" | "regional-format" | "regional" => {
                Ok(SettingName::RegionalFormat)
            }
            _ => Err(SettingsError::new(SettingsErrorKind::UnknownSetting(
                s.to_string(),
            ))),
        }
    }
}
