//! Process-wide setting defaults.

use crate::SettingName;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Fallback values used when a guild has no stored override.
///
/// Loaded once at startup and injected into the resolver.
///
/// # Examples
///
/// ```
/// use obsidion_core::{SettingDefaults, SettingName};
///
/// let defaults = SettingDefaults::default().with_prefix("!".to_string());
/// assert_eq!(defaults.for_setting(SettingName::Prefix), "!");
/// assert_eq!(defaults.for_setting(SettingName::Locale), "en-US");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct SettingDefaults {
    /// Default command prefix
    #[serde(default = "default_prefix")]
    prefix: String,

    /// Default reply locale
    #[serde(default = "default_locale")]
    locale: String,

    /// Default regional format
    #[serde(default = "default_locale")]
    regional_format: String,
}

fn default_prefix() -> String {
    "/".to_string()
}

fn default_locale() -> String {
    "en-US".to_string()
}

impl SettingDefaults {
    /// Default value for `setting`.
    pub fn for_setting(&self, setting: SettingName) -> &str {
        match setting {
            SettingName::Prefix => &self.prefix,
            SettingName::Locale => &self.locale,
            SettingName::RegionalFormat => &self.regional_format,
        }
    }
}

impl Default for SettingDefaults {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            locale: default_locale(),
            regional_format: default_locale(),
        }
    }
}
