//! Per-setting entry points for the command layer.

use crate::GuildSettingResolver;
use obsidion_core::{GuildId, LocaleTag, SettingName};
use obsidion_error::{ObsidionResult, SettingsError, SettingsErrorKind};

/// Command prefix lookup and updates.
#[derive(Debug, Clone)]
pub struct PrefixManager {
    resolver: GuildSettingResolver,
}

impl PrefixManager {
    /// Wrap a resolver.
    pub fn new(resolver: GuildSettingResolver) -> Self {
        Self { resolver }
    }

    /// Prefixes accepted in `guild`, for the message dispatcher.
    pub async fn get_prefixes(&self, guild: Option<GuildId>) -> ObsidionResult<Vec<String>> {
        Ok(vec![self.get_prefix(guild).await?])
    }

    /// Effective prefix in `guild`.
    pub async fn get_prefix(&self, guild: Option<GuildId>) -> ObsidionResult<String> {
        self.resolver.get(guild, SettingName::Prefix).await
    }

    /// Change the prefix for `guild`, or reset it with `None`.
    ///
    /// # Errors
    ///
    /// Rejects an empty or whitespace-only prefix.
    pub async fn set_prefix(&self, guild: GuildId, prefix: Option<&str>) -> ObsidionResult<()> {
        if let Some(prefix) = prefix
            && prefix.trim().is_empty()
        {
            return Err(
                SettingsError::new(SettingsErrorKind::InvalidPrefix(prefix.to_string())).into(),
            );
        }
        self.resolver.set(guild, SettingName::Prefix, prefix).await
    }
}

/// Locale and regional format lookup and updates.
///
/// Tags are normalised to `language-TERRITORY` before they are stored.
#[derive(Debug, Clone)]
pub struct I18nManager {
    resolver: GuildSettingResolver,
}

impl I18nManager {
    /// Wrap a resolver.
    pub fn new(resolver: GuildSettingResolver) -> Self {
        Self { resolver }
    }

    /// Reply locale for `guild`.
    pub async fn get_locale(&self, guild: Option<GuildId>) -> ObsidionResult<String> {
        self.resolver.get(guild, SettingName::Locale).await
    }

    /// Set the reply locale for `guild`, or reset it with `None`.
    ///
    /// Returns the normalised tag that was stored.
    pub async fn set_locale(
        &self,
        guild: GuildId,
        locale: Option<&str>,
    ) -> ObsidionResult<Option<String>> {
        self.set_tag(guild, SettingName::Locale, locale).await
    }

    /// Regional format for `guild`.
    pub async fn get_regional_format(&self, guild: Option<GuildId>) -> ObsidionResult<String> {
        self.resolver.get(guild, SettingName::RegionalFormat).await
    }

    /// Set the regional format for `guild`, or reset it with `None`.
    ///
    /// Returns the normalised tag that was stored.
    pub async fn set_regional_format(
        &self,
        guild: GuildId,
        regional_format: Option<&str>,
    ) -> ObsidionResult<Option<String>> {
        self.set_tag(guild, SettingName::RegionalFormat, regional_format)
            .await
    }

    async fn set_tag(
        &self,
        guild: GuildId,
        setting: SettingName,
        tag: Option<&str>,
    ) -> ObsidionResult<Option<String>> {
        let normalised = tag
            .map(LocaleTag::parse)
            .transpose()?
            .map(|tag| tag.to_string());
        self.resolver
            .set(guild, setting, normalised.as_deref())
            .await?;
        Ok(normalised)
    }
}
