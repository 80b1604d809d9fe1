//! Locale tag normalisation.

use obsidion_error::{SettingsError, SettingsErrorKind};

/// A `language-TERRITORY` tag such as `en-US` or `es-419`.
///
/// Parsing accepts `-` or `_` separators and any letter case, drops an
/// optional four-letter script subtag, and requires a territory.
///
/// Validation is syntactic only. There is no bundled locale database, so a
/// well-formed tag for a language or territory that does not exist, such as
/// `qq-ZZ`, is accepted and stored as given. Replies in an unknown locale
/// fall back to the bot's default translations.
///
/// # Examples
///
/// ```
/// use obsidion_core::LocaleTag;
///
/// assert_eq!(LocaleTag::parse("en_us").unwrap().to_string(), "en-US");
/// assert_eq!(LocaleTag::parse("zh-Hant-TW").unwrap().to_string(), "zh-TW");
/// assert!(LocaleTag::parse("en").is_err());
/// assert_eq!(LocaleTag::parse("qq_zz").unwrap().to_string(), "qq-ZZ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{}-{}", language, territory)]
pub struct LocaleTag {
    language: String,
    territory: String,
}

impl LocaleTag {
    /// Parse and normalise a locale tag.
    #[track_caller]
    pub fn parse(tag: &str) -> Result<Self, SettingsError> {
        let invalid = |reason: &str| {
            SettingsError::new(SettingsErrorKind::InvalidLocale {
                tag: tag.to_string(),
                reason: reason.to_string(),
            })
        };

        let letters = |s: &str| s.chars().all(|c| c.is_ascii_alphabetic());
        let digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());

        let mut subtags = tag.trim().split(['-', '_']);
        let language = subtags.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !letters(language) {
            return Err(invalid("language must be two or three letters"));
        }

        let mut territory = subtags
            .next()
            .ok_or_else(|| invalid("a territory is required, e.g. en-US"))?;
        if territory.len() == 4 && letters(territory) {
            territory = subtags
                .next()
                .ok_or_else(|| invalid("a territory is required after the script"))?;
        }

        let territory = if territory.len() == 2 && letters(territory) {
            territory.to_ascii_uppercase()
        } else if territory.len() == 3 && digits(territory) {
            territory.to_string()
        } else {
            return Err(invalid("territory must be two letters or three digits"));
        };

        if subtags.next().is_some() {
            return Err(invalid("unexpected trailing subtag"));
        }

        Ok(Self {
            language: language.to_ascii_lowercase(),
            territory,
        })
    }

    /// Language subtag, lowercase.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Territory subtag, uppercase letters or a numeric region.
    pub fn territory(&self) -> &str {
        &self.territory
    }
}

impl std::str::FromStr for LocaleTag {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
