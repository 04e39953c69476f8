//! Locale identifiers and the languages offered by the recorder UI.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::I18nError;

/// Normalized locale identifier (e.g., `"ja"`, `"en-US"`).
///
/// The primary language subtag is 2–8 ASCII letters; further subtags are
/// 1–8 ASCII alphanumerics separated by `-` or `_`. Parsing normalizes the
/// language to lowercase, regions to uppercase, scripts to titlecase, and
/// separators to `-`, so `"EN_us"` and `"en-US"` name the same locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Parse and normalize a locale tag.
    pub fn parse(tag: &str) -> Result<Self, I18nError> {
        let trimmed = tag.trim();
        let mut normalized = String::with_capacity(trimmed.len());

        for (idx, subtag) in trimmed.split(['-', '_']).enumerate() {
            let valid = if idx == 0 {
                (2..=8).contains(&subtag.len()) && subtag.bytes().all(|b| b.is_ascii_alphabetic())
            } else {
                (1..=8).contains(&subtag.len())
                    && subtag.bytes().all(|b| b.is_ascii_alphanumeric())
            };
            if !valid {
                return Err(I18nError::InvalidLocale(tag.to_string()));
            }

            if idx > 0 {
                normalized.push('-');
            }
            let all_alpha = subtag.bytes().all(|b| b.is_ascii_alphabetic());
            match (idx, subtag.len()) {
                (0, _) => normalized.push_str(&subtag.to_ascii_lowercase()),
                (_, 2) if all_alpha => normalized.push_str(&subtag.to_ascii_uppercase()),
                (_, 4) if all_alpha => {
                    normalized.push_str(&subtag[..1].to_ascii_uppercase());
                    normalized.push_str(&subtag[1..].to_ascii_lowercase());
                }
                _ => normalized.push_str(&subtag.to_ascii_lowercase()),
            }
        }

        Ok(Self(normalized))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag (`"en"` for `"en-US"`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = I18nError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Locale {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<Language> for Locale {
    fn from(language: Language) -> Self {
        Self(language.code().to_string())
    }
}

/// Languages selectable in the recorder's settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Japanese, Language::English];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Japanese => "ja",
            Self::English => "en",
        }
    }

    /// Catalog key holding the language's display name.
    #[must_use]
    pub const fn name_key(self) -> &'static str {
        match self {
            Self::Japanese => "japanese",
            Self::English => "english",
        }
    }

    /// Match a locale by its primary language subtag.
    #[must_use]
    pub fn from_locale(locale: &Locale) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|language| language.code() == locale.language())
    }

    #[must_use]
    pub fn locale(self) -> Locale {
        Locale::from(self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<Language> for &'static str {
    fn from(language: Language) -> Self {
        language.code()
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let locale = Locale::parse(s)?;
        Self::from_locale(&locale).ok_or_else(|| I18nError::InvalidLocale(s.to_string()))
    }
}
