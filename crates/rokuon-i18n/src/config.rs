//! Localization settings: which locale to show and where catalogs live.
//!
//! Settings come from a JSON file (every field optional), then the
//! `ROKUON_LANG` environment variable, then explicit overrides by the caller.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bundled;
use crate::catalog::StringCatalog;
use crate::error::{I18nError, ResolveError, Result};
use crate::loader;
use crate::locale::{Language, Locale};

const LOG_TARGET: &str = "rokuon.i18n";

/// Environment variable overriding [`I18nConfig::default_locale`].
pub const LANG_ENV: &str = "ROKUON_LANG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct I18nConfig {
    pub default_locale: Locale,
    pub fallback_chain: Vec<Locale>,
    /// Directory of `<locale>.ftl` files; the bundled catalogs when unset.
    pub locales_dir: Option<PathBuf>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: Language::default().locale(),
            fallback_chain: vec![Language::default().locale()],
            locales_dir: None,
        }
    }
}

impl I18nConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read settings from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_json_str(&text),
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    target: LOG_TARGET,
                    path = %path.display(),
                    "config file not found; using defaults"
                );
                Ok(Self::default())
            }
            Err(source) => Err(I18nError::io(path, source)),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Apply `ROKUON_LANG` from the process environment.
    pub fn apply_env(self) -> Result<Self> {
        self.apply_env_with(|name| std::env::var(name).ok())
    }

    /// Apply environment overrides read through `lookup`. Empty values are
    /// ignored.
    pub fn apply_env_with(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(value) = lookup(LANG_ENV).filter(|value| !value.trim().is_empty()) {
            self.default_locale = Locale::parse(&value)?;
            tracing::debug!(
                target: LOG_TARGET,
                locale = %self.default_locale,
                "default locale overridden from {LANG_ENV}"
            );
        }
        Ok(self)
    }

    /// Load the configured catalogs and apply the default locale and
    /// fallback chain. The default locale must be among the loaded ones.
    pub fn build_catalog(&self) -> Result<StringCatalog> {
        let mut catalog = match &self.locales_dir {
            Some(dir) => loader::load_dir(dir)?,
            None => bundled::catalog().clone(),
        };

        if !catalog.has_locale(self.default_locale.as_str()) {
            return Err(ResolveError::UnknownLocale {
                locale: self.default_locale.to_string(),
            }
            .into());
        }
        for fallback in &self.fallback_chain {
            if !catalog.has_locale(fallback.as_str()) {
                tracing::warn!(
                    target: LOG_TARGET,
                    locale = %fallback,
                    "fallback locale is not loaded"
                );
            }
        }

        catalog.set_default_locale(self.default_locale.clone());
        catalog.set_fallback_chain(self.fallback_chain.clone());
        Ok(catalog)
    }
}
