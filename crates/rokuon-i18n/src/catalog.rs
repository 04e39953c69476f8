//! Per-locale message catalogs and the resolver over them.
//!
//! # Invariants
//!
//! 1. **Immutable after load**: a [`StringCatalog`] is built once and only
//!    read afterwards; it is `Send + Sync` and lookups need no locking.
//!
//! 2. **Strict lookups are exact**: [`StringCatalog::resolve`] consults only
//!    the requested locale. Fallback happens solely in
//!    [`StringCatalog::text`].
//!
//! 3. **Fallback chain terminates**: the lenient path walks the chain once
//!    and ends at the raw key.
//!
//! # Failure Modes
//!
//! | Failure | Cause | `resolve` | `text` |
//! |---------|-------|-----------|--------|
//! | Unknown locale | Locale not loaded | `UnknownLocale` | fallback chain, then key |
//! | Unknown key | Key not in locale | `UnknownKey` | fallback chain, then key |
//! | Missing argument | `{ $name }` without `name` | `MissingArgument` | key |

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::args::Args;
use crate::error::ResolveError;
use crate::locale::{Language, Locale};
use crate::resource::Resource;
use crate::template::Template;

const LOG_TARGET: &str = "rokuon.i18n";

/// Messages for a single locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleCatalog {
    messages: HashMap<String, Template>,
}

impl LocaleCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the messages of a parsed resource file.
    #[must_use]
    pub fn from_resource(resource: &Resource) -> Self {
        let messages = resource
            .messages()
            .map(|message| (message.key().to_string(), message.value().clone()))
            .collect();
        Self { messages }
    }

    /// Insert a message, returning the template it replaced.
    pub fn insert(&mut self, key: impl Into<String>, template: Template) -> Option<Template> {
        self.messages.insert(key.into(), template)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Template> {
        self.messages.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// Keys in sorted order.
    #[must_use]
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        keys
    }
}

impl From<&Resource> for LocaleCatalog {
    fn from(resource: &Resource) -> Self {
        Self::from_resource(resource)
    }
}

/// Message catalogs for every supported locale.
///
/// # Example
///
/// ```
/// use rokuon_i18n::{Args, Locale, LocaleCatalog, Resource, StringCatalog};
///
/// let ja = Resource::parse("hz_unit = Hz\nrecording_time = 録音時間: { $time }\n").unwrap();
/// let catalog = StringCatalog::new()
///     .with_locale(Locale::parse("ja").unwrap(), LocaleCatalog::from(&ja));
///
/// assert_eq!(catalog.get("ja", "hz_unit").unwrap(), "Hz");
/// assert_eq!(
///     catalog
///         .resolve("ja", "recording_time", &Args::new().with("time", "00:12"))
///         .unwrap(),
///     "録音時間: 00:12"
/// );
/// assert!(catalog.get("fr", "hz_unit").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct StringCatalog {
    locales: HashMap<Locale, LocaleCatalog>,
    default_locale: Locale,
    fallback_chain: Vec<Locale>,
}

impl Default for StringCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl StringCatalog {
    /// An empty catalog whose default locale is Japanese and whose fallback
    /// chain is empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            locales: HashMap::new(),
            default_locale: Language::default().locale(),
            fallback_chain: Vec::new(),
        }
    }

    /// Add (or replace) the messages for a locale.
    pub fn add_locale(&mut self, locale: Locale, catalog: LocaleCatalog) -> Option<LocaleCatalog> {
        self.locales.insert(locale, catalog)
    }

    /// Builder form of [`add_locale`](Self::add_locale).
    #[must_use]
    pub fn with_locale(mut self, locale: Locale, catalog: LocaleCatalog) -> Self {
        self.add_locale(locale, catalog);
        self
    }

    pub fn set_default_locale(&mut self, locale: Locale) {
        self.default_locale = locale;
    }

    #[must_use]
    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Set the locales tried, in order, by [`text`](Self::text) when the
    /// requested locale cannot resolve a key.
    pub fn set_fallback_chain(&mut self, chain: Vec<Locale>) {
        self.fallback_chain = chain;
    }

    #[must_use]
    pub fn fallback_chain(&self) -> &[Locale] {
        &self.fallback_chain
    }

    /// Catalog for a locale tag. Tags are normalized, so `"JA"` finds `"ja"`.
    #[must_use]
    pub fn locale(&self, locale: &str) -> Option<&LocaleCatalog> {
        self.find_locale(locale).map(|(_, catalog)| catalog)
    }

    fn find_locale(&self, locale: &str) -> Option<(&Locale, &LocaleCatalog)> {
        self.locales.get_key_value(locale).or_else(|| {
            Locale::parse(locale)
                .ok()
                .and_then(|normalized| self.locales.get_key_value(&normalized))
        })
    }

    #[must_use]
    pub fn has_locale(&self, locale: &str) -> bool {
        self.locale(locale).is_some()
    }

    /// All loaded locales, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&Locale> {
        let mut locales: Vec<&Locale> = self.locales.keys().collect();
        locales.sort_unstable();
        locales
    }

    /// The unrendered template for `key` in exactly `locale`.
    pub fn template(&self, locale: &str, key: &str) -> Result<&Template, ResolveError> {
        let catalog = self
            .locale(locale)
            .ok_or_else(|| ResolveError::UnknownLocale {
                locale: locale.to_string(),
            })?;
        catalog.get(key).ok_or_else(|| ResolveError::UnknownKey {
            locale: locale.to_string(),
            key: key.to_string(),
        })
    }

    /// Resolve `key` in `locale`, substituting placeholders from `args`.
    pub fn resolve(&self, locale: &str, key: &str, args: &Args) -> Result<String, ResolveError> {
        let result = self.template(locale, key).and_then(|template| {
            template
                .render(args)
                .map_err(|missing| ResolveError::MissingArgument {
                    key: key.to_string(),
                    name: missing.name,
                })
        });
        if let Err(error) = &result {
            tracing::debug!(
                target: LOG_TARGET,
                locale = %locale,
                key = %key,
                error = %error,
                "message lookup failed"
            );
        }
        result
    }

    /// Resolve a message that takes no arguments.
    pub fn get(&self, locale: &str, key: &str) -> Result<String, ResolveError> {
        self.resolve(locale, key, &Args::new())
    }

    /// Resolve in the default locale.
    pub fn resolve_default(&self, key: &str, args: &Args) -> Result<String, ResolveError> {
        self.resolve(self.default_locale.as_str(), key, args)
    }

    /// Lenient lookup for display: never fails.
    ///
    /// An unknown locale or key walks the fallback chain; if nothing
    /// resolves, or an argument is missing, the raw key is returned.
    #[must_use]
    pub fn text(&self, locale: &str, key: &str, args: &Args) -> String {
        let error = match self.resolve(locale, key, args) {
            Ok(text) => return text,
            Err(error) => error,
        };

        if !matches!(error, ResolveError::MissingArgument { .. }) {
            let requested = self.find_locale(locale).map(|(tag, _)| tag);
            for fallback in &self.fallback_chain {
                if requested == Some(fallback) {
                    continue;
                }
                match self.resolve(fallback.as_str(), key, args) {
                    Ok(text) => {
                        tracing::warn!(
                            target: LOG_TARGET,
                            locale = %locale,
                            fallback = %fallback,
                            key = %key,
                            "message resolved from fallback locale"
                        );
                        return text;
                    }
                    Err(ResolveError::MissingArgument { .. }) => break,
                    Err(_) => {}
                }
            }
        }

        tracing::warn!(
            target: LOG_TARGET,
            locale = %locale,
            key = %key,
            error = %error,
            "message unresolved; displaying raw key"
        );
        key.to_string()
    }

    // -----------------------------------------------------------------
    // Extraction & Coverage
    // -----------------------------------------------------------------

    /// Collect all unique keys across every registered locale, sorted.
    #[must_use]
    pub fn all_keys(&self) -> Vec<String> {
        let keys: BTreeSet<&str> = self.locales.values().flat_map(LocaleCatalog::keys).collect();
        keys.into_iter().map(String::from).collect()
    }

    /// Keys from `reference_keys` that `locale` itself lacks, sorted.
    ///
    /// No fallback is applied: completeness describes the locale's own
    /// resource file. An unloaded locale lacks every key.
    #[must_use]
    pub fn missing_keys(&self, locale: &str, reference_keys: &[&str]) -> Vec<String> {
        let catalog = self.locale(locale);
        let mut missing: Vec<String> = reference_keys
            .iter()
            .filter(|key| !catalog.is_some_and(|c| c.contains_key(key)))
            .map(|key| (*key).to_string())
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }

    /// Coverage of every locale against the union of all keys.
    #[must_use]
    pub fn coverage_report(&self) -> CoverageReport {
        let all = self.all_keys();
        let ref_keys: Vec<&str> = all.iter().map(String::as_str).collect();
        let total = ref_keys.len();

        let locales = self
            .locales()
            .into_iter()
            .map(|locale| {
                let missing = self.missing_keys(locale.as_str(), &ref_keys);
                let present = total.saturating_sub(missing.len());
                let coverage_percent = if total == 0 {
                    100.0
                } else {
                    (present as f32 / total as f32) * 100.0
                };
                LocaleCoverage {
                    locale: locale.clone(),
                    present,
                    missing,
                    coverage_percent,
                }
            })
            .collect();

        CoverageReport {
            total_keys: total,
            locales,
        }
    }

    /// Compare every other locale against `reference`: missing keys, keys
    /// only the other locale has, and keys whose placeholder names differ.
    pub fn check_completeness(&self, reference: &str) -> Result<CompletenessReport, ResolveError> {
        let (reference_locale, reference_catalog) =
            self.find_locale(reference)
                .ok_or_else(|| ResolveError::UnknownLocale {
                    locale: reference.to_string(),
                })?;

        let locales = self
            .locales()
            .into_iter()
            .filter(|locale| *locale != reference_locale)
            .map(|locale| {
                let catalog = &self.locales[locale];
                let mut missing = Vec::new();
                let mut mismatched_placeholders = Vec::new();

                for key in reference_catalog.sorted_keys() {
                    let Some(template) = catalog.get(key) else {
                        missing.push(key.to_string());
                        continue;
                    };
                    let expected = reference_catalog
                        .get(key)
                        .map(Template::placeholder_set)
                        .unwrap_or_default();
                    let found = template.placeholder_set();
                    if expected != found {
                        mismatched_placeholders.push(PlaceholderMismatch {
                            key: key.to_string(),
                            expected: expected.into_iter().map(String::from).collect(),
                            found: found.into_iter().map(String::from).collect(),
                        });
                    }
                }

                let extra = catalog
                    .sorted_keys()
                    .into_iter()
                    .filter(|key| !reference_catalog.contains_key(key))
                    .map(String::from)
                    .collect();

                LocaleCompleteness {
                    locale: locale.clone(),
                    missing,
                    extra,
                    mismatched_placeholders,
                }
            })
            .collect();

        Ok(CompletenessReport {
            reference: reference_locale.clone(),
            locales,
        })
    }
}

/// Coverage report for a string catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    /// Total number of unique keys across all locales.
    pub total_keys: usize,
    /// Per-locale coverage, sorted by locale.
    pub locales: Vec<LocaleCoverage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocaleCoverage {
    pub locale: Locale,
    pub present: usize,
    pub missing: Vec<String>,
    /// Coverage as a percentage (0.0–100.0).
    pub coverage_percent: f32,
}

/// Result of [`StringCatalog::check_completeness`].
#[derive(Debug, Clone, Serialize)]
pub struct CompletenessReport {
    pub reference: Locale,
    pub locales: Vec<LocaleCompleteness>,
}

impl CompletenessReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(LocaleCompleteness::is_complete)
    }

    /// Locales with at least one problem.
    pub fn incomplete(&self) -> impl Iterator<Item = &LocaleCompleteness> {
        self.locales.iter().filter(|locale| !locale.is_complete())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LocaleCompleteness {
    pub locale: Locale,
    /// Reference keys this locale lacks.
    pub missing: Vec<String>,
    /// Keys this locale has that the reference does not.
    pub extra: Vec<String>,
    pub mismatched_placeholders: Vec<PlaceholderMismatch>,
}

impl LocaleCompleteness {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty() && self.mismatched_placeholders.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderMismatch {
    pub key: String,
    pub expected: Vec<String>,
    pub found: Vec<String>,
}
