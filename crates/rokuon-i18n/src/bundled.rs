//! Japanese and English catalogs compiled into the binary.

use std::sync::OnceLock;

use crate::catalog::{LocaleCatalog, StringCatalog};
use crate::error::{I18nError, Result};
use crate::locale::Language;
use crate::resource::Resource;

const LOG_TARGET: &str = "rokuon.i18n";

/// Resource text for each bundled language.
pub const RESOURCES: [(Language, &str); 2] = [
    (Language::Japanese, include_str!("../locales/ja.ftl")),
    (Language::English, include_str!("../locales/en.ftl")),
];

/// Parse the bundled resource for one language.
pub fn resource(language: Language) -> Result<Resource> {
    let text = RESOURCES
        .iter()
        .find(|(candidate, _)| *candidate == language)
        .map(|(_, text)| *text)
        .unwrap_or_default();
    Resource::parse(text).map_err(|error| I18nError::parse(format!("{}.ftl", language.code()), error))
}

/// Build a fresh catalog from the bundled resources.
///
/// The default locale is Japanese and the lenient fallback chain is `["ja"]`.
pub fn build() -> Result<StringCatalog> {
    let mut catalog = StringCatalog::new();
    for language in Language::ALL {
        let resource = resource(language)?;
        catalog.add_locale(language.locale(), LocaleCatalog::from(&resource));
    }
    catalog.set_default_locale(Language::default().locale());
    catalog.set_fallback_chain(vec![Language::default().locale()]);
    Ok(catalog)
}

/// Process-wide bundled catalog, parsed on first access.
///
/// A bundled resource that fails to parse is logged and left out, so this
/// never panics; lookups in that locale then report `UnknownLocale`.
pub fn catalog() -> &'static StringCatalog {
    static CATALOG: OnceLock<StringCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let mut catalog = StringCatalog::new();
        for language in Language::ALL {
            match resource(language) {
                Ok(resource) => {
                    tracing::debug!(
                        target: LOG_TARGET,
                        locale = %language,
                        messages = resource.len(),
                        "bundled locale loaded"
                    );
                    catalog.add_locale(language.locale(), LocaleCatalog::from(&resource));
                }
                Err(error) => {
                    tracing::error!(
                        target: LOG_TARGET,
                        locale = %language,
                        error = %error,
                        "bundled locale failed to parse"
                    );
                }
            }
        }
        catalog.set_fallback_chain(vec![Language::default().locale()]);
        catalog
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_resources_parse() {
        for language in Language::ALL {
            let resource = resource(language).unwrap();
            assert!(!resource.is_empty(), "{language} resource is empty");
        }
    }

    #[test]
    fn build_matches_shared_catalog() {
        let built = build().unwrap();
        let shared = catalog();
        assert_eq!(built.all_keys(), shared.all_keys());
        assert_eq!(built.locales(), shared.locales());
        assert_eq!(shared.fallback_chain(), [Language::Japanese.locale()]);
    }

    #[test]
    fn shared_catalog_is_initialized_once() {
        assert!(std::ptr::eq(catalog(), catalog()));
    }
}
