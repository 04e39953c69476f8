//! Loading resource files from disk.
//!
//! A locales directory holds one `<locale>.ftl` file per locale; the file
//! stem names the locale (`ja.ftl`, `en-US.ftl`).

use std::fs;
use std::path::Path;

use crate::catalog::{LocaleCatalog, StringCatalog};
use crate::error::{I18nError, Result};
use crate::locale::Locale;
use crate::resource::Resource;

const LOG_TARGET: &str = "rokuon.i18n";

/// File extension of resource files.
pub const RESOURCE_EXTENSION: &str = "ftl";

/// Parse resource text, naming `source_name` in errors.
pub fn load_resource_str(source_name: &str, text: &str) -> Result<Resource> {
    Resource::parse(text).map_err(|error| I18nError::parse(source_name, error))
}

pub fn load_resource_file(path: &Path) -> Result<Resource> {
    let text = fs::read_to_string(path).map_err(|source| I18nError::io(path, source))?;
    load_resource_str(&path.display().to_string(), &text)
}

/// Write a resource in canonical form.
pub fn write_resource_file(path: &Path, resource: &Resource) -> Result<()> {
    fs::write(path, resource.serialize()).map_err(|source| I18nError::io(path, source))
}

/// Load every `<locale>.ftl` file in `dir` into a catalog.
///
/// Other files are skipped. Two files normalizing to the same locale
/// (`ja.ftl` and `JA.ftl`) are an error.
pub fn load_dir(dir: &Path) -> Result<StringCatalog> {
    let entries = fs::read_dir(dir).map_err(|source| I18nError::io(dir, source))?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| I18nError::io(dir, source))?;
        paths.push(entry.path());
    }
    paths.sort();

    let mut catalog = StringCatalog::new();
    for path in paths {
        let is_resource = path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(RESOURCE_EXTENSION));
        if !is_resource {
            tracing::trace!(
                target: LOG_TARGET,
                path = %path.display(),
                "skipping non-resource file"
            );
            continue;
        }

        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| I18nError::InvalidLocale(path.display().to_string()))?;
        let locale = Locale::parse(stem)?;
        let resource = load_resource_file(&path)?;
        tracing::debug!(
            target: LOG_TARGET,
            locale = %locale,
            path = %path.display(),
            messages = resource.len(),
            "locale loaded"
        );
        if catalog
            .add_locale(locale.clone(), LocaleCatalog::from(&resource))
            .is_some()
        {
            return Err(I18nError::DuplicateLocale(locale.to_string()));
        }
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_dir_reads_each_locale() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join("ja.ftl"), "app_title = 録音くん\n").unwrap();
        fs::write(temp.path().join("en_US.ftl"), "app_title = Recorder-kun\n").unwrap();
        fs::write(temp.path().join("README.md"), "not a resource").unwrap();

        let catalog = load_dir(temp.path()).unwrap();
        let tags: Vec<&str> = catalog.locales().into_iter().map(Locale::as_str).collect();
        assert_eq!(tags, ["en-US", "ja"]);
        assert_eq!(catalog.get("en-US", "app_title").unwrap(), "Recorder-kun");
    }

    #[test]
    fn load_dir_rejects_duplicate_locales() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join("ja.ftl"), "a = 1\n").unwrap();
        fs::write(temp.path().join("JA.ftl"), "a = 2\n").unwrap();

        let error = load_dir(temp.path()).unwrap_err();
        assert!(matches!(error, I18nError::DuplicateLocale(locale) if locale == "ja"));
    }

    #[test]
    fn load_dir_rejects_bad_locale_names() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join("not a locale.ftl"), "a = 1\n").unwrap();
        assert!(matches!(
            load_dir(temp.path()).unwrap_err(),
            I18nError::InvalidLocale(_)
        ));
    }

    #[test]
    fn load_dir_reports_parse_errors_with_path() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join("ja.ftl"), "ok = 1\nbroken\n").unwrap();

        let error = load_dir(temp.path()).unwrap_err();
        let I18nError::Parse { source_name, error } = error else {
            panic!("expected parse error");
        };
        assert!(source_name.ends_with("ja.ftl"));
        assert_eq!(error.line, 2);
    }

    #[test]
    fn missing_dir_is_io_error() {
        let temp = tempdir().expect("tempdir");
        let missing = temp.path().join("nope");
        assert!(matches!(
            load_dir(&missing).unwrap_err(),
            I18nError::Io { path, .. } if path == missing
        ));
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("ja.ftl");
        let resource = load_resource_str("inline", "# c\nhz_unit=Hz\n").unwrap();
        write_resource_file(&path, &resource).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "# c\nhz_unit = Hz\n");
        assert_eq!(load_resource_file(&path).unwrap(), resource);
    }
}
