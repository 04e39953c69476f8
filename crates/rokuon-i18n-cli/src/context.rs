use std::path::PathBuf;

use clap::Args;
use rokuon_i18n::{I18nConfig, Locale, StringCatalog};

use crate::error::Result;

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Load `<locale>.ftl` files from this directory instead of the bundled catalogs.
    #[arg(long = "locales-dir", global = true)]
    pub locales_dir: Option<PathBuf>,

    /// JSON settings file (`default_locale`, `fallback_chain`, `locales_dir`).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Default locale, overriding the config file and ROKUON_LANG.
    #[arg(long = "default-locale", global = true)]
    pub default_locale: Option<String>,

    /// Emit machine-readable JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Resolved settings plus the catalogs they select.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: I18nConfig,
    pub catalog: StringCatalog,
    pub json: bool,
}

impl Context {
    /// Layer config file, environment, then flags, and load the catalogs.
    pub fn load(global: &GlobalArgs) -> Result<Self> {
        let config = Self::read_config(global)?.apply_env()?;
        Self::from_config(config, global)
    }

    /// Like [`load`](Self::load) with the environment read through `lookup`.
    pub fn load_with_env(
        global: &GlobalArgs,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let config = Self::read_config(global)?.apply_env_with(lookup)?;
        Self::from_config(config, global)
    }

    fn read_config(global: &GlobalArgs) -> Result<I18nConfig> {
        Ok(match &global.config {
            Some(path) => I18nConfig::load(path)?,
            None => I18nConfig::default(),
        })
    }

    fn from_config(mut config: I18nConfig, global: &GlobalArgs) -> Result<Self> {
        if let Some(dir) = &global.locales_dir {
            config.locales_dir = Some(dir.clone());
        }
        if let Some(tag) = &global.default_locale {
            config.default_locale = Locale::parse(tag)?;
        }
        tracing::debug!(
            default_locale = %config.default_locale,
            locales_dir = ?config.locales_dir,
            "configuration resolved"
        );
        let catalog = config.build_catalog()?;
        Ok(Self {
            config,
            catalog,
            json: global.json,
        })
    }

    /// The locale a subcommand should use when none was given.
    #[must_use]
    pub fn locale_or_default<'a>(&'a self, locale: Option<&'a str>) -> &'a str {
        locale.unwrap_or_else(|| self.catalog.default_locale().as_str())
    }
}
