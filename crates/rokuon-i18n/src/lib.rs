#![forbid(unsafe_code)]

//! Localization for the Rokuon (録音くん) recorder.
//!
//! Provides per-locale message catalogs loaded from Fluent-style resource
//! files, `{ $name }` placeholder substitution, a strict resolver with typed
//! errors, and a lenient display path with a locale fallback chain.
//!
//! # How it fits
//! The recorder UI asks for strings by key; this crate owns the resource
//! format, the bundled `ja`/`en` catalogs, and the completeness checks that
//! keep locales in step. It has no UI or audio dependencies.
//!
//! ```
//! use rokuon_i18n::{Args, bundled};
//!
//! let catalog = bundled::catalog();
//! assert_eq!(catalog.get("ja", "hz_unit").unwrap(), "Hz");
//! assert_eq!(
//!     catalog.resolve("ja", "recording_time", &Args::new().with("time", "00:12")).unwrap(),
//!     "録音時間: 00:12"
//! );
//! ```

pub mod args;
pub mod bundled;
pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod locale;
pub mod resource;
pub mod template;

pub use args::{ArgValue, Args};
pub use catalog::{
    CompletenessReport, CoverageReport, LocaleCatalog, LocaleCompleteness, LocaleCoverage,
    PlaceholderMismatch, StringCatalog,
};
pub use config::I18nConfig;
pub use error::{I18nError, MissingArgument, ParseError, ParseErrorKind, ResolveError, Result};
pub use locale::{Language, Locale};
pub use resource::{Entry, Message, Resource};
pub use template::{Segment, Template};
