//! Error types for catalog loading, parsing, and resolution.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, I18nError>;

/// Lookup failures from [`StringCatalog::resolve`](crate::StringCatalog::resolve).
///
/// All variants are recoverable; [`StringCatalog::text`](crate::StringCatalog::text)
/// turns them into a fallback string instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("unknown locale: {locale}")]
    UnknownLocale { locale: String },

    #[error("unknown key '{key}' in locale '{locale}'")]
    UnknownKey { locale: String, key: String },

    #[error("missing argument '{name}' for key '{key}'")]
    MissingArgument { key: String, name: String },
}

/// A placeholder referenced a name that the caller did not supply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing argument '{name}'")]
pub struct MissingArgument {
    pub name: String,
}

/// Syntax error in a resource file, with the 1-based line of the offending
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected `key = value`")]
    MissingEquals,

    #[error("empty message key")]
    EmptyKey,

    #[error("invalid message key '{0}'")]
    InvalidKey(String),

    #[error("duplicate key '{0}'")]
    DuplicateKey(String),

    #[error("message '{0}' has no value")]
    EmptyValue(String),

    #[error("indented line does not continue a message")]
    OrphanContinuation,

    #[error("unterminated placeholder")]
    UnterminatedPlaceholder,

    #[error("unsupported placeholder '{{{0}}}'")]
    InvalidPlaceholder(String),

    #[error("unexpected '}}' outside a placeholder")]
    UnmatchedBrace,
}

/// Errors from loading catalogs and configuration.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{source_name}: {error}")]
    Parse {
        source_name: String,
        #[source]
        error: ParseError,
    },

    #[error("invalid locale: {0}")]
    InvalidLocale(String),

    #[error("locale loaded twice: {0}")]
    DuplicateLocale(String),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl I18nError {
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn parse(source_name: impl Into<String>, error: ParseError) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            error,
        }
    }
}
