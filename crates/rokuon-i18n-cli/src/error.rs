use rokuon_i18n::{I18nError, ResolveError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    I18n(#[from] I18nError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("{message}")]
    Exit { code: i32, message: String },
}

impl CliError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Exit { code, .. } => *code,
            Self::InvalidArgument { .. } => 2,
            _ => 1,
        }
    }

    #[must_use]
    pub fn exit(code: i32, message: impl Into<String>) -> Self {
        Self::Exit {
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CliError;
    use rokuon_i18n::ResolveError;

    #[test]
    fn exit_constructor_preserves_code_and_message() {
        let error = CliError::exit(3, "locale check failed");
        assert_eq!(error.exit_code(), 3);
        assert_eq!(error.to_string(), "locale check failed");
    }

    #[test]
    fn invalid_argument_uses_usage_exit_code() {
        let error = CliError::invalid("expected NAME=VALUE");
        assert_eq!(error.exit_code(), 2);
        assert_eq!(error.to_string(), "invalid argument: expected NAME=VALUE");
    }

    #[test]
    fn lookup_errors_are_transparent() {
        let error = CliError::from(ResolveError::UnknownLocale {
            locale: "fr".into(),
        });
        assert_eq!(error.exit_code(), 1);
        assert_eq!(error.to_string(), "unknown locale: fr");
    }
}
