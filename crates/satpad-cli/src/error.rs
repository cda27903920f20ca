//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Keypad library error
    #[error(transparent)]
    Keypad(#[from] satpad::error::KeypadError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup or teardown failed
    #[error("Terminal error: {message}")]
    Terminal {
        /// Error message
        message: String,
    },

    /// Logging could not be initialized
    #[error("Logging error: {message}")]
    Logging {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create a terminal error
    #[must_use]
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    /// Create a logging error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use satpad::error::KeypadError;

    #[test]
    fn test_keypad_error_is_transparent() {
        let err: CliError = KeypadError::UnknownToken {
            token: "x".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "unknown keypad token 'x'");
    }

    #[test]
    fn test_terminal_error() {
        let err = CliError::terminal("raw mode");
        assert!(err.to_string().contains("Terminal"));
    }

    #[test]
    fn test_logging_error() {
        let err = CliError::logging("already set");
        assert!(err.to_string().contains("Logging"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cli_err: CliError = io_err.into();
        assert!(cli_err.to_string().contains("I/O"));
    }
}
