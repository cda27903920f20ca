//! Error types for keypad binding and configuration

use thiserror::Error;

/// Result type for keypad operations
pub type KeypadResult<T> = Result<T, KeypadError>;

/// Which control element a binding error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// The clear (cancel) control
    Clear,
    /// The backspace (delete-last) control
    Backspace,
}

impl std::fmt::Display for ControlKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clear => write!(f, "clear"),
            Self::Backspace => write!(f, "backspace"),
        }
    }
}

/// Errors that can occur while binding or driving the keypad
#[derive(Debug, Error)]
pub enum KeypadError {
    /// The display element could not be resolved
    #[error("display element '#{id}' not found")]
    MissingDisplay {
        /// Identifier that was looked up
        id: String,
    },

    /// A control element is required by policy but absent
    #[error("{kind} control '#{id}' not found (control policy is 'required')")]
    MissingControl {
        /// Which control is missing
        kind: ControlKind,
        /// Identifier that was looked up
        id: String,
    },

    /// Keypad layout is malformed
    #[error("invalid keypad layout: {message}")]
    InvalidLayout {
        /// Error message
        message: String,
    },

    /// A replay token did not name a key or control
    #[error("unknown keypad token '{token}'")]
    UnknownToken {
        /// The offending token
        token: String,
    },

    /// Configuration could not be parsed or serialized
    #[error("configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl KeypadError {
    /// Create an invalid layout error
    #[must_use]
    pub fn invalid_layout(message: impl Into<String>) -> Self {
        Self::InvalidLayout {
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<serde_yaml_ng::Error> for KeypadError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::config(err.to_string())
    }
}

impl From<serde_json::Error> for KeypadError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(err.to_string())
    }
}
