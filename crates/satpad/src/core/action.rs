//! Keypad actions and the controls that gate them

use serde::{Deserialize, Serialize};

use super::buffer::DisplayBuffer;

/// A single mutation of the display buffer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "label", rename_all = "snake_case")]
pub enum KeypadAction {
    /// Append a key label
    Append(String),
    /// Empty the display
    Clear,
    /// Remove the last character
    Backspace,
}

impl KeypadAction {
    /// Creates an append action for a key label
    #[must_use]
    pub fn append(label: impl Into<String>) -> Self {
        Self::Append(label.into())
    }

    /// Maps a keyboard control key (`KeyboardEvent.key`) to an action
    ///
    /// `Backspace` deletes, `Escape` and `Delete` clear.
    #[must_use]
    pub fn from_control_key(key: &str) -> Option<Self> {
        match key {
            "Backspace" => Some(Self::Backspace),
            "Escape" | "Delete" => Some(Self::Clear),
            _ => None,
        }
    }

    /// Returns true for the clear and backspace actions
    #[must_use]
    pub fn is_control(&self) -> bool {
        matches!(self, Self::Clear | Self::Backspace)
    }

    /// Applies the action to a buffer
    pub fn apply(&self, buffer: &mut DisplayBuffer) {
        match self {
            Self::Append(label) => buffer.append(label),
            Self::Clear => buffer.clear(),
            Self::Backspace => {
                buffer.backspace();
            }
        }
    }
}

impl std::fmt::Display for KeypadAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Append(label) => write!(f, "append '{label}'"),
            Self::Clear => write!(f, "clear"),
            Self::Backspace => write!(f, "backspace"),
        }
    }
}

/// Control actions that are wired for a keypad instance
///
/// Key appends are always wired; clear and backspace only when their
/// control element was bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlSet {
    /// Clear control is wired
    pub clear: bool,
    /// Backspace control is wired
    pub backspace: bool,
}

impl ControlSet {
    /// Both controls wired
    #[must_use]
    pub const fn all() -> Self {
        Self {
            clear: true,
            backspace: true,
        }
    }

    /// No controls wired (keys only)
    #[must_use]
    pub const fn none() -> Self {
        Self {
            clear: false,
            backspace: false,
        }
    }

    /// Returns true if the action may run on this instance
    #[must_use]
    pub fn permits(&self, action: &KeypadAction) -> bool {
        match action {
            KeypadAction::Append(_) => true,
            KeypadAction::Clear => self.clear,
            KeypadAction::Backspace => self.backspace,
        }
    }
}
