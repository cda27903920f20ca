//! Display buffer - the amount being entered
//!
//! The buffer is the single source of truth for the display. Frontends
//! mirror it to their visible surface after every mutation; they never
//! read the visible text back.

use serde::{Deserialize, Serialize};

/// Text accumulated from keypad activations since the last clear
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayBuffer {
    content: String,
}

impl DisplayBuffer {
    /// Creates an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current content
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns true if nothing has been entered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Number of characters (not bytes) in the buffer
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Appends a key label
    pub fn append(&mut self, label: &str) {
        self.content.push_str(label);
    }

    /// Empties the buffer
    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// Removes the last character, if any
    ///
    /// Returns the removed character. An empty buffer stays empty.
    pub fn backspace(&mut self) -> Option<char> {
        self.content.pop()
    }

    /// Returns the buffer to its initial (page-load) state
    pub fn reset(&mut self) {
        self.content = String::new();
    }
}

impl std::fmt::Display for DisplayBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.content)
    }
}
