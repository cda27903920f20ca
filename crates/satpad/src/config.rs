//! Keypad configuration
//!
//! Describes the markup contract (class and identifiers to resolve), how
//! the clear/backspace controls are treated, and the key layout. Loaded
//! from YAML or JSON; every field has a default matching the payment page.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{KeypadLayout, SATOSHI_ROWS};
use crate::error::KeypadResult;

/// How the clear and backspace controls are bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPolicy {
    /// Never wire the controls, even if present (keys only)
    Disabled,
    /// Wire each control that exists; skip the ones that don't
    #[default]
    Optional,
    /// Both controls must exist, otherwise binding fails
    Required,
}

impl ControlPolicy {
    /// Returns the policy name as used in configuration files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Optional => "optional",
            Self::Required => "required",
        }
    }
}

impl std::fmt::Display for ControlPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifiers the keypad resolves in the hosting markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    /// Class shared by every keypad key
    pub key_class: String,
    /// ID of the display element
    pub display_id: String,
    /// ID of the clear control
    pub clear_id: String,
    /// ID of the backspace control
    pub backspace_id: String,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            key_class: "keypad".to_string(),
            display_id: "satoshis".to_string(),
            clear_id: "clear".to_string(),
            backspace_id: "backspace".to_string(),
        }
    }
}

/// Complete keypad configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeypadConfig {
    /// Markup identifiers
    pub markup: MarkupConfig,
    /// Control binding policy
    pub controls: ControlPolicy,
    /// Key labels, row by row
    pub layout: Vec<Vec<String>>,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            markup: MarkupConfig::default(),
            controls: ControlPolicy::default(),
            layout: SATOSHI_ROWS
                .iter()
                .map(|row| row.iter().map(|s| (*s).to_string()).collect())
                .collect(),
        }
    }
}

impl KeypadConfig {
    /// Creates the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the control policy
    #[must_use]
    pub fn with_controls(mut self, controls: ControlPolicy) -> Self {
        self.controls = controls;
        self
    }

    /// Sets the display element ID
    #[must_use]
    pub fn with_display_id(mut self, id: impl Into<String>) -> Self {
        self.markup.display_id = id.into();
        self
    }

    /// Sets the key layout
    #[must_use]
    pub fn with_layout(mut self, rows: Vec<Vec<String>>) -> Self {
        self.layout = rows;
        self
    }

    /// Parses a YAML document
    pub fn from_yaml_str(yaml: &str) -> KeypadResult<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parses a JSON document
    pub fn from_json_str(json: &str) -> KeypadResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration file; `.json` is parsed as JSON, anything else as YAML
    pub fn load(path: &Path) -> KeypadResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&text)?,
            _ => Self::from_yaml_str(&text)?,
        };
        tracing::debug!(path = %path.display(), controls = %config.controls, "loaded keypad config");
        Ok(config)
    }

    /// Serializes to YAML
    pub fn to_yaml(&self) -> KeypadResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Serializes to pretty JSON
    pub fn to_json(&self) -> KeypadResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds and validates the key layout
    pub fn build_layout(&self) -> KeypadResult<KeypadLayout> {
        KeypadLayout::from_rows(&self.layout)
    }
}
