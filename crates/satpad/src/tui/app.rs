//! Terminal keypad application state

use super::input::KeyAction;
use super::keypad::Hit;
use crate::config::{ControlPolicy, KeypadConfig};
use crate::core::{self, ControlSet, DisplayBuffer, KeypadAction, KeypadLayout};
use crate::error::KeypadResult;

/// Keypad application state
#[derive(Debug, Clone)]
pub struct KeypadApp {
    buffer: DisplayBuffer,
    layout: KeypadLayout,
    controls: ControlSet,
    last_pressed: Option<Hit>,
    should_quit: bool,
}

impl Default for KeypadApp {
    fn default() -> Self {
        Self::new(KeypadLayout::satoshi(), ControlSet::all())
    }
}

impl KeypadApp {
    /// Creates an app for a layout and a set of wired controls
    #[must_use]
    pub fn new(layout: KeypadLayout, controls: ControlSet) -> Self {
        Self {
            buffer: DisplayBuffer::new(),
            layout,
            controls,
            last_pressed: None,
            should_quit: false,
        }
    }

    /// Creates an app from configuration
    ///
    /// The terminal always draws both controls, so only the `disabled`
    /// policy changes what is wired.
    pub fn from_config(config: &KeypadConfig) -> KeypadResult<Self> {
        let controls = match config.controls {
            ControlPolicy::Disabled => ControlSet::none(),
            ControlPolicy::Optional | ControlPolicy::Required => ControlSet::all(),
        };
        let layout = config.build_layout()?;
        tracing::debug!(
            keys = layout.key_count(),
            policy = %config.controls,
            "terminal keypad ready"
        );
        Ok(Self::new(layout, controls))
    }

    /// Current display content
    #[must_use]
    pub fn content(&self) -> &str {
        self.buffer.content()
    }

    /// The display buffer
    #[must_use]
    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    /// The key layout
    #[must_use]
    pub fn layout(&self) -> &KeypadLayout {
        &self.layout
    }

    /// Controls that are wired
    #[must_use]
    pub fn controls(&self) -> ControlSet {
        self.controls
    }

    /// Button activated last, for highlighting
    #[must_use]
    pub fn last_pressed(&self) -> Option<Hit> {
        self.last_pressed
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Empties the display
    pub fn reset(&mut self) {
        self.buffer.reset();
        self.last_pressed = None;
    }

    /// Runs an action against the display; returns true if it ran
    pub fn apply(&mut self, action: &KeypadAction) -> bool {
        let ran = core::dispatch(&mut self.buffer, self.controls, action);
        if ran {
            self.last_pressed = match action {
                KeypadAction::Append(label) => self.layout.position_of(label).map(Hit::Key),
                KeypadAction::Clear => Some(Hit::Clear),
                KeypadAction::Backspace => Some(Hit::Backspace),
            };
        }
        ran
    }

    /// Activates the key with the given label
    pub fn press_label(&mut self, label: &str) -> bool {
        match self.layout.find_by_label(label) {
            Some(key) => {
                let action = key.action();
                self.apply(&action)
            }
            None => false,
        }
    }

    /// Activates whatever a click landed on
    pub fn click(&mut self, hit: Hit) -> bool {
        let action = match hit {
            Hit::Key(index) => match self.layout.get_key(index) {
                Some(key) => key.action(),
                None => return false,
            },
            Hit::Clear => KeypadAction::Clear,
            Hit::Backspace => KeypadAction::Backspace,
        };
        self.apply(&action)
    }

    /// Handles a keyboard action; returns true if the display changed
    pub fn handle_key(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Insert(c) => {
                let mut buf = [0; 4];
                let label = c.encode_utf8(&mut buf);
                if self.layout.find_by_label(label).is_some() {
                    return self.press_label(label);
                }
                if c == 'q' {
                    self.quit();
                }
                false
            }
            KeyAction::Backspace => self.apply(&KeypadAction::Backspace),
            KeyAction::Clear => self.apply(&KeypadAction::Clear),
            KeyAction::Quit => {
                self.quit();
                false
            }
            KeyAction::None => false,
        }
    }
}
