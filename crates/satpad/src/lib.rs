//! satpad - satoshi amount keypad
//!
//! A keypad of labelled keys feeds a single display. Each key appends its
//! label; optional clear and backspace controls empty the display or drop
//! its last character.
//!
//! The same buffer semantics drive three frontends:
//!
//! - **DOM**: a typed view over the page markup, tested natively against a
//!   mock document and bound to the real page with the `wasm` feature
//! - **TUI**: a ratatui keypad with keyboard and mouse input (`tui`
//!   feature, on by default)
//! - **Scripted**: tokens replayed through [`KeypadLayout::parse_token`]
//!
//! # Example
//!
//! ```rust
//! use satpad::prelude::*;
//!
//! let config = KeypadConfig::default();
//! let mut dom = MockDom::keypad_page(
//!     &KeypadLayout::satoshi(),
//!     &config.markup,
//!     PageVariant::WithControls,
//! );
//! let mut keypad = DomAccumulator::attach(&mut dom, &config).unwrap();
//!
//! keypad.click_label(&mut dom, "4");
//! keypad.click_label(&mut dom, "2");
//! keypad.click_id(&mut dom, "backspace");
//! assert_eq!(dom.get_element_text("satoshis"), Some("4"));
//! ```

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod dom;
pub mod driver;
pub mod error;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{ControlPolicy, KeypadConfig, MarkupConfig};
    pub use crate::core::{dispatch, ControlSet, DisplayBuffer, KeypadAction, KeypadKey, KeypadLayout};
    pub use crate::dom::{
        Document, DomAccumulator, DomElement, DomEvent, KeypadView, MockDom, NodeId, PageVariant,
        Slot,
    };
    pub use crate::driver::{DomDriver, KeypadDriver};
    pub use crate::error::{ControlKind, KeypadError, KeypadResult};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
    #[cfg(feature = "tui")]
    pub use crate::tui::{InputHandler, KeyAction, KeypadApp};

    #[cfg(feature = "wasm")]
    pub use crate::dom::BrowserKeypad;
}
