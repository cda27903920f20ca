//! Unified keypad driver
//!
//! Scenario checks are written once against [`KeypadDriver`] and run on
//! every frontend: the mock DOM accumulator and, with the `tui` feature,
//! the terminal app.

use crate::config::KeypadConfig;
use crate::core::ControlSet;
use crate::dom::{DomAccumulator, MockDom, PageVariant};
use crate::error::KeypadResult;

/// Abstract driver for keypad interactions
pub trait KeypadDriver {
    /// Activates the key with the given label; false if there is none
    fn press(&mut self, label: &str) -> bool;

    /// Activates the clear control; false if it is not wired
    fn clear(&mut self) -> bool;

    /// Activates the backspace control; false if it is not wired
    fn backspace(&mut self) -> bool;

    /// What the display currently shows
    fn content(&self) -> String;

    /// Controls that are wired
    fn controls(&self) -> ControlSet;

    /// Returns to the freshly loaded state
    fn reset(&mut self);
}

/// Driver over a mock page and its accumulator
///
/// Content is read back from the display element, not the buffer.
#[derive(Debug, Clone)]
pub struct DomDriver {
    dom: MockDom,
    accumulator: DomAccumulator,
    clear_id: String,
    backspace_id: String,
}

impl DomDriver {
    /// Builds the page for `variant` and binds to it
    pub fn new(variant: PageVariant, config: &KeypadConfig) -> KeypadResult<Self> {
        let layout = config.build_layout()?;
        let mut dom = MockDom::keypad_page(&layout, &config.markup, variant);
        let accumulator = DomAccumulator::attach(&mut dom, config)?;
        Ok(Self {
            dom,
            accumulator,
            clear_id: config.markup.clear_id.clone(),
            backspace_id: config.markup.backspace_id.clone(),
        })
    }

    /// Default page with clear and backspace controls
    pub fn with_controls() -> KeypadResult<Self> {
        Self::new(PageVariant::WithControls, &KeypadConfig::default())
    }

    /// Default page with keypad keys only
    pub fn keys_only() -> KeypadResult<Self> {
        Self::new(PageVariant::KeysOnly, &KeypadConfig::default())
    }

    /// The mock page
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// The bound accumulator
    #[must_use]
    pub fn accumulator(&self) -> &DomAccumulator {
        &self.accumulator
    }
}

impl KeypadDriver for DomDriver {
    fn press(&mut self, label: &str) -> bool {
        self.accumulator.click_label(&mut self.dom, label)
    }

    fn clear(&mut self) -> bool {
        self.accumulator.click_id(&mut self.dom, &self.clear_id)
    }

    fn backspace(&mut self) -> bool {
        self.accumulator.click_id(&mut self.dom, &self.backspace_id)
    }

    fn content(&self) -> String {
        self.dom
            .text(self.accumulator.view().display)
            .unwrap_or_default()
            .to_string()
    }

    fn controls(&self) -> ControlSet {
        self.accumulator.controls()
    }

    fn reset(&mut self) {
        self.accumulator.reset(&mut self.dom);
        self.dom.clear_event_history();
    }
}

/// Terminal driver
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{ControlSet, KeypadDriver};
    use crate::tui::{Hit, KeypadApp};

    /// Driver wrapping the terminal keypad app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: KeypadApp,
    }

    impl TuiDriver {
        /// Creates a driver over the default app
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a driver with an existing app
        #[must_use]
        pub fn with_app(app: KeypadApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &KeypadApp {
            &self.app
        }
    }

    impl KeypadDriver for TuiDriver {
        fn press(&mut self, label: &str) -> bool {
            self.app.press_label(label)
        }

        fn clear(&mut self) -> bool {
            self.app.click(Hit::Clear)
        }

        fn backspace(&mut self) -> bool {
            self.app.click(Hit::Backspace)
        }

        fn content(&self) -> String {
            self.app.content().to_string()
        }

        fn controls(&self) -> ControlSet {
            self.app.controls()
        }

        fn reset(&mut self) {
            self.app.reset();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified scenarios =====
// These work with ANY KeypadDriver implementation

/// Key activations concatenate their labels in order
pub fn verify_accumulation<D: KeypadDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.content(), "");

    let labels = ["1", "00", "5", "000", "0"];
    let mut expected = String::new();
    for label in labels {
        assert!(driver.press(label), "key '{label}' not found");
        expected.push_str(label);
        assert_eq!(driver.content(), expected);
    }
}

/// "4", "2", backspace, clear, backspace
pub fn verify_backspace_clear_scenario<D: KeypadDriver>(driver: &mut D) {
    driver.reset();
    driver.press("4");
    driver.press("2");
    assert_eq!(driver.content(), "42");

    assert!(driver.backspace());
    assert_eq!(driver.content(), "4");

    assert!(driver.clear());
    assert_eq!(driver.content(), "");

    assert!(driver.backspace());
    assert_eq!(driver.content(), "");
}

/// Clear empties the display and is idempotent
pub fn verify_clear_idempotent<D: KeypadDriver>(driver: &mut D) {
    driver.reset();
    driver.press("7");
    driver.press("000");
    assert!(driver.clear());
    assert_eq!(driver.content(), "");
    assert!(driver.clear());
    assert_eq!(driver.content(), "");
}

/// Backspace removes one character, even from a multi-character label
pub fn verify_backspace_single_char<D: KeypadDriver>(driver: &mut D) {
    driver.reset();
    driver.press("000");
    assert!(driver.backspace());
    assert_eq!(driver.content(), "00");
}

/// With no controls wired, keys accumulate and nothing else mutates
pub fn verify_keys_only<D: KeypadDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.controls(), ControlSet::none());

    driver.press("7");
    driver.press("0");
    assert_eq!(driver.content(), "70");

    assert!(!driver.clear());
    assert!(!driver.backspace());
    assert_eq!(driver.content(), "70");
}

/// Runs every scenario that applies to the driver's wired controls
pub fn run_all_scenarios<D: KeypadDriver>(driver: &mut D) {
    verify_accumulation(driver);
    if driver.controls() == ControlSet::all() {
        verify_backspace_clear_scenario(driver);
        verify_clear_idempotent(driver);
        verify_backspace_single_char(driver);
    } else if driver.controls() == ControlSet::none() {
        verify_keys_only(driver);
    }
    driver.reset();
}
