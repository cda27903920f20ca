//! DOM frontend for the keypad
//!
//! The mock document and accumulator are always built so the markup
//! contract can be tested natively; the `web-sys` binding is only
//! compiled with the `wasm` feature.

mod accumulator;
#[cfg(feature = "wasm")]
mod browser;
mod mock;
mod view;

pub use accumulator::DomAccumulator;
#[cfg(feature = "wasm")]
pub use browser::BrowserKeypad;
pub use mock::{DomElement, DomEvent, MockDom, NodeId, PageVariant};
pub use view::{Document, KeypadView, Slot};
