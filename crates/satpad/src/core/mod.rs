//! Keypad core: display buffer, actions and layout
//!
//! Everything here is frontend-agnostic; the DOM, browser and terminal
//! frontends all drive the same [`DisplayBuffer`].

mod action;
mod buffer;
mod layout;

pub use action::{ControlSet, KeypadAction};
pub use buffer::DisplayBuffer;
pub use layout::{KeypadKey, KeypadLayout, SATOSHI_ROWS};

/// Applies an action if the control set permits it
///
/// Returns true if the buffer was touched.
pub fn dispatch(buffer: &mut DisplayBuffer, controls: ControlSet, action: &KeypadAction) -> bool {
    if !controls.permits(action) {
        tracing::trace!(%action, "control not wired; ignoring");
        return false;
    }
    action.apply(buffer);
    tracing::trace!(%action, content = buffer.content(), "applied");
    true
}
