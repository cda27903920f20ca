//! Terminal frontend for the keypad

mod app;
mod input;
mod keypad;
mod ui;

pub use app::KeypadApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{hit_test, Hit, KeypadWidget, BACKSPACE_LABEL, CLEAR_LABEL};
pub use ui::{keypad_area, render, KeypadUi, EMPTY_DISPLAY, HELP_LINE, TITLE};
