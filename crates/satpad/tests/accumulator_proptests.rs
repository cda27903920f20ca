//! Property-based tests for the display buffer and DOM accumulator

use proptest::prelude::*;
use satpad::core::{dispatch, ControlSet, DisplayBuffer, KeypadAction, KeypadLayout, SATOSHI_ROWS};
use satpad::driver::{DomDriver, KeypadDriver};

// ===== Strategy definitions =====

/// Any label on the satoshi keypad
fn label_strategy() -> impl Strategy<Value = &'static str> {
    let labels: Vec<&'static str> = SATOSHI_ROWS.iter().flatten().copied().collect();
    prop::sample::select(labels)
}

/// Any keypad action on the satoshi keypad
fn action_strategy() -> impl Strategy<Value = KeypadAction> {
    prop_oneof![
        4 => label_strategy().prop_map(KeypadAction::append),
        1 => Just(KeypadAction::Clear),
        1 => Just(KeypadAction::Backspace),
    ]
}

/// Reference model: what the display should read after `actions`
fn model(actions: &[KeypadAction], controls: ControlSet) -> String {
    let mut content = String::new();
    for action in actions {
        match action {
            KeypadAction::Append(label) => content.push_str(label),
            KeypadAction::Clear if controls.clear => content.clear(),
            KeypadAction::Backspace if controls.backspace => {
                content.pop();
            }
            KeypadAction::Clear | KeypadAction::Backspace => {}
        }
    }
    content
}

fn drive(driver: &mut DomDriver, action: &KeypadAction) {
    match action {
        KeypadAction::Append(label) => {
            driver.press(label);
        }
        KeypadAction::Clear => {
            driver.clear();
        }
        KeypadAction::Backspace => {
            driver.backspace();
        }
    }
}

// ===== DisplayBuffer properties =====

proptest! {
    /// Appends concatenate in activation order
    #[test]
    fn prop_appends_concatenate(labels in prop::collection::vec(label_strategy(), 0..20)) {
        let mut buffer = DisplayBuffer::new();
        for label in &labels {
            buffer.append(label);
        }
        prop_assert_eq!(buffer.content(), labels.concat());
    }

    /// Clear always yields the empty display
    #[test]
    fn prop_clear_empties(content in "\\PC{0,16}") {
        let mut buffer = DisplayBuffer::new();
        buffer.append(&content);
        buffer.clear();
        prop_assert!(buffer.is_empty());
    }

    /// Clear twice equals clear once
    #[test]
    fn prop_clear_idempotent(content in "\\PC{0,16}") {
        let mut once = DisplayBuffer::new();
        once.append(&content);
        once.clear();
        let mut twice = once.clone();
        twice.clear();
        prop_assert_eq!(once, twice);
    }

    /// Backspace drops exactly the last character
    #[test]
    fn prop_backspace_drops_last_char(content in "\\PC{0,16}") {
        let mut buffer = DisplayBuffer::new();
        buffer.append(&content);
        let removed = buffer.backspace();

        let mut chars: Vec<char> = content.chars().collect();
        let expected_removed = chars.pop();
        prop_assert_eq!(removed, expected_removed);
        prop_assert_eq!(buffer.content(), chars.into_iter().collect::<String>());
    }

    /// Without controls, only appends reach the buffer
    #[test]
    fn prop_keys_only_ignores_controls(actions in prop::collection::vec(action_strategy(), 0..30)) {
        let mut buffer = DisplayBuffer::new();
        for action in &actions {
            let ran = dispatch(&mut buffer, ControlSet::none(), action);
            prop_assert_eq!(ran, !action.is_control());
        }
        prop_assert_eq!(buffer.content(), model(&actions, ControlSet::none()));
    }
}

// ===== Accumulator properties =====

proptest! {
    /// The display element tracks the reference model for any activation sequence
    #[test]
    fn prop_dom_matches_model(actions in prop::collection::vec(action_strategy(), 0..30)) {
        let mut driver = DomDriver::with_controls().unwrap();
        for action in &actions {
            drive(&mut driver, action);
        }
        prop_assert_eq!(driver.content(), model(&actions, ControlSet::all()));
    }

    /// A keys-only page accumulates appends and nothing else
    #[test]
    fn prop_dom_keys_only_matches_model(actions in prop::collection::vec(action_strategy(), 0..30)) {
        let mut driver = DomDriver::keys_only().unwrap();
        for action in &actions {
            drive(&mut driver, action);
        }
        prop_assert_eq!(driver.content(), model(&actions, ControlSet::none()));
    }

    /// Clear at any point of a sequence empties the display
    #[test]
    fn prop_dom_clear_anywhere(
        labels in prop::collection::vec(label_strategy(), 0..12),
        split in 0usize..12,
    ) {
        let mut driver = DomDriver::with_controls().unwrap();
        let split = split.min(labels.len());
        for label in &labels[..split] {
            driver.press(label);
        }
        prop_assert!(driver.clear());
        prop_assert_eq!(driver.content(), "");
        for label in &labels[split..] {
            driver.press(label);
        }
        prop_assert_eq!(driver.content(), labels[split..].concat());
    }

    /// Every key is found by its label and scripted by its label
    #[test]
    fn prop_label_lookup(label in label_strategy()) {
        let layout = KeypadLayout::satoshi();
        let key = layout.find_by_label(label).unwrap();
        prop_assert_eq!(layout.get_key_at(key.row, key.col), Some(key));
        prop_assert_eq!(layout.parse_token(label).unwrap(), KeypadAction::append(label));
    }
}
