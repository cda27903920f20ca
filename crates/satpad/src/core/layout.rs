//! Keypad layout - labelled keys on a grid
//!
//! The default layout is the satoshi amount pad:
//!
//! ```text
//! [ 1 ] [ 2 ] [ 3 ]
//! [ 4 ] [ 5 ] [ 6 ]
//! [ 7 ] [ 8 ] [ 9 ]
//! [ 00] [ 0 ] [000]
//! ```

use std::collections::HashSet;

use super::action::KeypadAction;
use crate::error::{KeypadError, KeypadResult};

/// Labels of the default satoshi keypad, row by row
pub const SATOSHI_ROWS: [[&str; 3]; 4] = [
    ["1", "2", "3"],
    ["4", "5", "6"],
    ["7", "8", "9"],
    ["00", "0", "000"],
];

/// A single keypad key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadKey {
    /// Text shown on the key and appended on activation
    pub label: String,
    /// Element ID used when the key is rendered into a DOM
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadKey {
    /// Creates a key at a grid position
    #[must_use]
    pub fn new(label: &str, row: usize, col: usize) -> Self {
        Self {
            label: label.to_string(),
            id: format!("key-{row}-{col}"),
            row,
            col,
        }
    }

    /// Action performed when this key is activated
    #[must_use]
    pub fn action(&self) -> KeypadAction {
        KeypadAction::append(self.label.clone())
    }
}

/// Rectangular grid of keypad keys in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadLayout {
    keys: Vec<KeypadKey>,
    rows: usize,
    cols: usize,
}

impl Default for KeypadLayout {
    fn default() -> Self {
        Self::satoshi()
    }
}

impl KeypadLayout {
    /// The standard satoshi amount pad
    #[must_use]
    pub fn satoshi() -> Self {
        let keys = SATOSHI_ROWS
            .iter()
            .enumerate()
            .flat_map(|(row, labels)| {
                labels
                    .iter()
                    .enumerate()
                    .map(move |(col, label)| KeypadKey::new(label, row, col))
            })
            .collect();

        Self {
            keys,
            rows: SATOSHI_ROWS.len(),
            cols: SATOSHI_ROWS[0].len(),
        }
    }

    /// Builds a layout from rows of labels
    ///
    /// Rows must be non-empty and of equal width; labels must be non-empty
    /// and unique.
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> KeypadResult<Self> {
        let cols = rows
            .first()
            .map(Vec::len)
            .ok_or_else(|| KeypadError::invalid_layout("layout has no rows"))?;
        if cols == 0 {
            return Err(KeypadError::invalid_layout("layout rows are empty"));
        }

        let mut seen = HashSet::new();
        let mut keys = Vec::with_capacity(rows.len() * cols);

        for (row, labels) in rows.iter().enumerate() {
            if labels.len() != cols {
                return Err(KeypadError::invalid_layout(format!(
                    "row {row} has {} keys, expected {cols}",
                    labels.len()
                )));
            }
            for (col, label) in labels.iter().enumerate() {
                let label = label.as_ref();
                if label.is_empty() {
                    return Err(KeypadError::invalid_layout(format!(
                        "key at row {row}, col {col} has an empty label"
                    )));
                }
                if !seen.insert(label.to_string()) {
                    return Err(KeypadError::invalid_layout(format!(
                        "duplicate key label '{label}'"
                    )));
                }
                keys.push(KeypadKey::new(label, row, col));
            }
        }

        Ok(Self {
            keys,
            rows: rows.len(),
            cols,
        })
    }

    /// Labels as rows (inverse of [`KeypadLayout::from_rows`])
    #[must_use]
    pub fn label_rows(&self) -> Vec<Vec<String>> {
        self.keys
            .chunks(self.cols)
            .map(|row| row.iter().map(|k| k.label.clone()).collect())
            .collect()
    }

    /// Returns the number of keys
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All keys in row-major order
    #[must_use]
    pub fn keys(&self) -> &[KeypadKey] {
        &self.keys
    }

    /// Gets a key by index
    #[must_use]
    pub fn get_key(&self, index: usize) -> Option<&KeypadKey> {
        self.keys.get(index)
    }

    /// Gets a key by row and column
    #[must_use]
    pub fn get_key_at(&self, row: usize, col: usize) -> Option<&KeypadKey> {
        if row < self.rows && col < self.cols {
            self.keys.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the index of the key with the given label
    #[must_use]
    pub fn position_of(&self, label: &str) -> Option<usize> {
        self.keys.iter().position(|k| k.label == label)
    }

    /// Finds a key by label
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<&KeypadKey> {
        self.keys.iter().find(|k| k.label == label)
    }

    /// Finds a key by element ID
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadKey> {
        self.keys.iter().find(|k| k.id == id)
    }

    /// Maps a keyboard key name to an action
    ///
    /// Key names follow `KeyboardEvent.key`: a key whose text equals a
    /// label appends it, `Backspace` deletes, `Escape` and `Delete` clear.
    #[must_use]
    pub fn key_to_action(&self, key: &str) -> Option<KeypadAction> {
        KeypadAction::from_control_key(key)
            .or_else(|| self.find_by_label(key).map(KeypadKey::action))
    }

    /// Parses a scripted token into an action
    ///
    /// Labels take priority; otherwise `clear`/`c` and `backspace`/`bs`/`<`
    /// name the controls (case-insensitive).
    pub fn parse_token(&self, token: &str) -> KeypadResult<KeypadAction> {
        if let Some(key) = self.find_by_label(token) {
            return Ok(key.action());
        }
        match token.to_ascii_lowercase().as_str() {
            "clear" | "c" => Ok(KeypadAction::Clear),
            "backspace" | "bs" | "<" => Ok(KeypadAction::Backspace),
            _ => Err(KeypadError::UnknownToken {
                token: token.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satoshi_layout_shape() {
        let layout = KeypadLayout::satoshi();
        assert_eq!(layout.key_count(), 12);
        assert_eq!(layout.dimensions(), (4, 3));
    }

    #[test]
    fn test_default_is_satoshi() {
        assert_eq!(KeypadLayout::default(), KeypadLayout::satoshi());
    }

    #[test]
    fn test_satoshi_rows() {
        let layout = KeypadLayout::satoshi();
        assert_eq!(layout.get_key_at(0, 0).unwrap().label, "1");
        assert_eq!(layout.get_key_at(1, 1).unwrap().label, "5");
        assert_eq!(layout.get_key_at(2, 2).unwrap().label, "9");
        assert_eq!(layout.get_key_at(3, 0).unwrap().label, "00");
        assert_eq!(layout.get_key_at(3, 1).unwrap().label, "0");
        assert_eq!(layout.get_key_at(3, 2).unwrap().label, "000");
    }

    #[test]
    fn test_get_key_at_out_of_bounds() {
        let layout = KeypadLayout::satoshi();
        assert!(layout.get_key_at(4, 0).is_none());
        assert!(layout.get_key_at(0, 3).is_none());
    }

    #[test]
    fn test_get_key_by_index() {
        let layout = KeypadLayout::satoshi();
        assert_eq!(layout.get_key(0).unwrap().label, "1");
        assert!(layout.get_key(12).is_none());
    }

    #[test]
    fn test_key_ids() {
        let layout = KeypadLayout::satoshi();
        assert_eq!(layout.get_key_at(3, 2).unwrap().id, "key-3-2");
        assert_eq!(layout.find_by_id("key-0-1").unwrap().label, "2");
        assert!(layout.find_by_id("key-9-9").is_none());
    }

    #[test]
    fn test_position_of() {
        let layout = KeypadLayout::satoshi();
        assert_eq!(layout.position_of("1"), Some(0));
        assert_eq!(layout.position_of("0"), Some(10));
        assert_eq!(layout.position_of("X"), None);
    }

    #[test]
    fn test_from_rows_custom() {
        let layout =
            KeypadLayout::from_rows(&[vec!["1", "2"], vec!["3", "4"], vec!["0", "."]]).unwrap();
        assert_eq!(layout.dimensions(), (3, 2));
        assert_eq!(layout.get_key_at(2, 1).unwrap().label, ".");
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        let rows: Vec<Vec<&str>> = Vec::new();
        assert!(matches!(
            KeypadLayout::from_rows(&rows),
            Err(KeypadError::InvalidLayout { .. })
        ));
        assert!(KeypadLayout::from_rows(&[Vec::<&str>::new()]).is_err());
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = KeypadLayout::from_rows(&[vec!["1", "2"], vec!["3"]]).unwrap_err();
        assert!(err.to_string().contains("row 1 has 1 keys"));
    }

    #[test]
    fn test_from_rows_rejects_empty_label() {
        assert!(KeypadLayout::from_rows(&[vec!["1", ""]]).is_err());
    }

    #[test]
    fn test_from_rows_rejects_duplicates() {
        let err = KeypadLayout::from_rows(&[vec!["1", "1"]]).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_label_rows_roundtrip() {
        let layout = KeypadLayout::satoshi();
        let rebuilt = KeypadLayout::from_rows(&layout.label_rows()).unwrap();
        assert_eq!(rebuilt, layout);
    }

    #[test]
    fn test_key_to_action() {
        let layout = KeypadLayout::satoshi();
        assert_eq!(layout.key_to_action("7"), Some(KeypadAction::append("7")));
        assert_eq!(
            layout.key_to_action("Backspace"),
            Some(KeypadAction::Backspace)
        );
        assert_eq!(layout.key_to_action("Escape"), Some(KeypadAction::Clear));
        assert_eq!(layout.key_to_action("Delete"), Some(KeypadAction::Clear));
        assert_eq!(layout.key_to_action("x"), None);
        assert_eq!(layout.key_to_action("Shift"), None);
    }

    #[test]
    fn test_parse_token_labels_and_controls() {
        let layout = KeypadLayout::satoshi();
        assert_eq!(
            layout.parse_token("000").unwrap(),
            KeypadAction::append("000")
        );
        assert_eq!(layout.parse_token("clear").unwrap(), KeypadAction::Clear);
        assert_eq!(layout.parse_token("C").unwrap(), KeypadAction::Clear);
        assert_eq!(
            layout.parse_token("Backspace").unwrap(),
            KeypadAction::Backspace
        );
        assert_eq!(layout.parse_token("<").unwrap(), KeypadAction::Backspace);
    }

    #[test]
    fn test_parse_token_label_wins_over_control() {
        let layout = KeypadLayout::from_rows(&[vec!["C", "1"]]).unwrap();
        assert_eq!(layout.parse_token("C").unwrap(), KeypadAction::append("C"));
    }

    #[test]
    fn test_parse_token_unknown() {
        let layout = KeypadLayout::satoshi();
        assert!(matches!(
            layout.parse_token("42"),
            Err(KeypadError::UnknownToken { token }) if token == "42"
        ));
    }

    #[test]
    fn prop_key_positions_unique() {
        let layout = KeypadLayout::satoshi();
        let mut positions = HashSet::new();
        for key in layout.keys() {
            assert!(positions.insert((key.row, key.col)));
        }
    }
}
