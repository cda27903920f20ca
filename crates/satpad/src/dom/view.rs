//! Typed view-model for the keypad markup
//!
//! [`KeypadView::resolve`] turns the markup contract into explicit slots:
//! a list of key elements, a required display element and optional
//! clear/backspace elements. Whether a missing control is tolerated is
//! decided by [`ControlPolicy`], never by where a lookup happens to fail.

use crate::config::{ControlPolicy, KeypadConfig};
use crate::core::{ControlSet, KeypadAction};
use crate::error::{ControlKind, KeypadError, KeypadResult};

/// Element lookups the keypad needs from a document
pub trait Document {
    /// Handle to an element in this document
    type Handle: Clone + PartialEq;

    /// `getElementById`
    fn element_by_id(&self, id: &str) -> Option<Self::Handle>;

    /// `getElementsByClassName`, in document order
    fn elements_by_class(&self, class: &str) -> Vec<Self::Handle>;

    /// `innerText`: the element's rendered text, descendants included
    fn visible_text(&self, handle: &Self::Handle) -> Option<String>;

    /// Whether the element takes typed input (form fields, `contenteditable`)
    fn is_editable(&self, handle: &Self::Handle) -> bool;
}

impl Document for super::MockDom {
    type Handle = super::NodeId;

    fn element_by_id(&self, id: &str) -> Option<Self::Handle> {
        self.get_element_by_id(id)
    }

    fn elements_by_class(&self, class: &str) -> Vec<Self::Handle> {
        self.get_elements_by_class_name(class)
    }

    fn visible_text(&self, handle: &Self::Handle) -> Option<String> {
        self.inner_text(*handle)
    }

    fn is_editable(&self, handle: &Self::Handle) -> bool {
        self.element(*handle)
            .is_some_and(super::DomElement::is_editable)
    }
}

/// What a bound element does when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The n-th keypad key in document order
    Key(usize),
    /// The clear control
    Clear,
    /// The backspace control
    Backspace,
}

/// Resolved keypad elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadView<H> {
    /// Keypad keys in document order
    pub keys: Vec<H>,
    /// Display element
    pub display: H,
    /// Clear control, if wired
    pub clear: Option<H>,
    /// Backspace control, if wired
    pub backspace: Option<H>,
}

impl<H: Clone + PartialEq> KeypadView<H> {
    /// Resolves the view-model against a document
    pub fn resolve<D>(doc: &D, config: &KeypadConfig) -> KeypadResult<Self>
    where
        D: Document<Handle = H>,
    {
        let markup = &config.markup;
        let keys = doc.elements_by_class(&markup.key_class);
        let display =
            doc.element_by_id(&markup.display_id)
                .ok_or_else(|| KeypadError::MissingDisplay {
                    id: markup.display_id.clone(),
                })?;

        let (clear, backspace) = match config.controls {
            ControlPolicy::Disabled => (None, None),
            ControlPolicy::Optional => (
                doc.element_by_id(&markup.clear_id),
                doc.element_by_id(&markup.backspace_id),
            ),
            ControlPolicy::Required => (
                Some(require(doc, ControlKind::Clear, &markup.clear_id)?),
                Some(require(doc, ControlKind::Backspace, &markup.backspace_id)?),
            ),
        };

        tracing::debug!(
            keys = keys.len(),
            clear = clear.is_some(),
            backspace = backspace.is_some(),
            policy = %config.controls,
            "resolved keypad view"
        );

        Ok(Self {
            keys,
            display,
            clear,
            backspace,
        })
    }

    /// Controls wired by this view
    #[must_use]
    pub fn controls(&self) -> ControlSet {
        ControlSet {
            clear: self.clear.is_some(),
            backspace: self.backspace.is_some(),
        }
    }

    /// Finds the slot an element is bound to
    ///
    /// Controls are checked before keys, so an element that is both a
    /// control and carries the key class acts as the control.
    #[must_use]
    pub fn slot_of(&self, handle: &H) -> Option<Slot> {
        if self.clear.as_ref() == Some(handle) {
            return Some(Slot::Clear);
        }
        if self.backspace.as_ref() == Some(handle) {
            return Some(Slot::Backspace);
        }
        self.keys.iter().position(|k| k == handle).map(Slot::Key)
    }

    /// Action for a click on `target`
    ///
    /// Key labels are read from the document at call time.
    pub fn click_action<D>(&self, doc: &D, target: &H) -> Option<KeypadAction>
    where
        D: Document<Handle = H>,
    {
        match self.slot_of(target)? {
            Slot::Key(index) => doc
                .visible_text(self.keys.get(index)?)
                .map(KeypadAction::Append),
            Slot::Clear => Some(KeypadAction::Clear),
            Slot::Backspace => Some(KeypadAction::Backspace),
        }
    }

    /// Action for a document-level key press
    ///
    /// Presses that originate in an editable element belong to that
    /// element and map to nothing.
    pub fn key_action<D>(&self, doc: &D, key: &str, origin: Option<&H>) -> Option<KeypadAction>
    where
        D: Document<Handle = H>,
    {
        if origin.is_some_and(|h| doc.is_editable(h)) {
            return None;
        }
        KeypadAction::from_control_key(key).or_else(|| {
            self.keys
                .iter()
                .filter_map(|k| doc.visible_text(k))
                .find(|label| label == key)
                .map(KeypadAction::Append)
        })
    }
}

fn require<D: Document>(doc: &D, kind: ControlKind, id: &str) -> KeypadResult<D::Handle> {
    doc.element_by_id(id).ok_or_else(|| KeypadError::MissingControl {
        kind,
        id: id.to_string(),
    })
}
