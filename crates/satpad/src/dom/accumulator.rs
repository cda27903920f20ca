//! Keypad input accumulator bound to a mock document
//!
//! Mirrors what the browser build does on page load: resolve the view,
//! react to activations, and write the buffer back into the display
//! element after every change.

use super::mock::{DomEvent, MockDom, NodeId};
use super::view::KeypadView;
use crate::config::KeypadConfig;
use crate::core::{self, ControlSet, DisplayBuffer, KeypadAction};
use crate::error::KeypadResult;

/// Accumulates keypad activations into the display element
#[derive(Debug, Clone)]
pub struct DomAccumulator {
    view: KeypadView<NodeId>,
    buffer: DisplayBuffer,
}

impl DomAccumulator {
    /// Binds to a document and empties the display
    pub fn attach(dom: &mut MockDom, config: &KeypadConfig) -> KeypadResult<Self> {
        let view = KeypadView::resolve(&*dom, config)?;
        let acc = Self {
            view,
            buffer: DisplayBuffer::new(),
        };
        acc.sync(dom);
        Ok(acc)
    }

    /// The resolved view-model
    #[must_use]
    pub fn view(&self) -> &KeypadView<NodeId> {
        &self.view
    }

    /// Controls that were wired
    #[must_use]
    pub fn controls(&self) -> ControlSet {
        self.view.controls()
    }

    /// The display buffer
    #[must_use]
    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    /// Current display content
    #[must_use]
    pub fn content(&self) -> &str {
        self.buffer.content()
    }

    /// Empties the buffer and display, as on a fresh page load
    pub fn reset(&mut self, dom: &mut MockDom) {
        self.buffer.reset();
        self.sync(dom);
    }

    /// Resolves the action an event maps to, if any
    ///
    /// Key labels are read from the element text at activation time.
    #[must_use]
    pub fn action_for(&self, dom: &MockDom, event: &DomEvent) -> Option<KeypadAction> {
        match event {
            DomEvent::Click { target } => self.view.click_action(dom, target),
            DomEvent::KeyDown { key, target } => self.view.key_action(dom, key, target.as_ref()),
        }
    }

    /// Records and reacts to an event
    ///
    /// Returns true if the display changed state (an action ran).
    pub fn handle_event(&mut self, dom: &mut MockDom, event: DomEvent) -> bool {
        let action = self.action_for(dom, &event);
        dom.dispatch_event(event);

        let Some(action) = action else {
            tracing::trace!("event has no bound reaction");
            return false;
        };
        let controls = self.controls();
        if !core::dispatch(&mut self.buffer, controls, &action) {
            return false;
        }
        self.sync(dom);
        true
    }

    /// Clicks an element
    pub fn click(&mut self, dom: &mut MockDom, target: NodeId) -> bool {
        self.handle_event(dom, DomEvent::click(target))
    }

    /// Clicks the element with the given ID; false if it does not exist
    pub fn click_id(&mut self, dom: &mut MockDom, id: &str) -> bool {
        match dom.get_element_by_id(id) {
            Some(node) => self.click(dom, node),
            None => false,
        }
    }

    /// Clicks the first key whose visible text equals `label`
    pub fn click_label(&mut self, dom: &mut MockDom, label: &str) -> bool {
        let node = self
            .view
            .keys
            .iter()
            .copied()
            .find(|&node| dom.inner_text(node).as_deref() == Some(label));
        match node {
            Some(node) => self.click(dom, node),
            None => false,
        }
    }

    /// Presses a keyboard key
    pub fn press_key(&mut self, dom: &mut MockDom, key: &str) -> bool {
        self.handle_event(dom, DomEvent::key_down(key))
    }

    fn sync(&self, dom: &mut MockDom) {
        dom.set_text(self.view.display, self.buffer.content());
    }
}
