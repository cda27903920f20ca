//! Mock DOM for testing the keypad without a browser
//!
//! A small document tree with the two lookups the keypad needs
//! (`getElementById`, `getElementsByClassName` in document order) and a
//! recorded event stream.

use std::collections::HashMap;

use crate::config::MarkupConfig;
use crate::core::KeypadLayout;

/// Handle to a node in a [`MockDom`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Raw index of the node
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Represents a DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID (empty if none)
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Visible text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a class
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Whether the element accepts typed text
    ///
    /// `<input>`, `<textarea>`, and anything with `contenteditable` other
    /// than `"false"`.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        matches!(self.tag.as_str(), "input" | "textarea")
            || self
                .get_attr("contenteditable")
                .is_some_and(|v| v != "false")
    }
}

/// Events that can be dispatched to the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Pointer or touch activation of an element
    Click {
        /// The activated element
        target: NodeId,
    },
    /// Keyboard key press bubbling up to the document
    KeyDown {
        /// `KeyboardEvent.key` of the pressed key
        key: String,
        /// Focused element the press originated from, if any
        target: Option<NodeId>,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub const fn click(target: NodeId) -> Self {
        Self::Click { target }
    }

    /// Creates a key press event with nothing focused
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
            target: None,
        }
    }

    /// Creates a key press event originating from a focused element
    #[must_use]
    pub fn key_down_on(target: NodeId, key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
            target: Some(target),
        }
    }
}

/// Which variant of the keypad page markup to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageVariant {
    /// Keys and display only
    KeysOnly,
    /// Keys, display, and the clear/backspace controls
    WithControls,
}

#[derive(Debug, Clone)]
struct Node {
    element: DomElement,
    children: Vec<NodeId>,
}

/// Mock document
#[derive(Debug, Clone)]
pub struct MockDom {
    nodes: Vec<Node>,
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates a document containing only an empty `<body>`
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                element: DomElement::new("body"),
                children: Vec::new(),
            }],
            event_history: Vec::new(),
        }
    }

    /// Builds the payment page markup for a keypad
    ///
    /// ```text
    /// <body>
    ///   <div id="amount-panel"><span id="satoshis"></span></div>
    ///   <div id="keypad-grid"><button class="keypad">1</button> ...</div>
    ///   <button id="clear">C</button> <button id="backspace">⌫</button>
    /// </body>
    /// ```
    #[must_use]
    pub fn keypad_page(layout: &KeypadLayout, markup: &MarkupConfig, variant: PageVariant) -> Self {
        let mut dom = Self::new();
        let body = dom.root();

        let amount = dom.append_child(body, DomElement::new("div").with_id("amount-panel"));
        dom.append_child(
            amount,
            DomElement::new("span")
                .with_id(&markup.display_id)
                .with_class("display"),
        );

        let grid = dom.append_child(body, DomElement::new("div").with_id("keypad-grid"));
        for key in layout.keys() {
            dom.append_child(
                grid,
                DomElement::new("button")
                    .with_id(&key.id)
                    .with_class(&markup.key_class)
                    .with_text(&key.label)
                    .with_attr("data-row", &key.row.to_string())
                    .with_attr("data-col", &key.col.to_string()),
            );
        }

        if variant == PageVariant::WithControls {
            dom.append_child(
                body,
                DomElement::new("button")
                    .with_id(&markup.clear_id)
                    .with_class("control")
                    .with_text("C"),
            );
            dom.append_child(
                body,
                DomElement::new("button")
                    .with_id(&markup.backspace_id)
                    .with_class("control")
                    .with_text("⌫"),
            );
        }

        dom
    }

    /// The `<body>` node
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes including `<body>`
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; the document has at least `<body>`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends an element as the last child of `parent`
    ///
    /// An unknown parent attaches the element to `<body>`.
    pub fn append_child(&mut self, parent: NodeId, element: DomElement) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            element,
            children: Vec::new(),
        });
        let parent = if parent.0 < id.0 { parent } else { self.root() };
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Gets an element by node handle
    #[must_use]
    pub fn element(&self, node: NodeId) -> Option<&DomElement> {
        self.nodes.get(node.0).map(|n| &n.element)
    }

    /// Gets a mutable element by node handle
    pub fn element_mut(&mut self, node: NodeId) -> Option<&mut DomElement> {
        self.nodes.get_mut(node.0).map(|n| &mut n.element)
    }

    /// Child handles of a node
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        match self.nodes.get(node.0) {
            Some(n) => &n.children,
            None => &[],
        }
    }

    /// Node handles in document (pre-order) order
    #[must_use]
    pub fn document_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(self.children(node).iter().rev());
        }
        order
    }

    /// First element with the given ID, in document order
    #[must_use]
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.document_order()
            .into_iter()
            .find(|&n| self.nodes[n.0].element.id == id)
    }

    /// All elements carrying a class, in document order
    #[must_use]
    pub fn get_elements_by_class_name(&self, class: &str) -> Vec<NodeId> {
        self.document_order()
            .into_iter()
            .filter(|&n| self.nodes[n.0].element.has_class(class))
            .collect()
    }

    /// Own text of a node, without descendants
    #[must_use]
    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|e| e.text_content.as_str())
    }

    /// Rendered text of a node and its descendants in document order
    ///
    /// The mock counterpart of `innerText`.
    #[must_use]
    pub fn inner_text(&self, node: NodeId) -> Option<String> {
        self.element(node)?;
        let mut text = String::new();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if let Some(elem) = self.element(current) {
                text.push_str(&elem.text_content);
            }
            stack.extend(self.children(current).iter().rev());
        }
        Some(text)
    }

    /// Replaces the visible text of a node
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(elem) = self.element_mut(node) {
            elem.set_text(text);
        }
    }

    /// Visible text of the element with the given ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.get_element_by_id(id).and_then(|n| self.text(n))
    }

    /// Records an event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== DomElement tests =====

    #[test]
    fn test_dom_element_builders() {
        let elem = DomElement::new("button")
            .with_id("clear")
            .with_text("C")
            .with_class("control")
            .with_attr("type", "button");
        assert_eq!(elem.tag, "button");
        assert_eq!(elem.id, "clear");
        assert_eq!(elem.text_content, "C");
        assert!(elem.has_class("control"));
        assert_eq!(elem.get_attr("type"), Some("button"));
        assert_eq!(elem.get_attr("missing"), None);
    }

    #[test]
    fn test_dom_element_default() {
        assert_eq!(DomElement::default().tag, "div");
    }

    #[test]
    fn test_add_class_dedupes() {
        let mut elem = DomElement::new("div");
        elem.add_class("keypad");
        elem.add_class("keypad");
        assert_eq!(elem.classes.len(), 1);
    }

    // ===== MockDom tests =====

    #[test]
    fn test_new_has_body() {
        let dom = MockDom::new();
        assert_eq!(dom.len(), 1);
        assert!(!dom.is_empty());
        assert_eq!(dom.element(dom.root()).unwrap().tag, "body");
    }

    #[test]
    fn test_append_and_lookup_by_id() {
        let mut dom = MockDom::new();
        let node = dom.append_child(dom.root(), DomElement::new("span").with_id("satoshis"));
        assert_eq!(dom.get_element_by_id("satoshis"), Some(node));
        assert_eq!(dom.get_element_by_id("nope"), None);
        assert_eq!(dom.get_element_by_id(""), None);
    }

    #[test]
    fn test_duplicate_ids_return_first_in_document_order() {
        let mut dom = MockDom::new();
        let outer = dom.append_child(dom.root(), DomElement::new("div"));
        let first = dom.append_child(outer, DomElement::new("span").with_id("dup"));
        dom.append_child(dom.root(), DomElement::new("span").with_id("dup"));
        assert_eq!(dom.get_element_by_id("dup"), Some(first));
    }

    #[test]
    fn test_class_lookup_is_document_order_not_insertion_order() {
        let mut dom = MockDom::new();
        let a = dom.append_child(dom.root(), DomElement::new("div"));
        let b = dom.append_child(dom.root(), DomElement::new("div"));
        // Inserted later but nested under the earlier sibling
        let late = dom.append_child(b, DomElement::new("button").with_class("keypad"));
        let early = dom.append_child(a, DomElement::new("button").with_class("keypad"));
        assert_eq!(dom.get_elements_by_class_name("keypad"), vec![early, late]);
    }

    #[test]
    fn test_append_to_unknown_parent_uses_body() {
        let mut dom = MockDom::new();
        let node = dom.append_child(NodeId(99), DomElement::new("p"));
        assert_eq!(dom.children(dom.root()), &[node]);
    }

    #[test]
    fn test_set_and_get_text() {
        let mut dom = MockDom::new();
        let node = dom.append_child(dom.root(), DomElement::new("span").with_id("satoshis"));
        dom.set_text(node, "42");
        assert_eq!(dom.text(node), Some("42"));
        assert_eq!(dom.get_element_text("satoshis"), Some("42"));
        assert_eq!(dom.get_element_text("missing"), None);
    }

    #[test]
    fn test_inner_text_includes_descendants() {
        let mut dom = MockDom::new();
        let button = dom.append_child(dom.root(), DomElement::new("button").with_text("1"));
        let span = dom.append_child(button, DomElement::new("span").with_text("0"));
        dom.append_child(span, DomElement::new("b").with_text("0"));
        dom.append_child(button, DomElement::new("i").with_text("!"));
        assert_eq!(dom.text(button), Some("1"));
        assert_eq!(dom.inner_text(button).as_deref(), Some("100!"));
        assert_eq!(dom.inner_text(span).as_deref(), Some("00"));
        assert_eq!(dom.inner_text(NodeId(99)), None);
    }

    #[test]
    fn test_is_editable() {
        assert!(DomElement::new("input").is_editable());
        assert!(DomElement::new("textarea").is_editable());
        assert!(DomElement::new("div")
            .with_attr("contenteditable", "true")
            .is_editable());
        assert!(!DomElement::new("div")
            .with_attr("contenteditable", "false")
            .is_editable());
        assert!(!DomElement::new("button").is_editable());
    }

    #[test]
    fn test_key_down_on_target() {
        let dom = MockDom::new();
        assert_eq!(
            DomEvent::key_down_on(dom.root(), "5"),
            DomEvent::KeyDown {
                key: "5".to_string(),
                target: Some(dom.root()),
            }
        );
    }

    #[test]
    fn test_event_history() {
        let mut dom = MockDom::new();
        dom.dispatch_event(DomEvent::click(dom.root()));
        dom.dispatch_event(DomEvent::key_down("4"));
        assert_eq!(dom.event_history().len(), 2);
        assert_eq!(dom.event_history()[1], DomEvent::key_down("4"));
        dom.clear_event_history();
        assert!(dom.event_history().is_empty());
    }

    // ===== Page fixture tests =====

    #[test]
    fn test_keypad_page_with_controls() {
        let layout = KeypadLayout::satoshi();
        let markup = MarkupConfig::default();
        let dom = MockDom::keypad_page(&layout, &markup, PageVariant::WithControls);

        let keys = dom.get_elements_by_class_name("keypad");
        assert_eq!(keys.len(), 12);
        let labels: Vec<&str> = keys.iter().filter_map(|&k| dom.text(k)).collect();
        assert_eq!(
            labels,
            ["1", "2", "3", "4", "5", "6", "7", "8", "9", "00", "0", "000"]
        );
        assert_eq!(dom.get_element_text("satoshis"), Some(""));
        assert!(dom.get_element_by_id("clear").is_some());
        assert!(dom.get_element_by_id("backspace").is_some());
    }

    #[test]
    fn test_keypad_page_keys_only() {
        let dom = MockDom::keypad_page(
            &KeypadLayout::satoshi(),
            &MarkupConfig::default(),
            PageVariant::KeysOnly,
        );
        assert!(dom.get_element_by_id("satoshis").is_some());
        assert!(dom.get_element_by_id("clear").is_none());
        assert!(dom.get_element_by_id("backspace").is_none());
    }

    #[test]
    fn test_keypad_page_key_attributes() {
        let dom = MockDom::keypad_page(
            &KeypadLayout::satoshi(),
            &MarkupConfig::default(),
            PageVariant::KeysOnly,
        );
        let node = dom.get_element_by_id("key-3-2").unwrap();
        let elem = dom.element(node).unwrap();
        assert_eq!(elem.text_content, "000");
        assert_eq!(elem.get_attr("data-row"), Some("3"));
        assert_eq!(elem.get_attr("data-col"), Some("2"));
    }

    #[test]
    fn test_node_id_index() {
        let dom = MockDom::new();
        assert_eq!(dom.root().index(), 0);
    }
}
