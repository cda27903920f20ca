//! Browser binding for the keypad
//!
//! Once the page has loaded the keypad resolves its [`KeypadView`] against
//! the real document and registers one `click` listener per key and per
//! wired control, plus a document-level `keydown` listener. Events are
//! mapped to actions by the same [`KeypadView`] code the mock document
//! exercises.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    console, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlTextAreaElement,
    KeyboardEvent,
};

use super::view::{Document, KeypadView};
use crate::config::KeypadConfig;
use crate::core::{self, ControlSet, DisplayBuffer, KeypadAction};

type Listener = Closure<dyn FnMut(Event)>;

thread_local! {
    static KEYPAD: RefCell<Option<BrowserKeypad>> = const { RefCell::new(None) };
}

#[derive(Debug, Clone)]
struct WebDocument(web_sys::Document);

impl Document for WebDocument {
    type Handle = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.0.get_element_by_id(id)
    }

    fn elements_by_class(&self, class: &str) -> Vec<Element> {
        let collection = self.0.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect()
    }

    fn visible_text(&self, handle: &Element) -> Option<String> {
        Some(visible_text(handle))
    }

    fn is_editable(&self, handle: &Element) -> bool {
        handle.is_instance_of::<HtmlInputElement>()
            || handle.is_instance_of::<HtmlTextAreaElement>()
            || handle
                .dyn_ref::<HtmlElement>()
                .is_some_and(HtmlElement::is_content_editable)
    }
}

/// Visible text of an element (`innerText` when it is an HTML element)
fn visible_text(element: &Element) -> String {
    match element.dyn_ref::<HtmlElement>() {
        Some(html) => html.inner_text(),
        None => element.text_content().unwrap_or_default(),
    }
}

fn set_visible_text(element: &Element, text: &str) {
    match element.dyn_ref::<HtmlElement>() {
        Some(html) => html.set_inner_text(text),
        None => element.set_text_content(Some(text)),
    }
}

/// Buffer state shared by every listener
#[derive(Debug, Default)]
struct Shared {
    buffer: DisplayBuffer,
    controls: ControlSet,
}

impl Shared {
    fn new(controls: ControlSet) -> Self {
        Self {
            buffer: DisplayBuffer::new(),
            controls,
        }
    }

    /// Runs an action; returns the new content if it ran
    fn apply(&mut self, action: &KeypadAction) -> Option<&str> {
        if core::dispatch(&mut self.buffer, self.controls, action) {
            Some(self.buffer.content())
        } else {
            None
        }
    }
}

/// Whether the browser's own handling of the key must be suppressed
///
/// Backspace outside a field navigates back in some browsers.
fn consumes_default(action: &KeypadAction) -> bool {
    matches!(action, KeypadAction::Backspace)
}

/// `document.readyState` once the `load` event has fired
fn is_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}

#[derive(Debug)]
struct Bound {
    doc: WebDocument,
    view: KeypadView<Element>,
    state: RefCell<Shared>,
}

impl Bound {
    fn run(&self, action: &KeypadAction) -> bool {
        let mut state = self.state.borrow_mut();
        match state.apply(action) {
            Some(content) => {
                set_visible_text(&self.view.display, content);
                true
            }
            None => false,
        }
    }

    fn on_click(&self, target: &Element) {
        if let Some(action) = self.view.click_action(&self.doc, target) {
            self.run(&action);
        }
    }

    fn on_keydown(&self, event: &KeyboardEvent) {
        let origin = event.target().and_then(|t| t.dyn_into::<Element>().ok());
        let Some(action) = self
            .view
            .key_action(&self.doc, &event.key(), origin.as_ref())
        else {
            return;
        };
        if self.run(&action) && consumes_default(&action) {
            event.prevent_default();
        }
    }
}

/// Keypad bound to the live page
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserKeypad {
    bound: Rc<Bound>,
    listeners: Vec<Listener>,
}

impl BrowserKeypad {
    /// Binds the keypad to a document
    pub fn attach(document: &web_sys::Document, config: &KeypadConfig) -> Result<Self, JsValue> {
        let doc = WebDocument(document.clone());
        let view =
            KeypadView::resolve(&doc, config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        set_visible_text(&view.display, "");

        let bound = Rc::new(Bound {
            state: RefCell::new(Shared::new(view.controls())),
            doc,
            view,
        });

        let mut targets = bound.view.keys.clone();
        targets.extend(bound.view.clear.clone());
        targets.extend(bound.view.backspace.clone());

        let mut listeners = Vec::with_capacity(targets.len() + 1);
        for target in targets {
            let handler = Rc::clone(&bound);
            let source = target.clone();
            listeners.push(listen(&target, "click", move |_| {
                handler.on_click(&source);
            })?);
        }

        let handler = Rc::clone(&bound);
        listeners.push(listen(document, "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                handler.on_keydown(event);
            }
        })?);

        Ok(Self { bound, listeners })
    }
}

#[wasm_bindgen]
impl BrowserKeypad {
    /// Binds to `window.document` with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<BrowserKeypad, JsValue> {
        Self::attach(&document()?, &KeypadConfig::default())
    }

    /// Binds to `window.document` with a JSON configuration
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<BrowserKeypad, JsValue> {
        let config =
            KeypadConfig::from_json_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::attach(&document()?, &config)
    }

    /// Current display content
    #[wasm_bindgen(getter)]
    pub fn content(&self) -> String {
        self.bound.state.borrow().buffer.content().to_string()
    }

    /// Number of registered listeners
    #[wasm_bindgen(getter, js_name = listenerCount)]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Empties the display, as on a fresh page load
    pub fn reset(&self) {
        self.bound.state.borrow_mut().buffer.reset();
        set_visible_text(&self.bound.view.display, "");
    }
}

fn listen(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<Listener, JsValue> {
    let closure = Listener::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    Ok(closure)
}

fn document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no window.document"))
}

fn bind_page() {
    let bound = document().and_then(|doc| BrowserKeypad::attach(&doc, &KeypadConfig::default()));
    match bound {
        Ok(keypad) => {
            console::log_1(&format!("satpad bound {} listeners", keypad.listener_count()).into());
            KEYPAD.with(|slot| *slot.borrow_mut() = Some(keypad));
        }
        Err(err) => console::error_2(&"satpad: keypad not bound:".into(), &err),
    }
}

/// Current content of the page keypad, once bound
#[wasm_bindgen(js_name = keypadContent)]
pub fn keypad_content() -> Option<String> {
    KEYPAD.with(|slot| slot.borrow().as_ref().map(BrowserKeypad::content))
}

/// Binds the page keypad now if the page has loaded, otherwise on `load`
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if is_loaded(&document()?.ready_state()) {
        bind_page();
        return Ok(());
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let on_load = Closure::<dyn FnMut(Event)>::new(move |_| bind_page());
    window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
    on_load.forget();
    Ok(())
}
