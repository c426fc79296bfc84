//! Thin `web-sys` glue shared by the browser half of every controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers keep their decisions in pure types; this module is the only
//! place that knows how to find elements, flip classes, write inline styles
//! and hold event listeners. Every DOM call result is routed through
//! [`settle`] so failures are logged instead of dropped.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::FxError;

/// Log a failed DOM call. Returns the value on success.
pub fn settle<T>(result: Result<T, wasm_bindgen::JsValue>, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("{what}: {}", FxError::from(err));
            None
        }
    }
}

pub fn window() -> Result<Window, FxError> {
    web_sys::window().ok_or(FxError::MissingElement("window"))
}

pub fn document() -> Result<Document, FxError> {
    window()?.document().ok_or(FxError::MissingElement("document"))
}

/// All elements matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let Some(list) = settle(root.query_selector_all(selector), selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Like [`query_all`], scoped to descendants of `root`.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    let Some(list) = settle(root.query_selector_all(selector), selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

pub fn as_html(el: &Element) -> Option<&HtmlElement> {
    el.dyn_ref::<HtmlElement>()
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let classes = el.class_list();
    if on {
        settle(classes.add_1(class), "classList.add");
    } else {
        settle(classes.remove_1(class), "classList.remove");
    }
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = as_html(el) {
        settle(html.style().set_property(property, value), property);
    }
}

pub fn style_value(el: &Element, property: &str) -> String {
    as_html(el)
        .and_then(|html| settle(html.style().get_property_value(property), property))
        .unwrap_or_default()
}

/// Whether `target` is `container` or one of its descendants.
pub fn contains(container: &Element, target: Option<&EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_ref::<web_sys::Node>())
        .is_some_and(|node| container.contains(Some(node)))
}

/// An event listener removed from its target when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(target: &EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Self {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        settle(
            target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()),
            event,
        );
        Self { target: target.clone(), event, callback }
    }

    /// Register with `{ passive: true }`.
    pub fn passive(target: &EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Self {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);
        settle(
            target.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            ),
            event,
        );
        Self { target: target.clone(), event, callback }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        settle(
            self.target
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref()),
            self.event,
        );
    }
}
