//! Small DOM helpers shared by the page adapters

use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

pub(crate) fn warn(message: &str) {
    tracing::warn!("{}", message);
}

/// Log a failed DOM call instead of propagating it out of an event handler
pub(crate) fn warn_on_err<T>(result: Result<T, JsValue>, action: &str) {
    if let Err(e) = result {
        warn(&format!("{} failed: {:?}", action, e));
    }
}

pub(crate) fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

pub(crate) fn by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

/// Look up a required element, typed
pub(crate) fn require<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    by_id(document, id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element #{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element #{} has an unexpected type", id)))
}

pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    warn_on_err(element.class_list().toggle_with_force(class, on), "class toggle");
}

pub(crate) fn offset_height(element: Option<Element>) -> f64 {
    element
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        .map(|e| f64::from(e.offset_height()))
        .unwrap_or(0.0)
}

/// Attach a handler for the lifetime of the page
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners are never removed
    closure.forget();
    Ok(())
}
