//! Thin helpers over `web-sys` DOM calls.
//!
//! Lookups that fail (missing element, invalid selector) come back empty so
//! callers can treat them as "feature not present on this page".

use shared::RenderSink;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, HtmlElement, NodeList};

// ===== QUERIES =====

pub trait QueryRoot {
    fn select_all(&self, selector: &str) -> Vec<Element>;
    fn select(&self, selector: &str) -> Option<Element>;
}

impl QueryRoot for Document {
    fn select_all(&self, selector: &str) -> Vec<Element> {
        collect_elements(self.query_selector_all(selector), selector)
    }

    fn select(&self, selector: &str) -> Option<Element> {
        first_element(self.query_selector(selector), selector)
    }
}

impl QueryRoot for Element {
    fn select_all(&self, selector: &str) -> Vec<Element> {
        collect_elements(self.query_selector_all(selector), selector)
    }

    fn select(&self, selector: &str) -> Option<Element> {
        first_element(self.query_selector(selector), selector)
    }
}

fn collect_elements(list: Result<NodeList, wasm_bindgen::JsValue>, selector: &str) -> Vec<Element> {
    match list {
        Ok(list) => (0..list.length())
            .filter_map(|index| list.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(error) => {
            zoon::eprintln!("[Portfolio] Invalid selector '{}': {:?}", selector, error);
            Vec::new()
        }
    }
}

fn first_element(
    element: Result<Option<Element>, wasm_bindgen::JsValue>,
    selector: &str,
) -> Option<Element> {
    element
        .map_err(|error| {
            zoon::eprintln!("[Portfolio] Invalid selector '{}': {:?}", selector, error);
        })
        .ok()
        .flatten()
}

// ===== MUTATIONS =====

/// Set an inline style property, or remove it when `value` is `None`.
pub fn set_style(element: &Element, property: &str, value: Option<&str>) {
    let Some(html_element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = html_element.style();
    let result = match value {
        Some(value) => style.set_property(property, value),
        None => style.remove_property(property).map(|_| ()),
    };
    if let Err(error) = result {
        zoon::eprintln!("[Portfolio] Failed to set style '{}': {:?}", property, error);
    }
}

pub fn add_class(element: &Element, class_name: &str) {
    if let Err(error) = element.class_list().add_1(class_name) {
        zoon::eprintln!("[Portfolio] Failed to add class '{}': {:?}", class_name, error);
    }
}

/// Attach a listener for the lifetime of the page.
pub fn listen(target: &EventTarget, event_name: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(error) =
        target.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())
    {
        zoon::eprintln!("[Portfolio] Failed to listen for '{}': {:?}", event_name, error);
        return;
    }
    closure.forget();
}

// ===== SINKS =====

/// Metric value element: counters write straight into its text content.
pub struct ElementText {
    element: Element,
}

impl ElementText {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl RenderSink for ElementText {
    fn set_text(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}
