//! The live DOM as [`ThemeDocument`] and [`ThemeEventSink`].

use gloo_timers::callback::Timeout;
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, Document, Element, HtmlElement};

use crate::consts::{SR_ONLY_CLASS, Selector, TOGGLE_DARK_CLASS};
use crate::error::ThemeError;
use crate::host::{DocumentNode, ThemeDocument, ThemeEventSink, ToggleControlState};
use crate::theme::ThemeChange;

/// Render a thrown JS value for logs and errors.
pub(super) fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn dom_error(value: JsValue) -> ThemeError {
    ThemeError::Dom(js_error(&value))
}

#[derive(Clone)]
pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, node: DocumentNode) -> Result<Element, ThemeError> {
        match node {
            DocumentNode::Root => self
                .document
                .document_element()
                .ok_or(ThemeError::Unavailable("document element")),
            DocumentNode::Body => self
                .document
                .body()
                .map(Element::from)
                .ok_or(ThemeError::Unavailable("document body")),
        }
    }

    fn html_element(&self, node: DocumentNode) -> Result<HtmlElement, ThemeError> {
        self.element(node)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| ThemeError::Dom(format!("{node:?} is not an HTML element")))
    }

    fn append_to_head(&self, element: &Element) -> Result<(), ThemeError> {
        let head = self.document.head().ok_or(ThemeError::Unavailable("document head"))?;
        head.append_child(element).map_err(dom_error)?;
        Ok(())
    }
}

impl ThemeDocument for BrowserDocument {
    fn set_attribute(&self, node: DocumentNode, name: &str, value: &str) -> Result<(), ThemeError> {
        self.element(node)?.set_attribute(name, value).map_err(dom_error)
    }

    fn attribute(&self, node: DocumentNode, name: &str) -> Option<String> {
        match self.element(node) {
            Ok(element) => element.get_attribute(name),
            Err(_) => None,
        }
    }

    fn set_style(&self, node: DocumentNode, property: &str, value: &str) -> Result<(), ThemeError> {
        self.html_element(node)?
            .style()
            .set_property(property, value)
            .map_err(dom_error)
    }

    fn force_text_color(&self, selector: Selector, color: &str) -> Result<usize, ThemeError> {
        let matches = self.document.query_selector_all(&selector.css()).map_err(dom_error)?;
        let mut touched = 0;
        for index in 0..matches.length() {
            let Some(node) = matches.item(index) else {
                continue;
            };
            // SVG and MathML nodes have no inline style to force.
            if let Some(element) = node.dyn_ref::<HtmlElement>() {
                element
                    .style()
                    .set_property_with_priority("color", color, "important")
                    .map_err(dom_error)?;
                touched += 1;
            }
        }
        Ok(touched)
    }

    fn upsert_meta(&self, name: &str, content: &str) -> Result<(), ThemeError> {
        let existing = self
            .document
            .query_selector(&format!("meta[name=\"{name}\"]"))
            .map_err(dom_error)?;
        let meta = match existing {
            Some(meta) => meta,
            None => {
                let meta = self.document.create_element("meta").map_err(dom_error)?;
                meta.set_attribute("name", name).map_err(dom_error)?;
                self.append_to_head(&meta)?;
                meta
            }
        };
        meta.set_attribute("content", content).map_err(dom_error)
    }

    fn update_toggle_control(&self, id: &str, state: &ToggleControlState) -> Result<bool, ThemeError> {
        let Some(control) = self.document.get_element_by_id(id) else {
            return Ok(false);
        };
        control
            .set_attribute("aria-pressed", if state.pressed { "true" } else { "false" })
            .map_err(dom_error)?;
        control.set_attribute("aria-label", state.label).map_err(dom_error)?;

        let status = control
            .query_selector(&format!(".{SR_ONLY_CLASS}"))
            .map_err(dom_error)?;
        if let Some(status) = status {
            status.set_text_content(Some(&state.status_text));
        }

        control
            .class_list()
            .toggle_with_force(TOGGLE_DARK_CLASS, state.dark_class)
            .map_err(dom_error)?;
        Ok(true)
    }

    fn inject_transient_style(&self, id: &str, css: &str, duration_ms: u32) -> Result<(), ThemeError> {
        // A rapid second toggle replaces the pending style; the first timer
        // then removes an already detached node.
        if let Some(previous) = self.document.get_element_by_id(id) {
            previous.remove();
        }
        let style = self.document.create_element("style").map_err(dom_error)?;
        style.set_id(id);
        style.set_text_content(Some(css));
        self.append_to_head(&style)?;

        Timeout::new(duration_ms, move || style.remove()).forget();
        Ok(())
    }
}

impl ThemeEventSink for BrowserDocument {
    fn dispatch_theme_change(&self, event_name: &str, change: &ThemeChange) -> Result<(), ThemeError> {
        let detail = Object::new();
        Reflect::set(&detail, &JsValue::from_str("theme"), &JsValue::from_str(change.theme.as_str()))
            .map_err(dom_error)?;
        Reflect::set(
            &detail,
            &JsValue::from_str("previousTheme"),
            &JsValue::from_str(change.previous_theme.as_str()),
        )
        .map_err(dom_error)?;

        let init = CustomEventInit::new();
        init.set_detail(&detail);
        let event = CustomEvent::new_with_event_init_dict(event_name, &init).map_err(dom_error)?;
        self.document.dispatch_event(&event).map_err(dom_error)?;
        Ok(())
    }
}
