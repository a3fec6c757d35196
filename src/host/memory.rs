//! In-memory host: storage, media queries, and a minimal document model.
//!
//! Backs the test suites, where no browser APIs exist. Each handle shares its state through `Rc<RefCell<_>>`, so clones
//! observe each other's writes the way two references to `localStorage` do.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{DocumentNode, MediaPreference, PreferenceStorage, ThemeDocument, ThemeEventSink, ToggleControlState};
use crate::consts::{DARK_SCHEME_QUERY, Selector, TOGGLE_DARK_CLASS};
use crate::error::ThemeError;
use crate::theme::ThemeChange;

// =============================================================================
// STORAGE
// =============================================================================

#[derive(Debug, Default)]
struct StorageState {
    entries: BTreeMap<String, String>,
    writes: usize,
    unavailable: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<StorageState>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A storage whose every access fails, like `localStorage` in a
    /// sandboxed frame.
    #[must_use]
    pub fn unavailable() -> Self {
        let storage = Self::default();
        storage.inner.borrow_mut().unavailable = true;
        storage
    }

    /// Seed an entry without counting it as a write.
    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.insert_external(key, value);
        self
    }

    /// Write an entry as another browsing context would, bypassing the
    /// write counter.
    pub fn insert_external(&self, key: &str, value: &str) {
        self.inner.borrow_mut().entries.insert(key.to_owned(), value.to_owned());
    }

    #[must_use]
    pub fn entry(&self, key: &str) -> Option<String> {
        self.inner.borrow().entries.get(key).cloned()
    }

    /// Number of `set` calls made through [`PreferenceStorage`].
    #[must_use]
    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        let state = self.inner.borrow();
        if state.unavailable {
            return Err(ThemeError::Unavailable("localStorage"));
        }
        Ok(state.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let mut state = self.inner.borrow_mut();
        if state.unavailable {
            return Err(ThemeError::Unavailable("localStorage"));
        }
        state.entries.insert(key.to_owned(), value.to_owned());
        state.writes += 1;
        Ok(())
    }
}

// =============================================================================
// MEDIA
// =============================================================================

#[derive(Debug, Default)]
struct MediaState {
    matching: BTreeMap<String, bool>,
    unavailable: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryMedia {
    inner: Rc<RefCell<MediaState>>,
}

impl MemoryMedia {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A host without `matchMedia`.
    #[must_use]
    pub fn unavailable() -> Self {
        let media = Self::default();
        media.inner.borrow_mut().unavailable = true;
        media
    }

    #[must_use]
    pub fn with_dark(self, dark: bool) -> Self {
        self.set_prefers_dark(dark);
        self
    }

    pub fn set_prefers_dark(&self, dark: bool) {
        self.set(DARK_SCHEME_QUERY, dark);
    }

    pub fn set(&self, query: &str, matches: bool) {
        self.inner.borrow_mut().matching.insert(query.to_owned(), matches);
    }
}

impl MediaPreference for MemoryMedia {
    fn matches(&self, query: &str) -> Option<bool> {
        let state = self.inner.borrow();
        if state.unavailable {
            return None;
        }
        Some(state.matching.get(query).copied().unwrap_or(false))
    }
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// Inline `color` declaration on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineColor {
    pub value: String,
    pub important: bool,
}

/// A page element, flattened: the model has no tree beyond root and body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub color: Option<InlineColor>,
    /// Text of a nested `.sr-only` child, when the element has one.
    pub sr_text: Option<String>,
}

impl MemoryElement {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self { tag: tag.to_owned(), ..Default::default() }
    }

    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_owned());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_owned());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn with_sr_text(mut self, text: &str) -> Self {
        self.sr_text = Some(text.to_owned());
        self
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn set_class(&mut self, class: &str, present: bool) {
        let has = self.has_class(class);
        if present && !has {
            self.classes.push(class.to_owned());
        } else if !present && has {
            self.classes.retain(|c| c != class);
        }
    }
}

/// Observable state of the in-memory document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDom {
    pub root_attributes: BTreeMap<String, String>,
    pub body_attributes: BTreeMap<String, String>,
    pub root_style: BTreeMap<String, String>,
    pub body_style: BTreeMap<String, String>,
    pub elements: Vec<MemoryElement>,
    /// `(name, content)` of every `<meta>` in the head.
    pub metas: Vec<(String, String)>,
    /// `(event name, detail)` of every dispatched change event.
    pub events: Vec<(String, ThemeChange)>,
    /// `(id, duration_ms)` of every injected transient style.
    pub transient_styles: Vec<(String, u32)>,
}

impl MemoryDom {
    /// Content of every meta tag named `name`.
    #[must_use]
    pub fn meta_contents(&self, name: &str) -> Vec<&str> {
        self.metas
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, content)| content.as_str())
            .collect()
    }

    #[must_use]
    pub fn element_by_id(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.iter().find(|el| el.id.as_deref() == Some(id))
    }

    fn attributes(&self, node: DocumentNode) -> &BTreeMap<String, String> {
        match node {
            DocumentNode::Root => &self.root_attributes,
            DocumentNode::Body => &self.body_attributes,
        }
    }

    fn attributes_mut(&mut self, node: DocumentNode) -> &mut BTreeMap<String, String> {
        match node {
            DocumentNode::Root => &mut self.root_attributes,
            DocumentNode::Body => &mut self.body_attributes,
        }
    }

    fn style_mut(&mut self, node: DocumentNode) -> &mut BTreeMap<String, String> {
        match node {
            DocumentNode::Root => &mut self.root_style,
            DocumentNode::Body => &mut self.body_style,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    inner: Rc<RefCell<MemoryDom>>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element, as page scripts or server markup would.
    pub fn insert(&self, element: MemoryElement) {
        self.inner.borrow_mut().elements.push(element);
    }

    #[must_use]
    pub fn with(self, element: MemoryElement) -> Self {
        self.insert(element);
        self
    }

    /// Copy of the current document state.
    #[must_use]
    pub fn dom(&self) -> MemoryDom {
        self.inner.borrow().clone()
    }

    /// Copy of the current document state without the append-only logs, for
    /// comparing the visible result of two operations.
    #[must_use]
    pub fn visible_state(&self) -> MemoryDom {
        let mut dom = self.dom();
        dom.events.clear();
        dom.transient_styles.clear();
        dom
    }

    #[must_use]
    pub fn events(&self) -> Vec<(String, ThemeChange)> {
        self.inner.borrow().events.clone()
    }
}

impl ThemeDocument for MemoryDocument {
    fn set_attribute(&self, node: DocumentNode, name: &str, value: &str) -> Result<(), ThemeError> {
        self.inner
            .borrow_mut()
            .attributes_mut(node)
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn attribute(&self, node: DocumentNode, name: &str) -> Option<String> {
        self.inner.borrow().attributes(node).get(name).cloned()
    }

    fn set_style(&self, node: DocumentNode, property: &str, value: &str) -> Result<(), ThemeError> {
        self.inner
            .borrow_mut()
            .style_mut(node)
            .insert(property.to_owned(), value.to_owned());
        Ok(())
    }

    fn force_text_color(&self, selector: Selector, color: &str) -> Result<usize, ThemeError> {
        let mut dom = self.inner.borrow_mut();
        let mut touched = 0;
        for element in dom.elements.iter_mut().filter(|el| selector.matches(&el.tag, &el.classes)) {
            element.color = Some(InlineColor { value: color.to_owned(), important: true });
            touched += 1;
        }
        Ok(touched)
    }

    fn upsert_meta(&self, name: &str, content: &str) -> Result<(), ThemeError> {
        let mut dom = self.inner.borrow_mut();
        match dom.metas.iter_mut().find(|(n, _)| n == name) {
            Some(meta) => meta.1 = content.to_owned(),
            None => dom.metas.push((name.to_owned(), content.to_owned())),
        }
        Ok(())
    }

    fn update_toggle_control(&self, id: &str, state: &ToggleControlState) -> Result<bool, ThemeError> {
        let mut dom = self.inner.borrow_mut();
        let Some(control) = dom.elements.iter_mut().find(|el| el.id.as_deref() == Some(id)) else {
            return Ok(false);
        };
        let pressed = if state.pressed { "true" } else { "false" };
        control.attributes.insert("aria-pressed".to_owned(), pressed.to_owned());
        control.attributes.insert("aria-label".to_owned(), state.label.to_owned());
        if control.sr_text.is_some() {
            control.sr_text = Some(state.status_text.clone());
        }
        control.set_class(TOGGLE_DARK_CLASS, state.dark_class);
        Ok(true)
    }

    fn inject_transient_style(&self, id: &str, _css: &str, duration_ms: u32) -> Result<(), ThemeError> {
        self.inner.borrow_mut().transient_styles.push((id.to_owned(), duration_ms));
        Ok(())
    }
}

impl ThemeEventSink for MemoryDocument {
    fn dispatch_theme_change(&self, event_name: &str, change: &ThemeChange) -> Result<(), ThemeError> {
        self.inner.borrow_mut().events.push((event_name.to_owned(), *change));
        Ok(())
    }
}
