//! Host capabilities the theme core depends on.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller never touches `web_sys` directly. It reads and writes the
//! preference through [`PreferenceStorage`], queries media features through
//! [`MediaPreference`], and mutates the page through [`ThemeDocument`] and
//! [`ThemeEventSink`]. The browser adapter lives in `crate::web`; the
//! in-memory host in [`memory`] backs the tests.
//!
//! Implementations are cheap handles (`Clone`) onto shared state, so one host
//! can be handed to the store, the applier and the event bus at once.

pub mod memory;

use crate::consts::{DARK_SCHEME_QUERY, Selector};
use crate::error::ThemeError;
use crate::theme::{Theme, ThemeChange};

/// Durable key-value storage surviving page reloads.
pub trait PreferenceStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// Media feature queries such as `(prefers-color-scheme: dark)`.
pub trait MediaPreference {
    /// Whether `query` currently matches, or `None` when media queries are
    /// not available on this host.
    fn matches(&self, query: &str) -> Option<bool>;

    fn prefers_dark(&self) -> Option<bool> {
        self.matches(DARK_SCHEME_QUERY)
    }
}

/// Elements the applier writes theme attributes and styles onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentNode {
    /// `<html>`
    Root,
    /// `<body>`
    Body,
}

/// Accessibility state pushed onto the designated toggle control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleControlState {
    /// `aria-pressed`
    pub pressed: bool,
    /// `aria-label`
    pub label: &'static str,
    /// Text of the screen-reader-only child, if the control has one.
    pub status_text: String,
    /// Whether the `dark-mode` class is present.
    pub dark_class: bool,
}

impl ToggleControlState {
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        Self {
            pressed: theme.is_dark(),
            label: if theme.is_dark() { "Switch to light theme" } else { "Switch to dark theme" },
            status_text: format!("Current theme: {}", theme.label()),
            dark_class: theme.is_dark(),
        }
    }
}

/// Document mutations needed to reflect a theme.
pub trait ThemeDocument {
    fn set_attribute(&self, node: DocumentNode, name: &str, value: &str) -> Result<(), ThemeError>;

    fn attribute(&self, node: DocumentNode, name: &str) -> Option<String>;

    /// Set an inline style property (including custom properties).
    fn set_style(&self, node: DocumentNode, property: &str, value: &str) -> Result<(), ThemeError>;

    /// Set `color: <color> !important` inline on every element currently
    /// matching `selector`. Returns the number of elements touched.
    fn force_text_color(&self, selector: Selector, color: &str) -> Result<usize, ThemeError>;

    /// Ensure exactly one `<meta name=...>` exists and set its content.
    fn upsert_meta(&self, name: &str, content: &str) -> Result<(), ThemeError>;

    /// Update the control with element id `id`. Returns `false` when no such
    /// element exists.
    fn update_toggle_control(&self, id: &str, state: &ToggleControlState) -> Result<bool, ThemeError>;

    /// Inject a `<style>` that removes itself after `duration_ms`.
    fn inject_transient_style(&self, id: &str, css: &str, duration_ms: u32) -> Result<(), ThemeError>;
}

/// Outbound theme change events.
pub trait ThemeEventSink {
    fn dispatch_theme_change(&self, event_name: &str, change: &ThemeChange) -> Result<(), ThemeError>;
}
