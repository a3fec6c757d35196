//! Reflects a theme onto the document.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stylesheets key off the `data-theme` attribute on `<html>` (and `<body>`
//! for pages that scope rules there) and the `--theme-text-color` custom
//! property. The applier writes both, plus the mobile `theme-color` meta tag
//! and the toggle control's accessibility state.
//!
//! TRADE-OFFS
//! ==========
//! `OverrideMode::Forced` rewrites the inline color of every element in the
//! fixed override set with `!important`. This wins against page styling but
//! is a one-shot sweep: elements inserted later keep their own color until
//! the next `apply`. It is opt-in; the default relies on the custom property.

#[cfg(test)]
#[path = "applier_test.rs"]
mod applier_test;

use leptos::logging::warn;

use crate::config::OverrideMode;
use crate::consts::{
    META_THEME_COLOR_NAME, OVERRIDE_TARGETS, TEXT_COLOR_PROPERTY, TRANSITION_CSS, TRANSITION_STYLE_ID,
};
use crate::host::{DocumentNode, ThemeDocument, ToggleControlState};
use crate::theme::Theme;

pub struct ThemeApplier<D> {
    document: D,
    attribute: String,
    toggle_id: String,
    override_mode: OverrideMode,
    transition_ms: u32,
}

impl<D: ThemeDocument> ThemeApplier<D> {
    pub fn new(document: D, attribute: impl Into<String>, toggle_id: impl Into<String>) -> Self {
        Self {
            document,
            attribute: attribute.into(),
            toggle_id: toggle_id.into(),
            override_mode: OverrideMode::default(),
            transition_ms: crate::consts::DEFAULT_TRANSITION_MS,
        }
    }

    #[must_use]
    pub fn with_override_mode(mut self, mode: OverrideMode) -> Self {
        self.override_mode = mode;
        self
    }

    #[must_use]
    pub fn with_transition_ms(mut self, ms: u32) -> Self {
        self.transition_ms = ms;
        self
    }

    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Write the theme attribute and text colors.
    pub fn apply(&self, theme: Theme) {
        for node in [DocumentNode::Root, DocumentNode::Body] {
            if let Err(e) = self.document.set_attribute(node, &self.attribute, theme.as_str()) {
                warn!("theme attribute write failed: node={node:?} error={e}");
            }
        }

        let color = theme.text_color();
        if let Err(e) = self.document.set_style(DocumentNode::Root, TEXT_COLOR_PROPERTY, color) {
            warn!("theme color property write failed: {e}");
        }
        if let Err(e) = self.document.set_style(DocumentNode::Body, "color", color) {
            warn!("body color write failed: {e}");
        }

        if self.override_mode == OverrideMode::Forced {
            self.force_text_colors(color);
        }
    }

    fn force_text_colors(&self, color: &str) {
        for selector in OVERRIDE_TARGETS {
            if let Err(e) = self.document.force_text_color(selector, color) {
                warn!("forced color sweep failed: selector={} error={e}", selector.css());
            }
        }
    }

    pub fn update_meta_theme_color(&self, theme: Theme) {
        if let Err(e) = self.document.upsert_meta(META_THEME_COLOR_NAME, theme.meta_color()) {
            warn!("theme-color meta update failed: {e}");
        }
    }

    /// Push accessibility state onto the designated toggle control. Returns
    /// `false` when the page has no such control.
    pub fn update_toggle_control(&self, theme: Theme) -> bool {
        let state = ToggleControlState::for_theme(theme);
        match self.document.update_toggle_control(&self.toggle_id, &state) {
            Ok(found) => found,
            Err(e) => {
                warn!("toggle control update failed: id={} error={e}", self.toggle_id);
                false
            }
        }
    }

    /// Enable color transitions for the next `transition_ms`.
    pub fn begin_transition(&self) {
        if let Err(e) = self
            .document
            .inject_transient_style(TRANSITION_STYLE_ID, TRANSITION_CSS, self.transition_ms)
        {
            warn!("transition style injection failed: {e}");
        }
    }

    /// Theme attribute currently on `node`.
    #[must_use]
    pub fn reflected(&self, node: DocumentNode) -> Option<String> {
        self.document.attribute(node, &self.attribute)
    }
}
