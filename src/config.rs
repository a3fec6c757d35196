//! Runtime configuration for the theme controller and its browser bindings.
//!
//! DESIGN
//! ======
//! Every field has a default matching the page contract, so an empty JSON
//! object (or no config at all) yields a working setup. Pages override only
//! what they need, typically the storage key.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_EVENT_NAME, DEFAULT_STORAGE_KEY, DEFAULT_THEME_ATTRIBUTE, DEFAULT_TOGGLE_ID, DEFAULT_TOGGLE_MARKER,
    DEFAULT_TRANSITION_MS,
};
use crate::error::ThemeError;
use crate::input::Shortcut;

/// How text colors follow the theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverrideMode {
    /// Publish the text color as a root custom property for stylesheets.
    #[default]
    Variables,
    /// Additionally rewrite the inline color of every element matching the
    /// fixed override selector set, with `!important`.
    Forced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub storage_key: String,
    pub attribute: String,
    pub toggle_id: String,
    pub toggle_marker: String,
    pub event_name: String,
    pub override_mode: OverrideMode,
    pub smooth_transitions: bool,
    pub transition_ms: u32,
    pub shortcut: Shortcut,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            attribute: DEFAULT_THEME_ATTRIBUTE.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
            toggle_marker: DEFAULT_TOGGLE_MARKER.to_owned(),
            event_name: DEFAULT_EVENT_NAME.to_owned(),
            override_mode: OverrideMode::Variables,
            smooth_transitions: true,
            transition_ms: DEFAULT_TRANSITION_MS,
            shortcut: Shortcut::default(),
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON config. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Attribute selector for delegated toggle controls, e.g. `[data-theme-toggle]`.
    #[must_use]
    pub fn marker_selector(&self) -> String {
        format!("[{}]", self.toggle_marker)
    }
}
