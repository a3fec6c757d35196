//! Input model: the events the controller reacts to and what it asks of the host.
//!
//! Browser events are translated into [`ThemeInput`] by the web bindings so the
//! controller's reaction to each of them stays testable without a DOM.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::theme::ThemeChange;

/// A key press with the modifier keys held at the time.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyChord {
    /// Key name as reported by the browser (e.g. `"T"`).
    pub key: String,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyChord {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), ..Default::default() }
    }

    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    #[must_use]
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

/// Keyboard shortcut that toggles the theme.
///
/// Requires Ctrl or Cmd (meta), so the same binding works on every platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shortcut {
    pub key: String,
    pub shift: bool,
}

impl Default for Shortcut {
    fn default() -> Self {
        Self { key: "T".to_owned(), shift: true }
    }
}

impl Shortcut {
    #[must_use]
    pub fn matches(&self, chord: &KeyChord) -> bool {
        (chord.ctrl || chord.meta) && chord.shift == self.shift && chord.key.eq_ignore_ascii_case(&self.key)
    }
}

/// An inbound event for the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeInput {
    /// Click on the designated toggle control.
    ToggleControlClick,
    /// Any click on the document; `matches_marker` is whether the target
    /// carries the toggle marker attribute.
    DelegatedClick { matches_marker: bool },
    /// Key press anywhere on the document.
    KeyDown(KeyChord),
    /// Storage change reported by another browsing context.
    StorageChanged { key: Option<String>, new_value: Option<String> },
    /// The system color scheme preference changed.
    SystemPreferenceChanged { prefers_dark: bool },
}

/// What happened in response to a [`ThemeInput`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputOutcome {
    /// The transition performed, if any.
    pub change: Option<ThemeChange>,
    /// The host should suppress the browser's default handling.
    pub prevent_default: bool,
}

impl InputOutcome {
    #[must_use]
    pub fn ignored() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn changed(change: ThemeChange) -> Self {
        Self { change: Some(change), prevent_default: false }
    }

    #[must_use]
    pub fn handled(change: ThemeChange) -> Self {
        Self { change: Some(change), prevent_default: true }
    }
}
