//! Theme values, preference provenance, and change payloads.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{DARK_META_COLOR, DARK_TEXT_COLOR, LIGHT_META_COLOR, LIGHT_TEXT_COLOR};

/// Display mode of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse the exact persisted form. Anything but `"light"` or `"dark"`,
    /// including other casings and surrounding whitespace, is rejected.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Content of the `theme-color` meta tag.
    #[must_use]
    pub fn meta_color(self) -> &'static str {
        match self {
            Self::Light => LIGHT_META_COLOR,
            Self::Dark => DARK_META_COLOR,
        }
    }

    /// Page-wide default text color.
    #[must_use]
    pub fn text_color(self) -> &'static str {
        match self {
            Self::Light => LIGHT_TEXT_COLOR,
            Self::Dark => DARK_TEXT_COLOR,
        }
    }

    /// Capitalized name used in screen reader text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the active theme came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceSource {
    /// Chosen by the user, here or in another tab. Persisted.
    Explicit,
    /// Inferred from the system color scheme. Never persisted.
    #[default]
    System,
}

/// The active theme plus its provenance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreference {
    pub theme: Theme,
    pub source: PreferenceSource,
}

impl ThemePreference {
    #[must_use]
    pub fn explicit(theme: Theme) -> Self {
        Self { theme, source: PreferenceSource::Explicit }
    }

    #[must_use]
    pub fn system(theme: Theme) -> Self {
        Self { theme, source: PreferenceSource::System }
    }
}

/// Payload of a theme change notification.
///
/// Serializes as `{"theme": "...", "previousTheme": "..."}`, the detail shape
/// of the DOM event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeChange {
    pub theme: Theme,
    pub previous_theme: Theme,
}

impl ThemeChange {
    #[must_use]
    pub fn new(theme: Theme, previous_theme: Theme) -> Self {
        Self { theme, previous_theme }
    }

    /// Whether the active theme actually changed.
    #[must_use]
    pub fn is_change(&self) -> bool {
        self.theme != self.previous_theme
    }
}
