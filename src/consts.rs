//! Fixed names, colors, and selectors shared across the crate.

// ── Document contract ───────────────────────────────────────────

/// Storage key holding `"light"` or `"dark"`.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Attribute carrying the active theme on `<html>` and `<body>`.
pub const DEFAULT_THEME_ATTRIBUTE: &str = "data-theme";

/// Element id of the designated toggle control.
pub const DEFAULT_TOGGLE_ID: &str = "theme-toggle";

/// Marker attribute for delegated toggle controls.
pub const DEFAULT_TOGGLE_MARKER: &str = "data-theme-toggle";

/// Name of the change event dispatched on the document.
pub const DEFAULT_EVENT_NAME: &str = "themechange";

/// `name` of the mobile browser theme-color meta tag.
pub const META_THEME_COLOR_NAME: &str = "theme-color";

/// Element id of the optional JSON configuration script.
pub const CONFIG_SCRIPT_ID: &str = "theme-config";

// ── Media queries ───────────────────────────────────────────────

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const HIGH_CONTRAST_QUERY: &str = "(prefers-contrast: high)";

// ── Colors ──────────────────────────────────────────────────────

pub const DARK_META_COLOR: &str = "#0f1419";
pub const LIGHT_META_COLOR: &str = "#ffffff";

pub const DARK_TEXT_COLOR: &str = "#ffffff";
pub const LIGHT_TEXT_COLOR: &str = "#212529";

/// Custom property set on the root so stylesheets can follow the theme.
pub const TEXT_COLOR_PROPERTY: &str = "--theme-text-color";

// ── Toggle control ──────────────────────────────────────────────

/// Class toggled on the designated control while dark is active.
pub const TOGGLE_DARK_CLASS: &str = "dark-mode";

/// Class of the screen-reader-only label inside the control.
pub const SR_ONLY_CLASS: &str = "sr-only";

// ── Transitions ─────────────────────────────────────────────────

/// How long the transient transition style stays injected, in ms.
pub const DEFAULT_TRANSITION_MS: u32 = 300;

pub const TRANSITION_STYLE_ID: &str = "theme-transition";

pub const TRANSITION_CSS: &str = "*, *::before, *::after { transition: background-color 0.3s ease, color 0.3s ease, border-color 0.3s ease !important; }";

// ── Forced override targets ─────────────────────────────────────

/// A tag or class selector from the forced override set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Tag(&'static str),
    Class(&'static str),
}

impl Selector {
    /// CSS form, suitable for `querySelectorAll`.
    #[must_use]
    pub fn css(self) -> String {
        match self {
            Self::Tag(tag) => tag.to_owned(),
            Self::Class(class) => format!(".{class}"),
        }
    }

    /// Whether an element with `tag` and `classes` matches this selector.
    #[must_use]
    pub fn matches(self, tag: &str, classes: &[String]) -> bool {
        match self {
            Self::Tag(t) => t.eq_ignore_ascii_case(tag),
            Self::Class(c) => classes.iter().any(|class| class == c),
        }
    }
}

/// Elements whose inline text color is forced in `OverrideMode::Forced`.
pub const OVERRIDE_TARGETS: [Selector; 17] = [
    Selector::Tag("p"),
    Selector::Tag("h1"),
    Selector::Tag("h2"),
    Selector::Tag("h3"),
    Selector::Tag("h4"),
    Selector::Tag("h5"),
    Selector::Tag("h6"),
    Selector::Tag("span"),
    Selector::Tag("div"),
    Selector::Tag("a"),
    Selector::Tag("button"),
    Selector::Tag("label"),
    Selector::Tag("td"),
    Selector::Tag("th"),
    Selector::Tag("li"),
    Selector::Class("nav-link"),
    Selector::Class("navbar-brand"),
];
