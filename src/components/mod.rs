//! Leptos UI for the theme manager.

pub mod theme_toggle;

pub use theme_toggle::ThemeToggle;
