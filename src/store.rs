//! Theme preference resolution and persistence.
//!
//! A valid stored value always wins; otherwise the system color scheme
//! decides; without either, the theme is light. Storage and media failures
//! are logged and treated as absent, never propagated.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use leptos::logging::warn;

use crate::consts::{HIGH_CONTRAST_QUERY, REDUCED_MOTION_QUERY};
use crate::host::{MediaPreference, PreferenceStorage};
use crate::theme::{Theme, ThemePreference};

pub struct ThemePreferenceStore<S, M> {
    storage: S,
    media: M,
    key: String,
}

impl<S: PreferenceStorage, M: MediaPreference> ThemePreferenceStore<S, M> {
    pub fn new(storage: S, media: M, key: impl Into<String>) -> Self {
        Self { storage, media, key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Resolve the theme for a fresh page session.
    #[must_use]
    pub fn resolve_initial(&self) -> ThemePreference {
        if let Some(theme) = self.stored_theme() {
            return ThemePreference::explicit(theme);
        }
        ThemePreference::system(self.system_theme())
    }

    /// Theme implied by the system color scheme, light when unknown.
    #[must_use]
    pub fn system_theme(&self) -> Theme {
        Theme::from_dark(self.media.prefers_dark().unwrap_or(false))
    }

    pub fn persist(&self, theme: Theme) {
        if let Err(e) = self.storage.set(&self.key, theme.as_str()) {
            warn!("theme persist failed: key={} error={e}", self.key);
        }
    }

    /// Whether a valid stored record exists.
    #[must_use]
    pub fn has_explicit_preference(&self) -> bool {
        self.stored_theme().is_some()
    }

    /// The stored theme, if the record exists and is valid.
    #[must_use]
    pub fn stored_theme(&self) -> Option<Theme> {
        self.stored_raw().as_deref().and_then(Theme::parse)
    }

    /// The raw stored record, valid or not.
    #[must_use]
    pub fn stored_raw(&self) -> Option<String> {
        match self.storage.get(&self.key) {
            Ok(value) => value,
            Err(e) => {
                warn!("theme storage read failed: key={} error={e}", self.key);
                None
            }
        }
    }

    #[must_use]
    pub fn prefers_reduced_motion(&self) -> bool {
        self.media.matches(REDUCED_MOTION_QUERY).unwrap_or(false)
    }

    #[must_use]
    pub fn prefers_high_contrast(&self) -> bool {
        self.media.matches(HIGH_CONTRAST_QUERY).unwrap_or(false)
    }
}
