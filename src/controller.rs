//! Theme controller: owns the active preference and drives every transition.
//!
//! DESIGN
//! ======
//! One pipeline serves every trigger: persist (explicit choices only), apply
//! to the document, update the toggle control and meta color, then notify.
//! Each call runs to completion before returning, so two transitions never
//! interleave. Triggers differ only in provenance and whether they write
//! storage:
//!
//! | Trigger | Source | Persists |
//! |---------|--------|----------|
//! | `toggle` / `set` / clicks / shortcut | explicit | yes |
//! | storage change from another tab | explicit | no (already stored) |
//! | system preference change | system | no |
//!
//! System changes are ignored once an explicit choice exists, either in
//! storage or in this controller when storage cannot be written.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use leptos::logging::log;
use serde::Serialize;

use crate::applier::ThemeApplier;
use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::events::{ListenerId, ThemeEventBus};
use crate::host::{DocumentNode, MediaPreference, PreferenceStorage, ThemeDocument, ThemeEventSink};
use crate::input::{InputOutcome, ThemeInput};
use crate::store::ThemePreferenceStore;
use crate::theme::{PreferenceSource, Theme, ThemeChange, ThemePreference};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Persist {
    Write,
    Skip,
}

/// Point-in-time view of the theme state across memory, document and storage,
/// with the accessibility media signals stylesheets may also key off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSnapshot {
    pub current: Theme,
    pub source: PreferenceSource,
    pub root_attribute: Option<String>,
    pub body_attribute: Option<String>,
    pub stored: Option<String>,
    pub prefers_reduced_motion: bool,
    pub prefers_high_contrast: bool,
}

pub struct ThemeController<S, M, D> {
    store: ThemePreferenceStore<S, M>,
    applier: ThemeApplier<D>,
    bus: ThemeEventBus<D>,
    config: ThemeConfig,
    preference: ThemePreference,
    initialized: bool,
}

impl<S, M, D> ThemeController<S, M, D>
where
    S: PreferenceStorage,
    M: MediaPreference,
    D: ThemeDocument + ThemeEventSink,
{
    /// Assemble a controller from its parts and resolve the initial
    /// preference. Nothing is written to the document until [`Self::init`].
    pub fn new(
        store: ThemePreferenceStore<S, M>,
        applier: ThemeApplier<D>,
        bus: ThemeEventBus<D>,
        config: ThemeConfig,
    ) -> Self {
        let preference = store.resolve_initial();
        Self { store, applier, bus, config, preference, initialized: false }
    }

    /// Build store, applier and bus over one document handle.
    pub fn from_host(storage: S, media: M, document: D, config: ThemeConfig) -> Self
    where
        D: Clone,
    {
        let store = ThemePreferenceStore::new(storage, media, config.storage_key.clone());
        let applier = ThemeApplier::new(document.clone(), config.attribute.clone(), config.toggle_id.clone())
            .with_override_mode(config.override_mode)
            .with_transition_ms(config.transition_ms);
        let bus = ThemeEventBus::new(document, config.event_name.clone());
        Self::new(store, applier, bus, config)
    }

    /// Reflect the resolved theme onto the document. Does not persist or
    /// notify. May run once per controller.
    pub fn init(&mut self) -> Result<Theme, ThemeError> {
        if self.initialized {
            return Err(ThemeError::AlreadyInitialized);
        }
        self.initialized = true;
        let theme = self.preference.theme;
        self.reflect(theme);
        log!("theme initialized: theme={theme} source={:?}", self.preference.source);
        Ok(theme)
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.preference.theme
    }

    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Flip the theme. The new theme is `change.theme`.
    pub fn toggle(&mut self) -> ThemeChange {
        self.set(self.current().toggled())
    }

    /// Make `theme` the explicit choice, re-applying even if unchanged.
    pub fn set(&mut self, theme: Theme) -> ThemeChange {
        self.transition(ThemePreference::explicit(theme), Persist::Write)
    }

    /// [`Self::set`] from a string; anything but `"light"`/`"dark"` is ignored.
    pub fn set_str(&mut self, raw: &str) -> Option<ThemeChange> {
        Theme::parse(raw).map(|theme| self.set(theme))
    }

    /// Adopt a value written to storage by another browsing context.
    pub fn on_storage_change(&mut self, key: Option<&str>, new_value: Option<&str>) -> Option<ThemeChange> {
        if key != Some(self.store.key()) {
            return None;
        }
        let theme = new_value.and_then(Theme::parse)?;
        Some(self.transition(ThemePreference::explicit(theme), Persist::Skip))
    }

    /// Follow the system color scheme unless the user has chosen explicitly,
    /// in this page or in storage.
    pub fn on_system_preference_change(&mut self, prefers_dark: bool) -> Option<ThemeChange> {
        if self.preference.source == PreferenceSource::Explicit || self.store.has_explicit_preference() {
            return None;
        }
        let theme = Theme::from_dark(prefers_dark);
        Some(self.transition(ThemePreference::system(theme), Persist::Skip))
    }

    pub fn handle_input(&mut self, input: ThemeInput) -> InputOutcome {
        match input {
            ThemeInput::ToggleControlClick => InputOutcome::changed(self.toggle()),
            ThemeInput::DelegatedClick { matches_marker: true } => InputOutcome::handled(self.toggle()),
            ThemeInput::DelegatedClick { matches_marker: false } => InputOutcome::ignored(),
            ThemeInput::KeyDown(chord) => {
                if self.config.shortcut.matches(&chord) {
                    InputOutcome::handled(self.toggle())
                } else {
                    InputOutcome::ignored()
                }
            }
            ThemeInput::StorageChanged { key, new_value } => self
                .on_storage_change(key.as_deref(), new_value.as_deref())
                .map_or_else(InputOutcome::ignored, InputOutcome::changed),
            ThemeInput::SystemPreferenceChanged { prefers_dark } => self
                .on_system_preference_change(prefers_dark)
                .map_or_else(InputOutcome::ignored, InputOutcome::changed),
        }
    }

    pub fn subscribe(&mut self, listener: impl Fn(&ThemeChange) + 'static) -> ListenerId {
        self.bus.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.bus.unsubscribe(id)
    }

    #[must_use]
    pub fn snapshot(&self) -> ThemeSnapshot {
        ThemeSnapshot {
            current: self.preference.theme,
            source: self.preference.source,
            root_attribute: self.applier.reflected(DocumentNode::Root),
            body_attribute: self.applier.reflected(DocumentNode::Body),
            stored: self.store.stored_raw(),
            prefers_reduced_motion: self.store.prefers_reduced_motion(),
            prefers_high_contrast: self.store.prefers_high_contrast(),
        }
    }

    fn transition(&mut self, next: ThemePreference, persist: Persist) -> ThemeChange {
        let previous = self.preference.theme;
        if persist == Persist::Write {
            self.store.persist(next.theme);
        }
        if self.config.smooth_transitions && !self.store.prefers_reduced_motion() {
            self.applier.begin_transition();
        }
        self.preference = next;
        self.reflect(next.theme);
        self.bus.emit(next.theme, previous)
    }

    fn reflect(&self, theme: Theme) {
        self.applier.apply(theme);
        self.applier.update_toggle_control(theme);
        self.applier.update_meta_theme_color(theme);
    }
}
