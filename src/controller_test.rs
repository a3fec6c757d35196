use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::config::OverrideMode;
use crate::host::memory::{MemoryDocument, MemoryElement, MemoryMedia, MemoryStorage};
use crate::input::KeyChord;

type MemoryController = ThemeController<MemoryStorage, MemoryMedia, MemoryDocument>;

// =============================================================
// Helpers
// =============================================================

struct Harness {
    storage: MemoryStorage,
    media: MemoryMedia,
    doc: MemoryDocument,
    controller: MemoryController,
}

fn harness_with(storage: MemoryStorage, media: MemoryMedia, config: ThemeConfig) -> Harness {
    let doc = MemoryDocument::new()
        .with(MemoryElement::new("button").with_id("theme-toggle").with_sr_text(""))
        .with(MemoryElement::new("p"));
    let controller = ThemeController::from_host(storage.clone(), media.clone(), doc.clone(), config);
    Harness { storage, media, doc, controller }
}

fn harness(storage: MemoryStorage, media: MemoryMedia) -> Harness {
    harness_with(storage, media, ThemeConfig::default())
}

fn fresh() -> Harness {
    harness(MemoryStorage::new(), MemoryMedia::new())
}

fn root_theme(doc: &MemoryDocument) -> Option<String> {
    doc.dom().root_attributes.get("data-theme").cloned()
}

// =============================================================
// init
// =============================================================

#[test]
fn init_reflects_system_dark_without_persisting() {
    let mut h = harness(MemoryStorage::new(), MemoryMedia::new().with_dark(true));
    assert_eq!(h.controller.init().unwrap(), Theme::Dark);

    let dom = h.doc.dom();
    assert_eq!(dom.root_attributes["data-theme"], "dark");
    assert_eq!(dom.meta_contents("theme-color"), vec!["#0f1419"]);
    assert_eq!(h.storage.writes(), 0);
    assert!(dom.events.is_empty());
    assert_eq!(h.controller.preference().source, PreferenceSource::System);
}

#[test]
fn init_uses_stored_theme() {
    let mut h = harness(MemoryStorage::new().with_entry("theme", "light"), MemoryMedia::new().with_dark(true));
    assert_eq!(h.controller.init().unwrap(), Theme::Light);
    assert_eq!(root_theme(&h.doc).as_deref(), Some("light"));
    assert_eq!(h.controller.preference().source, PreferenceSource::Explicit);
}

#[test]
fn init_twice_is_rejected() {
    let mut h = fresh();
    h.controller.init().unwrap();
    assert!(matches!(h.controller.init(), Err(ThemeError::AlreadyInitialized)));
    assert!(h.controller.is_initialized());
}

#[test]
fn init_updates_toggle_control() {
    let mut h = harness(MemoryStorage::new().with_entry("theme", "dark"), MemoryMedia::new());
    h.controller.init().unwrap();
    let dom = h.doc.dom();
    let control = dom.element_by_id("theme-toggle").unwrap();
    assert_eq!(control.attributes["aria-pressed"], "true");
    assert_eq!(control.sr_text.as_deref(), Some("Current theme: Dark"));
}

// =============================================================
// toggle / set / current
// =============================================================

#[test]
fn toggle_returns_opposite_and_current_follows() {
    let mut h = fresh();
    h.controller.init().unwrap();
    for _ in 0..4 {
        let before = h.controller.current();
        let change = h.controller.toggle();
        assert_eq!(change.theme, before.toggled());
        assert_eq!(change.previous_theme, before);
        assert_eq!(h.controller.current(), before.toggled());
    }
}

#[test]
fn toggle_persists_applies_and_notifies() {
    let mut h = fresh();
    h.controller.init().unwrap();
    h.controller.toggle();

    assert_eq!(h.storage.entry("theme").as_deref(), Some("dark"));
    assert_eq!(root_theme(&h.doc).as_deref(), Some("dark"));
    let dom = h.doc.dom();
    assert_eq!(dom.meta_contents("theme-color"), vec!["#0f1419"]);
    assert_eq!(dom.element_by_id("theme-toggle").unwrap().attributes["aria-label"], "Switch to light theme");
    assert_eq!(
        dom.events,
        vec![("themechange".to_owned(), ThemeChange::new(Theme::Dark, Theme::Light))]
    );
}

#[test]
fn set_dark_writes_storage() {
    let mut h = fresh();
    h.controller.set(Theme::Dark);
    assert_eq!(h.storage.entry("theme").as_deref(), Some("dark"));
}

#[test]
fn set_same_theme_reapplies_and_notifies() {
    let mut h = harness(MemoryStorage::new().with_entry("theme", "dark"), MemoryMedia::new());
    h.controller.init().unwrap();
    let change = h.controller.set(Theme::Dark);
    assert!(!change.is_change());
    assert_eq!(h.doc.events().len(), 1);
    assert_eq!(h.storage.writes(), 1);
}

#[test]
fn set_str_ignores_invalid_values() {
    let mut h = fresh();
    h.controller.init().unwrap();
    for raw in ["", "DARK", "sepia", "null"] {
        assert!(h.controller.set_str(raw).is_none());
    }
    assert_eq!(h.controller.current(), Theme::Light);
    assert_eq!(h.storage.writes(), 0);
    assert!(h.doc.events().is_empty());
}

#[test]
fn set_str_accepts_valid_value() {
    let mut h = fresh();
    let change = h.controller.set_str("dark").unwrap();
    assert_eq!(change.theme, Theme::Dark);
}

#[test]
fn stored_light_clicked_twice_ends_light_with_two_notifications() {
    let mut h = harness(MemoryStorage::new().with_entry("theme", "light"), MemoryMedia::new());
    h.controller.init().unwrap();
    h.controller.handle_input(ThemeInput::ToggleControlClick);
    h.controller.handle_input(ThemeInput::ToggleControlClick);

    assert_eq!(h.controller.current(), Theme::Light);
    let changes: Vec<ThemeChange> = h.doc.events().into_iter().map(|(_, c)| c).collect();
    assert_eq!(
        changes,
        vec![ThemeChange::new(Theme::Dark, Theme::Light), ThemeChange::new(Theme::Light, Theme::Dark)]
    );
}

// =============================================================
// Input bindings
// =============================================================

#[test]
fn toggle_control_click_does_not_prevent_default() {
    let mut h = fresh();
    let outcome = h.controller.handle_input(ThemeInput::ToggleControlClick);
    assert!(outcome.change.is_some());
    assert!(!outcome.prevent_default);
}

#[test]
fn shortcut_toggles_and_prevents_default() {
    let mut h = fresh();
    let outcome = h
        .controller
        .handle_input(ThemeInput::KeyDown(KeyChord::new("T").with_ctrl().with_shift()));
    assert_eq!(outcome.change.map(|c| c.theme), Some(Theme::Dark));
    assert!(outcome.prevent_default);
}

#[test]
fn other_keys_are_ignored() {
    let mut h = fresh();
    let outcome = h.controller.handle_input(ThemeInput::KeyDown(KeyChord::new("T").with_shift()));
    assert_eq!(outcome, InputOutcome::ignored());
    assert_eq!(h.controller.current(), Theme::Light);
}

#[test]
fn delegated_click_on_marker_toggles() {
    let mut h = fresh();
    let outcome = h.controller.handle_input(ThemeInput::DelegatedClick { matches_marker: true });
    assert!(outcome.prevent_default);
    assert_eq!(h.controller.current(), Theme::Dark);
}

#[test]
fn delegated_click_elsewhere_is_ignored() {
    let mut h = fresh();
    let outcome = h.controller.handle_input(ThemeInput::DelegatedClick { matches_marker: false });
    assert_eq!(outcome, InputOutcome::ignored());
    assert!(h.doc.events().is_empty());
}

// =============================================================
// Cross-tab sync
// =============================================================

#[test]
fn storage_change_applies_without_rewriting_storage() {
    let mut h = harness(MemoryStorage::new().with_entry("theme", "dark"), MemoryMedia::new());
    h.controller.init().unwrap();

    h.storage.insert_external("theme", "light");
    let outcome = h.controller.handle_input(ThemeInput::StorageChanged {
        key: Some("theme".to_owned()),
        new_value: Some("light".to_owned()),
    });

    assert_eq!(outcome.change, Some(ThemeChange::new(Theme::Light, Theme::Dark)));
    assert_eq!(h.controller.current(), Theme::Light);
    assert_eq!(root_theme(&h.doc).as_deref(), Some("light"));
    assert_eq!(h.storage.writes(), 0);
}

#[test]
fn storage_change_for_other_key_is_ignored() {
    let mut h = fresh();
    assert!(h.controller.on_storage_change(Some("language"), Some("dark")).is_none());
    assert!(h.controller.on_storage_change(None, None).is_none());
    assert_eq!(h.controller.current(), Theme::Light);
}

#[test]
fn storage_change_with_invalid_or_removed_value_is_ignored() {
    let mut h = fresh();
    assert!(h.controller.on_storage_change(Some("theme"), Some("purple")).is_none());
    assert!(h.controller.on_storage_change(Some("theme"), None).is_none());
    assert!(h.doc.events().is_empty());
}

#[test]
fn storage_change_honors_configured_key() {
    let config = ThemeConfig { storage_key: "tantawy-theme".to_owned(), ..ThemeConfig::default() };
    let mut h = harness_with(MemoryStorage::new(), MemoryMedia::new(), config);
    assert!(h.controller.on_storage_change(Some("theme"), Some("dark")).is_none());
    assert!(h.controller.on_storage_change(Some("tantawy-theme"), Some("dark")).is_some());
}

// =============================================================
// System preference watch
// =============================================================

#[test]
fn system_change_followed_without_explicit_choice() {
    let mut h = fresh();
    h.controller.init().unwrap();

    h.media.set_prefers_dark(true);
    let change = h.controller.on_system_preference_change(true).unwrap();

    assert_eq!(change.theme, Theme::Dark);
    assert_eq!(h.controller.preference().source, PreferenceSource::System);
    assert_eq!(h.storage.writes(), 0);
    assert_eq!(h.storage.entry("theme"), None);

    // Still no explicit choice, so the next change is followed too.
    assert!(h.controller.on_system_preference_change(false).is_some());
    assert_eq!(h.controller.current(), Theme::Light);
}

#[test]
fn system_change_ignored_after_explicit_set() {
    let mut h = fresh();
    h.controller.init().unwrap();
    h.controller.set(Theme::Light);

    let outcome = h
        .controller
        .handle_input(ThemeInput::SystemPreferenceChanged { prefers_dark: true });

    assert_eq!(outcome, InputOutcome::ignored());
    assert_eq!(h.controller.current(), Theme::Light);
}

#[test]
fn system_change_ignored_after_other_tab_choice() {
    let mut h = fresh();
    h.storage.insert_external("theme", "light");
    h.controller.on_storage_change(Some("theme"), Some("light"));
    assert!(h.controller.on_system_preference_change(true).is_none());
}

#[test]
fn system_change_ignored_after_unpersisted_explicit_set() {
    let mut h = harness(MemoryStorage::unavailable(), MemoryMedia::new());
    h.controller.init().unwrap();
    h.controller.set(Theme::Dark);
    assert_eq!(h.storage.entry("theme"), None);

    assert!(h.controller.on_system_preference_change(false).is_none());
    assert_eq!(h.controller.current(), Theme::Dark);
    assert_eq!(root_theme(&h.doc).as_deref(), Some("dark"));
}

// =============================================================
// Transitions, forced overrides, listeners, snapshot
// =============================================================

#[test]
fn transition_style_injected_on_change_but_not_init() {
    let mut h = fresh();
    h.controller.init().unwrap();
    assert!(h.doc.dom().transient_styles.is_empty());
    h.controller.toggle();
    assert_eq!(h.doc.dom().transient_styles.len(), 1);
}

#[test]
fn reduced_motion_skips_transition_style() {
    let mut h = fresh();
    h.media.set("(prefers-reduced-motion: reduce)", true);
    h.controller.toggle();
    assert!(h.doc.dom().transient_styles.is_empty());
}

#[test]
fn disabled_transitions_skip_style() {
    let config = ThemeConfig { smooth_transitions: false, ..ThemeConfig::default() };
    let mut h = harness_with(MemoryStorage::new(), MemoryMedia::new(), config);
    h.controller.toggle();
    assert!(h.doc.dom().transient_styles.is_empty());
}

#[test]
fn forced_mode_recolors_toggle_and_text() {
    let config = ThemeConfig { override_mode: OverrideMode::Forced, ..ThemeConfig::default() };
    let mut h = harness_with(MemoryStorage::new(), MemoryMedia::new(), config);
    h.controller.init().unwrap();
    h.controller.toggle();
    assert!(
        h.doc
            .dom()
            .elements
            .iter()
            .all(|el| el.color.as_ref().is_some_and(|c| c.value == "#ffffff"))
    );
}

#[test]
fn subscribers_receive_changes_until_unsubscribed() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut h = fresh();
    let sink = Rc::clone(&seen);
    let id = h.controller.subscribe(move |c| sink.borrow_mut().push(*c));

    h.controller.toggle();
    assert!(h.controller.unsubscribe(id));
    h.controller.toggle();

    assert_eq!(*seen.borrow(), vec![ThemeChange::new(Theme::Dark, Theme::Light)]);
}

#[test]
fn snapshot_reports_memory_document_and_storage() {
    let mut h = fresh();
    h.controller.init().unwrap();
    h.controller.set(Theme::Dark);

    let snapshot = h.controller.snapshot();
    assert_eq!(
        snapshot,
        ThemeSnapshot {
            current: Theme::Dark,
            source: PreferenceSource::Explicit,
            root_attribute: Some("dark".to_owned()),
            body_attribute: Some("dark".to_owned()),
            stored: Some("dark".to_owned()),
            prefers_reduced_motion: false,
            prefers_high_contrast: false,
        }
    );
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["rootAttribute"], "dark");
}

#[test]
fn snapshot_reports_accessibility_media_signals() {
    let h = fresh();
    h.media.set(crate::consts::HIGH_CONTRAST_QUERY, true);

    let snapshot = h.controller.snapshot();
    assert!(snapshot.prefers_high_contrast);
    assert!(!snapshot.prefers_reduced_motion);
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["prefersHighContrast"], true);
}

#[test]
fn unavailable_storage_still_toggles() {
    let mut h = harness(MemoryStorage::unavailable(), MemoryMedia::unavailable());
    assert_eq!(h.controller.init().unwrap(), Theme::Light);
    assert_eq!(h.controller.toggle().theme, Theme::Dark);
    assert_eq!(root_theme(&h.doc).as_deref(), Some("dark"));
}
