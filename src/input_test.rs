use super::*;

// =============================================================
// Shortcut matching
// =============================================================

#[test]
fn ctrl_shift_t_matches_default() {
    let chord = KeyChord::new("T").with_ctrl().with_shift();
    assert!(Shortcut::default().matches(&chord));
}

#[test]
fn cmd_shift_t_matches_default() {
    let chord = KeyChord::new("T").with_meta().with_shift();
    assert!(Shortcut::default().matches(&chord));
}

#[test]
fn lowercase_key_still_matches() {
    let chord = KeyChord::new("t").with_ctrl().with_shift();
    assert!(Shortcut::default().matches(&chord));
}

#[test]
fn missing_primary_modifier_does_not_match() {
    assert!(!Shortcut::default().matches(&KeyChord::new("T").with_shift()));
}

#[test]
fn missing_shift_does_not_match() {
    assert!(!Shortcut::default().matches(&KeyChord::new("T").with_ctrl()));
}

#[test]
fn other_key_does_not_match() {
    assert!(!Shortcut::default().matches(&KeyChord::new("R").with_ctrl().with_shift()));
}

#[test]
fn custom_shortcut_without_shift() {
    let shortcut = Shortcut { key: "j".to_owned(), shift: false };
    assert!(shortcut.matches(&KeyChord::new("j").with_ctrl()));
    assert!(!shortcut.matches(&KeyChord::new("j").with_ctrl().with_shift()));
}

// =============================================================
// InputOutcome
// =============================================================

#[test]
fn ignored_outcome_is_empty() {
    let outcome = InputOutcome::ignored();
    assert!(outcome.change.is_none());
    assert!(!outcome.prevent_default);
}

#[test]
fn handled_outcome_prevents_default() {
    let change = ThemeChange::new(crate::theme::Theme::Dark, crate::theme::Theme::Light);
    assert!(InputOutcome::handled(change).prevent_default);
    assert!(!InputOutcome::changed(change).prevent_default);
}
