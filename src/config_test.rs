use super::*;

#[test]
fn default_matches_page_contract() {
    let config = ThemeConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.attribute, "data-theme");
    assert_eq!(config.toggle_id, "theme-toggle");
    assert_eq!(config.toggle_marker, "data-theme-toggle");
    assert_eq!(config.event_name, "themechange");
    assert_eq!(config.override_mode, OverrideMode::Variables);
    assert!(config.smooth_transitions);
    assert_eq!(config.transition_ms, 300);
}

#[test]
fn empty_object_yields_defaults() {
    let config = ThemeConfig::from_json("{}").unwrap();
    assert_eq!(config, ThemeConfig::default());
}

#[test]
fn partial_json_overrides_only_given_fields() {
    let config = ThemeConfig::from_json(
        r#"{ "storageKey": "tantawy-theme", "overrideMode": "forced", "shortcut": { "key": "D" } }"#,
    )
    .unwrap();
    assert_eq!(config.storage_key, "tantawy-theme");
    assert_eq!(config.override_mode, OverrideMode::Forced);
    assert_eq!(config.shortcut.key, "D");
    assert!(config.shortcut.shift);
    assert_eq!(config.attribute, "data-theme");
}

#[test]
fn malformed_json_is_rejected() {
    let err = ThemeConfig::from_json("{ storageKey: ").unwrap_err();
    assert!(matches!(err, ThemeError::Json(_)));
    assert!(err.to_string().starts_with("invalid json"));
}

#[test]
fn unknown_override_mode_is_rejected() {
    assert!(ThemeConfig::from_json(r#"{ "overrideMode": "brutal" }"#).is_err());
}

#[test]
fn marker_selector_wraps_attribute() {
    assert_eq!(ThemeConfig::default().marker_selector(), "[data-theme-toggle]");
}
