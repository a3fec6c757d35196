#![cfg(not(feature = "hydrate"))]

use super::*;

// =============================================================================
// Without a browser window
// =============================================================================

#[test]
fn install_reports_missing_window() {
    let err = install(ThemeConfig::default()).unwrap_err();
    assert!(matches!(err, ThemeError::Unavailable("window")));
    assert_eq!(err.to_string(), "window is not available");
}

#[test]
fn install_from_page_reports_missing_document() {
    assert!(matches!(install_from_page(), Err(ThemeError::Unavailable("document"))));
}

#[test]
fn operations_fail_without_an_installed_manager() {
    assert!(current().is_err());
    assert!(toggle().is_err());
    assert!(set(Theme::Dark).is_err());
    assert!(set_str("dark").is_err());
    assert!(snapshot().is_err());
    assert!(subscribe(|_| {}).is_err());
}

#[test]
fn uninstall_and_unsubscribe_are_noops() {
    assert!(!uninstall());
    let id = crate::events::ThemeEventBus::new(crate::host::memory::MemoryDocument::new(), "themechange")
        .subscribe(|_| {});
    assert!(!unsubscribe(id));
}
