//! Browser integration: the theme manager installed on a real page.
//!
//! SYSTEM CONTEXT
//! ==============
//! A page runs at most one theme manager. [`install`] builds a controller over
//! `localStorage`, `matchMedia` and the live document, reflects the resolved
//! theme, and binds the inbound events (toggle control click, delegated
//! `[data-theme-toggle]` clicks, the keyboard shortcut, `storage` events from
//! other tabs, and color scheme changes). [`uninstall`] removes every
//! listener. The installed controller is the only global binding in the crate
//! and lives in a thread-local slot; nothing is installed as a side effect of
//! loading the module.
//!
//! TRADE-OFFS
//! ==========
//! Outside the browser (`hydrate` disabled) every entry point reports the
//! window as unavailable so server rendering stays deterministic.

#[cfg(test)]
#[path = "web_test.rs"]
mod web_test;

#[cfg(feature = "hydrate")]
mod bindings;
#[cfg(feature = "hydrate")]
mod document;
#[cfg(feature = "hydrate")]
mod exports;
#[cfg(feature = "hydrate")]
mod media;
#[cfg(feature = "hydrate")]
mod storage;

#[cfg(feature = "hydrate")]
pub use document::BrowserDocument;
#[cfg(feature = "hydrate")]
pub use media::MatchMedia;
#[cfg(feature = "hydrate")]
pub use storage::LocalStorage;

use crate::config::ThemeConfig;
use crate::controller::ThemeSnapshot;
use crate::error::ThemeError;
use crate::events::ListenerId;
use crate::theme::{Theme, ThemeChange};

#[cfg(feature = "hydrate")]
use std::cell::RefCell;

#[cfg(feature = "hydrate")]
use leptos::logging::{log, warn};

#[cfg(feature = "hydrate")]
use crate::controller::ThemeController;
#[cfg(feature = "hydrate")]
use crate::shared::SharedController;

/// Controller handle over the browser host.
#[cfg(feature = "hydrate")]
pub type BrowserController = SharedController<LocalStorage, MatchMedia, BrowserDocument>;

#[cfg(feature = "hydrate")]
struct Installation {
    controller: BrowserController,
    _bindings: bindings::Bindings,
}

#[cfg(feature = "hydrate")]
thread_local! {
    static INSTALLED: RefCell<Option<Installation>> = const { RefCell::new(None) };
}

#[cfg(feature = "hydrate")]
fn with_installed<T>(f: impl FnOnce(&BrowserController) -> Result<T, ThemeError>) -> Result<T, ThemeError> {
    INSTALLED.with(|slot| {
        let slot = slot.try_borrow().map_err(|_| ThemeError::Busy)?;
        let installed = slot.as_ref().ok_or(ThemeError::NotInstalled)?;
        f(&installed.controller)
    })
}

/// Install the page's theme manager and return the initial theme.
///
/// Fails with `AlreadyInstalled` if a manager is already running.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn install(config: ThemeConfig) -> Result<Theme, ThemeError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(ThemeError::Unavailable("window"))?;
        let document = window.document().ok_or(ThemeError::Unavailable("document"))?;

        INSTALLED.with(|slot| {
            let mut slot = slot.try_borrow_mut().map_err(|_| ThemeError::Busy)?;
            if slot.is_some() {
                return Err(ThemeError::AlreadyInstalled);
            }

            let storage = LocalStorage::from_window(&window);
            let media = MatchMedia::new(window.clone());
            let host_document = BrowserDocument::new(document.clone());
            let mut controller = ThemeController::from_host(storage, media, host_document, config.clone());
            let theme = controller.init()?;

            let controller = SharedController::new(controller);
            let bindings = bindings::Bindings::attach(&window, &document, &config, &controller)?;
            log!(
                "theme manager installed: theme={theme} key={} listeners={}",
                config.storage_key,
                bindings.len()
            );
            *slot = Some(Installation { controller, _bindings: bindings });

            Ok(theme)
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ThemeError::Unavailable("window"))
    }
}

/// Install with the configuration embedded in the page, if any.
pub fn install_from_page() -> Result<Theme, ThemeError> {
    install(page_config()?)
}

/// Read `<script id="theme-config" type="application/json">`; defaults when
/// the page has none.
pub fn page_config() -> Result<ThemeConfig, ThemeError> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ThemeError::Unavailable("document"))?;
        match document
            .get_element_by_id(crate::consts::CONFIG_SCRIPT_ID)
            .and_then(|el| el.text_content())
        {
            Some(raw) if !raw.trim().is_empty() => ThemeConfig::from_json(&raw),
            _ => Ok(ThemeConfig::default()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ThemeError::Unavailable("document"))
    }
}

/// Remove the installed manager and all of its listeners.
///
/// Returns `false` if nothing was installed.
pub fn uninstall() -> bool {
    #[cfg(feature = "hydrate")]
    {
        INSTALLED.with(|slot| match slot.try_borrow_mut() {
            Ok(mut slot) => {
                let removed = slot.take().is_some();
                if removed {
                    log!("theme manager uninstalled");
                }
                removed
            }
            Err(_) => {
                warn!("theme manager uninstall refused: manager is in use");
                false
            }
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

pub fn current() -> Result<Theme, ThemeError> {
    #[cfg(feature = "hydrate")]
    {
        with_installed(SharedController::current)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ThemeError::Unavailable("window"))
    }
}

pub fn toggle() -> Result<ThemeChange, ThemeError> {
    #[cfg(feature = "hydrate")]
    {
        with_installed(SharedController::toggle)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ThemeError::Unavailable("window"))
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn set(theme: Theme) -> Result<ThemeChange, ThemeError> {
    #[cfg(feature = "hydrate")]
    {
        with_installed(|c| c.set(theme))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ThemeError::Unavailable("window"))
    }
}

/// Set from a string. Invalid values are ignored; the result is the theme
/// active afterwards.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn set_str(raw: &str) -> Result<Theme, ThemeError> {
    #[cfg(feature = "hydrate")]
    {
        with_installed(|c| c.with(|c| c.set_str(raw).map_or_else(|| c.current(), |change| change.theme)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ThemeError::Unavailable("window"))
    }
}

/// Register a Rust listener for theme changes.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn subscribe(listener: impl Fn(&ThemeChange) + 'static) -> Result<ListenerId, ThemeError> {
    #[cfg(feature = "hydrate")]
    {
        with_installed(|c| c.with(|c| c.subscribe(listener)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ThemeError::Unavailable("window"))
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn unsubscribe(id: ListenerId) -> bool {
    #[cfg(feature = "hydrate")]
    {
        match with_installed(|c| c.with(|c| c.unsubscribe(id))) {
            Ok(removed) => removed,
            Err(e) => {
                warn!("theme listener unsubscribe failed: {e}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

pub fn snapshot() -> Result<ThemeSnapshot, ThemeError> {
    #[cfg(feature = "hydrate")]
    {
        with_installed(|c| c.with(|c| c.snapshot()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ThemeError::Unavailable("window"))
    }
}
