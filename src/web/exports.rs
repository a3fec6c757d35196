//! JavaScript entry points for pages that are not Leptos apps.
//!
//! ```js
//! import init, { installThemeManager, toggleTheme } from "./themeswitch.js";
//! await init();
//! installThemeManager(JSON.stringify({ storageKey: "tantawy-theme" }));
//! ```

use wasm_bindgen::prelude::*;

use crate::config::ThemeConfig;
use crate::error::ThemeError;

fn to_js(error: ThemeError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Install the theme manager. `config_json` overrides the page's embedded
/// configuration; returns the initial theme.
#[wasm_bindgen(js_name = installThemeManager)]
pub fn install_theme_manager(config_json: Option<String>) -> Result<String, JsValue> {
    console_error_panic_hook::set_once();
    let config = match config_json {
        Some(raw) => ThemeConfig::from_json(&raw).map_err(to_js)?,
        None => super::page_config().map_err(to_js)?,
    };
    let theme = super::install(config).map_err(to_js)?;
    Ok(theme.as_str().to_owned())
}

#[wasm_bindgen(js_name = uninstallThemeManager)]
pub fn uninstall_theme_manager() -> bool {
    super::uninstall()
}

/// Returns the new theme.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Result<String, JsValue> {
    let change = super::toggle().map_err(to_js)?;
    Ok(change.theme.as_str().to_owned())
}

/// Unrecognized values leave the theme unchanged; returns the active theme.
#[wasm_bindgen(js_name = setTheme)]
pub fn set_theme(theme: &str) -> Result<String, JsValue> {
    let theme = super::set_str(theme).map_err(to_js)?;
    Ok(theme.as_str().to_owned())
}

#[wasm_bindgen(js_name = currentTheme)]
pub fn current_theme() -> Result<String, JsValue> {
    let theme = super::current().map_err(to_js)?;
    Ok(theme.as_str().to_owned())
}

/// Diagnostic state as a JSON string.
#[wasm_bindgen(js_name = themeSnapshot)]
pub fn theme_snapshot() -> Result<String, JsValue> {
    let snapshot = super::snapshot().map_err(to_js)?;
    serde_json::to_string(&snapshot).map_err(|e| to_js(e.into()))
}
