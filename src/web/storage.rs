//! `localStorage` as [`PreferenceStorage`].

use leptos::logging::warn;
use web_sys::{Storage, Window};

use super::document::js_error;
use crate::error::ThemeError;
use crate::host::PreferenceStorage;

/// Handle onto the window's `localStorage`.
///
/// Access can be denied (privacy modes, sandboxed frames); the handle then
/// reports every call as unavailable and the controller carries on with an
/// unpersisted theme.
#[derive(Clone)]
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                warn!("localStorage access denied: {e:?}");
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, ThemeError> {
        self.storage.as_ref().ok_or(ThemeError::Unavailable("localStorage"))
    }
}

impl PreferenceStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| ThemeError::Storage(js_error(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(js_error(&e)))
    }
}
