//! `localStorage`-backed preference store.

use crate::dom;
use pti_core::prefs::decode_stored;
use pti_core::{PreferenceStore, Preferences, PrefsError, STORAGE_KEY};

/// Preference store using the origin's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebPreferenceStore;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error(transparent)]
    Prefs(#[from] PrefsError),
}

impl WebStorageError {
    fn from_js(value: &wasm_bindgen::JsValue) -> Self {
        Self::Storage(dom::js_error_message(value))
    }
}

impl PreferenceStore for WebPreferenceStore {
    type Error = WebStorageError;

    fn load_preferences(&self) -> Result<Option<Preferences>, Self::Error> {
        let storage = dom::local_storage().map_err(|e| WebStorageError::from_js(&e))?;
        let raw = storage
            .get_item(STORAGE_KEY)
            .map_err(|e| WebStorageError::from_js(&e))?;
        Ok(decode_stored(raw.as_deref())?)
    }

    fn save_preferences(&self, prefs: &Preferences) -> Result<(), Self::Error> {
        let encoded = prefs.to_json()?;
        let storage = dom::local_storage().map_err(|e| WebStorageError::from_js(&e))?;
        storage
            .set_item(STORAGE_KEY, &encoded)
            .map_err(|e| WebStorageError::from_js(&e))
    }
}

/// Persist the current control values, logging instead of failing.
pub fn save_preferences(prefs: &Preferences) {
    if let Err(err) = WebPreferenceStore.save_preferences(prefs) {
        log::error!("Failed to save preferences: {err}");
        dom::console_error(&format!("Failed to save preferences: {err}"));
    }
}
