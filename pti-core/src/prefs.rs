//! Persisted preference record and its storage codec.
//!
//! The record is a flat JSON object `{theme, contractMode, autoSound}` kept
//! under a single storage key. Decoding is lenient in the same way the page
//! always was: missing or falsy fields fall back to the markup defaults, but
//! a record that is not JSON at all is rejected so the caller can keep what
//! it already shows.

use crate::PreferenceStore;
use crate::contract::ContractMode;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cell::RefCell;

/// Storage key holding the serialized record.
pub const STORAGE_KEY: &str = "ptiSettings";
pub const DEFAULT_THEME: &str = "neon";
pub const DEFAULT_CONTRACT_MODE: &str = "simple";
pub const DEFAULT_AUTO_SOUND: bool = true;

#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("Preference record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Preference record is null")]
    Null,
}

/// Current values of the three preference controls.
///
/// `theme` and `contract_mode` are kept as raw strings so values this build
/// does not know survive a save/load cycle untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub theme: String,
    pub contract_mode: String,
    pub auto_sound: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            contract_mode: DEFAULT_CONTRACT_MODE.to_string(),
            auto_sound: DEFAULT_AUTO_SOUND,
        }
    }
}

impl Preferences {
    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::from_name(&self.theme)
    }

    #[must_use]
    pub fn contract_mode(&self) -> ContractMode {
        ContractMode::from_value(&self.contract_mode)
    }

    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    #[must_use]
    pub fn with_contract_mode(mut self, mode: impl Into<String>) -> Self {
        self.contract_mode = mode.into();
        self
    }

    #[must_use]
    pub const fn with_auto_sound(mut self, auto_sound: bool) -> Self {
        self.auto_sound = auto_sound;
        self
    }

    /// Serialize for storage.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, PrefsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a stored record.
    ///
    /// Falsy or missing `theme`/`contractMode` fall back to `neon`/`simple`,
    /// and a missing or null `autoSound` falls back to `true`. A JSON value
    /// that is not an object reads as an empty record.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not JSON or is JSON `null`.
    pub fn from_json(raw: &str) -> Result<Self, PrefsError> {
        let value: Value = serde_json::from_str(raw)?;
        if value.is_null() {
            return Err(PrefsError::Null);
        }
        Ok(Self {
            theme: text_or(value.get("theme"), DEFAULT_THEME),
            contract_mode: text_or(value.get("contractMode"), DEFAULT_CONTRACT_MODE),
            auto_sound: match value.get("autoSound") {
                None | Some(Value::Null) => DEFAULT_AUTO_SOUND,
                Some(other) => truthy(other),
            },
        })
    }
}

fn text_or(value: Option<&Value>, fallback: &str) -> String {
    match value {
        Some(Value::String(text)) if !text.is_empty() => text.clone(),
        _ => fallback.to_string(),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        // No f64 means the literal overflowed to infinity
        Value::Number(n) => n.as_f64().is_none_or(|f| f != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Decode whatever the store returned for [`STORAGE_KEY`].
///
/// An absent or empty entry means nothing was saved.
///
/// # Errors
///
/// Returns an error if a non-empty entry cannot be decoded.
pub fn decode_stored(raw: Option<&str>) -> Result<Option<Preferences>, PrefsError> {
    match raw {
        Some(raw) if !raw.is_empty() => Preferences::from_json(raw).map(Some),
        _ => Ok(None),
    }
}

/// Resolve the control values to show at startup.
///
/// A stored record replaces `current`; a missing or unreadable one leaves
/// `current` as it is.
pub fn startup_preferences<S: PreferenceStore>(store: &S, current: Preferences) -> Preferences {
    match store.load_preferences() {
        Ok(Some(prefs)) => prefs,
        Ok(None) => current,
        Err(err) => {
            log::debug!("Ignoring stored preferences: {err}");
            current
        }
    }
}

/// Store backed by a single in-memory slot. Used off the browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    slot: RefCell<Option<String>>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a raw stored value, as if another session had written it.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(raw.into())),
        }
    }

    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    type Error = PrefsError;

    fn load_preferences(&self) -> Result<Option<Preferences>, Self::Error> {
        decode_stored(self.slot.borrow().as_deref())
    }

    fn save_preferences(&self, prefs: &Preferences) -> Result<(), Self::Error> {
        let encoded = prefs.to_json()?;
        *self.slot.borrow_mut() = Some(encoded);
        Ok(())
    }
}
