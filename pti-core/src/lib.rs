//! Path to Independence core
//!
//! Platform-agnostic state and rules for the Path to Independence dashboard.
//! This crate holds everything that does not need a browser: the demo
//! counters, the preference record and its storage codec, theme palettes,
//! contract texts, audio cue gating and tab selection.

pub mod contract;
pub mod dashboard;
pub mod prefs;
pub mod progress;
pub mod sound;
pub mod status;
pub mod tabs;
pub mod theme;

// Re-export commonly used types
pub use contract::{
    CONTRACT_FILE_NAME, CONTRACT_MIME_TYPE, ContractDownload, ContractMode, contract_text,
};
pub use dashboard::Dashboard;
pub use prefs::{MemoryPreferenceStore, Preferences, PrefsError, STORAGE_KEY, startup_preferences};
pub use progress::{DemoState, Meter, MeterView, ProgressView, format_amount, render_progress};
pub use sound::{Cue, SoundGate};
pub use status::Status;
pub use tabs::{TabId, TabSet};
pub use theme::{Palette, Theme, ThemeCatalog, palette_for};

/// Trait for abstracting where the preference record lives
/// Platform-specific implementations should provide this
pub trait PreferenceStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the stored preference record
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read or the stored
    /// record cannot be decoded.
    fn load_preferences(&self) -> Result<Option<Preferences>, Self::Error>;

    /// Overwrite the stored preference record
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or written.
    fn save_preferences(&self, prefs: &Preferences) -> Result<(), Self::Error>;
}
