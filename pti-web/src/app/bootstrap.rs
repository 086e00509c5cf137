use crate::app::state::AppState;
use crate::storage::WebPreferenceStore;
use crate::{audio, theme};
use pti_core::{Preferences, startup_preferences};
use yew::prelude::*;

/// Startup: restore stored preferences and paint the theme.
#[hook]
pub fn use_bootstrap(state: &AppState) {
    let prefs = state.prefs.clone();
    use_effect_with((), move |()| {
        let loaded = startup_preferences(&WebPreferenceStore, Preferences::default());
        theme::apply_theme(loaded.theme());
        prefs.set(loaded);
        || {}
    });
}

/// Play queued cues once per dispatched action.
#[hook]
pub fn use_cue_player(state: &AppState) {
    let cues = state.model.cues.clone();
    let audible = state.audible();
    use_effect_with(state.model.cue_tick, move |tick| {
        if *tick > 0 {
            audio::play_cues(&cues, audible);
        }
        || {}
    });
}
