use crate::app::state::{AppState, DashboardAction};
use crate::{clipboard, download, storage, theme};
use crate::clipboard::ClipboardError;
use pti_core::{Cue, Status, TabId};
use yew::prelude::*;

pub fn build_update(state: &AppState) -> Callback<()> {
    let model = state.model.clone();
    Callback::from(move |()| model.dispatch(DashboardAction::Update))
}

pub fn build_reset(state: &AppState) -> Callback<()> {
    let model = state.model.clone();
    Callback::from(move |()| model.dispatch(DashboardAction::Reset))
}

pub fn build_select_tab(state: &AppState) -> Callback<TabId> {
    let model = state.model.clone();
    Callback::from(move |tab: TabId| model.dispatch(DashboardAction::SelectTab(tab)))
}

pub fn build_toggle_sound(state: &AppState) -> Callback<()> {
    let model = state.model.clone();
    Callback::from(move |()| model.dispatch(DashboardAction::ToggleSound))
}

pub fn build_theme_change(state: &AppState) -> Callback<String> {
    let model = state.model.clone();
    let prefs = state.prefs.clone();
    Callback::from(move |name: String| {
        model.dispatch(DashboardAction::Cue(Cue::Click));
        let next = (*prefs).clone().with_theme(name);
        theme::apply_theme(next.theme());
        storage::save_preferences(&next);
        prefs.set(next);
    })
}

pub fn build_contract_mode_change(state: &AppState) -> Callback<String> {
    let model = state.model.clone();
    let prefs = state.prefs.clone();
    Callback::from(move |mode: String| {
        model.dispatch(DashboardAction::Cue(Cue::Click));
        let next = (*prefs).clone().with_contract_mode(mode);
        storage::save_preferences(&next);
        prefs.set(next);
    })
}

pub fn build_auto_sound_change(state: &AppState) -> Callback<bool> {
    let prefs = state.prefs.clone();
    Callback::from(move |checked: bool| {
        prefs.set((*prefs).clone().with_auto_sound(checked));
    })
}

pub fn build_download(state: &AppState) -> Callback<()> {
    let model = state.model.clone();
    let prefs = state.prefs.clone();
    Callback::from(move |()| {
        model.dispatch(DashboardAction::Cue(Cue::Click));
        if let Err(err) = download::download_contract(&prefs.contract_mode) {
            log::error!("Contract download failed: {err}");
        }
    })
}

/// Status line for a finished clipboard write.
pub fn copy_status(result: Result<(), ClipboardError>) -> Status {
    match result {
        Ok(()) => Status::Copied,
        Err(err) => {
            log::warn!("{err}");
            Status::ClipboardBlocked
        }
    }
}

pub fn build_copy(state: &AppState) -> Callback<()> {
    let model = state.model.clone();
    let prefs = state.prefs.clone();
    Callback::from(move |()| {
        model.dispatch(DashboardAction::Cue(Cue::Click));
        let text = prefs.contract_mode().text();
        let model = model.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let status = copy_status(clipboard::write_text(text).await);
            model.dispatch(DashboardAction::SetStatus(status));
        });
    })
}

#[derive(Clone)]
pub struct AppHandlers {
    pub update: Callback<()>,
    pub reset: Callback<()>,
    pub select_tab: Callback<TabId>,
    pub toggle_sound: Callback<()>,
    pub theme_change: Callback<String>,
    pub contract_mode_change: Callback<String>,
    pub auto_sound_change: Callback<bool>,
    pub download: Callback<()>,
    pub copy: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            update: build_update(state),
            reset: build_reset(state),
            select_tab: build_select_tab(state),
            toggle_sound: build_toggle_sound(state),
            theme_change: build_theme_change(state),
            contract_mode_change: build_contract_mode_change(state),
            auto_sound_change: build_auto_sound_change(state),
            download: build_download(state),
            copy: build_copy(state),
        }
    }
}
