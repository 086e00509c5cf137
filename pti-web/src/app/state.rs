use pti_core::{Cue, Dashboard, Preferences, Status, TabId};
use std::rc::Rc;
use yew::prelude::*;

/// Actions the input handlers dispatch against the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    Update,
    Reset,
    SelectTab(TabId),
    ToggleSound,
    SetStatus(Status),
    /// Request a cue without touching dashboard state.
    Cue(Cue),
}

/// Dashboard plus the cues requested by the most recent action.
///
/// `cue_tick` advances whenever new cues are queued so an effect can play
/// them once per action even when the same cue repeats.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardModel {
    pub dashboard: Dashboard,
    pub cues: Vec<Cue>,
    pub cue_tick: u64,
}

impl Reducible for DashboardModel {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let cues = match action {
            DashboardAction::Update => next.dashboard.update(),
            DashboardAction::Reset => next.dashboard.reset(),
            DashboardAction::SelectTab(tab) => next.dashboard.select_tab(tab),
            DashboardAction::ToggleSound => {
                next.dashboard.toggle_sound();
                Vec::new()
            }
            DashboardAction::SetStatus(status) => {
                next.dashboard.set_status(status);
                Vec::new()
            }
            DashboardAction::Cue(cue) => vec![cue],
        };
        if !cues.is_empty() {
            next.cues = cues;
            next.cue_tick = next.cue_tick.wrapping_add(1);
        }
        Rc::new(next)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub model: UseReducerHandle<DashboardModel>,
    pub prefs: UseStateHandle<Preferences>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        model: use_reducer(DashboardModel::default),
        prefs: use_state(Preferences::default),
    }
}

impl AppState {
    #[must_use]
    pub fn dashboard(&self) -> &Dashboard {
        &self.model.dashboard
    }

    /// Whether a cue played right now would be heard.
    #[must_use]
    pub fn audible(&self) -> bool {
        self.model.dashboard.audible(self.prefs.auto_sound)
    }
}
