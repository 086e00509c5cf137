//! Dashboard state machine.
//!
//! Owns the demo counters, the status line, the active tab and the sound
//! gate. Every user-facing transition returns the cues it asks for; whether
//! they are audible is decided by the caller through [`Dashboard::audible`].

use crate::progress::{DemoState, ProgressView, render_progress};
use crate::sound::{Cue, SoundGate};
use crate::status::Status;
use crate::tabs::{TabId, TabSet};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dashboard {
    demo: DemoState,
    status: Status,
    tabs: TabSet,
    gate: SoundGate,
}

impl Dashboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn demo(&self) -> &DemoState {
        &self.demo
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub const fn tabs(&self) -> TabSet {
        self.tabs
    }

    #[must_use]
    pub const fn gate(&self) -> SoundGate {
        self.gate
    }

    /// Bar widths and labels for the current counters.
    #[must_use]
    pub fn progress(&self) -> ProgressView {
        render_progress(&self.demo)
    }

    /// Recompute the progress view. While savings sit at or above the
    /// threshold this sets the achievement status and requests the
    /// achievement cue on every call.
    pub fn render_progress(&mut self) -> Vec<Cue> {
        if self.progress().achievement {
            self.status = Status::Achievement;
            vec![Cue::Achievement]
        } else {
            Vec::new()
        }
    }

    pub fn update(&mut self) -> Vec<Cue> {
        let mut cues = vec![Cue::Click];
        self.demo.apply_update();
        cues.extend(self.render_progress());
        cues
    }

    pub fn reset(&mut self) -> Vec<Cue> {
        let mut cues = vec![Cue::Click];
        self.demo.reset();
        cues.extend(self.render_progress());
        self.status = Status::Online;
        cues
    }

    pub fn select_tab(&mut self, tab: TabId) -> Vec<Cue> {
        self.tabs.select(tab);
        vec![Cue::Click]
    }

    /// Flip the mute switch and return whether sound is now enabled.
    pub fn toggle_sound(&mut self) -> bool {
        self.gate.toggle()
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    #[must_use]
    pub const fn audible(&self, auto_sound: bool) -> bool {
        self.gate.allows(auto_sound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_requests_click_before_render() {
        let mut dash = Dashboard::new();
        assert_eq!(dash.update(), vec![Cue::Click]);
        assert_eq!(dash.status(), Status::Online);
    }

    #[test]
    fn achievement_refires_on_every_render_past_threshold() {
        let mut dash = Dashboard::new();
        for _ in 0..5 {
            let _ = dash.update();
        }
        // 75 savings: not yet
        assert_eq!(dash.status(), Status::Online);
        assert_eq!(dash.update(), vec![Cue::Click, Cue::Achievement]);
        assert_eq!(dash.status(), Status::Achievement);
        assert_eq!(dash.update(), vec![Cue::Click, Cue::Achievement]);
        assert_eq!(dash.render_progress(), vec![Cue::Achievement]);
    }

    #[test]
    fn reset_restores_online_status() {
        let mut dash = Dashboard::new();
        for _ in 0..8 {
            let _ = dash.update();
        }
        assert_eq!(dash.status(), Status::Achievement);
        assert_eq!(dash.reset(), vec![Cue::Click]);
        assert_eq!(dash.status(), Status::Online);
        assert_eq!(*dash.demo(), DemoState::default());
    }

    #[test]
    fn clipboard_status_is_overwritten_by_next_achievement() {
        let mut dash = Dashboard::new();
        for _ in 0..6 {
            let _ = dash.update();
        }
        dash.set_status(Status::Copied);
        let _ = dash.update();
        assert_eq!(dash.status(), Status::Achievement);
    }

    #[test]
    fn toggle_closes_gate_regardless_of_preference() {
        let mut dash = Dashboard::new();
        assert!(dash.audible(true));
        assert!(!dash.toggle_sound());
        assert!(!dash.audible(true));
        assert!(dash.toggle_sound());
        assert!(!dash.audible(false));
    }

    #[test]
    fn select_tab_moves_active_marker() {
        let mut dash = Dashboard::new();
        assert_eq!(dash.tabs().active(), TabId::Dashboard);
        assert_eq!(dash.select_tab(TabId::Settings), vec![Cue::Click]);
        assert!(dash.tabs().is_active(TabId::Settings));
        assert!(!dash.tabs().is_active(TabId::Dashboard));
    }
}
