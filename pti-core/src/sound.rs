use std::fmt;

/// Named audio cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Click,
    Achievement,
}

impl Cue {
    pub const ALL: [Self; 2] = [Self::Click, Self::Achievement];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Achievement => "achievement",
        }
    }

    /// Asset path relative to the page.
    #[must_use]
    pub const fn asset_path(self) -> &'static str {
        match self {
            Self::Click => "assets/click.mp3",
            Self::Achievement => "assets/achievement.mp3",
        }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session-local mute switch behind the speaker button.
///
/// Cues are audible only when this gate is open *and* the persisted
/// `autoSound` preference is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundGate {
    enabled: bool,
}

impl Default for SoundGate {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SoundGate {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[must_use]
    pub const fn is_enabled(self) -> bool {
        self.enabled
    }

    /// Flip the gate and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    #[must_use]
    pub const fn allows(self, auto_sound: bool) -> bool {
        self.enabled && auto_sound
    }

    /// Glyph for the speaker button.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        if self.enabled { "🔊" } else { "🔇" }
    }
}
