use std::fmt;

/// Content panels reachable from the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabId {
    #[default]
    Dashboard,
    Contract,
    Settings,
}

impl TabId {
    pub const ALL: [Self; 3] = [Self::Dashboard, Self::Contract, Self::Settings];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Contract => "contract",
            Self::Settings => "settings",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Contract => "Contract",
            Self::Settings => "Settings",
        }
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which tab is active. Holding a single id keeps exactly one tab active and
/// exactly one panel visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabSet {
    active: TabId,
}

impl TabSet {
    #[must_use]
    pub const fn new(active: TabId) -> Self {
        Self { active }
    }

    #[must_use]
    pub const fn active(self) -> TabId {
        self.active
    }

    pub fn select(&mut self, tab: TabId) {
        self.active = tab;
    }

    #[must_use]
    pub fn is_active(self, tab: TabId) -> bool {
        self.active == tab
    }

    /// Every tab paired with its active flag, in display order.
    pub fn states(self) -> impl Iterator<Item = (TabId, bool)> {
        TabId::ALL.into_iter().map(move |tab| (tab, self.is_active(tab)))
    }
}
