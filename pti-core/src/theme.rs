use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

const DEFAULT_THEME_DATA: &str = include_str!("../../pti-web/static/assets/data/themes.json");

static CATALOG: Lazy<ThemeCatalog> = Lazy::new(ThemeCatalog::load_from_static);

/// Color schemes the theme selector knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Neon,
    Matrix,
    Night,
}

impl Theme {
    /// Resolve a selector value. `matrix` and `night` match exactly; every
    /// other name, unknown ones included, gets the neon palette.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "matrix" => Self::Matrix,
            "night" => Self::Night,
            _ => Self::Neon,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neon => "neon",
            Self::Matrix => "matrix",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six CSS custom properties a theme controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub accent: String,
    pub accent2: String,
    pub bg1: String,
    pub bg2: String,
    pub panel: String,
    pub panel2: String,
}

impl Palette {
    /// Built-in neon palette, used when the catalog has no usable entry.
    #[must_use]
    pub fn neon() -> Self {
        Self {
            accent: "#7C3AED".to_string(),
            accent2: "#22D3EE".to_string(),
            bg1: "#070A12".to_string(),
            bg2: "#0B0F1D".to_string(),
            panel: "#0D1224".to_string(),
            panel2: "#0B0F1D".to_string(),
        }
    }

    /// `(property, value)` pairs in the order they are written to the root.
    #[must_use]
    pub fn properties(&self) -> [(&'static str, &str); 6] {
        [
            ("--accent", self.accent.as_str()),
            ("--accent2", self.accent2.as_str()),
            ("--bg1", self.bg1.as_str()),
            ("--bg2", self.bg2.as_str()),
            ("--panel", self.panel.as_str()),
            ("--panel2", self.panel2.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeEntry {
    pub id: String,
    pub label: String,
    pub palette: Palette,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeCatalog {
    pub themes: Vec<ThemeEntry>,
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self {
            themes: vec![ThemeEntry {
                id: Theme::Neon.as_str().to_string(),
                label: "Neon".to_string(),
                palette: Palette::neon(),
            }],
        }
    }
}

impl ThemeCatalog {
    /// Parse a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a theme catalog.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_THEME_DATA).unwrap_or_else(|err| {
            log::warn!("Failed to parse theme catalog, using built-in palette: {err}");
            Self::default()
        })
    }

    /// Shared catalog parsed once from the embedded data.
    #[must_use]
    pub fn global() -> &'static Self {
        &CATALOG
    }

    /// Palette for a selector value.
    #[must_use]
    pub fn palette(&self, name: &str) -> Palette {
        self.palette_of(Theme::from_name(name))
    }

    #[must_use]
    pub fn palette_of(&self, theme: Theme) -> Palette {
        self.themes
            .iter()
            .find(|entry| entry.id == theme.as_str())
            .map_or_else(Palette::neon, |entry| entry.palette.clone())
    }

    /// `(value, label)` pairs for the theme selector.
    pub fn options(&self) -> impl Iterator<Item = (&str, &str)> {
        self.themes
            .iter()
            .map(|entry| (entry.id.as_str(), entry.label.as_str()))
    }
}

/// Palette for a selector value from the shared catalog.
#[must_use]
pub fn palette_for(name: &str) -> Palette {
    ThemeCatalog::global().palette(name)
}
