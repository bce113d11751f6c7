//! Theme preference, read once at boot and written through on every change

use std::sync::Arc;

use tracing::{debug, warn};

use crate::prefs::store::PreferenceStore;
use crate::{HexatechError, Result};

/// Preference key under which the theme is stored.
pub const THEME_KEY: &str = "hexatech_theme";

/// Color theme for the embedding shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The stored string form
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value; `None` for anything unrecognized
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The other theme
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Loads the theme once at boot and writes every change through to the
/// store immediately. Independent of the rehearsal flow.
pub struct ThemeManager {
    store: Arc<dyn PreferenceStore>,
    current: Theme,
}

impl ThemeManager {
    /// Read the stored theme. A missing key, an unrecognized value or a
    /// store read failure all fall back to the default theme.
    pub fn load(store: Arc<dyn PreferenceStore>) -> Self {
        let current = match store.get(THEME_KEY) {
            Ok(Some(value)) => Theme::parse(&value).unwrap_or_else(|| {
                warn!(value = %value, "unrecognized stored theme, using default");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("failed to read stored theme: {}", e);
                Theme::default()
            }
        };
        debug!(theme = %current, "theme loaded");
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Switch to the given theme and persist it. The in-memory value only
    /// changes if the write succeeded.
    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.store
            .set(THEME_KEY, theme.as_str())
            .map_err(|e| HexatechError::Preference(e.to_string()))?;
        self.current = theme;
        debug!(theme = %theme, "theme changed");
        Ok(())
    }

    /// Flip between light and dark and persist the result.
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.current.toggled();
        self.set(next)?;
        Ok(next)
    }
}
