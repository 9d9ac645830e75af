//! Theme preference: a single persisted flag.
//!
//! The only state this system persists. Stored as a plain string under the
//! data directory, read once at startup and written on every toggle.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PortfolioResult;

const PREFERENCE_FILE: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Stored/display form of the preference.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Tolerant parse: anything that is not exactly "light" reads as dark,
    /// so a corrupted preference file degrades to the default.
    pub fn parse(value: &str) -> Self {
        if value.trim() == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_light(&self) -> bool {
        *self == Theme::Light
    }
}

/// Reads and writes the theme preference file.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(PREFERENCE_FILE),
        }
    }

    /// Stored preference, or None when nothing was saved yet.
    pub fn load(&self) -> Option<Theme> {
        fs::read_to_string(&self.path)
            .ok()
            .map(|raw| Theme::parse(&raw))
    }

    pub fn save(&self, theme: Theme) -> PortfolioResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, theme.as_str())?;
        tracing::debug!(theme = theme.as_str(), "saved theme preference");
        Ok(())
    }
}
