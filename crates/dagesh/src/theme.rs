//! TOML theme files for highlight colors.
//!
//! The engine treats colors as opaque; this module is where the CLI picks
//! them up. A theme file may set any subset of the fields:
//!
//! ```toml
//! [colors]
//! search = "#ffe08a"
//! current = "#ffb703"
//! user = "#90e0ef"
//! user_alpha = 96
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use dagesh_highlight::{Color, HighlightSettings};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a theme file.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Failed to read the theme file.
    #[error("failed to read theme file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse the theme file as TOML.
    #[error("failed to parse theme file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: toml::de::Error,
    },
}

/// A loaded theme.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// Highlight color assignments.
    pub colors: Colors,
}

/// Color assignments for the three highlight layers.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Colors {
    /// Base color for search matches.
    pub search: Color,
    /// Emphasis color for the current match.
    pub current: Color,
    /// Fallback color for user highlights without a stored color.
    pub user: Color,
    /// Alpha applied to user-highlight colors.
    pub user_alpha: u8,
}

impl Default for Colors {
    fn default() -> Self {
        let defaults = HighlightSettings::default();
        Self {
            search: defaults.search_color,
            current: defaults.current_color,
            user: Color::rgb(0x90, 0xe0, 0xef),
            user_alpha: defaults.user_alpha,
        }
    }
}

impl Theme {
    /// Loads a theme from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let content = fs::read_to_string(path).map_err(|source| ThemeError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ThemeError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The settings handed to the compositor.
    pub fn settings(&self) -> HighlightSettings {
        HighlightSettings {
            search_color: self.colors.search,
            current_color: self.colors.current,
            user_alpha: self.colors.user_alpha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_matches_engine_defaults() {
        let theme = Theme::default();
        assert_eq!(theme.settings(), HighlightSettings::default());
    }

    #[test]
    fn parses_partial_theme() {
        let theme: Theme = toml::from_str("[colors]\nsearch = \"#112233\"\n").unwrap();
        assert_eq!(theme.colors.search, Color::rgb(0x11, 0x22, 0x33));
        // Unset fields keep their defaults.
        assert_eq!(theme.colors.user_alpha, 96);
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(toml::from_str::<Theme>("[colors]\nsparkle = true\n").is_err());
    }

    #[test]
    fn rejects_bad_color() {
        assert!(toml::from_str::<Theme>("[colors]\nsearch = \"gold\"\n").is_err());
    }
}
