//! Configuration module for Bookcase
//!
//! This module handles the persistent UI preferences. Only appearance
//! settings are stored; the catalog itself (books and selected language)
//! lives purely in memory and resets on every start.
//!
//! # App Data Location
//!
//! Preferences are stored in the platform-appropriate location:
//! - **Linux**: `~/.local/share/bookcase/`
//! - **macOS**: `~/Library/Application Support/bookcase/`
//! - **Windows**: `%APPDATA%\bookcase\`
//!
//! # Files
//!
//! - `preferences.json` - Appearance preferences (dark mode, font scale)

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for data directories
pub const APP_ID: &str = "bookcase";

/// Preferences filename
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        CatalogError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            CatalogError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the preferences file
pub fn preferences_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(PREFERENCES_FILE))
}

/// UI preferences that persist across sessions
///
/// Appearance only: the catalog language is part of the in-memory catalog
/// state and always starts as English.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Enable dark mode
    #[serde(default = "default_true")]
    pub dark_mode: bool,

    /// Font scale factor
    #[serde(default = "default_font_scale")]
    pub font_scale: f32,
}

fn default_true() -> bool {
    true
}

fn default_font_scale() -> f32 {
    1.0
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            font_scale: 1.0,
        }
    }
}

impl UiPreferences {
    /// Load preferences from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_json::from_str(&content)
            .map_err(|e| CatalogError::Config(format!("Failed to parse preferences: {}", e)))
    }

    /// Save preferences to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            CatalogError::Serialization(format!("Failed to serialize preferences: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load preferences from the default location
    pub fn load() -> Result<Self> {
        let path = preferences_path().ok_or_else(|| {
            CatalogError::Config("Could not determine preferences path".to_string())
        })?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load preferences, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load preferences, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save preferences to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(&dir.join(PREFERENCES_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences() {
        let prefs = UiPreferences::default();
        assert!(prefs.dark_mode);
        assert_eq!(prefs.font_scale, 1.0);
    }

    #[test]
    fn test_preferences_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);

        let prefs = UiPreferences {
            dark_mode: false,
            font_scale: 1.5,
        };
        prefs.save_to(&path).unwrap();

        let loaded = UiPreferences::load_from(&path).unwrap();
        assert!(!loaded.dark_mode);
        assert_eq!(loaded.font_scale, 1.5);
    }

    #[test]
    fn test_malformed_preferences_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            UiPreferences::load_from(&path),
            Err(CatalogError::Config(_))
        ));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let prefs: UiPreferences = serde_json::from_str("{}").unwrap();
        assert!(prefs.dark_mode);
        assert_eq!(prefs.font_scale, 1.0);
    }
}
