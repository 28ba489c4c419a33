//! Game settings and preferences
//!
//! Display-only toggles, read from an optional JSON file. Nothing here
//! changes how the simulation plays.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to read a settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("settings file I/O failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("settings file is not valid JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === HUD ===
    /// Show the controls hint in the top-left corner
    pub show_instructions: bool,
    /// Show how many pins are still standing
    pub show_pins_remaining: bool,
    /// Show FPS counter
    pub show_fps: bool,
    /// Show which turn and roll is being played
    pub show_turn_indicator: bool,

    // === Accessibility ===
    /// High contrast mode
    pub high_contrast: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_instructions: true,
            show_pins_remaining: true,
            show_fps: false,
            show_turn_indicator: true,
            high_contrast: false,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, falling back to defaults on any failure
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Could not load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bowling_lane_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "show_fps": true }"#).unwrap();
        assert!(settings.show_fps);
        assert!(settings.show_instructions);
        assert!(!settings.high_contrast);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Json { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_path("load_from_file");
        let settings = Settings {
            high_contrast: true,
            show_pins_remaining: false,
            ..Default::default()
        };
        std::fs::write(&path, serde_json::to_string(&settings).unwrap()).unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = temp_path("does_not_exist");
        assert!(matches!(
            Settings::load_from(&path),
            Err(SettingsError::Io { .. })
        ));
        assert_eq!(Settings::load_or_default(Some(path.as_path())), Settings::default());
        assert_eq!(Settings::load_or_default(None), Settings::default());
    }
}
