//! Display and time settings.
//!
//! Settings are persisted to a JSON file so they survive restarts.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the settings file location.
const SETTINGS_PATH_ENV: &str = "STATION_MAP_SETTINGS";

/// Default settings file, relative to the working directory.
const DEFAULT_SETTINGS_FILE: &str = "station_map_settings.json";

/// Errors that can occur while loading or saving settings.
#[derive(Debug, Clone)]
pub enum SettingsError {
    /// The settings file could not be read or written.
    Io(String),
    /// Serialization or deserialization failed.
    Serialization(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

/// User-adjustable settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Hours the simulated time moves per key press or button click.
    pub hour_step: f32,
    /// Take the base hour from the local clock.
    pub follow_local_clock: bool,
    /// Base hour used when not following the local clock.
    pub fixed_hour: f32,
    /// Path line width in points.
    pub path_width: f32,
    /// Station marker radius in points.
    pub station_radius: f32,
    /// Label each path with its distance.
    pub show_distance_labels: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            hour_step: 1.0,
            follow_local_clock: true,
            fixed_hour: 12.0,
            path_width: 3.0,
            station_radius: 5.0,
            show_distance_labels: true,
        }
    }
}

impl AppSettings {
    /// Location of the settings file.
    pub fn default_path() -> PathBuf {
        std::env::var_os(SETTINGS_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    /// Load settings, falling back to defaults if the file is missing or invalid.
    pub fn load() -> Self {
        Self::load_or_default(&Self::default_path())
    }

    /// Load settings from `path`, falling back to defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Failed to load settings: {}", e);
                Self::default()
            }
        }
    }

    /// Save settings, logging instead of failing.
    pub fn save(&self) {
        let path = Self::default_path();
        match self.save_to(&path) {
            Ok(()) => log::info!("Saved settings to {}", path.display()),
            Err(e) => log::warn!("Failed to save settings: {}", e),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        let settings: Self =
            serde_json::from_str(&json).map_err(|e| SettingsError::Serialization(e.to_string()))?;
        Ok(settings.sanitized())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SettingsError::Serialization(e.to_string()))?;
        std::fs::write(path, json).map_err(|e| SettingsError::Io(e.to_string()))
    }

    /// Base hour for the simulated clock.
    pub fn base_hour(&self, clock_hour: f32) -> f32 {
        if self.follow_local_clock {
            clock_hour
        } else {
            self.fixed_hour
        }
    }

    /// Pulls hand-edited values back into usable ranges.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.hour_step.is_finite() && self.hour_step > 0.0) {
            self.hour_step = defaults.hour_step;
        }
        self.hour_step = self.hour_step.min(12.0);
        if !self.fixed_hour.is_finite() {
            self.fixed_hour = defaults.fixed_hour;
        }
        self.fixed_hour = self.fixed_hour.rem_euclid(24.0);
        if !self.path_width.is_finite() {
            self.path_width = defaults.path_width;
        }
        self.path_width = self.path_width.clamp(0.5, 10.0);
        if !self.station_radius.is_finite() {
            self.station_radius = defaults.station_radius;
        }
        self.station_radius = self.station_radius.clamp(1.0, 20.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("station_map_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip");
        let settings = AppSettings {
            hour_step: 0.5,
            follow_local_clock: false,
            fixed_hour: 18.0,
            path_width: 2.0,
            station_radius: 6.0,
            show_distance_labels: false,
        };

        settings.save_to(&path).unwrap();
        let loaded = AppSettings::load_from(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = temp_path("missing");
        assert!(matches!(
            AppSettings::load_from(&path),
            Err(SettingsError::Io(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = temp_path("fallback_missing");
        assert_eq!(AppSettings::load_or_default(&path), AppSettings::default());
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let path = temp_path("fallback_invalid");
        std::fs::write(&path, "[1, 2").unwrap();
        let loaded = AppSettings::load_or_default(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let path = temp_path("invalid");
        std::fs::write(&path, "{ not json").unwrap();
        let result = AppSettings::load_from(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(SettingsError::Serialization(_))));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let path = temp_path("partial");
        std::fs::write(&path, r#"{ "hour_step": 2.0, "path_width": 50.0 }"#).unwrap();
        let loaded = AppSettings::load_from(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.hour_step, 2.0);
        assert_eq!(loaded.path_width, 10.0);
        assert!(loaded.follow_local_clock);
        assert_eq!(loaded.station_radius, AppSettings::default().station_radius);
    }

    #[test]
    fn test_base_hour() {
        let mut settings = AppSettings::default();
        assert_eq!(settings.base_hour(7.25), 7.25);

        settings.follow_local_clock = false;
        settings.fixed_hour = 3.0;
        assert_eq!(settings.base_hour(7.25), 3.0);
    }
}
