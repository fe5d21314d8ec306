//! Optional settings file for the dashboard app.
//!
//! Nothing needs configuring: every field has a default and a missing file is
//! the normal case. The file exists for tuning sizes and timings locally.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// All tunable settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    // Data
    #[serde(default = "default_product_count")]
    pub product_count: usize,

    // Search
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    // Product list
    #[serde(default = "default_list_height")]
    pub list_height: f32,
    #[serde(default = "default_list_row_height")]
    pub list_row_height: f32,

    // Product selector
    #[serde(default = "default_select_height")]
    pub select_height: f32,
    #[serde(default = "default_select_row_height")]
    pub select_row_height: f32,

    // Window
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

fn default_product_count() -> usize {
    25_000
}

fn default_search_debounce_ms() -> u64 {
    1000
}

fn default_list_height() -> f32 {
    500.0
}

fn default_list_row_height() -> f32 {
    67.0
}

fn default_select_height() -> f32 {
    300.0
}

fn default_select_row_height() -> f32 {
    40.0
}

fn default_window_width() -> f32 {
    1280.0
}

fn default_window_height() -> f32 {
    820.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            product_count: default_product_count(),
            search_debounce_ms: default_search_debounce_ms(),
            list_height: default_list_height(),
            list_row_height: default_list_row_height(),
            select_height: default_select_height(),
            select_row_height: default_select_row_height(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl Settings {
    /// Get the path to the settings file
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("product-dashboard");
            p.push("settings.json");
            p
        })
    }

    /// Load settings from disk, returning defaults if file doesn't exist or is invalid
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::warn!("Could not determine config directory, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(settings) => {
                    tracing::info!(path = %path.display(), "Loaded settings");
                    settings
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to parse settings file, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist yet, that's fine
                Self::default()
            }
        }
    }

    fn from_json(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str(contents)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.product_count, 25_000);
        assert_eq!(s.search_debounce(), Duration::from_millis(1000));
        assert_eq!(s.list_height, 500.0);
        assert_eq!(s.list_row_height, 67.0);
        assert_eq!(s.select_height, 300.0);
        assert_eq!(s.select_row_height, 40.0);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let s = Settings::from_json(r#"{"product_count": 10, "search_debounce_ms": 250}"#).unwrap();
        assert_eq!(s.product_count, 10);
        assert_eq!(s.search_debounce_ms, 250);
        assert_eq!(s.list_row_height, 67.0);
        assert_eq!(s.window_width, 1280.0);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json("{not json").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::env::temp_dir().join("product-dashboard-missing-settings-file.json");
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "product-dashboard-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"list_height": 320.0}"#).unwrap();
        let s = Settings::load_from(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(s.list_height, 320.0);
        assert_eq!(s.product_count, 25_000);
    }
}
