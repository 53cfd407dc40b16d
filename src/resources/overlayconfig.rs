//! Overlay configuration resource.
//!
//! Manages extension settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [overlays]
//! enabled = true
//! data_path = ./data.json
//! property_key = CustomMapOverlay
//! persist_default_data = false
//!
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//! ```
//!
//! The `[window]` section is only read by the demo host binary.

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::error::OverlayError;

/// Default safe values for startup
const DEFAULT_ENABLED: bool = true;
const DEFAULT_DATA_PATH: &str = "./data.json";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_PERSIST_DEFAULT_DATA: bool = false;
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;

/// Name of the map property whose value selects an overlay rule.
pub const DEFAULT_PROPERTY_KEY: &str = "CustomMapOverlay";

/// Overlay configuration resource.
///
/// When `enabled` is false every overlay observer and the render pass are
/// no-ops: no selection, animation, or geometry state is updated.
///
/// The `window_*` and `target_fps` fields are read by the demo host only;
/// the overlay systems ignore them.
#[derive(Resource, Debug, Clone)]
pub struct OverlayConfig {
    /// Master switch for all overlay behavior.
    pub enabled: bool,
    /// Path to the JSON overlay rule file.
    pub data_path: PathBuf,
    /// Map property key read from each location.
    pub property_key: String,
    /// Write the built-in rule set when no data file exists.
    pub persist_default_data: bool,
    /// Demo host window width in pixels.
    pub window_width: u32,
    /// Demo host window height in pixels.
    pub window_height: u32,
    /// Demo host ticks per second.
    pub target_fps: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            enabled: DEFAULT_ENABLED,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            property_key: DEFAULT_PROPERTY_KEY.to_string(),
            persist_default_data: DEFAULT_PERSIST_DEFAULT_DATA,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), OverlayError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| OverlayError::Config(format!("Failed to load config file: {}", e)))?;

        // [overlays] section
        if let Some(enabled) = config.getbool("overlays", "enabled").ok().flatten() {
            self.enabled = enabled;
        }
        if let Some(path) = config.get("overlays", "data_path") {
            self.data_path = PathBuf::from(path);
        }
        if let Some(key) = config.get("overlays", "property_key") {
            if !key.is_empty() {
                self.property_key = key;
            }
        }
        if let Some(persist) = config
            .getbool("overlays", "persist_default_data")
            .ok()
            .flatten()
        {
            self.persist_default_data = persist;
        }

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            if let Ok(width) = u32::try_from(width) {
                self.window_width = width;
            }
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            if let Ok(height) = u32::try_from(height) {
                self.window_height = height;
            }
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            if let Ok(fps) = u32::try_from(fps) {
                self.target_fps = fps;
            }
        }

        info!(
            "Loaded config: enabled={}, data={:?}, key={}, persist_default={}, window {}x{} @{}",
            self.enabled,
            self.data_path,
            self.property_key,
            self.persist_default_data,
            self.window_width,
            self.window_height,
            self.target_fps
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), OverlayError> {
        let mut config = Ini::new();

        // [overlays] section
        config.set("overlays", "enabled", Some(self.enabled.to_string()));
        config.set(
            "overlays",
            "data_path",
            Some(self.data_path.to_string_lossy().into_owned()),
        );
        config.set("overlays", "property_key", Some(self.property_key.clone()));
        config.set(
            "overlays",
            "persist_default_data",
            Some(self.persist_default_data.to_string()),
        );

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| OverlayError::Io {
                path: self.config_path.clone(),
                source: e,
            })?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the demo window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = OverlayConfig::new();
        assert!(config.enabled);
        assert_eq!(config.property_key, DEFAULT_PROPERTY_KEY);
        assert_eq!(config.data_path, PathBuf::from("./data.json"));
        assert!(!config.persist_default_data);
    }

    #[test]
    fn test_load_missing_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = OverlayConfig::with_path(dir.path().join("nope.ini"));
        assert!(config.load_from_file().is_err());
        assert!(config.enabled);
        assert_eq!(config.window_size(), (1280, 720));
    }

    #[test]
    fn test_load_overrides_present_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[overlays]\nenabled = false\nproperty_key = Weather\n").unwrap();
        writeln!(file, "[window]\nwidth = 800\n").unwrap();
        drop(file);

        let mut config = OverlayConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert!(!config.enabled);
        assert_eq!(config.property_key, "Weather");
        assert_eq!(config.window_size(), (800, 720));
        assert_eq!(config.data_path, PathBuf::from("./data.json"));
    }

    #[test]
    fn test_out_of_range_window_values_keep_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[window]\nwidth = 5000000000\ntarget_fps = 144\n").unwrap();

        let mut config = OverlayConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.target_fps, 144);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        let mut config = OverlayConfig::with_path(&path);
        config.enabled = false;
        config.persist_default_data = true;
        config.target_fps = 30;
        config.save_to_file().unwrap();

        let mut loaded = OverlayConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert!(!loaded.enabled);
        assert!(loaded.persist_default_data);
        assert_eq!(loaded.target_fps, 30);
    }
}
