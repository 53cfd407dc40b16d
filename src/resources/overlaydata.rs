//! Overlay rule data file.
//!
//! [`OverlayData`] mirrors the JSON document read once at startup. It is the
//! raw, unvalidated form of the rules; [`RuleStore::validate`] turns it into
//! the immutable store used at runtime.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "OverlayProperties": [
//!     {
//!       "PropertyName": "Cave",
//!       "ImagePath": "ov/lava",
//!       "Animation": { "NumberOfFrames": 3, "FrameDuration": 10 }
//!     }
//!   ]
//! }
//! ```
//!
//! [`RuleStore::validate`]: crate::resources::rulestore::RuleStore::validate

use log::{error, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::OverlayError;

const DEFAULT_IMAGE_PATH: &str = "assets/Image";
const DEFAULT_NUMBER_OF_FRAMES: i32 = 1;
const DEFAULT_FRAME_DURATION: i32 = 60;
const DEMO_PROPERTY_NAME: &str = "MapTest";

/// Top-level document of the data file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct OverlayData {
    pub overlay_properties: Vec<OverlayProperty>,
}

/// One overlay declaration as written in the data file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct OverlayProperty {
    /// Map property value that activates this overlay.
    #[serde(default)]
    pub property_name: String,
    /// Image base path without extension, e.g. `assets/Image`.
    #[serde(default = "default_image_path")]
    pub image_path: String,
    #[serde(default)]
    pub animation: OverlayAnimation,
}

/// Animation timing. `FrameDuration` is measured in ticks.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct OverlayAnimation {
    #[serde(default = "default_number_of_frames")]
    pub number_of_frames: i32,
    #[serde(default = "default_frame_duration")]
    pub frame_duration: i32,
}

impl Default for OverlayAnimation {
    fn default() -> Self {
        Self {
            number_of_frames: DEFAULT_NUMBER_OF_FRAMES,
            frame_duration: DEFAULT_FRAME_DURATION,
        }
    }
}

fn default_image_path() -> String {
    DEFAULT_IMAGE_PATH.to_string()
}

fn default_number_of_frames() -> i32 {
    DEFAULT_NUMBER_OF_FRAMES
}

fn default_frame_duration() -> i32 {
    DEFAULT_FRAME_DURATION
}

impl OverlayProperty {
    pub fn new(
        property_name: impl Into<String>,
        image_path: impl Into<String>,
        number_of_frames: i32,
        frame_duration: i32,
    ) -> Self {
        Self {
            property_name: property_name.into(),
            image_path: image_path.into(),
            animation: OverlayAnimation {
                number_of_frames,
                frame_duration,
            },
        }
    }
}

impl Default for OverlayData {
    /// The built-in demo rule set used when no usable data file exists.
    fn default() -> Self {
        Self {
            overlay_properties: vec![OverlayProperty::new(
                DEMO_PROPERTY_NAME,
                DEFAULT_IMAGE_PATH,
                DEFAULT_NUMBER_OF_FRAMES,
                DEFAULT_FRAME_DURATION,
            )],
        }
    }
}

impl OverlayData {
    /// Parse a data document from a JSON string.
    pub fn from_json_str(json: &str, origin: &Path) -> Result<Self, OverlayError> {
        serde_json::from_str(json).map_err(|source| OverlayError::Json {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Read and parse the data file at `path`.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, OverlayError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| OverlayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json, path)
    }

    /// Read the data file, falling back to the built-in rule set.
    ///
    /// A missing or unparsable file is logged as an error and never fatal.
    /// With `persist_default` set, the fallback is written to `path` only
    /// when no file exists there; an invalid file is left untouched.
    pub fn load_or_default(path: impl AsRef<Path>, persist_default: bool) -> Self {
        let path = path.as_ref();
        info!("Reading overlay data from {:?}", path);
        match Self::load_from_file(path) {
            Ok(data) => data,
            Err(e) => {
                error!("No valid overlay data file ({}). Using the built-in demo rule.", e);
                let data = Self::default();
                if persist_default && !path.exists() {
                    match data.save_to_file(path) {
                        Ok(()) => info!("Wrote default overlay data to {:?}", path),
                        Err(e) => error!("Failed to write default overlay data: {}", e),
                    }
                }
                data
            }
        }
    }

    /// Write the document as pretty-printed JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), OverlayError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|source| OverlayError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| OverlayError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
