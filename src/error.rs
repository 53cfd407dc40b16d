//! Error taxonomy for the overlay extension.
//!
//! None of these errors is fatal to the host. The extension entry point
//! ([`crate::overlay::OverlayExtension`]) recovers from each of them locally:
//! a broken data file falls back to the built-in rule set, a frame that fails
//! to load is dropped from its rule, and a bad config keeps its defaults.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading configuration, rule data, or textures.
#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid overlay data in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("failed to load texture '{path}': {reason}")]
    Texture { path: String, reason: String },
}

impl OverlayError {
    /// Shorthand for a texture load failure reported by a host loader.
    pub fn texture(path: impl Into<String>, reason: impl Into<String>) -> Self {
        OverlayError::Texture {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
