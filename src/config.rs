//! Gallery Configuration
//!
//! Window title and size for the gallery binary, read from an optional TOML
//! file. The card has no configuration of its own.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "CARD_GALLERY_CONFIG";

/// Gallery window settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: f32,
    /// Window height in pixels
    pub height: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: "Card Gallery".to_string(),
            width: 640.0,
            height: 480.0,
        }
    }
}

impl GalleryConfig {
    /// Parse a configuration from TOML; missing fields keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading gallery config from {}", path.display());
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Load the file named by `CARD_GALLERY_CONFIG`, or fall back to defaults
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::Invalid {
                    message: format!("{name} must be a positive number, got {value}"),
                });
            }
        }
        Ok(())
    }
}
