//! Configuration file support for shapepick.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/shapepick/config.toml`. Settings cover the canvas the shape is
//! painted on and where rendered images go.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, MAX_CANVAS_SIZE, MIN_CANVAS_SIZE, OutputConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 400
/// height = 400
/// background = "white"
///
/// [output]
/// path = "shape.png"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Output location
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Validated ranges:
    /// - `canvas.width`: 250 - 4096
    /// - `canvas.height`: 250 - 4096
    fn validate_and_clamp(&mut self) {
        let range = MIN_CANVAS_SIZE..=MAX_CANVAS_SIZE;

        if !range.contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to {}-{} range",
                self.canvas.width,
                MIN_CANVAS_SIZE,
                MAX_CANVAS_SIZE
            );
            self.canvas.width = self.canvas.width.clamp(MIN_CANVAS_SIZE, MAX_CANVAS_SIZE);
        }

        if !range.contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to {}-{} range",
                self.canvas.height,
                MIN_CANVAS_SIZE,
                MAX_CANVAS_SIZE
            );
            self.canvas.height = self.canvas.height.clamp(MIN_CANVAS_SIZE, MAX_CANVAS_SIZE);
        }

        if self.output.path.as_os_str().is_empty() {
            log::warn!("Empty output path, falling back to 'shape.png'");
            self.output.path = PathBuf::from("shape.png");
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/shapepick/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("shapepick");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file is missing.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration from TOML text and validates it.
    pub fn from_toml(text: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(text)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
