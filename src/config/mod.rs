//! Configuration file support for fingerpaint.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/fingerpaint/config.toml`.
//! Settings cover drawing defaults and effect brush tuning.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{DrawingConfig, EffectsConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have defaults and will use those if not specified in the
/// config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "red"
/// default_thickness = 8.0
/// touch_tolerance = 4.0
/// fill_mode = false
///
/// [effects]
/// blur_radius = 5.0
/// emboss_offset = 3.5
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Drawing defaults (color, thickness, touch tolerance, fill mode)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Effect brush tuning
    #[serde(default)]
    pub effects: EffectsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is
    /// logged.
    ///
    /// Validated ranges:
    /// - `default_thickness`: 1.0 - 128.0
    /// - `touch_tolerance`: 0.0 - 64.0
    /// - `blur_radius`: 0.5 - 32.0
    /// - `emboss_offset`: 0.5 - 16.0
    fn validate_and_clamp(&mut self) {
        // Thickness: 1.0 - 128.0
        if !(1.0..=128.0).contains(&self.drawing.default_thickness) {
            log::warn!(
                "Invalid default_thickness {:.1}, clamping to 1.0-128.0 range",
                self.drawing.default_thickness
            );
            self.drawing.default_thickness = self.drawing.default_thickness.clamp(1.0, 128.0);
        }

        // Touch tolerance: 0.0 - 64.0
        if !(0.0..=64.0).contains(&self.drawing.touch_tolerance) {
            log::warn!(
                "Invalid touch_tolerance {:.1}, clamping to 0.0-64.0 range",
                self.drawing.touch_tolerance
            );
            self.drawing.touch_tolerance = self.drawing.touch_tolerance.clamp(0.0, 64.0);
        }

        // Blur radius: 0.5 - 32.0
        if !(0.5..=32.0).contains(&self.effects.blur_radius) {
            log::warn!(
                "Invalid blur_radius {:.1}, clamping to 0.5-32.0 range",
                self.effects.blur_radius
            );
            self.effects.blur_radius = self.effects.blur_radius.clamp(0.5, 32.0);
        }

        // Emboss offset: 0.5 - 16.0
        if !(0.5..=16.0).contains(&self.effects.emboss_offset) {
            log::warn!(
                "Invalid emboss_offset {:.1}, clamping to 0.5-16.0 range",
                self.effects.emboss_offset
            );
            self.effects.emboss_offset = self.effects.emboss_offset.clamp(0.5, 16.0);
        }

        // Validate the color name resolves
        if crate::draw::color::name_to_color(&self.drawing.default_color).is_none() {
            log::warn!(
                "Unknown default_color '{}', falling back to 'white'",
                self.drawing.default_color
            );
            self.drawing.default_color = "white".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/fingerpaint/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("fingerpaint");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {config:?}");

        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Serializes the config to TOML and writes it to
    /// `~/.config/fingerpaint/config.toml`, creating the parent directory if
    /// it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }
}
