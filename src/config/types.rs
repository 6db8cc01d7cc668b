//! Configuration type definitions.

use crate::draw::{Color, EffectSettings, color};
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the default stroke appearance when a painting session starts.
/// The host can still change every one of these at runtime through the
/// session API.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Default stroke color as a named color
    /// (red, green, blue, yellow, orange, pink, white, black)
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Default stroke thickness in pixels (valid range: 1.0 - 128.0)
    #[serde(default = "default_thickness")]
    pub default_thickness: f64,

    /// Minimum per-axis finger travel in pixels before a drag event extends
    /// a stroke (valid range: 0.0 - 64.0)
    #[serde(default = "default_touch_tolerance")]
    pub touch_tolerance: f64,

    /// Paint closed shapes filled instead of outlined
    #[serde(default)]
    pub fill_mode: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_thickness: default_thickness(),
            touch_tolerance: default_touch_tolerance(),
            fill_mode: false,
        }
    }
}

impl DrawingConfig {
    /// Resolves the configured color name, falling back to white.
    pub fn color(&self) -> Color {
        color::name_to_color(&self.default_color).unwrap_or_else(|| {
            log::warn!(
                "Unknown color name '{}', falling back to white",
                self.default_color
            );
            color::WHITE
        })
    }
}

/// Effect brush tuning.
///
/// Controls how strongly the blur and emboss brushes alter the stroke.
#[derive(Debug, Serialize, Deserialize)]
pub struct EffectsConfig {
    /// Blur halo radius in pixels (valid range: 0.5 - 32.0)
    #[serde(default = "default_blur_radius")]
    pub blur_radius: f64,

    /// Emboss highlight/shadow offset in pixels (valid range: 0.5 - 16.0)
    #[serde(default = "default_emboss_offset")]
    pub emboss_offset: f64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            blur_radius: default_blur_radius(),
            emboss_offset: default_emboss_offset(),
        }
    }
}

impl EffectsConfig {
    /// Converts the config values into renderer settings.
    pub fn settings(&self) -> EffectSettings {
        EffectSettings {
            blur_radius: self.blur_radius,
            emboss_offset: self.emboss_offset,
        }
    }
}

// Default value functions for serde

fn default_color() -> String {
    "white".to_string()
}

fn default_thickness() -> f64 {
    12.0
}

fn default_touch_tolerance() -> f64 {
    4.0
}

fn default_blur_radius() -> f64 {
    5.0
}

fn default_emboss_offset() -> f64 {
    3.5
}
