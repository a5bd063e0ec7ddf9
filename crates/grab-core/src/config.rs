//! Tunable parameters for hit testing, highlighting and the initial object.
//!
//! Every field has a default, so an empty JSON object `{}` is a valid
//! configuration.

use serde::{Deserialize, Serialize};

use crate::object::SurfaceColor;

/// Errors produced while loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level manipulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManipulationConfig {
    /// Hands closer than this to the object center grab it directly.
    pub proximity_threshold: f32,
    pub highlight: HighlightConfig,
    pub object: ObjectConfig,
}

impl Default for ManipulationConfig {
    fn default() -> Self {
        Self {
            proximity_threshold: 0.1,
            highlight: HighlightConfig::default(),
            object: ObjectConfig::default(),
        }
    }
}

impl ManipulationConfig {
    /// Parses and validates a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to a pretty JSON string.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.proximity_threshold.is_finite() || self.proximity_threshold < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "proximity_threshold must be a finite, non-negative number (got {})",
                self.proximity_threshold
            )));
        }
        self.highlight.validate()?;
        self.object.validate()
    }
}

/// Highlight blend settings.
///
/// Objects with several surfaces use the regular intensities; objects with a
/// single surface use the softer `single_surface_*` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub color: SurfaceColor,
    pub engaged_intensity: f32,
    pub pinch_intensity: f32,
    pub single_surface_engaged_intensity: f32,
    pub single_surface_pinch_intensity: f32,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            color: SurfaceColor::WHITE,
            engaged_intensity: 0.4,
            pinch_intensity: 0.7,
            single_surface_engaged_intensity: 0.2,
            single_surface_pinch_intensity: 0.4,
        }
    }
}

impl HighlightConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let intensities = [
            ("engaged_intensity", self.engaged_intensity),
            ("pinch_intensity", self.pinch_intensity),
            (
                "single_surface_engaged_intensity",
                self.single_surface_engaged_intensity,
            ),
            (
                "single_surface_pinch_intensity",
                self.single_surface_pinch_intensity,
            ),
        ];
        for (name, value) in intensities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "highlight.{name} must be within [0, 1] (got {value})"
                )));
            }
        }
        Ok(())
    }
}

/// Initial state of the manipulable object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectConfig {
    pub position: [f32; 3],
    pub scale: [f32; 3],
    /// Unscaled box size used for ray intersection.
    pub size: [f32; 3],
    /// One color per surface, in box face order (+X, -X, +Y, -Y, +Z, -Z).
    pub base_colors: Vec<SurfaceColor>,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            position: [0.0, -0.1, -0.3],
            scale: [0.1, 0.1, 0.1],
            size: [1.0, 1.0, 1.0],
            base_colors: SurfaceColor::cube_palette(),
        }
    }
}

impl ObjectConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.base_colors.is_empty() {
            return Err(ConfigError::Invalid(
                "object.base_colors must contain at least one color".to_string(),
            ));
        }
        let all_finite = self
            .position
            .iter()
            .chain(&self.scale)
            .chain(&self.size)
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(ConfigError::Invalid(
                "object position, scale and size must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
