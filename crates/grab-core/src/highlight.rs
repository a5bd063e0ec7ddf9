//! Highlight feedback: tint the object toward the highlight color.

use crate::config::HighlightConfig;
use crate::object::ManipulableObject;

/// Highlight tier, highest applicable wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum HighlightLevel {
    #[default]
    None,
    Engaged,
    Pinching,
}

impl HighlightLevel {
    pub fn from_state(engaged: bool, pinching: bool) -> Self {
        if pinching {
            Self::Pinching
        } else if engaged {
            Self::Engaged
        } else {
            Self::None
        }
    }

    /// Blend factor toward the highlight color.
    pub fn intensity(self, config: &HighlightConfig, multi_surface: bool) -> f32 {
        match (self, multi_surface) {
            (Self::None, _) => 0.0,
            (Self::Engaged, true) => config.engaged_intensity,
            (Self::Pinching, true) => config.pinch_intensity,
            (Self::Engaged, false) => config.single_surface_engaged_intensity,
            (Self::Pinching, false) => config.single_surface_pinch_intensity,
        }
    }
}

/// Recomputes every displayed color from its base color.
///
/// Returns the intensity that was applied.
pub fn recolor(object: &mut ManipulableObject, level: HighlightLevel, config: &HighlightConfig) -> f32 {
    let intensity = level.intensity(config, object.is_multi_surface());
    let base = object.base_colors().to_vec();
    for (shown, base) in object.displayed_colors_mut().iter_mut().zip(base) {
        *shown = if intensity > 0.0 {
            base.lerp(config.color, intensity)
        } else {
            base
        };
    }
    intensity
}
