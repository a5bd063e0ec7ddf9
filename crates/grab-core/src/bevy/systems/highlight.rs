//! Highlight recoloring system.

use bevy::prelude::*;

use crate::bevy::{HandEngagement, Manipulable, ManipulationSettings, PinchStateRes};
use crate::highlight::{self, HighlightLevel};

/// System to recompute the displayed colors from base colors.
pub fn update_highlight(
    settings: Res<ManipulationSettings>,
    engagement: Res<HandEngagement>,
    pinch: Res<PinchStateRes>,
    mut objects: Query<&mut Manipulable>,
) {
    let Ok(mut manipulable) = objects.single_mut() else {
        return;
    };
    let level = HighlightLevel::from_state(engagement.any(), pinch.0.is_active());
    highlight::recolor(&mut manipulable.0, level, &settings.0.highlight);
}
