//! Per-hand engagement evaluation.

use bevy::prelude::*;

use crate::bevy::{HandEngagement, Manipulable, ManipulationSettings, TrackedHands};
use crate::hit_test;
use crate::pose::Handedness;

/// System to evaluate proximity/ray engagement for both hands.
///
/// Runs regardless of who holds the object; a holding hand usually keeps
/// engaging it through proximity.
pub fn update_engagement(
    settings: Res<ManipulationSettings>,
    hands: Res<TrackedHands>,
    objects: Query<&Manipulable>,
    mut engagement: ResMut<HandEngagement>,
) {
    let Ok(manipulable) = objects.single() else {
        *engagement = HandEngagement::default();
        return;
    };

    for hand in Handedness::BOTH {
        let current = hands
            .0
            .get(hand)
            .and_then(|pose| hit_test::engages(pose, &manipulable.0, settings.0.proximity_threshold));
        if current.is_some() != engagement.get(hand).is_some() {
            tracing::trace!("[engagement] {} hand engaged: {}", hand, current.is_some());
        }
        engagement.set(hand, current);
    }
}
