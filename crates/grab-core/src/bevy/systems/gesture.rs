//! Two-handed pinch gesture system.

use bevy::prelude::*;

use crate::bevy::{Manipulable, PinchEndedEvent, PinchStartedEvent, PinchStateRes, TrackedHands};
use crate::pinch::PinchTransition;

/// System to advance the pinch gesture.
pub fn update_pinch_gesture(
    hands: Res<TrackedHands>,
    mut pinch: ResMut<PinchStateRes>,
    mut objects: Query<&mut Manipulable>,
    mut started_events: MessageWriter<PinchStartedEvent>,
    mut ended_events: MessageWriter<PinchEndedEvent>,
) {
    let Ok(mut manipulable) = objects.single_mut() else {
        pinch.0.reset();
        return;
    };

    match pinch.0.update(&hands.0, &mut manipulable.0) {
        PinchTransition::Entered => {
            if let Some(snapshot) = pinch.0.snapshot() {
                tracing::info!(
                    "[pinch] started: distance={:.3} scale={:?}",
                    snapshot.initial_distance,
                    snapshot.initial_scale
                );
            }
            started_events.write(PinchStartedEvent);
        }
        PinchTransition::Exited => {
            let final_scale = manipulable.0.transform.scale;
            tracing::info!("[pinch] ended: scale={:?}", final_scale);
            ended_events.write(PinchEndedEvent { final_scale });
        }
        PinchTransition::Rebaselined => {
            tracing::debug!("[pinch] hands separated, snapshot retaken");
        }
        PinchTransition::Updated { scale_factor } => {
            tracing::trace!("[pinch] scale_factor={:.4}", scale_factor);
        }
        PinchTransition::Skipped | PinchTransition::None => {}
    }
}
