//! Input processing system.
//!
//! Applies poses and select events pushed by the external controller source.

use bevy::prelude::*;

use crate::bevy::{ControllerInput, InputQueue, SelectEvent, TrackedHands};

/// System to drain the input queue for this frame.
///
/// Poses are validated here; a non-finite pose is dropped and the hand keeps
/// its last valid pose.
pub fn process_input(
    queue: Res<InputQueue>,
    mut hands: ResMut<TrackedHands>,
    mut select_events: MessageWriter<SelectEvent>,
) {
    for input in queue.drain_until_yield() {
        match input {
            ControllerInput::Pose { .. } => {
                let Some((hand, mut pose)) = input.to_pose() else {
                    continue;
                };
                if !pose.is_finite() || pose.rotation.length_squared() <= f32::EPSILON {
                    tracing::warn!("[input] Dropping invalid {} pose: {:?}", hand, pose);
                    continue;
                }
                pose.rotation = pose.rotation.normalize();
                hands.0.set(hand, Some(pose));
            }
            ControllerInput::PoseLost { hand } => {
                tracing::debug!("[input] {} hand lost tracking", hand);
                hands.0.set(hand, None);
            }
            ControllerInput::SelectStart { hand } => {
                select_events.write(SelectEvent::start(hand));
            }
            ControllerInput::SelectEnd { hand } => {
                select_events.write(SelectEvent::end(hand));
            }
            // Consumed by drain_until_yield(), should not reach here
            ControllerInput::Yield => {}
        }
    }
}
