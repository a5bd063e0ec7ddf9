//! Two-handed pinch gesture: scale and reposition the object with both hands.
//!
//! The gesture is active exactly while both hands hold the object. Each frame
//! the transform is derived from the snapshot taken on entry, never from the
//! previous frame, so long gestures cannot accumulate error.

use bevy::prelude::*;

use crate::object::ManipulableObject;
use crate::pose::HandPoses;

/// Hand separations at or below this are treated as coincident.
pub const MIN_SEPARATION: f32 = 1e-6;

/// State captured when the pinch begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchSnapshot {
    /// Distance between the hands (`D0`).
    pub initial_distance: f32,
    /// Object scale (`S0`).
    pub initial_scale: Vec3,
    /// Midpoint of the hands (`M0`).
    pub initial_midpoint: Vec3,
    /// Object world position (`P0`).
    pub initial_position: Vec3,
}

impl PinchSnapshot {
    fn capture(distance: f32, midpoint: Vec3, object: &ManipulableObject) -> Self {
        Self {
            initial_distance: distance,
            initial_scale: object.transform.scale,
            initial_midpoint: midpoint,
            initial_position: object.world_position(),
        }
    }

    /// `D1 / D0`, or 1.0 while the initial separation is degenerate.
    pub fn scale_factor(&self, distance: f32) -> f32 {
        if self.initial_distance <= MIN_SEPARATION {
            1.0
        } else {
            distance / self.initial_distance
        }
    }

    /// Object scale and position for the current hand separation and midpoint.
    pub fn solve(&self, distance: f32, midpoint: Vec3) -> (Vec3, Vec3) {
        let factor = self.scale_factor(distance);
        let offset = self.initial_position - self.initial_midpoint;
        (self.initial_scale * factor, midpoint + offset * factor)
    }
}

/// What a call to [`PinchState::update`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PinchTransition {
    /// Not pinching before or after.
    None,
    /// The gesture started; the snapshot was taken and the object left as is.
    Entered,
    /// The object was rescaled and moved.
    Updated { scale_factor: f32 },
    /// The hands were coincident at entry and have now separated; the
    /// snapshot was retaken so scaling starts from here.
    Rebaselined,
    /// A hand is untracked this frame; nothing changed.
    Skipped,
    /// The dual hold ended; the object keeps its last transform.
    Exited,
}

/// Pinch gesture state machine: `Idle` or `Pinching`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PinchState {
    #[default]
    Idle,
    Pinching(PinchSnapshot),
}

impl PinchState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pinching(_))
    }

    pub fn snapshot(&self) -> Option<&PinchSnapshot> {
        match self {
            Self::Pinching(snapshot) => Some(snapshot),
            Self::Idle => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Advances the gesture by one frame.
    pub fn update(&mut self, poses: &HandPoses, object: &mut ManipulableObject) -> PinchTransition {
        if !object.attachment.is_pinched() {
            if self.is_active() {
                self.reset();
                return PinchTransition::Exited;
            }
            return PinchTransition::None;
        }

        let Some((left, right)) = poses.both() else {
            return PinchTransition::Skipped;
        };
        let distance = left.position.distance(right.position);
        let midpoint = (left.position + right.position) * 0.5;

        match self {
            Self::Idle => {
                *self = Self::Pinching(PinchSnapshot::capture(distance, midpoint, object));
                PinchTransition::Entered
            }
            Self::Pinching(snapshot) => {
                let (scale, position) = snapshot.solve(distance, midpoint);
                object.transform.scale = scale;
                object.transform.translation = position;

                if snapshot.initial_distance <= MIN_SEPARATION && distance > MIN_SEPARATION {
                    *snapshot = PinchSnapshot::capture(distance, midpoint, object);
                    return PinchTransition::Rebaselined;
                }
                PinchTransition::Updated {
                    scale_factor: snapshot.scale_factor(distance),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Attachment, HitShape, SurfaceColor};
    use crate::pose::ControllerPose;

    fn pinched_cube(position: Vec3) -> ManipulableObject {
        let mut object = ManipulableObject::new(
            Transform::from_translation(position)
                .with_rotation(Quat::from_rotation_y(0.4))
                .with_scale(Vec3::splat(0.1)),
            HitShape::Cuboid { size: Vec3::ONE },
            SurfaceColor::cube_palette(),
        );
        object.attachment = Attachment::Pinched;
        object
    }

    fn hands(left: Vec3, right: Vec3) -> HandPoses {
        HandPoses::new(Some(ControllerPose::at(left)), Some(ControllerPose::at(right)))
    }

    #[test]
    fn test_idle_without_dual_hold() {
        let mut object = pinched_cube(Vec3::ZERO);
        object.attachment = Attachment::Held {
            hand: crate::pose::Handedness::Left,
            local: Transform::IDENTITY,
        };
        let mut state = PinchState::default();
        let transition = state.update(&hands(Vec3::NEG_X, Vec3::X), &mut object);
        assert_eq!(transition, PinchTransition::None);
        assert!(!state.is_active());
    }

    #[test]
    fn test_entry_snapshots_without_moving() {
        let mut object = pinched_cube(Vec3::new(0.0, 0.0, -0.3));
        let before = object.transform;
        let mut state = PinchState::default();

        let transition = state.update(
            &hands(Vec3::new(-0.1, 0.0, -0.3), Vec3::new(0.1, 0.0, -0.3)),
            &mut object,
        );

        assert_eq!(transition, PinchTransition::Entered);
        assert_eq!(object.transform, before);
        let snapshot = state.snapshot().unwrap();
        assert!((snapshot.initial_distance - 0.2).abs() < 1e-6);
        assert!((snapshot.initial_midpoint - Vec3::new(0.0, 0.0, -0.3)).length() < 1e-6);
        assert_eq!(snapshot.initial_scale, Vec3::splat(0.1));
    }

    #[test]
    fn test_doubling_separation_doubles_scale() {
        let mut object = pinched_cube(Vec3::new(0.0, 0.0, -0.3));
        let rotation = object.transform.rotation;
        let mut state = PinchState::default();
        state.update(
            &hands(Vec3::new(-0.1, 0.0, -0.3), Vec3::new(0.1, 0.0, -0.3)),
            &mut object,
        );

        let transition = state.update(
            &hands(Vec3::new(-0.2, 0.0, -0.3), Vec3::new(0.2, 0.0, -0.3)),
            &mut object,
        );

        let PinchTransition::Updated { scale_factor } = transition else {
            panic!("expected update, got {transition:?}");
        };
        assert!((scale_factor - 2.0).abs() < 1e-5);
        assert!((object.transform.scale - Vec3::splat(0.2)).length() < 1e-6);
        assert!((object.transform.translation - Vec3::new(0.0, 0.0, -0.3)).length() < 1e-6);
        assert_eq!(object.transform.rotation, rotation);
    }

    #[test]
    fn test_offset_from_midpoint_scales_and_follows() {
        // Object sits 0.1 above the hands' midpoint.
        let mut object = pinched_cube(Vec3::new(0.0, 0.1, 0.0));
        let mut state = PinchState::default();
        state.update(&hands(Vec3::new(-0.1, 0.0, 0.0), Vec3::new(0.1, 0.0, 0.0)), &mut object);

        // Hands spread to twice the distance and move 1 unit along +Z.
        state.update(&hands(Vec3::new(-0.2, 0.0, 1.0), Vec3::new(0.2, 0.0, 1.0)), &mut object);

        assert!((object.transform.translation - Vec3::new(0.0, 0.2, 1.0)).length() < 1e-5);
        assert!((object.transform.scale - Vec3::splat(0.2)).length() < 1e-5);
    }

    #[test]
    fn test_returning_hands_restores_entry_transform() {
        let mut object = pinched_cube(Vec3::new(0.05, 0.02, -0.3));
        let before = object.transform;
        let start = hands(Vec3::new(-0.1, 0.0, -0.3), Vec3::new(0.1, 0.0, -0.3));
        let mut state = PinchState::default();
        state.update(&start, &mut object);

        for i in 1..=50u8 {
            let spread = 0.1 + f32::from(i) * 0.01;
            state.update(
                &hands(Vec3::new(-spread, 0.0, -0.3), Vec3::new(spread, 0.03, -0.3)),
                &mut object,
            );
        }
        state.update(&start, &mut object);

        assert!((object.transform.translation - before.translation).length() < 1e-6);
        assert_eq!(object.transform.scale, before.scale);
    }

    #[test]
    fn test_exit_keeps_last_transform() {
        let mut object = pinched_cube(Vec3::ZERO);
        let mut state = PinchState::default();
        state.update(&hands(Vec3::NEG_X * 0.1, Vec3::X * 0.1), &mut object);
        state.update(&hands(Vec3::NEG_X * 0.3, Vec3::X * 0.3), &mut object);
        let last = object.transform;

        object.attachment = Attachment::Free;
        let transition = state.update(&hands(Vec3::NEG_X, Vec3::X), &mut object);

        assert_eq!(transition, PinchTransition::Exited);
        assert!(!state.is_active());
        assert_eq!(object.transform, last);
        assert_eq!(
            state.update(&hands(Vec3::NEG_X, Vec3::X), &mut object),
            PinchTransition::None
        );
    }

    #[test]
    fn test_untracked_hand_skips_frame() {
        let mut object = pinched_cube(Vec3::ZERO);
        let mut state = PinchState::default();
        state.update(&hands(Vec3::NEG_X * 0.1, Vec3::X * 0.1), &mut object);
        let before = object.transform;

        let one_hand = HandPoses::new(Some(ControllerPose::at(Vec3::NEG_X)), None);
        assert_eq!(state.update(&one_hand, &mut object), PinchTransition::Skipped);
        assert!(state.is_active());
        assert_eq!(object.transform, before);
    }

    #[test]
    fn test_coincident_hands_do_not_scale() {
        let mut object = pinched_cube(Vec3::new(0.0, 0.1, 0.0));
        let mut state = PinchState::default();
        let same = Vec3::new(0.0, 0.0, 0.0);
        state.update(&hands(same, same), &mut object);

        // Still coincident but moved: translate only, never NaN.
        let moved = Vec3::new(0.0, 0.0, 0.5);
        let transition = state.update(&hands(moved, moved), &mut object);
        assert_eq!(transition, PinchTransition::Updated { scale_factor: 1.0 });
        assert!(object.transform.scale.is_finite());
        assert_eq!(object.transform.scale, Vec3::splat(0.1));
        assert!((object.transform.translation - Vec3::new(0.0, 0.1, 0.5)).length() < 1e-6);

        // Hands separate: the snapshot is retaken from here.
        let transition = state.update(
            &hands(Vec3::new(-0.1, 0.0, 0.5), Vec3::new(0.1, 0.0, 0.5)),
            &mut object,
        );
        assert_eq!(transition, PinchTransition::Rebaselined);
        assert!((state.snapshot().unwrap().initial_distance - 0.2).abs() < 1e-6);
        assert_eq!(object.transform.scale, Vec3::splat(0.1));

        // From the new baseline, doubling the separation doubles the scale.
        state.update(
            &hands(Vec3::new(-0.2, 0.0, 0.5), Vec3::new(0.2, 0.0, 0.5)),
            &mut object,
        );
        assert!((object.transform.scale - Vec3::splat(0.2)).length() < 1e-6);
    }
}
