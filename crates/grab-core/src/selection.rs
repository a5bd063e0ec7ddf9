//! Per-hand grab and release.
//!
//! A successful select-start attaches the object to the selecting hand; a
//! second hand joining turns the hold into a pinch. Every change of owner
//! rebases the object transform so its world pose is unchanged at the moment
//! of transfer.

use bevy::prelude::*;

use crate::hit_test::{self, Engagement};
use crate::object::{Attachment, ManipulableObject};
use crate::pose::{ControllerPose, HandPoses, Handedness};

/// Result of a select-start event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectOutcome {
    /// The hand now holds the object alone.
    Grabbed(Engagement),
    /// The other hand already held the object; both now hold it.
    JoinedPinch(Engagement),
    /// The hit test failed; nothing changed.
    Missed,
    /// The hand is untracked or already holds the object.
    Ignored,
}

/// Result of a select-end event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The object returned to the world frame.
    Released,
    /// The hand left a pinch; the other hand keeps holding the object.
    LeftPinch { remaining: Handedness },
    /// The hand held nothing.
    NotHolding,
}

/// Expresses a world transform relative to a controller pose.
pub fn to_local(parent: &ControllerPose, world: &Transform) -> Transform {
    let inv_rotation = parent.rotation.inverse();
    Transform {
        translation: inv_rotation * (world.translation - parent.position),
        rotation: inv_rotation * world.rotation,
        scale: world.scale,
    }
}

/// Resolves a controller-relative transform back into world space.
pub fn to_world(parent: &ControllerPose, local: &Transform) -> Transform {
    Transform {
        translation: parent.position + parent.rotation * local.translation,
        rotation: parent.rotation * local.rotation,
        scale: local.scale,
    }
}

/// Handles a select-start from `hand`.
pub fn select_start(
    hand: Handedness,
    poses: &HandPoses,
    object: &mut ManipulableObject,
    proximity_threshold: f32,
) -> SelectOutcome {
    let Some(pose) = poses.get(hand) else {
        return SelectOutcome::Ignored;
    };
    if object.attachment.is_held_by(hand) {
        return SelectOutcome::Ignored;
    }
    let Some(engagement) = hit_test::engages(pose, object, proximity_threshold) else {
        return SelectOutcome::Missed;
    };

    match object.attachment {
        Attachment::Free => {
            object.attachment = Attachment::Held {
                hand,
                local: to_local(pose, &object.transform),
            };
            SelectOutcome::Grabbed(engagement)
        }
        // `object.transform` is already the current world pose, so switching
        // to the world-driven pinch needs no rebasing.
        Attachment::Held { .. } => {
            object.attachment = Attachment::Pinched;
            SelectOutcome::JoinedPinch(engagement)
        }
        Attachment::Pinched => SelectOutcome::Ignored,
    }
}

/// Handles a select-end from `hand`. Releasing while holding nothing is a no-op.
pub fn select_end(
    hand: Handedness,
    poses: &HandPoses,
    object: &mut ManipulableObject,
) -> ReleaseOutcome {
    match object.attachment {
        Attachment::Held { hand: holder, .. } if holder == hand => {
            object.attachment = Attachment::Free;
            ReleaseOutcome::Released
        }
        Attachment::Pinched => {
            let remaining = hand.other();
            match poses.get(remaining) {
                Some(pose) => {
                    object.attachment = Attachment::Held {
                        hand: remaining,
                        local: to_local(pose, &object.transform),
                    };
                    ReleaseOutcome::LeftPinch { remaining }
                }
                None => {
                    object.attachment = Attachment::Free;
                    ReleaseOutcome::Released
                }
            }
        }
        _ => ReleaseOutcome::NotHolding,
    }
}

/// Moves a held object rigidly with its holding hand.
///
/// Returns `false` when nothing moved (not held, or the holder is untracked
/// this frame, in which case the last world pose is kept).
pub fn follow_holder(poses: &HandPoses, object: &mut ManipulableObject) -> bool {
    let Attachment::Held { hand, local } = object.attachment else {
        return false;
    };
    let Some(pose) = poses.get(hand) else {
        return false;
    };
    object.transform = to_world(pose, &local);
    true
}
