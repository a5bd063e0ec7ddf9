//! ECS Resources for the manipulation systems.

use std::collections::VecDeque;
use std::sync::Arc;

use bevy::prelude::*;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::config::ManipulationConfig;
use crate::hit_test::Engagement;
use crate::pinch::PinchState;
use crate::pose::{ControllerPose, HandPoses, Handedness};

/// Active manipulation configuration.
#[derive(Resource, Debug, Clone, Default)]
pub struct ManipulationSettings(pub ManipulationConfig);

/// Latest valid pose of each hand.
#[derive(Resource, Debug, Clone, Default)]
pub struct TrackedHands(pub HandPoses);

/// Per-hand engagement evaluated this frame, independent of holding.
#[derive(Resource, Debug, Clone, Default)]
pub struct HandEngagement {
    pub left: Option<Engagement>,
    pub right: Option<Engagement>,
}

impl HandEngagement {
    pub fn get(&self, hand: Handedness) -> Option<&Engagement> {
        match hand {
            Handedness::Left => self.left.as_ref(),
            Handedness::Right => self.right.as_ref(),
        }
    }

    pub fn set(&mut self, hand: Handedness, engagement: Option<Engagement>) {
        match hand {
            Handedness::Left => self.left = engagement,
            Handedness::Right => self.right = engagement,
        }
    }

    /// Whether either hand engages the object.
    pub fn any(&self) -> bool {
        self.left.is_some() || self.right.is_some()
    }
}

/// Pinch gesture state for the object.
#[derive(Resource, Debug, Clone, Default)]
pub struct PinchStateRes(pub PinchState);

fn identity_rotation() -> [f32; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

/// Input pushed by the external controller source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControllerInput {
    /// World pose of a hand for this frame. `rotation` is an `[x, y, z, w]`
    /// quaternion.
    Pose {
        hand: Handedness,
        position: [f32; 3],
        #[serde(default = "identity_rotation")]
        rotation: [f32; 4],
    },
    /// The hand lost tracking.
    PoseLost { hand: Handedness },
    SelectStart { hand: Handedness },
    SelectEnd { hand: Handedness },
    /// Frame boundary marker - inputs after this are processed in the next frame.
    Yield,
}

impl ControllerInput {
    pub fn pose(hand: Handedness, pose: &ControllerPose) -> Self {
        Self::Pose {
            hand,
            position: pose.position.to_array(),
            rotation: pose.rotation.to_array(),
        }
    }

    /// Decodes a `Pose` input. `None` for other inputs.
    pub fn to_pose(&self) -> Option<(Handedness, ControllerPose)> {
        match self {
            Self::Pose {
                hand,
                position,
                rotation,
            } => Some((
                *hand,
                ControllerPose::new(Vec3::from_array(*position), Quat::from_array(*rotation)),
            )),
            _ => None,
        }
    }
}

/// Thread-safe input queue for the external controller source.
///
/// The source pushes poses and select events at any time; they are applied
/// at the start of the next frame, never in the middle of one.
#[derive(Resource, Clone)]
pub struct InputQueue {
    inner: Arc<Mutex<VecDeque<ControllerInput>>>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Push an input to be processed.
    pub fn push(&self, input: ControllerInput) {
        self.inner.lock().push_back(input);
    }

    pub fn extend(&self, inputs: impl IntoIterator<Item = ControllerInput>) {
        self.inner.lock().extend(inputs);
    }

    /// Drain inputs until Yield or empty.
    ///
    /// Yield itself is consumed but not returned; everything after it stays
    /// queued for the next frame.
    pub fn drain_until_yield(&self) -> Vec<ControllerInput> {
        let mut guard = self.inner.lock();
        let mut inputs = Vec::new();

        while let Some(input) = guard.pop_front() {
            if matches!(input, ControllerInput::Yield) {
                tracing::trace!("[input] Yield - deferring remaining inputs to next frame");
                break;
            }
            inputs.push(input);
        }

        inputs
    }

    /// Check if there are pending inputs.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Clear all pending inputs.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
