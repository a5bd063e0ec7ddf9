//! Tracked controller poses.

use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Which hand a controller belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub const BOTH: [Handedness; 2] = [Handedness::Left, Handedness::Right];

    /// The opposite hand.
    pub const fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// World-space pose of a controller. Controllers never carry scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerPose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl ControllerPose {
    pub const fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Pose at `position` pointing down the world -Z axis.
    pub const fn at(position: Vec3) -> Self {
        Self::new(position, Quat::IDENTITY)
    }

    /// Pointing direction: local -Z rotated into world space.
    pub fn forward(&self) -> Vec3 {
        (self.rotation * Vec3::NEG_Z).normalize_or_zero()
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite()
    }
}

/// Latest known pose of each hand. A hand without tracking has no pose.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HandPoses {
    pub left: Option<ControllerPose>,
    pub right: Option<ControllerPose>,
}

impl HandPoses {
    pub fn new(left: Option<ControllerPose>, right: Option<ControllerPose>) -> Self {
        Self { left, right }
    }

    pub fn get(&self, hand: Handedness) -> Option<&ControllerPose> {
        match hand {
            Handedness::Left => self.left.as_ref(),
            Handedness::Right => self.right.as_ref(),
        }
    }

    pub fn set(&mut self, hand: Handedness, pose: Option<ControllerPose>) {
        match hand {
            Handedness::Left => self.left = pose,
            Handedness::Right => self.right = pose,
        }
    }

    /// Both poses, when both hands are tracked.
    pub fn both(&self) -> Option<(&ControllerPose, &ControllerPose)> {
        self.left.as_ref().zip(self.right.as_ref())
    }

    /// Tracked hands with their poses, left first.
    pub fn iter(&self) -> impl Iterator<Item = (Handedness, &ControllerPose)> {
        Handedness::BOTH
            .into_iter()
            .filter_map(|hand| self.get(hand).map(|pose| (hand, pose)))
    }
}
