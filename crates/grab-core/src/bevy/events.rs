//! ECS Messages for the manipulation systems.
//!
//! Note: In Bevy 0.18+, buffered events use Message trait instead of Event.

use bevy::prelude::*;

use crate::hit_test::Engagement;
use crate::pose::Handedness;
use crate::selection::ReleaseOutcome;

/// Phase of a controller select (trigger) action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectPhase {
    Start,
    End,
}

/// Message carrying a select-start or select-end from a controller.
///
/// Start and end share one message type so that their relative order within a
/// frame is preserved.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectEvent {
    pub hand: Handedness,
    pub phase: SelectPhase,
}

impl SelectEvent {
    pub fn start(hand: Handedness) -> Self {
        Self {
            hand,
            phase: SelectPhase::Start,
        }
    }

    pub fn end(hand: Handedness) -> Self {
        Self {
            hand,
            phase: SelectPhase::End,
        }
    }
}

/// Message fired when a hand takes hold of the object.
#[derive(Message, Debug, Clone, Copy)]
pub struct GrabbedEvent {
    pub hand: Handedness,
    pub engagement: Engagement,
    /// Whether this grab made both hands hold the object.
    pub joined_pinch: bool,
}

/// Message fired when a hand lets go of the object.
#[derive(Message, Debug, Clone, Copy)]
pub struct ReleasedEvent {
    pub hand: Handedness,
    pub outcome: ReleaseOutcome,
}

/// Message fired when the two-handed pinch gesture begins.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct PinchStartedEvent;

/// Message fired when the two-handed pinch gesture ends.
#[derive(Message, Debug, Clone, Copy)]
pub struct PinchEndedEvent {
    /// Object scale when the gesture ended.
    pub final_scale: Vec3,
}
