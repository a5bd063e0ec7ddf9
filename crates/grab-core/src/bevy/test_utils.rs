//! Test utilities for headless Bevy integration tests.
//!
//! Provides `TestApp`, a wrapper around `bevy::app::App` that uses
//! `MinimalPlugins` + `ManipulationPlugin` for testing the manipulation
//! logic without a rendering, windowing or XR backend.

use bevy::prelude::*;

use crate::bevy::plugin::ManipulationPlugin;
use crate::bevy::resources::{
    ControllerInput, HandEngagement, InputQueue, PinchStateRes, TrackedHands,
};
use crate::bevy::Manipulable;
use crate::config::ManipulationConfig;
use crate::object::ManipulableObject;
use crate::pinch::PinchState;
use crate::pose::{ControllerPose, HandPoses, Handedness};

/// A headless Bevy app wrapper for testing.
///
/// Inputs are pushed onto the shared queue and applied on the next
/// `update`, exactly as an external controller source would.
pub(crate) struct TestApp {
    pub app: App,
    pub queue: InputQueue,
}

impl TestApp {
    /// Create a new test app with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ManipulationConfig::default())
    }

    pub fn with_config(config: ManipulationConfig) -> Self {
        let queue = InputQueue::new();
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(ManipulationPlugin::new(config, queue.clone()));
        // Run one update to spawn the object and initialize resources
        app.update();
        Self { app, queue }
    }

    /// Run a single frame update.
    pub fn update(&mut self) {
        self.app.update();
    }

    /// Push a raw input to the queue.
    pub fn push(&self, input: ControllerInput) {
        self.queue.push(input);
    }

    pub fn set_pose(&self, hand: Handedness, pose: &ControllerPose) {
        self.push(ControllerInput::pose(hand, pose));
    }

    pub fn select_start(&self, hand: Handedness) {
        self.push(ControllerInput::SelectStart { hand });
    }

    pub fn select_end(&self, hand: Handedness) {
        self.push(ControllerInput::SelectEnd { hand });
    }

    /// Snapshot of the manipulable object.
    pub fn object(&mut self) -> ManipulableObject {
        let world = self.app.world_mut();
        let mut query = world.query::<&Manipulable>();
        query
            .single(world)
            .expect("exactly one manipulable object")
            .0
            .clone()
    }

    /// The `Transform` on the object entity, as a renderer would read it.
    pub fn entity_transform(&mut self) -> Transform {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&Transform, With<Manipulable>>();
        *query.single(world).expect("exactly one manipulable object")
    }

    pub fn pinch_state(&self) -> PinchState {
        self.app.world().resource::<PinchStateRes>().0
    }

    pub fn tracked_hands(&self) -> HandPoses {
        self.app.world().resource::<TrackedHands>().0
    }

    pub fn engagement(&self) -> HandEngagement {
        self.app.world().resource::<HandEngagement>().clone()
    }
}
