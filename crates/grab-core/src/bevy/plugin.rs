//! Bevy plugin wiring the manipulation systems into the frame loop.
//!
//! The plugin is headless: it needs no window, renderer or XR runtime, so it
//! runs under `MinimalPlugins` in tests and in the replay driver. The
//! embedding application reads `Transform` and `Manipulable` colors from the
//! object entity to draw it.

use bevy::prelude::*;

use crate::bevy::events::*;
use crate::bevy::resources::*;
use crate::bevy::systems;
use crate::bevy::Manipulable;
use crate::config::ManipulationConfig;
use crate::object::ManipulableObject;

/// Per-frame stages, run in this order every `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ManipulationSet {
    /// Drain the external input queue.
    Input,
    /// Apply select-start / select-end.
    Selection,
    /// Move a one-hand-held object with its hand.
    Follow,
    /// Evaluate engagement per hand.
    HitTest,
    /// Advance the pinch gesture.
    Gesture,
    /// Recolor the object.
    Highlight,
}

/// Headless plugin containing the grab, pinch and highlight logic.
pub struct ManipulationPlugin {
    pub config: ManipulationConfig,
    pub input_queue: Option<InputQueue>,
    /// Spawn the object described by `config.object` on startup. Disable when
    /// the application spawns its own `Manipulable` entity.
    pub spawn_object: bool,
}

impl Default for ManipulationPlugin {
    fn default() -> Self {
        Self {
            config: ManipulationConfig::default(),
            input_queue: None,
            spawn_object: true,
        }
    }
}

impl ManipulationPlugin {
    pub fn new(config: ManipulationConfig, input_queue: InputQueue) -> Self {
        Self {
            config,
            input_queue: Some(input_queue),
            spawn_object: true,
        }
    }
}

impl Plugin for ManipulationPlugin {
    fn build(&self, app: &mut App) {
        // ====================================================================
        // Resources
        // ====================================================================
        app.insert_resource(ManipulationSettings(self.config.clone()))
            .insert_resource(self.input_queue.clone().unwrap_or_default())
            .insert_resource(TrackedHands::default())
            .insert_resource(HandEngagement::default())
            .insert_resource(PinchStateRes::default());

        // ====================================================================
        // Messages
        // ====================================================================
        app.add_message::<SelectEvent>()
            .add_message::<GrabbedEvent>()
            .add_message::<ReleasedEvent>()
            .add_message::<PinchStartedEvent>()
            .add_message::<PinchEndedEvent>();

        // ====================================================================
        // Systems
        // ====================================================================
        app.configure_sets(
            Update,
            (
                ManipulationSet::Input,
                ManipulationSet::Selection,
                ManipulationSet::Follow,
                ManipulationSet::HitTest,
                ManipulationSet::Gesture,
                ManipulationSet::Highlight,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                systems::process_input.in_set(ManipulationSet::Input),
                systems::handle_select_events.in_set(ManipulationSet::Selection),
                systems::follow_holding_hand.in_set(ManipulationSet::Follow),
                systems::update_engagement.in_set(ManipulationSet::HitTest),
                systems::update_pinch_gesture.in_set(ManipulationSet::Gesture),
                systems::update_highlight.in_set(ManipulationSet::Highlight),
            ),
        );

        app.add_systems(PostUpdate, systems::sync_object_transform);

        if self.spawn_object {
            app.add_systems(Startup, spawn_manipulable_object);
        }
    }
}

/// Spawns the object described by the configuration.
fn spawn_manipulable_object(mut commands: Commands, settings: Res<ManipulationSettings>) {
    let object = ManipulableObject::from_config(&settings.0.object);
    let transform = object.transform;
    tracing::info!(
        "[manipulation] spawning object at {:?} (scale {:?}, {} surfaces)",
        transform.translation,
        transform.scale,
        object.base_colors().len()
    );
    commands.spawn((Name::new("Manipulable"), Manipulable::new(object), transform));
}
