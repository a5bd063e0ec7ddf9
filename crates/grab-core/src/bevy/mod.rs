//! Bevy integration for the manipulation core.
//!
//! This module wraps the engine-independent grab, pinch and highlight logic
//! in ECS components, resources, messages and systems, and bundles them in
//! `ManipulationPlugin`.

pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod systems;

#[cfg(test)]
pub(crate) mod test_utils;

pub use components::*;
pub use events::*;
pub use plugin::{ManipulationPlugin, ManipulationSet};
pub use resources::*;
