//! ECS Components for the manipulable object.

use bevy::prelude::*;

use crate::object::{Attachment, ManipulableObject, SurfaceColor};

/// The manipulable object.
///
/// The wrapped `ManipulableObject` is authoritative; its world transform is
/// copied onto the entity's `Transform` after the frame's updates.
#[derive(Component, Debug, Clone)]
pub struct Manipulable(pub ManipulableObject);

impl Manipulable {
    pub fn new(object: ManipulableObject) -> Self {
        Self(object)
    }

    pub fn object(&self) -> &ManipulableObject {
        &self.0
    }

    pub fn attachment(&self) -> &Attachment {
        &self.0.attachment
    }

    /// Colors the renderer should show this frame, one per surface.
    pub fn displayed_colors(&self) -> &[SurfaceColor] {
        self.0.displayed_colors()
    }
}
