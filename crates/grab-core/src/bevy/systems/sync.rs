//! Object → entity transform sync.

use bevy::prelude::*;

use crate::bevy::Manipulable;

/// System to copy the authoritative world transform onto the entity.
pub fn sync_object_transform(mut objects: Query<(&Manipulable, &mut Transform), Changed<Manipulable>>) {
    for (manipulable, mut transform) in &mut objects {
        if *transform != manipulable.0.transform {
            *transform = manipulable.0.transform;
        }
    }
}
