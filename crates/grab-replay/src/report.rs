//! Collects manipulation messages emitted during a replay.

use bevy::prelude::*;
use grab_core::bevy::{
    GrabbedEvent, ManipulationSet, PinchEndedEvent, PinchStartedEvent, ReleasedEvent,
};
use grab_core::object::Attachment;

/// Running totals of what happened during the replay.
#[derive(Resource, Debug, Clone, Default)]
pub struct ReplaySummary {
    pub grabs: usize,
    pub releases: usize,
    pub pinches: usize,
    /// Object scale at the end of each pinch gesture, in order.
    pub pinch_scales: Vec<Vec3>,
}

pub struct ReplayReportPlugin;

impl Plugin for ReplayReportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ReplaySummary>().add_systems(
            Update,
            record_messages.after(ManipulationSet::Highlight),
        );
    }
}

fn record_messages(
    mut summary: ResMut<ReplaySummary>,
    mut grabbed: MessageReader<GrabbedEvent>,
    mut released: MessageReader<ReleasedEvent>,
    mut pinch_started: MessageReader<PinchStartedEvent>,
    mut pinch_ended: MessageReader<PinchEndedEvent>,
) {
    summary.grabs += grabbed.read().count();
    summary.releases += released.read().count();
    summary.pinches += pinch_started.read().count();
    for ended in pinch_ended.read() {
        summary.pinch_scales.push(ended.final_scale);
    }
}

/// Short human-readable label for an attachment.
pub fn describe(attachment: &Attachment) -> String {
    match attachment {
        Attachment::Free => "free".to_string(),
        Attachment::Held { hand, .. } => format!("held by {hand}"),
        Attachment::Pinched => "pinched".to_string(),
    }
}
