//! Grab and release handling.

use bevy::prelude::*;

use crate::bevy::{
    GrabbedEvent, Manipulable, ManipulationSettings, ReleasedEvent, SelectEvent, SelectPhase,
    TrackedHands,
};
use crate::object::Attachment;
use crate::selection::{self, ReleaseOutcome, SelectOutcome};

/// System to apply select-start / select-end messages in arrival order.
pub fn handle_select_events(
    settings: Res<ManipulationSettings>,
    hands: Res<TrackedHands>,
    mut events: MessageReader<SelectEvent>,
    mut objects: Query<&mut Manipulable>,
    mut grabbed_events: MessageWriter<GrabbedEvent>,
    mut released_events: MessageWriter<ReleasedEvent>,
) {
    if events.is_empty() {
        return;
    }
    let Ok(mut manipulable) = objects.single_mut() else {
        // Nothing to select; still consume the messages.
        events.clear();
        return;
    };
    let object = &mut manipulable.0;

    for event in events.read() {
        match event.phase {
            SelectPhase::Start => {
                let outcome = selection::select_start(
                    event.hand,
                    &hands.0,
                    object,
                    settings.0.proximity_threshold,
                );
                match outcome {
                    SelectOutcome::Grabbed(engagement) => {
                        tracing::info!(
                            "[selection] {} hand grabbed object via {}",
                            event.hand,
                            engagement.kind()
                        );
                        grabbed_events.write(GrabbedEvent {
                            hand: event.hand,
                            engagement,
                            joined_pinch: false,
                        });
                    }
                    SelectOutcome::JoinedPinch(engagement) => {
                        tracing::info!(
                            "[selection] {} hand joined hold via {}",
                            event.hand,
                            engagement.kind()
                        );
                        grabbed_events.write(GrabbedEvent {
                            hand: event.hand,
                            engagement,
                            joined_pinch: true,
                        });
                    }
                    SelectOutcome::Missed => {
                        tracing::debug!("[selection] {} hand select missed", event.hand);
                    }
                    SelectOutcome::Ignored => {
                        tracing::debug!("[selection] {} hand select ignored", event.hand);
                    }
                }
            }
            SelectPhase::End => {
                let outcome = selection::select_end(event.hand, &hands.0, object);
                match outcome {
                    ReleaseOutcome::NotHolding => {
                        tracing::debug!("[selection] {} hand released nothing", event.hand);
                    }
                    ReleaseOutcome::Released | ReleaseOutcome::LeftPinch { .. } => {
                        tracing::info!("[selection] {} hand released: {:?}", event.hand, outcome);
                        released_events.write(ReleasedEvent {
                            hand: event.hand,
                            outcome,
                        });
                    }
                }
            }
        }
    }
}

/// System to move a one-hand-held object rigidly with its hand.
pub fn follow_holding_hand(hands: Res<TrackedHands>, mut objects: Query<&mut Manipulable>) {
    let Ok(mut manipulable) = objects.single_mut() else {
        return;
    };
    // Checked through a shared borrow so a free object is not flagged as changed.
    if matches!(manipulable.attachment(), Attachment::Held { .. }) {
        selection::follow_holder(&hands.0, &mut manipulable.0);
    }
}
