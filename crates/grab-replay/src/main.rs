//! Pinch-Grab Replay
//!
//! Runs the manipulation core headlessly over a recorded controller session
//! and logs the object's state after every frame.
//!
//! Usage: `grab-replay <script.json>`

use std::path::Path;
use std::process::ExitCode;

use bevy::prelude::*;
use grab_core::bevy::{ControllerInput, InputQueue, Manipulable, ManipulationPlugin};
use grab_core::object::SurfaceColor;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::report::{ReplayReportPlugin, ReplaySummary, describe};
use crate::script::{ReplayError, ReplayScript};

mod report;
mod script;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let Some(path) = std::env::args().nth(1) else {
        tracing::error!("[replay] usage: grab-replay <script.json>");
        return ExitCode::from(2);
    };

    match run(Path::new(&path)) {
        Ok(summary) => {
            tracing::info!(
                "[replay] done: {} grabs, {} releases, {} pinches, pinch scales {:?}",
                summary.grabs,
                summary.releases,
                summary.pinches,
                summary.pinch_scales
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("[replay] {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path) -> Result<ReplaySummary, ReplayError> {
    let script = ReplayScript::load(path)?;
    tracing::info!("[replay] loaded {} frames from {}", script.frames.len(), path.display());

    let queue = InputQueue::new();
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(ManipulationPlugin::new(script.config(), queue.clone()));
    app.add_plugins(ReplayReportPlugin);
    // Startup: spawn the object
    app.update();

    for (index, frame) in script.frames.iter().enumerate() {
        queue.extend(frame.inputs.iter().cloned());
        queue.push(ControllerInput::Yield);
        app.update();
        log_frame(index, &mut app)?;
    }

    // A Yield inside a frame leaves inputs behind; flush them.
    let mut index = script.frames.len();
    while !queue.is_empty() {
        app.update();
        log_frame(index, &mut app)?;
        index += 1;
    }

    Ok(app.world().resource::<ReplaySummary>().clone())
}

fn log_frame(index: usize, app: &mut App) -> Result<(), ReplayError> {
    let world = app.world_mut();
    let mut query = world.query::<&Manipulable>();
    let manipulable = query.single(world).map_err(|_| ReplayError::MissingObject)?;
    let object = manipulable.object();
    tracing::info!(
        "[replay] frame {index}: {} at {:?} scale {:?}",
        describe(&object.attachment),
        object.transform.translation,
        object.transform.scale
    );
    tracing::debug!(
        "[replay] frame {index}: colors {:?}",
        object
            .displayed_colors()
            .iter()
            .copied()
            .map(SurfaceColor::to_array)
            .collect::<Vec<_>>()
    );
    Ok(())
}
