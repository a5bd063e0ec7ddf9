//! Pinch-Grab Core Library
//!
//! Two-handed direct manipulation of a single object for mixed-reality
//! controllers: proximity/ray grabbing, one-hand rigid following,
//! two-hand pinch scaling and engagement highlighting.
//!
//! The geometry and state machines in the top-level modules are
//! engine-independent; `bevy` wires them into an ECS frame loop.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod highlight;
pub mod object;
pub mod pinch;
pub mod pose;
pub mod selection;

// Bevy integration
pub mod bevy;

pub use config::{ConfigError, HighlightConfig, ManipulationConfig, ObjectConfig};
pub use highlight::HighlightLevel;
pub use hit_test::{Engagement, RayHit};
pub use object::{Attachment, HitShape, ManipulableObject, ReferenceFrame, SurfaceColor};
pub use pinch::{PinchSnapshot, PinchState, PinchTransition};
pub use pose::{ControllerPose, HandPoses, Handedness};
pub use selection::{ReleaseOutcome, SelectOutcome};
