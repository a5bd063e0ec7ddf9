//! Systems for the manipulation core.
//!
//! Organized by stage, in per-frame order:
//! - input: Drain the external input queue into poses and select messages
//! - selection: Grab/release on select messages, move held objects with their hand
//! - engagement: Proximity/ray engagement per hand
//! - gesture: Two-handed pinch scale/translate
//! - highlight: Recolor from engagement and pinch state
//! - sync: Copy the object's world transform onto its entity

pub mod engagement;
pub mod gesture;
pub mod highlight;
pub mod input;
pub mod selection;
pub mod sync;

pub use engagement::*;
pub use gesture::*;
pub use highlight::*;
pub use input::*;
pub use selection::*;
pub use sync::*;
