//! The manipulable object: world transform, attachment, hit shape and colors.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ObjectConfig;
use crate::pose::Handedness;

/// Linear RGBA color of one surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct SurfaceColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl SurfaceColor {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Builds an opaque color from a `0xRRGGBB` literal.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| f32::from(((hex >> shift) & 0xff) as u8) / 255.0;
        Self::rgb(channel(16), channel(8), channel(0))
    }

    pub const WHITE: SurfaceColor = SurfaceColor::rgb(1.0, 1.0, 1.0);
    pub const RED: SurfaceColor = SurfaceColor::rgb(1.0, 0.0, 0.0);
    pub const GREEN: SurfaceColor = SurfaceColor::rgb(0.0, 1.0, 0.0);
    pub const BLUE: SurfaceColor = SurfaceColor::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: SurfaceColor = SurfaceColor::rgb(1.0, 1.0, 0.0);
    pub const MAGENTA: SurfaceColor = SurfaceColor::rgb(1.0, 0.0, 1.0);
    pub const CYAN: SurfaceColor = SurfaceColor::rgb(0.0, 1.0, 1.0);

    /// Default face colors of the cube, in box face order.
    pub fn cube_palette() -> Vec<SurfaceColor> {
        vec![
            Self::RED,
            Self::GREEN,
            Self::BLUE,
            Self::YELLOW,
            Self::MAGENTA,
            Self::CYAN,
        ]
    }

    /// Linear interpolation toward `target`; `t = 0` returns `self` unchanged.
    pub fn lerp(self, target: SurfaceColor, t: f32) -> Self {
        Self {
            r: self.r + (target.r - self.r) * t,
            g: self.g + (target.g - self.g) * t,
            b: self.b + (target.b - self.b) * t,
            a: self.a + (target.a - self.a) * t,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for SurfaceColor {
    fn from(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<SurfaceColor> for [f32; 4] {
    fn from(c: SurfaceColor) -> Self {
        c.to_array()
    }
}

/// Geometry used for ray intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitShape {
    /// Axis-aligned box in object space, centered on the origin, before scale.
    Cuboid { size: Vec3 },
    /// Nothing to intersect; only proximity can engage the object.
    Empty,
}

/// Coordinate space the object transform is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceFrame {
    World,
    Controller(Handedness),
}

/// Who currently owns the object.
///
/// This is the only place holding state lives; whether a hand holds the
/// object and which frame the object is in are both derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Attachment {
    #[default]
    Free,
    /// Held by one hand. `local` is the object transform relative to that
    /// hand's pose at the moment of the grab.
    Held { hand: Handedness, local: Transform },
    /// Held by both hands; driven in world space by the pinch gesture.
    Pinched,
}

impl Attachment {
    pub fn frame(&self) -> ReferenceFrame {
        match self {
            Self::Held { hand, .. } => ReferenceFrame::Controller(*hand),
            Self::Free | Self::Pinched => ReferenceFrame::World,
        }
    }

    /// Whether `hand` currently holds the object.
    pub fn is_held_by(&self, hand: Handedness) -> bool {
        match self {
            Self::Free => false,
            Self::Held { hand: holder, .. } => *holder == hand,
            Self::Pinched => true,
        }
    }

    pub fn is_pinched(&self) -> bool {
        matches!(self, Self::Pinched)
    }
}

/// The single object the user manipulates.
#[derive(Debug, Clone, PartialEq)]
pub struct ManipulableObject {
    /// World-space transform, kept current every frame regardless of frame.
    pub transform: Transform,
    pub attachment: Attachment,
    pub shape: HitShape,
    base_colors: Vec<SurfaceColor>,
    displayed_colors: Vec<SurfaceColor>,
}

impl ManipulableObject {
    pub fn new(transform: Transform, shape: HitShape, base_colors: Vec<SurfaceColor>) -> Self {
        Self {
            transform,
            attachment: Attachment::Free,
            shape,
            displayed_colors: base_colors.clone(),
            base_colors,
        }
    }

    pub fn from_config(config: &ObjectConfig) -> Self {
        let transform = Transform::from_translation(Vec3::from_array(config.position))
            .with_scale(Vec3::from_array(config.scale));
        let shape = HitShape::Cuboid {
            size: Vec3::from_array(config.size),
        };
        Self::new(transform, shape, config.base_colors.clone())
    }

    pub fn world_position(&self) -> Vec3 {
        self.transform.translation
    }

    pub fn base_colors(&self) -> &[SurfaceColor] {
        &self.base_colors
    }

    pub fn displayed_colors(&self) -> &[SurfaceColor] {
        &self.displayed_colors
    }

    pub(crate) fn displayed_colors_mut(&mut self) -> &mut [SurfaceColor] {
        &mut self.displayed_colors
    }

    pub fn is_multi_surface(&self) -> bool {
        self.base_colors.len() > 1
    }
}
