//! Debug drawing collaborator
//!
//! The collision core can outline collider bounds for debugging, but it does
//! not render anything itself: callers supply a [`DebugDraw`] implementation
//! backed by whatever renderer the game uses.

use planar_math::Rect;
use serde::{Serialize, Deserialize};

/// An RGBA color (each component 0.0-1.0)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// White
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// Red, the default color for collider outlines
    pub const RED: Self = Self { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };

    /// Green
    pub const GREEN: Self = Self { r: 0.0, g: 1.0, b: 0.0, a: 1.0 };

    /// Blue
    pub const BLUE: Self = Self { r: 0.0, g: 0.0, b: 1.0, a: 1.0 };

    /// Create a new color with the given RGBA components
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque color with the given RGB components
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

impl From<[f32; 4]> for Color {
    fn from(rgba: [f32; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b, color.a]
    }
}

/// Rendering surface for collider debug output
///
/// The only visual contract is drawing a rectangle border at the given
/// screen bounds in the given color.
pub trait DebugDraw {
    /// Draw a rectangle outline
    fn draw_outline(&mut self, bounds: Rect, color: Color);
}
