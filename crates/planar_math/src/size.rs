//! Integer width/height pair

use serde::{Serialize, Deserialize};

/// A width/height pair in integer units
///
/// Returned by text measurement and useful anywhere an extent is needed
/// without a position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Self = Self { width: 0, height: 0 };

    /// Create a new size
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero or negative
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}
