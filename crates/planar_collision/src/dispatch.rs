//! Shape-pair dispatch
//!
//! Resolves the overlap predicate for a pair of concrete shape variants at
//! call time. The table is keyed by the ordered pair of shape tags; lookup
//! falls back to the reversed pair with swapped operands, so registering one
//! direction covers both and every resolved test is symmetric by
//! construction.

use std::collections::HashMap;

use planar_math::Rect;

use crate::error::CollisionError;
use crate::shape::{box_vs_box, box_vs_container, container_vs_container, Shape};

/// An overlap predicate over two bounds rectangles
pub type OverlapFn = fn(&Rect, &Rect) -> bool;

/// Dispatch table mapping shape-variant pairs to overlap predicates
///
/// The default table covers every supported pair. A pair with no entry in
/// either direction is a configuration error surfaced as
/// [`CollisionError::UnsupportedPair`], never as a silent `false`.
pub struct PairTable {
    entries: HashMap<(Shape, Shape), OverlapFn>,
}

impl PairTable {
    /// Create a table with no registered pairs
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register the predicate for a shape pair
    ///
    /// One direction suffices; lookup handles the reverse order by swapping
    /// the operands. Registering the same pair again replaces the predicate.
    pub fn register(&mut self, first: Shape, second: Shape, predicate: OverlapFn) {
        self.entries.insert((first, second), predicate);
    }

    /// Check whether a pair can be tested in either order
    pub fn supports(&self, first: Shape, second: Shape) -> bool {
        self.entries.contains_key(&(first, second))
            || self.entries.contains_key(&(second, first))
    }

    /// Resolve and run the overlap test for two shapes
    ///
    /// Looks up `(first, second)` and applies the predicate to the bounds in
    /// that order; otherwise looks up `(second, first)` and applies it with
    /// the bounds swapped.
    pub fn test(
        &self,
        first: Shape,
        first_bounds: &Rect,
        second: Shape,
        second_bounds: &Rect,
    ) -> Result<bool, CollisionError> {
        if let Some(predicate) = self.entries.get(&(first, second)) {
            return Ok(predicate(first_bounds, second_bounds));
        }
        if let Some(predicate) = self.entries.get(&(second, first)) {
            return Ok(predicate(second_bounds, first_bounds));
        }
        log::warn!(
            "unsupported shape pair: {:?} vs {:?}",
            first,
            second
        );
        Err(CollisionError::UnsupportedPair { first, second })
    }
}

impl Default for PairTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.register(Shape::Box, Shape::Box, box_vs_box);
        table.register(Shape::Box, Shape::Container, box_vs_container);
        table.register(Shape::Container, Shape::Container, container_vs_container);
        table
    }
}
