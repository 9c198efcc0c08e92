//! Shape variants and their overlap predicates
//!
//! The shape set is closed: every variant is a tag here, and every supported
//! pairing has a predicate below. Predicates are pure functions of two
//! bounds rectangles with no side effects.

use planar_math::Rect;

/// The concrete geometry of a collider
///
/// Variants carry no state of their own; a collider's extent lives in its
/// bounds rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A solid axis-aligned box that collides when it overlaps another shape
    Box,
    /// An enclosing region that reports contact when an inhabitant reaches
    /// its border (e.g., the edge of the play field)
    Container,
}

/// Box vs box: axis-aligned rectangle intersection
///
/// Edge-touching boxes do not collide (the intersection test is strict).
pub fn box_vs_box(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

/// Box vs container: containment-escape test
///
/// A container reports contact when the box is no longer fully inside its
/// bounds, i.e. the box has reached or crossed the container's border.
/// Containment is edge-inclusive, so a box flush against the inside of the
/// border is still contained.
pub fn box_vs_container(box_bounds: &Rect, container_bounds: &Rect) -> bool {
    !container_bounds.contains_rect(box_bounds)
}

/// Container vs container: plain bounds intersection
pub fn container_vs_container(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_vs_box_overlapping() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(box_vs_box(&a, &b));
    }

    #[test]
    fn test_box_vs_box_disjoint() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(20, 20, 10, 10);
        assert!(!box_vs_box(&a, &b));
    }

    #[test]
    fn test_box_vs_box_edge_touching() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert!(!box_vs_box(&a, &b));
    }

    #[test]
    fn test_box_vs_container_inside() {
        let container = Rect::new(0, 0, 100, 100);
        let inside = Rect::new(40, 40, 10, 10);
        assert!(!box_vs_container(&inside, &container));
    }

    #[test]
    fn test_box_vs_container_flush_against_border() {
        // Touching the border from the inside is still contained
        let container = Rect::new(0, 0, 100, 100);
        let flush = Rect::new(0, 0, 10, 10);
        assert!(!box_vs_container(&flush, &container));
    }

    #[test]
    fn test_box_vs_container_crossing_border() {
        let container = Rect::new(0, 0, 100, 100);
        let crossing = Rect::new(95, 40, 10, 10);
        assert!(box_vs_container(&crossing, &container));
    }

    #[test]
    fn test_box_vs_container_outside() {
        let container = Rect::new(0, 0, 100, 100);
        let outside = Rect::new(200, 200, 10, 10);
        assert!(box_vs_container(&outside, &container));
    }

    #[test]
    fn test_container_vs_container() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(50, 50, 100, 100);
        let c = Rect::new(500, 500, 100, 100);
        assert!(container_vs_container(&a, &b));
        assert!(!container_vs_container(&a, &c));
    }
}
