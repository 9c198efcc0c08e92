//! Collision error types

use std::fmt;

use crate::shape::Shape;

/// Error type for collision dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionError {
    /// No overlap predicate is registered for a pair of shape variants
    ///
    /// This means the shape-pair configuration is incomplete. It is never
    /// reported as "no collision", since that would mask geometry bugs as
    /// shapes that simply never touch.
    UnsupportedPair {
        /// Shape of the collider the test was invoked on
        first: Shape,
        /// Shape of the collider it was tested against
        second: Shape,
    },
}

impl fmt::Display for CollisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionError::UnsupportedPair { first, second } => {
                write!(
                    f,
                    "no overlap predicate registered for shape pair {:?} vs {:?}",
                    first, second
                )
            }
        }
    }
}

impl std::error::Error for CollisionError {}
