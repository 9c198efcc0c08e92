//! planar - 2D game-engine collision layer
//!
//! The root crate ties the member crates together and owns application
//! configuration. Most users want the re-exports below plus
//! [`config::AppConfig`].

pub mod config;

pub use planar_math::{Rect, Size, Vec2};
pub use planar_collision::{
    should_test, Category, Collider, CollisionError, CollisionObserver, Color,
    ContactTransitions, DebugDraw, EntityId, PairTable, Shape,
};
pub use planar_text::{BitmapFont, FontRegion};
