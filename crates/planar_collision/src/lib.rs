//! Collision detection core for the planar engine
//!
//! This crate provides the narrow-phase collision layer for 2D games:
//! - Colliders with lazily cached axis-aligned bounds
//! - Category/filter tags for deciding which pairs get tested
//! - Shape-pair overlap dispatch over a closed set of shape variants
//! - Per-collider contact lifecycle (entered / contact / exited events)
//!
//! The crate does no broad-phase pruning and no physical response; an
//! external loop owns pairing, calls [`Collider::collides`] on eligible
//! pairs, and feeds each collider's overlap set into
//! [`Collider::update_contacts`] once per frame.

pub mod category;
pub mod collider;
pub mod debug;
pub mod dispatch;
pub mod entity;
pub mod error;
pub mod shape;

// Re-export commonly used types
pub use category::{should_test, Category};
pub use collider::{Collider, CollisionObserver, ContactTransitions};
pub use debug::{Color, DebugDraw};
pub use dispatch::{OverlapFn, PairTable};
pub use entity::EntityId;
pub use error::CollisionError;
pub use shape::{box_vs_box, box_vs_container, container_vs_container, Shape};
