//! Collider: bounds caching, categories, and contact lifecycle
//!
//! A [`Collider`] is attached to one game object. It owns a lazily cached
//! bounds rectangle, the category/filter tags the pairing loop uses to
//! decide which pairs to test, and the frame-to-frame contact bookkeeping
//! that turns raw overlap sets into entered/contact/exited events.

use std::collections::HashSet;

use planar_math::{Rect, Vec2};

use crate::category::Category;
use crate::debug::{Color, DebugDraw};
use crate::dispatch::PairTable;
use crate::entity::EntityId;
use crate::error::CollisionError;
use crate::shape::Shape;

/// Receiver for contact lifecycle events
///
/// Injected at construction via [`Collider::with_observer`]. Within one
/// update the callbacks fire in a fixed order: entered, then contact, then
/// exited.
pub trait CollisionObserver {
    /// Entities overlapping this cycle that were not overlapping last cycle
    fn on_entered(&mut self, entities: &HashSet<EntityId>);

    /// Every entity overlapping this cycle
    ///
    /// This receives the full current contact set, including entities that
    /// just entered, not only the ones sustained from the previous cycle.
    fn on_contact(&mut self, entities: &HashSet<EntityId>);

    /// Entities overlapping last cycle that are no longer overlapping
    fn on_exited(&mut self, entities: &HashSet<EntityId>);
}

/// The transition sets computed by one contact update
#[derive(Clone, Debug, Default)]
pub struct ContactTransitions {
    /// Newly overlapping entities
    pub entered: HashSet<EntityId>,
    /// All currently overlapping entities
    pub contacts: HashSet<EntityId>,
    /// Entities that stopped overlapping
    pub exited: HashSet<EntityId>,
}

/// A collidable shape attached to a game entity
///
/// Width, height, and offset are in the same units as position. The bounds
/// rectangle is centered on `position + offset` and recomputed only after a
/// mutation marks it stale.
pub struct Collider {
    width: i32,
    height: i32,
    offset: Vec2,
    position: Vec2,
    shape: Shape,
    category: Category,
    filter: Category,
    bounds: Rect,
    bounds_stale: bool,
    bounds_recomputes: u64,
    previous: HashSet<EntityId>,
    current: HashSet<EntityId>,
    observer: Option<Box<dyn CollisionObserver>>,
}

impl Collider {
    /// Create a collider with the given shape and category
    ///
    /// The filter defaults to [`Category::ALL`]: the collider is willing to
    /// be tested against every category until told otherwise.
    pub fn new(shape: Shape, category: Category) -> Self {
        Self {
            width: 0,
            height: 0,
            offset: Vec2::ZERO,
            position: Vec2::ZERO,
            shape,
            category,
            filter: Category::ALL,
            bounds: Rect::ZERO,
            bounds_stale: true,
            bounds_recomputes: 0,
            previous: HashSet::new(),
            current: HashSet::new(),
            observer: None,
        }
    }

    /// Set the extent of this collider
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self.bounds_stale = true;
        self
    }

    /// Set the shape-local offset from the owning entity's position
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self.bounds_stale = true;
        self
    }

    /// Set the starting position
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self.bounds_stale = true;
        self
    }

    /// Set the collision filter
    pub fn with_filter(mut self, filter: Category) -> Self {
        self.filter = filter;
        self
    }

    /// Attach a lifecycle observer
    pub fn with_observer(mut self, observer: Box<dyn CollisionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// The concrete shape variant
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// The category this collider advertises about itself
    pub fn category(&self) -> Category {
        self.category
    }

    /// The categories this collider is willing to collide with
    ///
    /// Advisory only: the pairing loop reads it via
    /// [`should_test`](crate::category::should_test) before invoking
    /// geometry tests. [`Collider::collides`] itself never consults it.
    pub fn filter(&self) -> Category {
        self.filter
    }

    /// Replace the collision filter outright (not additive)
    pub fn set_filter(&mut self, filter: Category) {
        self.filter = filter;
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Move the collider, invalidating the cached bounds
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.bounds_stale = true;
    }

    /// Change the shape-local offset, invalidating the cached bounds
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
        self.bounds_stale = true;
    }

    /// Resize the collider, invalidating the cached bounds
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.bounds_stale = true;
    }

    /// The axis-aligned rectangle currently occupied by this collider
    ///
    /// The rectangle is centered on `position + offset`:
    /// `x = position.x + offset.x - width / 2` (integer half-extent,
    /// truncating cast) and likewise for y. Recomputed exactly when a
    /// mutation has marked the cache stale; otherwise the read has no side
    /// effects.
    pub fn bounds(&mut self) -> Rect {
        if self.bounds_stale {
            self.bounds = Rect::new(
                (self.position.x + self.offset.x - (self.width / 2) as f32) as i32,
                (self.position.y + self.offset.y - (self.height / 2) as f32) as i32,
                self.width,
                self.height,
            );
            self.bounds_stale = false;
            self.bounds_recomputes += 1;
        }
        self.bounds
    }

    /// Number of times the cached bounds have been rebuilt
    pub fn bounds_recomputes(&self) -> u64 {
        self.bounds_recomputes
    }

    /// Test geometric overlap against another collider
    ///
    /// Resolves the predicate for the pair of concrete shape variants
    /// through `table`. Category and filter are NOT consulted here; callers
    /// filter pairs first (and skip self-pairs), or every eligible pair is
    /// geometry-tested regardless of category.
    pub fn collides(
        &mut self,
        other: &mut Collider,
        table: &PairTable,
    ) -> Result<bool, CollisionError> {
        let bounds = self.bounds();
        let other_bounds = other.bounds();
        table.test(self.shape, &bounds, other.shape, &other_bounds)
    }

    /// Entities overlapping this collider as of the last update
    pub fn current_contacts(&self) -> &HashSet<EntityId> {
        &self.current
    }

    /// Entities that were overlapping as of the update before last
    pub fn previous_contacts(&self) -> &HashSet<EntityId> {
        &self.previous
    }

    /// Feed one cycle's overlap set into the contact lifecycle
    ///
    /// Computes `entered = new - previous` and `exited = previous - new`,
    /// then notifies the observer in order: `on_entered` (if any entered),
    /// `on_contact` with the FULL new set if it is non-empty (an entity
    /// that just entered is reported here too, in the same cycle), and
    /// `on_exited` (if any exited). Afterwards the new set becomes the
    /// previous set for the next cycle.
    pub fn update_contacts(&mut self, new_set: HashSet<EntityId>) -> ContactTransitions {
        let entered: HashSet<EntityId> =
            new_set.difference(&self.previous).copied().collect();
        let exited: HashSet<EntityId> =
            self.previous.difference(&new_set).copied().collect();

        if let Some(observer) = self.observer.as_deref_mut() {
            if !entered.is_empty() {
                observer.on_entered(&entered);
            }
            if !new_set.is_empty() {
                observer.on_contact(&new_set);
            }
            if !exited.is_empty() {
                observer.on_exited(&exited);
            }
        }

        self.previous = new_set.clone();
        self.current = new_set.clone();

        ContactTransitions {
            entered,
            contacts: new_set,
            exited,
        }
    }

    /// Reset both contact sets without firing any callback
    ///
    /// Used on entity deactivation: a silent reset, not a lifecycle
    /// transition, so no exit events are observed. Idempotent.
    pub fn clear_contacts(&mut self) {
        self.current.clear();
        self.previous.clear();
    }

    /// Outline the bounds in the default debug color (red)
    pub fn draw(&mut self, target: &mut dyn DebugDraw) {
        self.draw_with_color(target, Color::RED);
    }

    /// Outline the bounds in an explicit color
    pub fn draw_with_color(&mut self, target: &mut dyn DebugDraw, color: Color) {
        let bounds = self.bounds();
        target.draw_outline(bounds, color);
    }
}
