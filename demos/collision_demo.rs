//! Collision demo
//!
//! Drives the collision core the way a game loop would, without a renderer:
//! a player box sweeps across a wall box inside a container that marks the
//! play field. Each synthetic frame runs the external pairing loop
//! (category pre-filter, pairwise geometry tests, contact lifecycle update)
//! and logs the resulting enter/contact/exit events.
//!
//! Run with: `cargo run --example collision_demo`

use std::collections::{HashMap, HashSet};

use slotmap::SlotMap;

use planar::config::AppConfig;
use planar::{
    should_test, Category, Collider, CollisionObserver, Color, DebugDraw, EntityId,
    PairTable, Rect, Shape, Vec2,
};

/// Observer that logs lifecycle events under a participant name
struct LogObserver {
    name: &'static str,
}

impl CollisionObserver for LogObserver {
    fn on_entered(&mut self, entities: &HashSet<EntityId>) {
        log::info!("{}: {} entered", self.name, entities.len());
    }

    fn on_contact(&mut self, entities: &HashSet<EntityId>) {
        log::info!("{}: {} in contact", self.name, entities.len());
    }

    fn on_exited(&mut self, entities: &HashSet<EntityId>) {
        log::info!("{}: {} exited", self.name, entities.len());
    }
}

/// Debug-draw backend that logs outlines instead of rendering them
struct LogDraw;

impl DebugDraw for LogDraw {
    fn draw_outline(&mut self, bounds: Rect, color: Color) {
        log::debug!(
            "outline ({}, {}) {}x{} in {:?}",
            bounds.x,
            bounds.y,
            bounds.w,
            bounds.h,
            color
        );
    }
}

struct Participant {
    name: &'static str,
    collider: Collider,
}

fn main() {
    let (config, config_err) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.clone()),
    )
    .init();

    if let Some(e) = config_err {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let table = PairTable::default();
    let mut participants: SlotMap<EntityId, Participant> = SlotMap::with_key();

    // Play field: contact fires when an inhabitant reaches the border
    participants.insert(Participant {
        name: "field",
        collider: Collider::new(Shape::Container, Category::STATIC)
            .with_size(200, 200)
            .with_position(Vec2::new(100.0, 100.0))
            .with_observer(Box::new(LogObserver { name: "field" })),
    });

    // A wall in the middle of the field
    participants.insert(Participant {
        name: "wall",
        collider: Collider::new(Shape::Box, Category::STATIC)
            .with_size(20, 80)
            .with_position(Vec2::new(100.0, 100.0))
            .with_observer(Box::new(LogObserver { name: "wall" })),
    });

    // The player sweeps left to right across the field
    let player = participants.insert(Participant {
        name: "player",
        collider: Collider::new(Shape::Box, Category::PLAYER)
            .with_size(16, 16)
            .with_position(Vec2::new(20.0, 100.0))
            .with_observer(Box::new(LogObserver { name: "player" })),
    });

    let keys: Vec<EntityId> = participants.keys().collect();
    let collider_color = Color::from(config.debug.collider_color);
    let mut draw = LogDraw;

    for frame in 0..24 {
        // Move the player 10 units right per frame
        let x = 20.0 + frame as f32 * 10.0;
        participants[player]
            .collider
            .set_position(Vec2::new(x, 100.0));

        // External pairing loop: category pre-filter, then geometry
        let mut overlaps: HashMap<EntityId, HashSet<EntityId>> = HashMap::new();
        for i in 0..keys.len() {
            for j in (i + 1)..keys.len() {
                let [a, b] = participants
                    .get_disjoint_mut([keys[i], keys[j]])
                    .expect("keys are distinct and live");

                let eligible = should_test(
                    a.collider.category(),
                    a.collider.filter(),
                    b.collider.category(),
                    b.collider.filter(),
                );
                if !eligible {
                    continue;
                }

                match a.collider.collides(&mut b.collider, &table) {
                    Ok(true) => {
                        overlaps.entry(keys[i]).or_default().insert(keys[j]);
                        overlaps.entry(keys[j]).or_default().insert(keys[i]);
                    }
                    Ok(false) => {}
                    Err(e) => {
                        log::error!("{} vs {}: {}", a.name, b.name, e);
                        return;
                    }
                }
            }
        }

        log::info!("frame {}: player at x={}", frame, x);
        for &key in &keys {
            let new_set = overlaps.remove(&key).unwrap_or_default();
            participants[key].collider.update_contacts(new_set);
        }

        if config.debug.show_colliders {
            for participant in participants.values_mut() {
                participant
                    .collider
                    .draw_with_color(&mut draw, collider_color);
            }
        }
    }
}
