//! Collision categories and pair filtering
//!
//! Each collider advertises the category it belongs to and a filter mask of
//! categories it is willing to collide with. The filter is advisory: the
//! pairing loop consults it before running geometry tests, and a collider's
//! own overlap test never reads it.

use bitflags::bitflags;

bitflags! {
    /// Collision categories for filtering which colliders get pair-tested
    ///
    /// Each category is a bit in a 32-bit mask, so a filter can name any
    /// union of categories.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Category: u32 {
        /// No categories
        const NONE = 0;
        /// Default category for most colliders
        const DEFAULT = 1 << 0;
        /// Player-controlled objects
        const PLAYER = 1 << 1;
        /// Enemy/NPC objects
        const ENEMY = 1 << 2;
        /// Static world geometry (walls, curbs)
        const STATIC = 1 << 3;
        /// Trigger zones (detect but don't block)
        const TRIGGER = 1 << 4;
        /// Projectiles
        const PROJECTILE = 1 << 5;
        /// Collectible items
        const PICKUP = 1 << 6;
        /// All categories (collide with everything)
        const ALL = 0xFFFFFFFF;
    }
}

/// Decide whether a pair of colliders should be geometry-tested at all
///
/// Both sides must agree: A's category must be in B's filter and B's
/// category must be in A's filter. Asymmetric filters therefore suppress
/// the pair, which lets triggers watch a category without that category
/// watching back.
pub fn should_test(
    category_a: Category,
    filter_a: Category,
    category_b: Category,
    filter_b: Category,
) -> bool {
    category_a.intersects(filter_b) && category_b.intersects(filter_a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_bitflags() {
        let combined = Category::PLAYER | Category::ENEMY;
        assert!(combined.contains(Category::PLAYER));
        assert!(combined.contains(Category::ENEMY));
        assert!(!combined.contains(Category::STATIC));
    }

    #[test]
    fn test_all_contains_every_category() {
        for category in [
            Category::DEFAULT,
            Category::PLAYER,
            Category::ENEMY,
            Category::STATIC,
            Category::TRIGGER,
            Category::PROJECTILE,
            Category::PICKUP,
        ] {
            assert!(Category::ALL.contains(category));
        }
    }

    #[test]
    fn test_should_test_mutual() {
        // Player filters enemies, enemy filters players: pair is eligible
        assert!(should_test(
            Category::PLAYER,
            Category::ENEMY,
            Category::ENEMY,
            Category::PLAYER,
        ));
    }

    #[test]
    fn test_should_test_one_way_is_suppressed() {
        // Player wants enemies, but the enemy only watches projectiles
        assert!(!should_test(
            Category::PLAYER,
            Category::ENEMY,
            Category::ENEMY,
            Category::PROJECTILE,
        ));
    }

    #[test]
    fn test_should_test_default_all() {
        // Two colliders with the ALL filter always pair up
        assert!(should_test(
            Category::DEFAULT,
            Category::ALL,
            Category::STATIC,
            Category::ALL,
        ));
    }

    #[test]
    fn test_should_test_none_never_pairs() {
        assert!(!should_test(
            Category::PLAYER,
            Category::NONE,
            Category::ENEMY,
            Category::ALL,
        ));
    }
}
