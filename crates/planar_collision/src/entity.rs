//! Entity identity for collision participants

use slotmap::new_key_type;

new_key_type! {
    /// Opaque handle identifying a collision participant
    ///
    /// Uses generational indexing to prevent the ABA problem where a handle
    /// could point to a reused slot. The collision core never dereferences
    /// an `EntityId`; it only stores handles in contact sets and compares
    /// them for equality.
    pub struct EntityId;
}
