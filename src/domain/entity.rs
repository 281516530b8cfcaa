//! Domain Layer - Core Entity Trait
//!
//! All persisted records carry a unique, copyable identifier.

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;

    /// Whether this entity is the one identified by `id`
    fn matches(&self, id: Self::Id) -> bool {
        self.id() == id
    }
}
