//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Records start out unpersisted (`id() == None`); the storage layer assigns
/// the identifier on insert.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Relational table backing this entity.
    const TABLE: &'static str;

    /// Returns the entity identifier, if one has been assigned.
    fn id(&self) -> Option<Self::Id>;

    /// Attach the storage-assigned identifier.
    fn set_id(&mut self, id: Self::Id);

    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}
