//! Entity trait defining the core abstraction for every stored record

/// Store-assigned identifier shared by every entity kind.
pub type EntityId = i64;

/// Base trait for all entities handled by a [`Repository`](crate::core::store::Repository).
///
/// An entity is a plain record whose identity is assigned by the store on
/// first save. Before that the id is `None`. Services never mutate an entity
/// beyond stamping an id onto it; everything else is caller-supplied.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "factures", "patients")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "facture", "patient")
    fn resource_name_singular() -> &'static str;

    /// Get the store-assigned identifier, if any
    fn id(&self) -> Option<EntityId>;

    /// Overwrite the identifier in place
    fn set_id(&mut self, id: EntityId);

    /// Return the entity with `id` stamped onto it
    fn with_id(mut self, id: EntityId) -> Self {
        self.set_id(id);
        self
    }

    /// Whether the store has already assigned an identity
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}
