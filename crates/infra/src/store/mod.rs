//! Storage client boundary.
//!
//! Records are validated before they get here. The store owns identity
//! assignment, referential integrity and cascade deletion.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryStore;
pub use r#trait::{PlanetRelations, ScientistRelations, Store, StoreError, StoreResult};
