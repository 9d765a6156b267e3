//! Infrastructure layer: relational schema, storage client seam, config.

pub mod config;
pub mod schema;
pub mod store;

pub use config::StoreConfig;
pub use store::{
    InMemoryStore, PlanetRelations, ScientistRelations, Store, StoreError, StoreResult,
};
