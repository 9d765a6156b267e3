//! `cosmos-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no storage concerns):
//! identifiers, the entity trait and the error model shared by the model and
//! storage crates.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, ValidationError};
pub use id::{MissionId, PlanetId, ScientistId};
