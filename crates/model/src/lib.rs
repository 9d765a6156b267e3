//! Planets, scientists and the missions linking them.
//!
//! Records are validated on every write to a constrained field, at
//! construction and on later mutation, so an invalid record is never
//! observable. Storage lives elsewhere (`cosmos-infra`); this crate does no IO.

pub mod mission;
pub mod planet;
pub mod record;
pub mod scientist;
mod validate;

pub use mission::{Mission, NewMission};
pub use planet::{NewPlanet, Planet};
pub use record::Record;
pub use scientist::{NewScientist, Scientist};
