//! Cycle-free serialization shared by all record types.

use cosmos_core::Entity;
use serde_json::Value as JsonValue;

/// A persisted-or-persistable record.
///
/// `to_json` emits scalar columns and foreign-key ids only. Relationships are
/// never embedded, so mutually-referencing records cannot recurse.
pub trait Record: Entity {
    fn to_json(&self) -> JsonValue;
}
