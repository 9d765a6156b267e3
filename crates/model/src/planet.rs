use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

use cosmos_core::{Entity, PlanetId};

use crate::record::Record;

/// Fields for constructing a [`Planet`]. Every column is nullable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlanet {
    pub name: Option<String>,
    pub distance_from_earth: Option<i64>,
    pub nearest_star: Option<String>,
}

impl NewPlanet {
    pub fn new(
        name: impl Into<String>,
        distance_from_earth: i64,
        nearest_star: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            distance_from_earth: Some(distance_from_earth),
            nearest_star: Some(nearest_star.into()),
        }
    }
}

/// A planet. Owns zero or more missions; deleting it deletes them.
///
/// Planets carry no field constraints, so construction cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    id: Option<PlanetId>,
    name: Option<String>,
    distance_from_earth: Option<i64>,
    nearest_star: Option<String>,
}

impl Planet {
    pub fn new(draft: NewPlanet) -> Self {
        Self {
            id: None,
            name: draft.name,
            distance_from_earth: draft.distance_from_earth,
            nearest_star: draft.nearest_star,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn distance_from_earth(&self) -> Option<i64> {
        self.distance_from_earth
    }

    pub fn nearest_star(&self) -> Option<&str> {
        self.nearest_star.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) -> Option<&str> {
        self.name = name;
        self.name()
    }

    pub fn set_distance_from_earth(&mut self, distance: Option<i64>) -> Option<i64> {
        self.distance_from_earth = distance;
        self.distance_from_earth
    }

    pub fn set_nearest_star(&mut self, nearest_star: Option<String>) -> Option<&str> {
        self.nearest_star = nearest_star;
        self.nearest_star()
    }
}

impl Entity for Planet {
    type Id = PlanetId;
    const TABLE: &'static str = "planets";

    fn id(&self) -> Option<PlanetId> {
        self.id
    }

    fn set_id(&mut self, id: PlanetId) {
        self.id = Some(id);
    }
}

impl Record for Planet {
    fn to_json(&self) -> JsonValue {
        json!({
            "id": self.id,
            "name": self.name,
            "distance_from_earth": self.distance_from_earth,
            "nearest_star": self.nearest_star,
        })
    }
}
