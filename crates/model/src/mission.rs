use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

use cosmos_core::{DomainResult, Entity, MissionId, PlanetId, ScientistId, ValidationError};

use crate::record::Record;
use crate::validate::{required_id, required_text};

const ENTITY: &str = "Mission";

/// Fields for constructing a [`Mission`], as received from callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMission {
    pub name: Option<String>,
    pub planet_id: Option<PlanetId>,
    pub scientist_id: Option<ScientistId>,
}

impl NewMission {
    pub fn new(name: impl Into<String>, planet_id: PlanetId, scientist_id: ScientistId) -> Self {
        Self {
            name: Some(name.into()),
            planet_id: Some(planet_id),
            scientist_id: Some(scientist_id),
        }
    }
}

/// A mission, owned jointly by one planet and one scientist.
///
/// Parents are referenced by foreign-key id only. Whether the ids point at
/// existing rows is the store's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
    id: Option<MissionId>,
    name: String,
    planet_id: PlanetId,
    scientist_id: ScientistId,
}

fn validate_name(name: Option<String>) -> Result<String, ValidationError> {
    required_text(ENTITY, "name", name, "Mission must have name.")
}

fn validate_planet_id(planet_id: Option<PlanetId>) -> Result<PlanetId, ValidationError> {
    required_id(ENTITY, "planet_id", planet_id, "Mission must have planet ID.")
}

fn validate_scientist_id(
    scientist_id: Option<ScientistId>,
) -> Result<ScientistId, ValidationError> {
    required_id(ENTITY, "scientist_id", scientist_id, "Mission must have scientist ID.")
}

impl Mission {
    /// Build an unpersisted mission, validating every field.
    pub fn new(draft: NewMission) -> DomainResult<Self> {
        Ok(Self {
            id: None,
            name: validate_name(draft.name)?,
            planet_id: validate_planet_id(draft.planet_id)?,
            scientist_id: validate_scientist_id(draft.scientist_id)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn planet_id(&self) -> PlanetId {
        self.planet_id
    }

    pub fn scientist_id(&self) -> ScientistId {
        self.scientist_id
    }

    pub fn set_name(&mut self, name: Option<String>) -> DomainResult<&str> {
        self.name = validate_name(name)?;
        Ok(&self.name)
    }

    pub fn set_planet_id(&mut self, planet_id: Option<PlanetId>) -> DomainResult<PlanetId> {
        self.planet_id = validate_planet_id(planet_id)?;
        Ok(self.planet_id)
    }

    pub fn set_scientist_id(
        &mut self,
        scientist_id: Option<ScientistId>,
    ) -> DomainResult<ScientistId> {
        self.scientist_id = validate_scientist_id(scientist_id)?;
        Ok(self.scientist_id)
    }
}

impl Entity for Mission {
    type Id = MissionId;
    const TABLE: &'static str = "missions";

    fn id(&self) -> Option<MissionId> {
        self.id
    }

    fn set_id(&mut self, id: MissionId) {
        self.id = Some(id);
    }
}

impl Record for Mission {
    fn to_json(&self) -> JsonValue {
        json!({
            "id": self.id,
            "name": self.name,
            "planet_id": self.planet_id,
            "scientist_id": self.scientist_id,
        })
    }
}
