use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

use cosmos_core::{DomainResult, Entity, ScientistId, ValidationError};

use crate::record::Record;
use crate::validate::required_text;

const ENTITY: &str = "Scientist";

/// Fields for constructing a [`Scientist`], as received from callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewScientist {
    pub name: Option<String>,
    pub field_of_study: Option<String>,
}

impl NewScientist {
    pub fn new(name: impl Into<String>, field_of_study: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            field_of_study: Some(field_of_study.into()),
        }
    }
}

/// A scientist. Owns zero or more missions (held by the store, not here).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scientist {
    id: Option<ScientistId>,
    name: String,
    field_of_study: String,
}

fn validate_name(name: Option<String>) -> Result<String, ValidationError> {
    required_text(ENTITY, "name", name, "Scientist must have a name")
}

fn validate_field_of_study(field_of_study: Option<String>) -> Result<String, ValidationError> {
    required_text(
        ENTITY,
        "field_of_study",
        field_of_study,
        "Scientist must have field of study.",
    )
}

impl Scientist {
    /// Build an unpersisted scientist, validating every field.
    pub fn new(draft: NewScientist) -> DomainResult<Self> {
        Ok(Self {
            id: None,
            name: validate_name(draft.name)?,
            field_of_study: validate_field_of_study(draft.field_of_study)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_of_study(&self) -> &str {
        &self.field_of_study
    }

    pub fn set_name(&mut self, name: Option<String>) -> DomainResult<&str> {
        self.name = validate_name(name)?;
        Ok(&self.name)
    }

    pub fn set_field_of_study(&mut self, field_of_study: Option<String>) -> DomainResult<&str> {
        self.field_of_study = validate_field_of_study(field_of_study)?;
        Ok(&self.field_of_study)
    }
}

impl Entity for Scientist {
    type Id = ScientistId;
    const TABLE: &'static str = "scientists";

    fn id(&self) -> Option<ScientistId> {
        self.id
    }

    fn set_id(&mut self, id: ScientistId) {
        self.id = Some(id);
    }
}

impl Record for Scientist {
    fn to_json(&self) -> JsonValue {
        json!({
            "id": self.id,
            "name": self.name,
            "field_of_study": self.field_of_study,
        })
    }
}
