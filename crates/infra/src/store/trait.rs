use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use cosmos_core::{DomainError, Entity, MissionId, PlanetId, ScientistId};
use cosmos_model::{Mission, NewMission, NewPlanet, NewScientist, Planet, Scientist};

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer failure.
///
/// Propagated to callers unchanged; `Domain` only appears through the
/// `create_*` conveniences, which construct records before inserting them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("foreign key violation ({constraint}): {table}.{column} = {id} has no matching row")]
    ForeignKeyViolation {
        constraint: String,
        table: &'static str,
        column: &'static str,
        id: i64,
    },

    #[error("duplicate primary key in {table}: {id}")]
    DuplicateKey { table: &'static str, id: i64 },

    #[error("id sequence exhausted for {table}")]
    SequenceExhausted { table: &'static str },

    #[error("{table} row {id} not found")]
    NotFound { table: &'static str, id: i64 },

    #[error("{table} record has not been persisted")]
    NotPersisted { table: &'static str },

    #[error("store lock poisoned")]
    Poisoned,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Missions of one planet, plus the scientists reachable through them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetRelations {
    /// Insertion order.
    pub missions: Vec<Mission>,
    /// Distinct, in order of first appearance among `missions`.
    pub scientists: Vec<Scientist>,
}

/// Missions of one scientist, plus the planets reachable through them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScientistRelations {
    pub missions: Vec<Mission>,
    pub planets: Vec<Planet>,
}

/// Relational storage for planets, scientists and missions.
///
/// Inserts assign identifiers (or honor a preset one if it is free). Deleting a
/// planet or scientist removes its missions atomically with the parent and
/// reports how many were removed.
pub trait Store: Send + Sync {
    fn insert_planet(&self, planet: Planet) -> StoreResult<Planet>;
    fn insert_scientist(&self, scientist: Scientist) -> StoreResult<Scientist>;
    fn insert_mission(&self, mission: Mission) -> StoreResult<Mission>;

    /// Replace a persisted row with the record's current fields.
    fn update_planet(&self, planet: &Planet) -> StoreResult<()>;
    fn update_scientist(&self, scientist: &Scientist) -> StoreResult<()>;
    fn update_mission(&self, mission: &Mission) -> StoreResult<()>;

    fn get_planet(&self, id: PlanetId) -> StoreResult<Option<Planet>>;
    fn get_scientist(&self, id: ScientistId) -> StoreResult<Option<Scientist>>;
    fn get_mission(&self, id: MissionId) -> StoreResult<Option<Mission>>;

    fn list_planets(&self) -> StoreResult<Vec<Planet>>;
    fn list_scientists(&self) -> StoreResult<Vec<Scientist>>;
    fn list_missions(&self) -> StoreResult<Vec<Mission>>;

    /// Delete a planet and its missions; returns the number of missions removed.
    fn delete_planet(&self, id: PlanetId) -> StoreResult<usize>;
    /// Delete a scientist and its missions; returns the number of missions removed.
    fn delete_scientist(&self, id: ScientistId) -> StoreResult<usize>;
    fn delete_mission(&self, id: MissionId) -> StoreResult<()>;

    /// Missions referencing the planet, in insertion order.
    fn missions_for_planet(&self, id: PlanetId) -> StoreResult<Vec<Mission>>;
    /// Missions referencing the scientist, in insertion order.
    fn missions_for_scientist(&self, id: ScientistId) -> StoreResult<Vec<Mission>>;

    fn create_planet(&self, draft: NewPlanet) -> StoreResult<Planet> {
        self.insert_planet(Planet::new(draft))
    }

    fn create_scientist(&self, draft: NewScientist) -> StoreResult<Scientist> {
        self.insert_scientist(Scientist::new(draft)?)
    }

    fn create_mission(&self, draft: NewMission) -> StoreResult<Mission> {
        self.insert_mission(Mission::new(draft)?)
    }

    /// Missions of `planet` and the distinct scientists behind them.
    ///
    /// Computed on every call from the mission rows; nothing is cached.
    fn planet_relations(&self, planet: &Planet) -> StoreResult<PlanetRelations> {
        let id = planet.id().ok_or(StoreError::NotPersisted {
            table: Planet::TABLE,
        })?;
        let missions = self.missions_for_planet(id)?;

        let mut seen = HashSet::new();
        let mut scientists = Vec::new();
        for mission in &missions {
            if seen.insert(mission.scientist_id()) {
                if let Some(scientist) = self.get_scientist(mission.scientist_id())? {
                    scientists.push(scientist);
                }
            }
        }

        Ok(PlanetRelations {
            missions,
            scientists,
        })
    }

    /// Missions of `scientist` and the distinct planets behind them.
    fn scientist_relations(&self, scientist: &Scientist) -> StoreResult<ScientistRelations> {
        let id = scientist.id().ok_or(StoreError::NotPersisted {
            table: Scientist::TABLE,
        })?;
        let missions = self.missions_for_scientist(id)?;

        let mut seen = HashSet::new();
        let mut planets = Vec::new();
        for mission in &missions {
            if seen.insert(mission.planet_id()) {
                if let Some(planet) = self.get_planet(mission.planet_id())? {
                    planets.push(planet);
                }
            }
        }

        Ok(ScientistRelations { missions, planets })
    }
}

impl<S> Store for Arc<S>
where
    S: Store + ?Sized,
{
    fn insert_planet(&self, planet: Planet) -> StoreResult<Planet> {
        (**self).insert_planet(planet)
    }

    fn insert_scientist(&self, scientist: Scientist) -> StoreResult<Scientist> {
        (**self).insert_scientist(scientist)
    }

    fn insert_mission(&self, mission: Mission) -> StoreResult<Mission> {
        (**self).insert_mission(mission)
    }

    fn update_planet(&self, planet: &Planet) -> StoreResult<()> {
        (**self).update_planet(planet)
    }

    fn update_scientist(&self, scientist: &Scientist) -> StoreResult<()> {
        (**self).update_scientist(scientist)
    }

    fn update_mission(&self, mission: &Mission) -> StoreResult<()> {
        (**self).update_mission(mission)
    }

    fn get_planet(&self, id: PlanetId) -> StoreResult<Option<Planet>> {
        (**self).get_planet(id)
    }

    fn get_scientist(&self, id: ScientistId) -> StoreResult<Option<Scientist>> {
        (**self).get_scientist(id)
    }

    fn get_mission(&self, id: MissionId) -> StoreResult<Option<Mission>> {
        (**self).get_mission(id)
    }

    fn list_planets(&self) -> StoreResult<Vec<Planet>> {
        (**self).list_planets()
    }

    fn list_scientists(&self) -> StoreResult<Vec<Scientist>> {
        (**self).list_scientists()
    }

    fn list_missions(&self) -> StoreResult<Vec<Mission>> {
        (**self).list_missions()
    }

    fn delete_planet(&self, id: PlanetId) -> StoreResult<usize> {
        (**self).delete_planet(id)
    }

    fn delete_scientist(&self, id: ScientistId) -> StoreResult<usize> {
        (**self).delete_scientist(id)
    }

    fn delete_mission(&self, id: MissionId) -> StoreResult<()> {
        (**self).delete_mission(id)
    }

    fn missions_for_planet(&self, id: PlanetId) -> StoreResult<Vec<Mission>> {
        (**self).missions_for_planet(id)
    }

    fn missions_for_scientist(&self, id: ScientistId) -> StoreResult<Vec<Mission>> {
        (**self).missions_for_scientist(id)
    }
}
