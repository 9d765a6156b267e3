use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use cosmos_core::{Entity, MissionId, PlanetId, ScientistId};
use cosmos_model::{Mission, Planet, Scientist};

use super::r#trait::{Store, StoreError, StoreResult};
use crate::config::StoreConfig;
use crate::schema::foreign_key_name;

/// One table: rows in insertion order, an id index into them, and the id
/// sequence. Sequences only move forward; ids are never reused.
#[derive(Debug)]
struct Table<R: Entity> {
    rows: BTreeMap<u64, R>,
    index: HashMap<R::Id, u64>,
    next_slot: u64,
    last_id: i64,
}

impl<R: Entity> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            index: HashMap::new(),
            next_slot: 0,
            last_id: 0,
        }
    }
}

impl<R> Table<R>
where
    R: Entity + Clone,
    R::Id: From<i64> + Into<i64>,
{
    fn insert(&mut self, mut row: R) -> StoreResult<R> {
        let id = match row.id() {
            Some(id) => {
                if self.index.contains_key(&id) {
                    return Err(StoreError::DuplicateKey {
                        table: R::TABLE,
                        id: id.into(),
                    });
                }
                self.last_id = self.last_id.max(id.into());
                id
            }
            None => {
                let next = self
                    .last_id
                    .checked_add(1)
                    .ok_or(StoreError::SequenceExhausted { table: R::TABLE })?;
                self.last_id = next;
                let id: R::Id = next.into();
                row.set_id(id);
                id
            }
        };

        let raw: i64 = id.into();
        tracing::debug!(table = R::TABLE, id = raw, "inserted row");
        let slot = self.next_slot;
        self.next_slot += 1;
        self.index.insert(id, slot);
        self.rows.insert(slot, row.clone());
        Ok(row)
    }

    fn persisted_id(row: &R) -> StoreResult<R::Id> {
        row.id().ok_or(StoreError::NotPersisted { table: R::TABLE })
    }

    fn not_found(id: R::Id) -> StoreError {
        StoreError::NotFound {
            table: R::TABLE,
            id: id.into(),
        }
    }

    fn contains(&self, id: R::Id) -> bool {
        self.index.contains_key(&id)
    }

    fn get(&self, id: R::Id) -> Option<&R> {
        self.index.get(&id).and_then(|slot| self.rows.get(slot))
    }

    /// Rows in insertion order.
    fn values(&self) -> impl Iterator<Item = &R> {
        self.rows.values()
    }

    fn ensure_exists(&self, id: R::Id) -> StoreResult<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(Self::not_found(id))
        }
    }

    /// Replace a row in place; it keeps its insertion position.
    fn update(&mut self, row: &R) -> StoreResult<()> {
        let id = Self::persisted_id(row)?;
        let slot = *self.index.get(&id).ok_or_else(|| Self::not_found(id))?;
        let raw: i64 = id.into();
        tracing::debug!(table = R::TABLE, id = raw, "updated row");
        self.rows.insert(slot, row.clone());
        Ok(())
    }

    fn remove(&mut self, id: R::Id) -> StoreResult<R> {
        let row = self
            .index
            .remove(&id)
            .and_then(|slot| self.rows.remove(&slot))
            .ok_or_else(|| Self::not_found(id))?;
        let raw: i64 = id.into();
        tracing::debug!(table = R::TABLE, id = raw, "deleted row");
        Ok(row)
    }

    /// Drop every row for which `keep` is false; returns how many went.
    fn retain(&mut self, keep: impl Fn(&R) -> bool) -> usize {
        let before = self.rows.len();
        self.rows.retain(|_, row| keep(row));
        let rows = &self.rows;
        self.index.retain(|_, slot| rows.contains_key(slot));
        before - self.rows.len()
    }
}

#[derive(Debug, Default)]
struct Tables {
    planets: Table<Planet>,
    scientists: Table<Scientist>,
    missions: Table<Mission>,
}

impl Tables {
    fn check_foreign_keys(&self, mission: &Mission) -> StoreResult<()> {
        let planet_id = mission.planet_id();
        if !self.planets.contains(planet_id) {
            return Err(foreign_key_violation(
                "planet_id",
                Planet::TABLE,
                planet_id.get(),
            ));
        }

        let scientist_id = mission.scientist_id();
        if !self.scientists.contains(scientist_id) {
            return Err(foreign_key_violation(
                "scientist_id",
                Scientist::TABLE,
                scientist_id.get(),
            ));
        }

        Ok(())
    }

    /// Remove every mission matching `owned`; returns how many went.
    fn cascade_missions(&mut self, owned: impl Fn(&Mission) -> bool) -> usize {
        self.missions.retain(|mission| !owned(mission))
    }

    fn missions_where(&self, pred: impl Fn(&Mission) -> bool) -> Vec<Mission> {
        self.missions
            .values()
            .filter(|m| pred(m))
            .cloned()
            .collect()
    }
}

fn foreign_key_violation(column: &'static str, referred: &'static str, id: i64) -> StoreError {
    let constraint = foreign_key_name(Mission::TABLE, column, referred);
    tracing::warn!(constraint = constraint.as_str(), id, "foreign key violation");
    StoreError::ForeignKeyViolation {
        constraint,
        table: Mission::TABLE,
        column,
        id,
    }
}

/// In-memory relational store.
///
/// Intended for tests/dev. All tables sit behind one lock, so a cascade
/// delete is atomic with its parent's removal.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    config: StoreConfig,
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            tables: RwLock::new(Tables::default()),
        }
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| StoreError::Poisoned)
    }
}

impl Store for InMemoryStore {
    fn insert_planet(&self, planet: Planet) -> StoreResult<Planet> {
        self.write()?.planets.insert(planet)
    }

    fn insert_scientist(&self, scientist: Scientist) -> StoreResult<Scientist> {
        self.write()?.scientists.insert(scientist)
    }

    fn insert_mission(&self, mission: Mission) -> StoreResult<Mission> {
        let mut tables = self.write()?;
        if self.config.enforce_foreign_keys {
            tables.check_foreign_keys(&mission)?;
        }
        tables.missions.insert(mission)
    }

    fn update_planet(&self, planet: &Planet) -> StoreResult<()> {
        self.write()?.planets.update(planet)
    }

    fn update_scientist(&self, scientist: &Scientist) -> StoreResult<()> {
        self.write()?.scientists.update(scientist)
    }

    fn update_mission(&self, mission: &Mission) -> StoreResult<()> {
        let mut tables = self.write()?;
        if self.config.enforce_foreign_keys {
            tables.check_foreign_keys(mission)?;
        }
        tables.missions.update(mission)
    }

    fn get_planet(&self, id: PlanetId) -> StoreResult<Option<Planet>> {
        Ok(self.read()?.planets.get(id).cloned())
    }

    fn get_scientist(&self, id: ScientistId) -> StoreResult<Option<Scientist>> {
        Ok(self.read()?.scientists.get(id).cloned())
    }

    fn get_mission(&self, id: MissionId) -> StoreResult<Option<Mission>> {
        Ok(self.read()?.missions.get(id).cloned())
    }

    fn list_planets(&self) -> StoreResult<Vec<Planet>> {
        Ok(self.read()?.planets.values().cloned().collect())
    }

    fn list_scientists(&self) -> StoreResult<Vec<Scientist>> {
        Ok(self.read()?.scientists.values().cloned().collect())
    }

    fn list_missions(&self) -> StoreResult<Vec<Mission>> {
        Ok(self.read()?.missions.values().cloned().collect())
    }

    fn delete_planet(&self, id: PlanetId) -> StoreResult<usize> {
        let mut tables = self.write()?;
        tables.planets.ensure_exists(id)?;

        let removed = tables.cascade_missions(|m| m.planet_id() == id);
        tables.planets.remove(id)?;
        if removed > 0 {
            tracing::info!(planet_id = id.get(), missions = removed, "cascaded planet delete");
        }
        Ok(removed)
    }

    fn delete_scientist(&self, id: ScientistId) -> StoreResult<usize> {
        let mut tables = self.write()?;
        tables.scientists.ensure_exists(id)?;

        let removed = tables.cascade_missions(|m| m.scientist_id() == id);
        tables.scientists.remove(id)?;
        if removed > 0 {
            tracing::info!(scientist_id = id.get(), missions = removed, "cascaded scientist delete");
        }
        Ok(removed)
    }

    fn delete_mission(&self, id: MissionId) -> StoreResult<()> {
        self.write()?.missions.remove(id).map(|_| ())
    }

    fn missions_for_planet(&self, id: PlanetId) -> StoreResult<Vec<Mission>> {
        let tables = self.read()?;
        tables.planets.ensure_exists(id)?;
        Ok(tables.missions_where(|m| m.planet_id() == id))
    }

    fn missions_for_scientist(&self, id: ScientistId) -> StoreResult<Vec<Mission>> {
        let tables = self.read()?;
        tables.scientists.ensure_exists(id)?;
        Ok(tables.missions_where(|m| m.scientist_id() == id))
    }
}
