//! End-to-end behavior of the model and store together.

use std::sync::Arc;

use proptest::prelude::*;
use serde_json::json;

use cosmos_core::{DomainError, Entity, PlanetId, ScientistId};
use cosmos_infra::{InMemoryStore, Store, StoreConfig, StoreError};
use cosmos_model::{Mission, NewMission, NewPlanet, NewScientist, Record, Scientist};

fn store() -> Arc<InMemoryStore> {
    cosmos_observability::init();
    Arc::new(InMemoryStore::with_config(StoreConfig::default()))
}

#[test]
fn scientist_construction_scenarios() {
    assert!(Scientist::new(NewScientist::new("Carl Sagan", "Astronomy")).is_ok());

    let err = Scientist::new(NewScientist::new("", "Astronomy")).unwrap_err();
    assert_eq!(
        err.as_validation().map(|e| e.message.as_str()),
        Some("Scientist must have a name")
    );
}

#[test]
fn mission_without_planet_id_is_rejected_before_storage() {
    let store = store();
    let draft = NewMission {
        name: Some("Voyager".to_string()),
        scientist_id: Some(ScientistId::new(1)),
        planet_id: None,
    };

    let err = Mission::new(draft.clone()).unwrap_err();
    assert!(matches!(&err, DomainError::Validation(e) if e.message == "Mission must have planet ID."));

    // Same failure through the store, and nothing is written.
    assert_eq!(store.create_mission(draft).unwrap_err(), StoreError::Domain(err));
    assert!(store.list_missions().unwrap().is_empty());
}

#[test]
fn mission_appears_in_both_parents_collections() {
    let store = store();
    let mars = store
        .create_planet(NewPlanet::new("Mars", 225_000_000, "Sun"))
        .unwrap();
    let sagan = store
        .create_scientist(NewScientist::new("Carl Sagan", "Astronomy"))
        .unwrap();
    assert_eq!(sagan.id(), Some(ScientistId::new(1)));

    let mission = store
        .create_mission(NewMission::new("MarsOne", mars.id().unwrap(), ScientistId::new(1)))
        .unwrap();

    let planet_side = store.planet_relations(&mars).unwrap();
    assert_eq!(planet_side.missions, vec![mission.clone()]);
    assert_eq!(planet_side.scientists, vec![sagan.clone()]);

    let scientist_side = store.scientist_relations(&sagan).unwrap();
    assert_eq!(scientist_side.missions, vec![mission]);
    assert_eq!(scientist_side.planets, vec![mars]);
}

#[test]
fn serialized_records_never_embed_related_objects() {
    let store = store();
    let mars = store
        .create_planet(NewPlanet::new("Mars", 225_000_000, "Sun"))
        .unwrap();
    let sagan = store
        .create_scientist(NewScientist::new("Carl Sagan", "Astronomy"))
        .unwrap();
    let mission = store
        .create_mission(NewMission::new(
            "MarsOne",
            mars.id().unwrap(),
            sagan.id().unwrap(),
        ))
        .unwrap();

    assert_eq!(
        mars.to_json(),
        json!({"id": 1, "name": "Mars", "distance_from_earth": 225_000_000, "nearest_star": "Sun"})
    );
    assert_eq!(
        sagan.to_json(),
        json!({"id": 1, "name": "Carl Sagan", "field_of_study": "Astronomy"})
    );
    assert_eq!(
        mission.to_json(),
        json!({"id": 1, "name": "MarsOne", "planet_id": 1, "scientist_id": 1})
    );
}

#[test]
fn deleting_a_scientist_leaves_no_dangling_missions() {
    let store = store();
    let sagan = store
        .create_scientist(NewScientist::new("Carl Sagan", "Astronomy"))
        .unwrap();
    let sagan_id = sagan.id().unwrap();

    for name in ["Mars", "Venus", "Titan"] {
        let planet = store.create_planet(NewPlanet::new(name, 1, "Sun")).unwrap();
        store
            .create_mission(NewMission::new(format!("{name} probe"), planet.id().unwrap(), sagan_id))
            .unwrap();
    }

    assert_eq!(store.delete_scientist(sagan_id).unwrap(), 3);
    assert!(store.list_missions().unwrap().is_empty());
    assert_eq!(store.list_planets().unwrap().len(), 3);
    assert!(matches!(
        store.missions_for_scientist(sagan_id).unwrap_err(),
        StoreError::NotFound { table: "scientists", .. }
    ));
}

#[test]
fn relations_reflect_mission_changes_immediately() {
    let store = store();
    let mars = store.create_planet(NewPlanet::new("Mars", 1, "Sun")).unwrap();
    let sagan = store
        .create_scientist(NewScientist::new("Carl Sagan", "Astronomy"))
        .unwrap();
    let mission = store
        .create_mission(NewMission::new("MarsOne", mars.id().unwrap(), sagan.id().unwrap()))
        .unwrap();
    assert_eq!(store.planet_relations(&mars).unwrap().scientists.len(), 1);

    store.delete_mission(mission.id().unwrap()).unwrap();
    let relations = store.planet_relations(&mars).unwrap();
    assert!(relations.missions.is_empty());
    assert!(relations.scientists.is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        ..ProptestConfig::default()
    })]

    /// Property: deleting a planet with N missions removes exactly those N.
    #[test]
    fn planet_delete_cascades_all_its_missions(n in 0usize..20, other in 0usize..5) {
        let store = InMemoryStore::new();
        let doomed = store.create_planet(NewPlanet::new("Doomed", 1, "Sun")).unwrap();
        let safe = store.create_planet(NewPlanet::new("Safe", 2, "Sun")).unwrap();
        let scientist = store
            .create_scientist(NewScientist::new("Carl Sagan", "Astronomy"))
            .unwrap();
        let sid = scientist.id().unwrap();

        for i in 0..n {
            store.create_mission(NewMission::new(format!("d{i}"), doomed.id().unwrap(), sid)).unwrap();
        }
        for i in 0..other {
            store.create_mission(NewMission::new(format!("s{i}"), safe.id().unwrap(), sid)).unwrap();
        }

        prop_assert_eq!(store.delete_planet(doomed.id().unwrap()).unwrap(), n);
        let remaining = store.list_missions().unwrap();
        prop_assert_eq!(remaining.len(), other);
        prop_assert!(remaining.iter().all(|m| m.planet_id() == safe.id().unwrap()));
    }

    /// Property: the store accepts a mission for any existing parents,
    /// and rejects any id that has no row.
    #[test]
    fn foreign_keys_are_checked_by_the_store(bogus in 2i64..i64::MAX) {
        let store = InMemoryStore::new();
        let planet = store.create_planet(NewPlanet::default()).unwrap();
        let scientist = store
            .create_scientist(NewScientist::new("a", "b"))
            .unwrap();

        // Model layer accepts the unknown id; the store rejects it.
        let draft = NewMission::new("m", PlanetId::new(bogus), scientist.id().unwrap());
        prop_assert!(Mission::new(draft.clone()).is_ok());
        let is_fk_violation = matches!(
            store.create_mission(draft),
            Err(StoreError::ForeignKeyViolation { .. })
        );
        prop_assert!(is_fk_violation);

        let ok = NewMission::new("m", planet.id().unwrap(), scientist.id().unwrap());
        prop_assert!(store.create_mission(ok).is_ok());
    }
}
