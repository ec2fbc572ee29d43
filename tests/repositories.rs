//! Integrity rules exercised through the public repository API.

mod common;

use std::sync::Arc;

use roster::config::StoreConfig;
use roster::error::{Error, Reference, Rejection};
use roster::repo::Repositories;
use roster::store::{SqliteStore, Store};
use roster::types::{Entity, MutationResult, NewPersonnel};
use rust_decimal::Decimal;
use tempfile::TempDir;

use common::open_repositories;

fn ada(unit: i64, site: i64) -> NewPersonnel {
    NewPersonnel {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        salary: Decimal::new(90_000, 0),
        organizational_unit_id: unit,
        site_id: site,
        manager_id: Some(0),
    }
}

#[test]
fn test_engineering_scenario() {
    let temp = TempDir::new().unwrap();
    let repos = open_repositories(&temp);

    let unit = repos.units.create("Engineering").unwrap();
    assert_eq!(unit, 1);

    let err = repos.units.create("Engineering").unwrap_err();
    assert_eq!(err.rejection(), Some(&Rejection::DuplicateName));
    let named: Vec<_> = repos
        .units
        .list_all()
        .unwrap()
        .into_iter()
        .filter(|u| u.name == "Engineering")
        .collect();
    assert_eq!(named.len(), 1);

    let site = repos.sites.create("London", "United Kingdom").unwrap();
    let person = repos.personnel.create(&ada(unit, site)).unwrap();
    assert_eq!(repos.personnel.get(person).unwrap().unwrap().manager_id, None);

    let err = repos.units.delete(unit).unwrap_err();
    assert_eq!(
        err.rejection(),
        Some(&Rejection::InUse(Entity::OrganizationalUnit))
    );
    assert!(repos.units.list_all().unwrap().iter().any(|u| u.id == unit));

    repos.personnel.delete(person).unwrap();
    repos.units.delete(unit).unwrap();
    assert!(repos.units.list_all().unwrap().is_empty());
}

#[test]
fn test_round_trip_every_entity() {
    let temp = TempDir::new().unwrap();
    let repos = open_repositories(&temp);

    let unit = repos.units.create("Finance").unwrap();
    assert_eq!(repos.units.get(unit).unwrap().unwrap().name, "Finance");

    let site = repos.sites.create("São Paulo", "Brazil").unwrap();
    let stored = repos.sites.get(site).unwrap().unwrap();
    assert_eq!((stored.city.as_str(), stored.country.as_str()), ("São Paulo", "Brazil"));

    let boss = repos.personnel.create(&ada(unit, site)).unwrap();
    let fields = NewPersonnel {
        first_name: "Charles".to_string(),
        last_name: "Babbage".to_string(),
        salary: Decimal::new(1_000_000, 0),
        organizational_unit_id: unit,
        site_id: site,
        manager_id: Some(boss),
    };
    let id = repos.personnel.create(&fields).unwrap();
    assert_eq!(repos.personnel.get(id).unwrap().unwrap().fields(), fields);
}

#[test]
fn test_lists_are_ordered_by_id() {
    let temp = TempDir::new().unwrap();
    let repos = open_repositories(&temp);

    for name in ["Zeta", "Alpha", "Mid"] {
        repos.units.create(name).unwrap();
    }
    let ids: Vec<i64> = repos.units.list_all().unwrap().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_absent_ids_cause_no_mutation() {
    let temp = TempDir::new().unwrap();
    let repos = open_repositories(&temp);
    let unit = repos.units.create("Ops").unwrap();
    let site = repos.sites.create("Oslo", "Norway").unwrap();

    for id in [0, 2, 999] {
        assert!(matches!(
            repos.units.update(id, "Other").unwrap_err(),
            Error::Rejected(Rejection::NotFound(Entity::OrganizationalUnit))
        ));
        assert!(matches!(
            repos.sites.delete(id + 2).unwrap_err(),
            Error::Rejected(Rejection::NotFound(Entity::Site))
        ));
        assert!(matches!(
            repos.personnel.update(id, &ada(unit, site)).unwrap_err(),
            Error::Rejected(Rejection::NotFound(Entity::Personnel))
        ));
    }

    assert_eq!(repos.units.list_all().unwrap().len(), 1);
    assert_eq!(repos.sites.list_all().unwrap().len(), 1);
    assert!(repos.personnel.list_all().unwrap().is_empty());
}

#[test]
fn test_salary_edges() {
    let temp = TempDir::new().unwrap();
    let repos = open_repositories(&temp);
    let unit = repos.units.create("Ops").unwrap();
    let site = repos.sites.create("Oslo", "Norway").unwrap();

    for salary in [0, 1_000_000] {
        let mut fields = ada(unit, site);
        fields.salary = Decimal::new(salary, 0);
        assert!(repos.personnel.create(&fields).is_ok());
    }
    for salary in [-1, 1_000_001] {
        let mut fields = ada(unit, site);
        fields.salary = Decimal::new(salary, 0);
        let err = repos.personnel.create(&fields).unwrap_err();
        assert!(matches!(err, Error::Rejected(Rejection::Validation(_))));
    }
    assert_eq!(repos.personnel.list_all().unwrap().len(), 2);
}

#[test]
fn test_invalid_manager_reference() {
    let temp = TempDir::new().unwrap();
    let repos = open_repositories(&temp);
    let unit = repos.units.create("Ops").unwrap();
    let site = repos.sites.create("Oslo", "Norway").unwrap();

    let mut fields = ada(unit, site);
    fields.manager_id = Some(12);
    let err = repos.personnel.create(&fields).unwrap_err();
    assert_eq!(
        err.rejection(),
        Some(&Rejection::InvalidReference(Reference::Manager))
    );
}

#[test]
fn test_mutation_result_messages() {
    let temp = TempDir::new().unwrap();
    let repos = open_repositories(&temp);

    let added = MutationResult::from_result(
        repos.units.create("Legal"),
        "Organizational unit added successfully.",
    )
    .unwrap();
    assert!(added.success);

    let duplicate = MutationResult::from_result(
        repos.units.create("Legal"),
        "Organizational unit added successfully.",
    )
    .unwrap();
    assert!(!duplicate.success);
    assert_eq!(
        duplicate.message,
        "An organizational unit with this name already exists."
    );
}

#[test]
fn test_read_fault_is_not_empty_result() {
    let temp = TempDir::new().unwrap();
    let store = SqliteStore::new(StoreConfig::with_data_dir(temp.path())).unwrap();
    // Schema never applied: reads must fail rather than look empty.
    let repos = Repositories::new(Arc::new(store));

    let err = repos.units.list_all().unwrap_err();
    assert!(err.is_fault());
    assert!(repos.sites.list_all().is_err());
    assert!(repos.personnel.list_all().is_err());
}

#[test]
fn test_schema_backstop_rejects_direct_orphan_insert() {
    let temp = TempDir::new().unwrap();
    let store = SqliteStore::new(StoreConfig::with_data_dir(temp.path())).unwrap();
    store.initialize().unwrap();

    let result = store.connect().unwrap().execute(
        "INSERT INTO personnel (first_name, last_name, salary, organizational_unit_id, site_id)
         VALUES ('Ghost', 'Writer', '1', 41, 42)",
        [],
    );
    assert!(result.is_err());
}
