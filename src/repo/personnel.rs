use std::str::FromStr;
use std::sync::Arc;

use rusqlite::types::Type;
use rusqlite::{Row, params};
use rust_decimal::Decimal;

use super::{log_outcome, translate};
use crate::error::{Error, Reference, Rejection, Result};
use crate::store::constraint::{Violation, violation};
use crate::store::{Session, SessionMode, Store, with_session};
use crate::types::{Entity, NewPersonnel, Personnel};
use crate::validation::validate_personnel;

const SELECT_PERSONNEL: &str = "SELECT id, first_name, last_name, salary, organizational_unit_id, site_id, manager_id
     FROM personnel";

fn personnel_from_row(row: &Row<'_>) -> rusqlite::Result<Personnel> {
    let salary: String = row.get(3)?;
    let salary = Decimal::from_str(&salary)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    Ok(Personnel {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        salary,
        organizational_unit_id: row.get(4)?,
        site_id: row.get(5)?,
        manager_id: row.get(6)?,
    })
}

pub(super) fn has_subordinates(v: Violation) -> Option<Rejection> {
    (v == Violation::ForeignKey).then_some(Rejection::HasSubordinates)
}

/// Finds which of the record's references does not resolve.
fn missing_reference(s: &Session, fields: &NewPersonnel) -> Result<Reference> {
    if !s.exists(
        "SELECT COUNT(1) FROM organizational_units WHERE id = ?1",
        params![fields.organizational_unit_id],
    )? {
        return Ok(Reference::OrganizationalUnit);
    }
    if !s.exists(
        "SELECT COUNT(1) FROM sites WHERE id = ?1",
        params![fields.site_id],
    )? {
        return Ok(Reference::Site);
    }
    if let Some(manager) = fields.manager() {
        if !s.exists(
            "SELECT COUNT(1) FROM personnel WHERE id = ?1",
            params![manager],
        )? {
            return Ok(Reference::Manager);
        }
    }
    Ok(Reference::Unknown)
}

/// A foreign-key failure on insert/update becomes `InvalidReference`.
///
/// SQLite only rolls back the failed statement, so the session is still
/// usable for the reference lookup.
fn reference_failure(s: &Session, err: Error, fields: &NewPersonnel) -> Error {
    if violation(&err) != Some(Violation::ForeignKey) {
        return err;
    }
    match missing_reference(s, fields) {
        Ok(reference) => Rejection::InvalidReference(reference).into(),
        Err(lookup_err) => lookup_err,
    }
}

/// Personnel records reference a unit, a site, and optionally a manager.
///
/// Reference existence is enforced by the store's foreign keys rather than
/// by pre-checks; cycles in the manager chain are permitted.
#[derive(Clone)]
pub struct PersonnelRepository {
    store: Arc<dyn Store>,
}

impl PersonnelRepository {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub fn list_all(&self) -> Result<Vec<Personnel>> {
        with_session(self.store.as_ref(), SessionMode::Read, |s| {
            s.query(
                &format!("{SELECT_PERSONNEL} ORDER BY id"),
                [],
                personnel_from_row,
            )
        })
    }

    pub fn get(&self, id: i64) -> Result<Option<Personnel>> {
        with_session(self.store.as_ref(), SessionMode::Read, |s| {
            s.query_row(
                &format!("{SELECT_PERSONNEL} WHERE id = ?1"),
                params![id],
                personnel_from_row,
            )
        })
    }

    pub fn create(&self, fields: &NewPersonnel) -> Result<i64> {
        validate_personnel(fields)?;

        let result = with_session(self.store.as_ref(), SessionMode::Write, |s| {
            s.insert(
                "INSERT INTO personnel
                     (first_name, last_name, salary, organizational_unit_id, site_id, manager_id)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    fields.first_name,
                    fields.last_name,
                    fields.salary.to_string(),
                    fields.organizational_unit_id,
                    fields.site_id,
                    fields.manager(),
                ],
            )
            .map_err(|e| reference_failure(s, e, fields))
        });

        log_outcome("create personnel record", &result);
        let id = result?;
        tracing::info!(
            "Created personnel record {id} ({} {})",
            fields.first_name,
            fields.last_name
        );
        Ok(id)
    }

    /// Replaces every mutable field of record `id`.
    pub fn update(&self, id: i64, fields: &NewPersonnel) -> Result<()> {
        validate_personnel(fields)?;

        let result = with_session(self.store.as_ref(), SessionMode::Write, |s| {
            let rows = s
                .execute(
                    "UPDATE personnel
                     SET first_name = ?1,
                         last_name = ?2,
                         salary = ?3,
                         organizational_unit_id = ?4,
                         site_id = ?5,
                         manager_id = ?6
                     WHERE id = ?7",
                    params![
                        fields.first_name,
                        fields.last_name,
                        fields.salary.to_string(),
                        fields.organizational_unit_id,
                        fields.site_id,
                        fields.manager(),
                        id,
                    ],
                )
                .map_err(|e| reference_failure(s, e, fields))?;

            if rows == 0 {
                return Err(Rejection::NotFound(Entity::Personnel).into());
            }
            Ok(())
        });

        log_outcome("update personnel record", &result);
        result?;
        tracing::info!("Updated personnel record {id}");
        Ok(())
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let result = with_session(self.store.as_ref(), SessionMode::Write, |s| {
            if !s.exists("SELECT COUNT(1) FROM personnel WHERE id = ?1", params![id])? {
                return Err(Rejection::NotFound(Entity::Personnel).into());
            }

            // A record that manages only itself has no subordinates.
            if s.exists(
                "SELECT COUNT(1) FROM personnel WHERE manager_id = ?1 AND id != ?1",
                params![id],
            )? {
                return Err(Rejection::HasSubordinates.into());
            }

            s.execute("DELETE FROM personnel WHERE id = ?1", params![id])
                .map_err(|e| translate(e, has_subordinates))
        });

        log_outcome("delete personnel record", &result);
        result?;
        tracing::info!("Deleted personnel record {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::super::{Repositories, test_repositories};
    use super::*;

    fn person(unit: i64, site: i64, manager: Option<i64>) -> NewPersonnel {
        NewPersonnel {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            salary: Decimal::new(90_000, 0),
            organizational_unit_id: unit,
            site_id: site,
            manager_id: manager,
        }
    }

    fn seed(repos: &Repositories) -> (i64, i64) {
        let unit = repos.units.create("Engineering").unwrap();
        let site = repos.sites.create("London", "UK").unwrap();
        (unit, site)
    }

    #[test]
    fn test_create_reads_back_equal() {
        let temp = TempDir::new().unwrap();
        let repos = test_repositories(&temp);
        let (unit, site) = seed(&repos);

        let mut fields = person(unit, site, Some(0));
        fields.salary = Decimal::new(1234550, 2);
        let id = repos.personnel.create(&fields).unwrap();

        let stored = repos.personnel.get(id).unwrap().unwrap();
        assert_eq!(stored.manager_id, None);
        assert_eq!(stored.salary, Decimal::new(1234550, 2));
        assert_eq!(stored.fields(), NewPersonnel { manager_id: None, ..fields });
    }

    #[test]
    fn test_invalid_references_identified() {
        let temp = TempDir::new().unwrap();
        let repos = test_repositories(&temp);
        let (unit, site) = seed(&repos);

        let err = repos.personnel.create(&person(99, site, None)).unwrap_err();
        assert_eq!(
            err.rejection(),
            Some(&Rejection::InvalidReference(Reference::OrganizationalUnit))
        );

        let err = repos.personnel.create(&person(unit, 99, None)).unwrap_err();
        assert_eq!(
            err.rejection(),
            Some(&Rejection::InvalidReference(Reference::Site))
        );

        let err = repos.personnel.create(&person(unit, site, Some(99))).unwrap_err();
        assert_eq!(
            err.rejection(),
            Some(&Rejection::InvalidReference(Reference::Manager))
        );

        assert!(repos.personnel.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_update_missing_record_not_found() {
        let temp = TempDir::new().unwrap();
        let repos = test_repositories(&temp);
        let (unit, site) = seed(&repos);

        let err = repos.personnel.update(7, &person(unit, site, None)).unwrap_err();
        assert_eq!(
            err.rejection(),
            Some(&Rejection::NotFound(Entity::Personnel))
        );
    }

    #[test]
    fn test_update_with_bad_reference_keeps_record() {
        let temp = TempDir::new().unwrap();
        let repos = test_repositories(&temp);
        let (unit, site) = seed(&repos);

        let id = repos.personnel.create(&person(unit, site, None)).unwrap();
        let err = repos.personnel.update(id, &person(unit, 55, None)).unwrap_err();
        assert_eq!(
            err.rejection(),
            Some(&Rejection::InvalidReference(Reference::Site))
        );
        assert_eq!(repos.personnel.get(id).unwrap().unwrap().site_id, site);
    }

    #[test]
    fn test_manager_cannot_be_deleted_until_reassigned() {
        let temp = TempDir::new().unwrap();
        let repos = test_repositories(&temp);
        let (unit, site) = seed(&repos);

        let boss = repos.personnel.create(&person(unit, site, None)).unwrap();
        let report = repos.personnel.create(&person(unit, site, Some(boss))).unwrap();

        let err = repos.personnel.delete(boss).unwrap_err();
        assert_eq!(err.rejection(), Some(&Rejection::HasSubordinates));

        repos.personnel.update(report, &person(unit, site, Some(0))).unwrap();
        repos.personnel.delete(boss).unwrap();
        assert_eq!(repos.personnel.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_manager_cycles_permitted() {
        let temp = TempDir::new().unwrap();
        let repos = test_repositories(&temp);
        let (unit, site) = seed(&repos);

        let a = repos.personnel.create(&person(unit, site, None)).unwrap();
        let b = repos.personnel.create(&person(unit, site, Some(a))).unwrap();
        repos.personnel.update(a, &person(unit, site, Some(b))).unwrap();

        let own = repos.personnel.create(&person(unit, site, None)).unwrap();
        repos.personnel.update(own, &person(unit, site, Some(own))).unwrap();
        repos.personnel.delete(own).unwrap();
    }

    #[test]
    fn test_salary_bounds_enforced() {
        let temp = TempDir::new().unwrap();
        let repos = test_repositories(&temp);
        let (unit, site) = seed(&repos);

        for (salary, ok) in [(0, true), (1_000_000, true), (-1, false), (1_000_001, false)] {
            let mut fields = person(unit, site, None);
            fields.salary = Decimal::new(salary, 0);
            let result = repos.personnel.create(&fields);
            assert_eq!(result.is_ok(), ok, "salary {salary}");
            if let Err(e) = result {
                assert!(matches!(e.rejection(), Some(Rejection::Validation(_))));
            }
        }
    }

    #[test]
    fn test_corrupt_salary_is_fault() {
        let temp = TempDir::new().unwrap();
        let repos = test_repositories(&temp);
        let (unit, site) = seed(&repos);
        let id = repos.personnel.create(&person(unit, site, None)).unwrap();

        let store = crate::store::SqliteStore::new(crate::config::StoreConfig::with_data_dir(
            temp.path(),
        ))
        .unwrap();
        store
            .connect()
            .unwrap()
            .execute(
                "UPDATE personnel SET salary = '12e3x' WHERE id = ?1",
                params![id],
            )
            .unwrap();

        let err = repos.personnel.list_all().unwrap_err();
        assert!(err.is_fault());
    }
}
