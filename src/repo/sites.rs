use std::sync::Arc;

use rusqlite::{Row, params};

use super::{log_outcome, translate};
use crate::error::{Rejection, Result};
use crate::store::constraint::Violation;
use crate::store::{SessionMode, Store, with_session};
use crate::types::{Entity, Site};
use crate::validation::validate_site;

fn site_from_row(row: &Row<'_>) -> rusqlite::Result<Site> {
    Ok(Site {
        id: row.get(0)?,
        city: row.get(1)?,
        country: row.get(2)?,
    })
}

pub(super) fn unique_site(v: Violation) -> Option<Rejection> {
    (v == Violation::Unique).then_some(Rejection::DuplicateSite)
}

pub(super) fn site_in_use(v: Violation) -> Option<Rejection> {
    (v == Violation::ForeignKey).then_some(Rejection::InUse(Entity::Site))
}

/// Sites are unique on the `(city, country)` pair; either field alone may repeat.
#[derive(Clone)]
pub struct SiteRepository {
    store: Arc<dyn Store>,
}

impl SiteRepository {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub fn list_all(&self) -> Result<Vec<Site>> {
        with_session(self.store.as_ref(), SessionMode::Read, |s| {
            s.query(
                "SELECT id, city, country FROM sites ORDER BY id",
                [],
                site_from_row,
            )
        })
    }

    pub fn get(&self, id: i64) -> Result<Option<Site>> {
        with_session(self.store.as_ref(), SessionMode::Read, |s| {
            s.query_row(
                "SELECT id, city, country FROM sites WHERE id = ?1",
                params![id],
                site_from_row,
            )
        })
    }

    pub fn create(&self, city: &str, country: &str) -> Result<i64> {
        validate_site(city, country)?;

        let result = with_session(self.store.as_ref(), SessionMode::Write, |s| {
            if s.exists(
                "SELECT COUNT(1) FROM sites WHERE city = ?1 AND country = ?2",
                params![city, country],
            )? {
                return Err(Rejection::DuplicateSite.into());
            }

            s.insert(
                "INSERT INTO sites (city, country) VALUES (?1, ?2)",
                params![city, country],
            )
            .map_err(|e| translate(e, unique_site))
        });

        log_outcome("create site", &result);
        let id = result?;
        tracing::info!("Created site {id} ({city}, {country})");
        Ok(id)
    }

    pub fn update(&self, id: i64, city: &str, country: &str) -> Result<()> {
        validate_site(city, country)?;

        let result = with_session(self.store.as_ref(), SessionMode::Write, |s| {
            if !s.exists("SELECT COUNT(1) FROM sites WHERE id = ?1", params![id])? {
                return Err(Rejection::NotFound(Entity::Site).into());
            }

            if s.exists(
                "SELECT COUNT(1) FROM sites WHERE city = ?1 AND country = ?2 AND id != ?3",
                params![city, country, id],
            )? {
                return Err(Rejection::DuplicateSite.into());
            }

            s.execute(
                "UPDATE sites SET city = ?1, country = ?2 WHERE id = ?3",
                params![city, country, id],
            )
            .map_err(|e| translate(e, unique_site))
        });

        log_outcome("update site", &result);
        result?;
        tracing::info!("Updated site {id} to ({city}, {country})");
        Ok(())
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let result = with_session(self.store.as_ref(), SessionMode::Write, |s| {
            if !s.exists("SELECT COUNT(1) FROM sites WHERE id = ?1", params![id])? {
                return Err(Rejection::NotFound(Entity::Site).into());
            }

            if s.exists(
                "SELECT COUNT(1) FROM personnel WHERE site_id = ?1",
                params![id],
            )? {
                return Err(Rejection::InUse(Entity::Site).into());
            }

            s.execute("DELETE FROM sites WHERE id = ?1", params![id])
                .map_err(|e| translate(e, site_in_use))
        });

        log_outcome("delete site", &result);
        result?;
        tracing::info!("Deleted site {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use tempfile::TempDir;

    use super::super::test_repositories;
    use super::*;
    use crate::types::NewPersonnel;

    #[test]
    fn test_site_pair_uniqueness() {
        let temp = TempDir::new().unwrap();
        let repos = test_repositories(&temp);

        repos.sites.create("Paris", "France").unwrap();
        repos.sites.create("Paris", "USA").unwrap();
        repos.sites.create("Lyon", "France").unwrap();

        let err = repos.sites.create("Paris", "France").unwrap_err();
        assert_eq!(err.rejection(), Some(&Rejection::DuplicateSite));
        assert_eq!(repos.sites.list_all().unwrap().len(), 3);
    }

    #[test]
    fn test_update_into_existing_pair_rejected() {
        let temp = TempDir::new().unwrap();
        let repos = test_repositories(&temp);

        repos.sites.create("Paris", "France").unwrap();
        let lyon = repos.sites.create("Lyon", "France").unwrap();

        let err = repos.sites.update(lyon, "Paris", "France").unwrap_err();
        assert_eq!(err.rejection(), Some(&Rejection::DuplicateSite));

        repos.sites.update(lyon, "Lyon", "FR").unwrap();
        let site = repos.sites.get(lyon).unwrap().unwrap();
        assert_eq!((site.city.as_str(), site.country.as_str()), ("Lyon", "FR"));
    }

    #[test]
    fn test_missing_site_not_found() {
        let temp = TempDir::new().unwrap();
        let repos = test_repositories(&temp);

        let not_found = Some(&Rejection::NotFound(Entity::Site));
        assert_eq!(
            repos.sites.update(9, "Oslo", "Norway").unwrap_err().rejection(),
            not_found
        );
        assert_eq!(repos.sites.delete(9).unwrap_err().rejection(), not_found);
    }

    #[test]
    fn test_delete_blocked_while_referenced() {
        let temp = TempDir::new().unwrap();
        let repos = test_repositories(&temp);

        let unit = repos.units.create("Ops").unwrap();
        let site = repos.sites.create("Berlin", "Germany").unwrap();
        let person = repos
            .personnel
            .create(&NewPersonnel {
                first_name: "Konrad".to_string(),
                last_name: "Zuse".to_string(),
                salary: Decimal::new(70_000, 0),
                organizational_unit_id: unit,
                site_id: site,
                manager_id: None,
            })
            .unwrap();

        let err = repos.sites.delete(site).unwrap_err();
        assert_eq!(err.rejection(), Some(&Rejection::InUse(Entity::Site)));

        repos.personnel.delete(person).unwrap();
        repos.sites.delete(site).unwrap();
        assert!(repos.sites.list_all().unwrap().is_empty());
    }
}
