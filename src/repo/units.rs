use std::sync::Arc;

use rusqlite::{Row, params};

use super::{log_outcome, translate};
use crate::error::{Rejection, Result};
use crate::store::constraint::Violation;
use crate::store::{SessionMode, Store, with_session};
use crate::types::{Entity, OrganizationalUnit};
use crate::validation::validate_unit_name;

fn unit_from_row(row: &Row<'_>) -> rusqlite::Result<OrganizationalUnit> {
    Ok(OrganizationalUnit {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

#[derive(Clone)]
pub struct OrganizationalUnitRepository {
    store: Arc<dyn Store>,
}

impl OrganizationalUnitRepository {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub fn list_all(&self) -> Result<Vec<OrganizationalUnit>> {
        with_session(self.store.as_ref(), SessionMode::Read, |s| {
            s.query(
                "SELECT id, name FROM organizational_units ORDER BY id",
                [],
                unit_from_row,
            )
        })
    }

    pub fn get(&self, id: i64) -> Result<Option<OrganizationalUnit>> {
        with_session(self.store.as_ref(), SessionMode::Read, |s| {
            s.query_row(
                "SELECT id, name FROM organizational_units WHERE id = ?1",
                params![id],
                unit_from_row,
            )
        })
    }

    /// Creates a unit and returns its store-assigned id.
    pub fn create(&self, name: &str) -> Result<i64> {
        validate_unit_name(name)?;

        let result = with_session(self.store.as_ref(), SessionMode::Write, |s| {
            if s.exists(
                "SELECT COUNT(1) FROM organizational_units WHERE name = ?1",
                params![name],
            )? {
                return Err(Rejection::DuplicateName.into());
            }

            s.insert(
                "INSERT INTO organizational_units (name) VALUES (?1)",
                params![name],
            )
            .map_err(|e| translate(e, unique_name))
        });

        log_outcome("create organizational unit", &result);
        let id = result?;
        tracing::info!("Created organizational unit {id} ({name})");
        Ok(id)
    }

    pub fn update(&self, id: i64, name: &str) -> Result<()> {
        validate_unit_name(name)?;

        let result = with_session(self.store.as_ref(), SessionMode::Write, |s| {
            if !s.exists(
                "SELECT COUNT(1) FROM organizational_units WHERE id = ?1",
                params![id],
            )? {
                return Err(Rejection::NotFound(Entity::OrganizationalUnit).into());
            }

            if s.exists(
                "SELECT COUNT(1) FROM organizational_units WHERE name = ?1 AND id != ?2",
                params![name, id],
            )? {
                return Err(Rejection::DuplicateName.into());
            }

            s.execute(
                "UPDATE organizational_units SET name = ?1 WHERE id = ?2",
                params![name, id],
            )
            .map_err(|e| translate(e, unique_name))
        });

        log_outcome("update organizational unit", &result);
        result?;
        tracing::info!("Renamed organizational unit {id} to {name}");
        Ok(())
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let result = with_session(self.store.as_ref(), SessionMode::Write, |s| {
            if !s.exists(
                "SELECT COUNT(1) FROM organizational_units WHERE id = ?1",
                params![id],
            )? {
                return Err(Rejection::NotFound(Entity::OrganizationalUnit).into());
            }

            if s.exists(
                "SELECT COUNT(1) FROM personnel WHERE organizational_unit_id = ?1",
                params![id],
            )? {
                return Err(Rejection::InUse(Entity::OrganizationalUnit).into());
            }

            s.execute(
                "DELETE FROM organizational_units WHERE id = ?1",
                params![id],
            )
            .map_err(|e| translate(e, unit_in_use))
        });

        log_outcome("delete organizational unit", &result);
        result?;
        tracing::info!("Deleted organizational unit {id}");
        Ok(())
    }
}

pub(super) fn unique_name(v: Violation) -> Option<Rejection> {
    (v == Violation::Unique).then_some(Rejection::DuplicateName)
}

pub(super) fn unit_in_use(v: Violation) -> Option<Rejection> {
    (v == Violation::ForeignKey).then_some(Rejection::InUse(Entity::OrganizationalUnit))
}
