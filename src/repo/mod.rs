//! Repositories for the three record types.
//!
//! Every multi-statement operation runs in a single write session, so an
//! admissibility check and the mutation it guards commit or roll back
//! together. Store-level constraint violations that slip past a check are
//! translated back into the same [`Rejection`]s the checks produce.

mod personnel;
mod sites;
mod units;

use std::sync::Arc;

pub use personnel::PersonnelRepository;
pub use sites::SiteRepository;
pub use units::OrganizationalUnitRepository;

use crate::error::{Error, Rejection, Result};
use crate::store::Store;
use crate::store::constraint::{Violation, violation};

/// The three repositories over one shared store.
#[derive(Clone)]
pub struct Repositories {
    pub units: OrganizationalUnitRepository,
    pub sites: SiteRepository,
    pub personnel: PersonnelRepository,
}

impl Repositories {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            units: OrganizationalUnitRepository::new(Arc::clone(&store)),
            sites: SiteRepository::new(Arc::clone(&store)),
            personnel: PersonnelRepository::new(store),
        }
    }
}

/// Maps a constraint violation onto a rejection when `f` recognizes it.
fn translate(err: Error, f: impl FnOnce(Violation) -> Option<Rejection>) -> Error {
    match violation(&err).and_then(f) {
        Some(rejection) => {
            tracing::debug!("Store constraint rejected statement: {err}");
            rejection.into()
        }
        None => err,
    }
}

/// Logs how a mutation ended; rejections are routine, faults are not.
fn log_outcome<T>(op: &str, result: &Result<T>) {
    match result {
        Ok(_) => {}
        Err(Error::Rejected(rejection)) => tracing::debug!("{op} rejected: {rejection}"),
        Err(e) => tracing::warn!("Failed to {op}: {e}"),
    }
}

#[cfg(test)]
fn test_repositories(temp: &tempfile::TempDir) -> Repositories {
    use crate::config::StoreConfig;
    use crate::store::SqliteStore;

    let store = SqliteStore::new(StoreConfig::with_data_dir(temp.path())).unwrap();
    store.initialize().unwrap();
    Repositories::new(Arc::new(store))
}
