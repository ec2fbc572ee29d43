use std::sync::Arc;

use roster::config::StoreConfig;
use roster::repo::Repositories;
use roster::store::{SqliteStore, Store};
use tempfile::TempDir;

/// Repositories over a freshly initialized store in `temp`.
pub fn open_repositories(temp: &TempDir) -> Repositories {
    let store = SqliteStore::new(StoreConfig::with_data_dir(temp.path())).expect("open store");
    store.initialize().expect("initialize schema");
    Repositories::new(Arc::new(store))
}
