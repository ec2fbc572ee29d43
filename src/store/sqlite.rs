use rusqlite::Connection;

use super::schema::SCHEMA;
use super::session::{Session, SessionMode};
use super::Store;
use crate::config::StoreConfig;
use crate::error::Result;

/// SQLite-backed store connector.
///
/// Holds only configuration: every session opens its own connection, so a
/// single `SqliteStore` can be shared across threads without locking.
pub struct SqliteStore {
    config: StoreConfig,
}

impl SqliteStore {
    pub fn new(config: StoreConfig) -> Result<Self> {
        let store = Self { config };
        // Fail fast on an unreachable path rather than on the first operation.
        store.connect()?;
        Ok(store)
    }

    /// Opens a new, fully configured connection outside of any session.
    /// This allows consuming applications to execute custom SQL.
    pub fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(self.config.db_path())?;

        conn.busy_timeout(self.config.busy_timeout())?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(conn)
    }
}

impl Store for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.connect()?.execute_batch(SCHEMA)?;
        Ok(())
    }

    fn open_session(&self, mode: SessionMode) -> Result<Session> {
        Session::begin(self.connect()?, mode)
    }
}
