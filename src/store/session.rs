use rusqlite::{Connection, OptionalExtension, Params, Row};

use crate::error::{Error, Result};

/// How a session takes the database lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Deferred transaction: a consistent snapshot for reads.
    Read,
    /// Immediate transaction: the write lock is held from `begin` until
    /// commit or rollback, so checks and mutations are not interleaved
    /// with other writers.
    Write,
}

impl SessionMode {
    fn begin_sql(self) -> &'static str {
        match self {
            Self::Read => "BEGIN DEFERRED",
            Self::Write => "BEGIN IMMEDIATE",
        }
    }
}

/// One atomic unit of work on its own connection.
///
/// A session that is dropped while still open is rolled back, and its
/// connection is closed with it.
pub struct Session {
    conn: Connection,
    open: bool,
}

impl Session {
    pub(crate) fn begin(conn: Connection, mode: SessionMode) -> Result<Self> {
        conn.execute_batch(mode.begin_sql())?;
        tracing::debug!("Session begun ({mode:?})");
        Ok(Self { conn, open: true })
    }

    /// Runs a `SELECT COUNT(...)`-style statement and returns its scalar.
    pub fn count<P: Params>(&self, sql: &str, params: P) -> Result<i64> {
        self.conn
            .query_row(sql, params, |row| row.get(0))
            .map_err(Error::from)
    }

    pub fn exists<P: Params>(&self, sql: &str, params: P) -> Result<bool> {
        Ok(self.count(sql, params)? > 0)
    }

    /// Runs a mutation and returns the number of affected rows.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<usize> {
        self.conn.execute(sql, params).map_err(Error::from)
    }

    /// Runs an `INSERT` and returns the store-assigned row id.
    pub fn insert<P: Params>(&self, sql: &str, params: P) -> Result<i64> {
        self.conn.execute(sql, params)?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn query_row<T, P, F>(&self, sql: &str, params: P, f: F) -> Result<Option<T>>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        self.conn
            .query_row(sql, params, f)
            .optional()
            .map_err(Error::from)
    }

    pub fn query<T, P, F>(&self, sql: &str, params: P, f: F) -> Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, f)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    pub fn commit(mut self) -> Result<()> {
        self.conn.execute_batch("COMMIT")?;
        self.open = false;
        tracing::debug!("Session committed");
        Ok(())
    }

    pub fn rollback(mut self) -> Result<()> {
        self.open = false;
        if !self.conn.is_autocommit() {
            self.conn.execute_batch("ROLLBACK")?;
        }
        tracing::debug!("Session rolled back");
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if !self.open || self.conn.is_autocommit() {
            return;
        }
        match self.conn.execute_batch("ROLLBACK") {
            Ok(()) => tracing::warn!("Session abandoned before commit; rolled back"),
            Err(e) => tracing::warn!("Failed to roll back abandoned session: {e}"),
        }
    }
}
