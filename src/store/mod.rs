pub mod constraint;
mod schema;
mod session;
mod sqlite;

pub use session::{Session, SessionMode};
pub use sqlite::SqliteStore;

use crate::error::Result;

/// Store defines the connector the repositories run their sessions on.
pub trait Store: Send + Sync {
    /// Applies the schema, including the foreign-key and uniqueness
    /// constraints the repositories rely on as a backstop.
    fn initialize(&self) -> Result<()>;

    fn open_session(&self, mode: SessionMode) -> Result<Session>;
}

/// Runs `op` inside one session: commit on `Ok`, rollback on `Err`.
///
/// Rejections and faults both roll back; the closure's error is returned
/// unchanged either way.
pub fn with_session<T, F>(store: &dyn Store, mode: SessionMode, op: F) -> Result<T>
where
    F: FnOnce(&Session) -> Result<T>,
{
    let session = store.open_session(mode)?;
    match op(&session) {
        Ok(value) => {
            session.commit()?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = session.rollback() {
                tracing::warn!("Failed to roll back session: {rollback_err}");
            }
            Err(e)
        }
    }
}
