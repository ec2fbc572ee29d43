use rusqlite::ffi;

use crate::error::Error;

/// Which store-level constraint a failed statement tripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Unique,
    ForeignKey,
}

/// Classifies a statement error by its SQLite extended result code.
///
/// Returns `None` for anything that is not a unique or foreign-key
/// violation, including `CHECK` and `NOT NULL` failures.
pub fn classify(err: &rusqlite::Error) -> Option<Violation> {
    match err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation => {
            match e.extended_code {
                ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                    Some(Violation::Unique)
                }
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Some(Violation::ForeignKey),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Same as [`classify`], for an error already lifted into the crate's type.
pub fn violation(err: &Error) -> Option<Violation> {
    match err {
        Error::Database(e) => classify(e),
        _ => None,
    }
}
