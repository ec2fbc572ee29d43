use thiserror::Error;

use crate::types::Entity;

/// Which foreign key of a personnel record failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    OrganizationalUnit,
    Site,
    Manager,
    Unknown,
}

/// Expected, user-correctable outcomes that block a mutation.
///
/// These are returned as values inside [`Error::Rejected`]; the `Display`
/// output is the stable message shown to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("{0}")]
    Validation(String),

    #[error("An organizational unit with this name already exists.")]
    DuplicateName,

    #[error("A site with this city and country already exists.")]
    DuplicateSite,

    #[error("{} not found.", .0.label())]
    NotFound(Entity),

    #[error(
        "Cannot delete {} that has personnel. Please reassign or remove personnel first.",
        .0.label().to_lowercase()
    )]
    InUse(Entity),

    #[error("Cannot delete personnel record who is a manager. Please reassign their subordinates first.")]
    HasSubordinates,

    #[error("{}", reference_message(.0))]
    InvalidReference(Reference),
}

fn reference_message(reference: &Reference) -> &'static str {
    match reference {
        Reference::OrganizationalUnit => "Organizational unit does not exist.",
        Reference::Site => "Site does not exist.",
        Reference::Manager => "Manager does not exist.",
        Reference::Unknown => "Referenced record does not exist.",
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Rejected(#[from] Rejection),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// The business-rule rejection carried by this error, if it is one.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(r) => Some(r),
            _ => None,
        }
    }

    /// True for connectivity, schema, and decoding failures.
    pub fn is_fault(&self) -> bool {
        self.rejection().is_none()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages_are_stable() {
        assert_eq!(
            Rejection::NotFound(Entity::Site).to_string(),
            "Site not found."
        );
        assert_eq!(
            Rejection::InUse(Entity::OrganizationalUnit).to_string(),
            "Cannot delete organizational unit that has personnel. Please reassign or remove personnel first."
        );
        assert_eq!(
            Rejection::InvalidReference(Reference::Manager).to_string(),
            "Manager does not exist."
        );
    }

    #[test]
    fn test_fault_classification() {
        let rejected = Error::from(Rejection::DuplicateName);
        assert!(!rejected.is_fault());
        assert_eq!(rejected.rejection(), Some(&Rejection::DuplicateName));

        let fault = Error::Config("bad".to_string());
        assert!(fault.is_fault());
    }
}
