mod models;
mod outcome;

pub use models::{Entity, NewPersonnel, OrganizationalUnit, Personnel, Site};
pub use outcome::MutationResult;
