use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The three record types the store owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entity {
    OrganizationalUnit,
    Site,
    Personnel,
}

impl Entity {
    /// Capitalized, user-facing name used in messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::OrganizationalUnit => "Organizational unit",
            Self::Site => "Site",
            Self::Personnel => "Personnel record",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationalUnit {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: i64,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personnel {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub salary: Decimal,
    pub organizational_unit_id: i64,
    pub site_id: i64,
    pub manager_id: Option<i64>,
}

/// Field values for creating or updating a personnel record.
///
/// `manager_id` of `None` or `Some(0)` both mean "no manager".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPersonnel {
    pub first_name: String,
    pub last_name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub salary: Decimal,
    pub organizational_unit_id: i64,
    pub site_id: i64,
    #[serde(default)]
    pub manager_id: Option<i64>,
}

impl NewPersonnel {
    /// The manager link as persisted: the zero sentinel collapses to `None`.
    pub fn manager(&self) -> Option<i64> {
        self.manager_id.filter(|&id| id != 0)
    }
}

impl Personnel {
    /// The mutable fields of this record, for passing back to `update`.
    pub fn fields(&self) -> NewPersonnel {
        NewPersonnel {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            salary: self.salary,
            organizational_unit_id: self.organizational_unit_id,
            site_id: self.site_id,
            manager_id: self.manager_id,
        }
    }
}
