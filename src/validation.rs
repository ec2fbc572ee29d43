use rust_decimal::Decimal;

use crate::error::Rejection;
use crate::types::NewPersonnel;

pub const MAX_TEXT_LEN: usize = 50;
pub const MAX_SALARY: i64 = 1_000_000;

fn invalid(message: String) -> Rejection {
    Rejection::Validation(message)
}

/// Required text: not blank, at most [`MAX_TEXT_LEN`] characters.
pub fn validate_text(value: &str, field: &str) -> Result<(), Rejection> {
    if value.trim().is_empty() {
        return Err(invalid(format!("{field} is required")));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(invalid(format!(
            "{field} cannot be longer than {MAX_TEXT_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_salary(salary: Decimal) -> Result<(), Rejection> {
    if salary < Decimal::ZERO || salary > Decimal::from(MAX_SALARY) {
        return Err(invalid("Salary must be between 0 and 1,000,000".to_string()));
    }
    Ok(())
}

fn validate_selected(id: i64, what: &str) -> Result<(), Rejection> {
    if id < 1 {
        return Err(invalid(format!("Please select {what}")));
    }
    Ok(())
}

pub fn validate_unit_name(name: &str) -> Result<(), Rejection> {
    validate_text(name, "Organizational unit name")
}

pub fn validate_site(city: &str, country: &str) -> Result<(), Rejection> {
    validate_text(city, "City")?;
    validate_text(country, "Country")
}

pub fn validate_personnel(fields: &NewPersonnel) -> Result<(), Rejection> {
    validate_text(&fields.first_name, "First name")?;
    validate_text(&fields.last_name, "Last name")?;
    validate_salary(fields.salary)?;
    validate_selected(fields.organizational_unit_id, "an organizational unit")?;
    validate_selected(fields.site_id, "a site")?;
    if let Some(manager) = fields.manager_id {
        if manager < 0 {
            return Err(invalid("Manager id cannot be negative".to_string()));
        }
    }
    Ok(())
}
