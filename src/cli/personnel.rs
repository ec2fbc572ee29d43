use crate::error::{Error, Rejection};
use crate::types::{Entity, NewPersonnel, Personnel};

use super::commands::PersonnelFields;
use super::pickers::{confirm_action, require_text, require_value};
use super::{StoreArgs, open_repositories, print_json, report};

fn format_manager(manager_id: Option<i64>) -> String {
    manager_id.map_or_else(|| "-".to_string(), |id| id.to_string())
}

fn print_table(records: &[Personnel]) {
    println!(
        "{:>5}  {:<24}  {:>12}  {:>5}  {:>5}  {:>7}",
        "ID", "NAME", "SALARY", "UNIT", "SITE", "MANAGER"
    );
    for p in records {
        println!(
            "{:>5}  {:<24}  {:>12}  {:>5}  {:>5}  {:>7}",
            p.id,
            format!("{} {}", p.first_name, p.last_name),
            p.salary,
            p.organizational_unit_id,
            p.site_id,
            format_manager(p.manager_id),
        );
    }
}

pub fn run_personnel_list(args: &StoreArgs, json: bool) -> anyhow::Result<()> {
    let repos = open_repositories(args)?;
    let records = repos.personnel.list_all()?;

    if json {
        return print_json(&records);
    }
    if records.is_empty() {
        println!("No personnel records.");
        return Ok(());
    }
    print_table(&records);
    Ok(())
}

pub fn run_personnel_add(
    args: &StoreArgs,
    fields: PersonnelFields,
    non_interactive: bool,
) -> anyhow::Result<()> {
    let repos = open_repositories(args)?;

    let record = NewPersonnel {
        first_name: require_text(fields.first_name, "first-name", "First name", non_interactive)?,
        last_name: require_text(fields.last_name, "last-name", "Last name", non_interactive)?,
        salary: require_value(fields.salary, "salary", "Salary", non_interactive)?,
        organizational_unit_id: require_value(
            fields.unit_id,
            "unit-id",
            "Organizational unit ID",
            non_interactive,
        )?,
        site_id: require_value(fields.site_id, "site-id", "Site ID", non_interactive)?,
        manager_id: fields.manager_id,
    };

    let id = report(
        repos.personnel.create(&record),
        "Personnel record added successfully.",
    )?;
    println!("id: {id}");
    Ok(())
}

pub fn run_personnel_update(
    args: &StoreArgs,
    id: Option<i64>,
    fields: PersonnelFields,
    non_interactive: bool,
) -> anyhow::Result<()> {
    let repos = open_repositories(args)?;
    let id = require_value(id, "id", "Personnel ID", non_interactive)?;

    let current = repos
        .personnel
        .get(id)?
        .ok_or_else(|| anyhow::Error::from(Error::from(Rejection::NotFound(Entity::Personnel))))?;

    let record = NewPersonnel {
        first_name: fields.first_name.unwrap_or(current.first_name),
        last_name: fields.last_name.unwrap_or(current.last_name),
        salary: fields.salary.unwrap_or(current.salary),
        organizational_unit_id: fields.unit_id.unwrap_or(current.organizational_unit_id),
        site_id: fields.site_id.unwrap_or(current.site_id),
        manager_id: fields.manager_id.or(current.manager_id),
    };

    report(
        repos.personnel.update(id, &record),
        "Personnel record updated successfully.",
    )
}

pub fn run_personnel_remove(
    args: &StoreArgs,
    id: Option<i64>,
    non_interactive: bool,
    yes: bool,
) -> anyhow::Result<()> {
    let repos = open_repositories(args)?;
    let id = require_value(id, "id", "Personnel ID", non_interactive)?;

    if !confirm_action(
        &format!("Delete personnel record {id}?"),
        yes,
        non_interactive,
    )? {
        println!("Cancelled.");
        return Ok(());
    }

    report(
        repos.personnel.delete(id),
        "Personnel record deleted successfully.",
    )
}
