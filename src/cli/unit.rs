use super::pickers::{confirm_action, require_text, require_value};
use super::{StoreArgs, open_repositories, print_json, report};

pub fn run_unit_list(args: &StoreArgs, json: bool) -> anyhow::Result<()> {
    let repos = open_repositories(args)?;
    let units = repos.units.list_all()?;

    if json {
        return print_json(&units);
    }
    if units.is_empty() {
        println!("No organizational units.");
        return Ok(());
    }
    for unit in &units {
        println!("{:>5}  {}", unit.id, unit.name);
    }
    Ok(())
}

pub fn run_unit_add(
    args: &StoreArgs,
    name: Option<String>,
    non_interactive: bool,
) -> anyhow::Result<()> {
    let repos = open_repositories(args)?;
    let name = require_text(name, "name", "Organizational unit name", non_interactive)?;

    let id = report(
        repos.units.create(&name),
        "Organizational unit added successfully.",
    )?;
    println!("id: {id}");
    Ok(())
}

pub fn run_unit_update(
    args: &StoreArgs,
    id: Option<i64>,
    name: Option<String>,
    non_interactive: bool,
) -> anyhow::Result<()> {
    let repos = open_repositories(args)?;
    let id = require_value(id, "id", "Organizational unit ID", non_interactive)?;
    let name = require_text(name, "name", "Organizational unit name", non_interactive)?;

    report(
        repos.units.update(id, &name),
        "Organizational unit updated successfully.",
    )
}

pub fn run_unit_remove(
    args: &StoreArgs,
    id: Option<i64>,
    non_interactive: bool,
    yes: bool,
) -> anyhow::Result<()> {
    let repos = open_repositories(args)?;
    let id = require_value(id, "id", "Organizational unit ID", non_interactive)?;

    if !confirm_action(
        &format!("Delete organizational unit {id}?"),
        yes,
        non_interactive,
    )? {
        println!("Cancelled.");
        return Ok(());
    }

    report(
        repos.units.delete(id),
        "Organizational unit deleted successfully.",
    )
}
