use crate::error::{Error, Rejection};
use crate::types::Entity;

use super::pickers::{confirm_action, require_text, require_value};
use super::{StoreArgs, open_repositories, print_json, report};

pub fn run_site_list(args: &StoreArgs, json: bool) -> anyhow::Result<()> {
    let repos = open_repositories(args)?;
    let sites = repos.sites.list_all()?;

    if json {
        return print_json(&sites);
    }
    if sites.is_empty() {
        println!("No sites.");
        return Ok(());
    }
    for site in &sites {
        println!("{:>5}  {}, {}", site.id, site.city, site.country);
    }
    Ok(())
}

pub fn run_site_add(
    args: &StoreArgs,
    city: Option<String>,
    country: Option<String>,
    non_interactive: bool,
) -> anyhow::Result<()> {
    let repos = open_repositories(args)?;
    let city = require_text(city, "city", "City", non_interactive)?;
    let country = require_text(country, "country", "Country", non_interactive)?;

    let id = report(
        repos.sites.create(&city, &country),
        "Site added successfully.",
    )?;
    println!("id: {id}");
    Ok(())
}

pub fn run_site_update(
    args: &StoreArgs,
    id: Option<i64>,
    city: Option<String>,
    country: Option<String>,
    non_interactive: bool,
) -> anyhow::Result<()> {
    let repos = open_repositories(args)?;
    let id = require_value(id, "id", "Site ID", non_interactive)?;

    let (city, country) = match (city, country) {
        (Some(city), Some(country)) => (city, country),
        (city, country) => {
            let current = repos.sites.get(id)?.ok_or_else(|| {
                anyhow::Error::from(Error::from(Rejection::NotFound(Entity::Site)))
            })?;
            (
                city.unwrap_or(current.city),
                country.unwrap_or(current.country),
            )
        }
    };

    report(
        repos.sites.update(id, &city, &country),
        "Site updated successfully.",
    )
}

pub fn run_site_remove(
    args: &StoreArgs,
    id: Option<i64>,
    non_interactive: bool,
    yes: bool,
) -> anyhow::Result<()> {
    let repos = open_repositories(args)?;
    let id = require_value(id, "id", "Site ID", non_interactive)?;

    if !confirm_action(&format!("Delete site {id}?"), yes, non_interactive)? {
        println!("Cancelled.");
        return Ok(());
    }

    report(repos.sites.delete(id), "Site deleted successfully.")
}
