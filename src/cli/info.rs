use serde::Serialize;

use super::{StoreArgs, open_repositories, print_json};

#[derive(Serialize)]
struct StoreInfo {
    database: String,
    organizational_units: usize,
    sites: usize,
    personnel: usize,
    managers: usize,
}

pub fn run_info(args: &StoreArgs, json: bool) -> anyhow::Result<()> {
    let repos = open_repositories(args)?;
    let personnel = repos.personnel.list_all()?;

    let mut managers: Vec<i64> = personnel.iter().filter_map(|p| p.manager_id).collect();
    managers.sort_unstable();
    managers.dedup();

    let info = StoreInfo {
        database: args.resolve()?.db_path().display().to_string(),
        organizational_units: repos.units.list_all()?.len(),
        sites: repos.sites.list_all()?.len(),
        personnel: personnel.len(),
        managers: managers.len(),
    };

    if json {
        return print_json(&info);
    }

    println!("Database:             {}", info.database);
    println!("Organizational units: {}", info.organizational_units);
    println!("Sites:                {}", info.sites);
    println!("Personnel:            {}", info.personnel);
    println!("Managers:             {}", info.managers);
    Ok(())
}
