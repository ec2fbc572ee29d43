mod commands;
mod info;
mod personnel;
pub mod pickers;
mod site;
mod unit;

use std::path::PathBuf;
use std::sync::Arc;

pub use commands::{PersonnelCommands, PersonnelFields, SiteCommands, UnitCommands};
pub use info::run_info;
pub use personnel::{run_personnel_add, run_personnel_list, run_personnel_remove, run_personnel_update};
pub use site::{run_site_add, run_site_list, run_site_remove, run_site_update};
pub use unit::{run_unit_add, run_unit_list, run_unit_remove, run_unit_update};

use crate::config::StoreConfig;
use crate::error::Result;
use crate::repo::Repositories;
use crate::store::{SqliteStore, Store};
use crate::types::MutationResult;

/// Where the database lives, shared by every subcommand.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct StoreArgs {
    /// Data directory for the database (overrides the config file)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl StoreArgs {
    pub fn resolve(&self) -> anyhow::Result<StoreConfig> {
        let mut config = match &self.config {
            Some(path) => StoreConfig::load(path)?,
            None => StoreConfig::default(),
        };
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.into();
        }
        Ok(config)
    }
}

/// Create the data directory and schema.
pub fn run_init(args: &StoreArgs) -> anyhow::Result<()> {
    let config = args.resolve()?;
    std::fs::create_dir_all(&config.data_dir)?;

    let db_path = config.db_path();
    let store = SqliteStore::new(config)?;
    store.initialize()?;

    println!("Initialized database at {}", db_path.display());
    Ok(())
}

/// Open repositories over an existing database, checking it exists
pub fn open_repositories(args: &StoreArgs) -> anyhow::Result<Repositories> {
    let config = args.resolve()?;
    let db_path = config.db_path();

    if !db_path.exists() {
        anyhow::bail!(
            "Database not found at {}. Run 'roster init' first.",
            db_path.display()
        );
    }

    let store = SqliteStore::new(config)?;
    Ok(Repositories::new(Arc::new(store)))
}

/// Prints the outcome of a mutation; a rejection becomes a command error.
fn report<T>(result: Result<T>, success_message: &str) -> anyhow::Result<T> {
    match result {
        Ok(value) => {
            println!("{success_message}");
            Ok(value)
        }
        Err(e) => {
            let outcome = MutationResult::from_result::<()>(Err(e), success_message)?;
            anyhow::bail!(outcome.message)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
