use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use roster::cli::{
    PersonnelCommands, SiteCommands, StoreArgs, UnitCommands, run_info, run_init,
    run_personnel_add, run_personnel_list, run_personnel_remove, run_personnel_update,
    run_site_add, run_site_list, run_site_remove, run_site_update, run_unit_add, run_unit_list,
    run_unit_remove, run_unit_update,
};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Manage organizational units, sites, and personnel", long_about = None)]
struct Cli {
    #[command(flatten)]
    store: StoreArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database and schema
    Init,

    /// Show record counts
    Info {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage organizational units
    Unit {
        #[command(subcommand)]
        command: UnitCommands,
    },

    /// Manage sites
    Site {
        #[command(subcommand)]
        command: SiteCommands,
    },

    /// Manage personnel records
    Personnel {
        #[command(subcommand)]
        command: PersonnelCommands,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("roster=warn".parse()?))
        .init();

    let cli = Cli::parse();
    let store = &cli.store;

    match cli.command {
        Commands::Init => run_init(store)?,
        Commands::Info { json } => run_info(store, json)?,
        Commands::Unit { command } => match command {
            UnitCommands::List { json } => run_unit_list(store, json)?,
            UnitCommands::Add {
                name,
                non_interactive,
            } => run_unit_add(store, name, non_interactive)?,
            UnitCommands::Update {
                id,
                name,
                non_interactive,
            } => run_unit_update(store, id, name, non_interactive)?,
            UnitCommands::Remove {
                id,
                non_interactive,
                yes,
            } => run_unit_remove(store, id, non_interactive, yes)?,
        },
        Commands::Site { command } => match command {
            SiteCommands::List { json } => run_site_list(store, json)?,
            SiteCommands::Add {
                city,
                country,
                non_interactive,
            } => run_site_add(store, city, country, non_interactive)?,
            SiteCommands::Update {
                id,
                city,
                country,
                non_interactive,
            } => run_site_update(store, id, city, country, non_interactive)?,
            SiteCommands::Remove {
                id,
                non_interactive,
                yes,
            } => run_site_remove(store, id, non_interactive, yes)?,
        },
        Commands::Personnel { command } => match command {
            PersonnelCommands::List { json } => run_personnel_list(store, json)?,
            PersonnelCommands::Add {
                fields,
                non_interactive,
            } => run_personnel_add(store, fields, non_interactive)?,
            PersonnelCommands::Update {
                id,
                fields,
                non_interactive,
            } => run_personnel_update(store, id, fields, non_interactive)?,
            PersonnelCommands::Remove {
                id,
                non_interactive,
                yes,
            } => run_personnel_remove(store, id, non_interactive, yes)?,
        },
    }

    Ok(())
}
