use clap::Subcommand;
use rust_decimal::Decimal;

#[derive(Subcommand)]
pub enum UnitCommands {
    /// List organizational units
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add an organizational unit
    Add {
        /// Unit name (unique)
        #[arg(long)]
        name: Option<String>,

        /// Skip interactive prompts
        #[arg(long)]
        non_interactive: bool,
    },

    /// Rename an organizational unit
    Update {
        /// Unit ID to rename
        #[arg(long)]
        id: Option<i64>,

        /// New unit name
        #[arg(long)]
        name: Option<String>,

        /// Skip interactive prompts
        #[arg(long)]
        non_interactive: bool,
    },

    /// Remove an organizational unit that has no personnel
    Remove {
        /// Unit ID to remove
        #[arg(long)]
        id: Option<i64>,

        /// Skip interactive prompts
        #[arg(long)]
        non_interactive: bool,

        /// Skip confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum SiteCommands {
    /// List sites
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a site
    Add {
        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        country: Option<String>,

        /// Skip interactive prompts
        #[arg(long)]
        non_interactive: bool,
    },

    /// Change a site's city and/or country
    Update {
        /// Site ID to update
        #[arg(long)]
        id: Option<i64>,

        /// New city (keeps the current one if omitted)
        #[arg(long)]
        city: Option<String>,

        /// New country (keeps the current one if omitted)
        #[arg(long)]
        country: Option<String>,

        /// Skip interactive prompts
        #[arg(long)]
        non_interactive: bool,
    },

    /// Remove a site that has no personnel
    Remove {
        /// Site ID to remove
        #[arg(long)]
        id: Option<i64>,

        /// Skip interactive prompts
        #[arg(long)]
        non_interactive: bool,

        /// Skip confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(clap::Args)]
pub struct PersonnelFields {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    /// Salary between 0 and 1000000
    #[arg(long, allow_hyphen_values = true)]
    pub salary: Option<Decimal>,

    /// Organizational unit ID
    #[arg(long)]
    pub unit_id: Option<i64>,

    #[arg(long)]
    pub site_id: Option<i64>,

    /// Manager's personnel ID (0 for none)
    #[arg(long)]
    pub manager_id: Option<i64>,
}

#[derive(Subcommand)]
pub enum PersonnelCommands {
    /// List personnel records
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a personnel record
    Add {
        #[command(flatten)]
        fields: PersonnelFields,

        /// Skip interactive prompts
        #[arg(long)]
        non_interactive: bool,
    },

    /// Update a personnel record; omitted fields keep their current values
    Update {
        /// Personnel ID to update
        #[arg(long)]
        id: Option<i64>,

        #[command(flatten)]
        fields: PersonnelFields,

        /// Skip interactive prompts
        #[arg(long)]
        non_interactive: bool,
    },

    /// Remove a personnel record that manages nobody
    Remove {
        /// Personnel ID to remove
        #[arg(long)]
        id: Option<i64>,

        /// Skip interactive prompts
        #[arg(long)]
        non_interactive: bool,

        /// Skip confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}
