use crate::core::view::SortKey;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rPlanCharge
/// Monthly workload planning (plan de charge) on SQLite
#[derive(Parser)]
#[command(
    name = "rplancharge",
    version = env!("CARGO_PKG_VERSION"),
    about = "Plan monthly workloads per person and subject, render a colored matrix, serve it over REST",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Report missing fields and write their defaults"
        )]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Manage persons
    Person {
        #[command(subcommand)]
        action: PersonAction,
    },

    /// Manage subjects
    Subject {
        #[command(subcommand)]
        action: SubjectAction,
    },

    /// Manage teams
    Team {
        #[command(subcommand)]
        action: TeamAction,
    },

    /// Record the load of a person on a subject for one month
    Set {
        #[arg(long = "person", help = "Person id")]
        person: i64,

        #[arg(long = "subject", help = "Subject id")]
        subject: i64,

        #[arg(long = "month", help = "Month (YYYY-MM, YYYY-MM-DD or MM/YYYY)")]
        month: String,

        #[arg(long = "load", help = "Days of work, 0 to 31")]
        load: i32,
    },

    /// Remove the load of a person on a subject for one month
    Unset {
        #[arg(long = "person")]
        person: i64,

        #[arg(long = "subject")]
        subject: i64,

        #[arg(long = "month")]
        month: String,
    },

    /// Set or clear the comment of a (person, subject) pair
    Comment {
        #[arg(long = "person")]
        person: i64,

        #[arg(long = "subject")]
        subject: i64,

        #[arg(long = "text", conflicts_with = "clear")]
        text: Option<String>,

        #[arg(long = "clear", help = "Remove the comment")]
        clear: bool,
    },

    /// Manage admin logins
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },

    /// Flat listing of workload rows
    Show {
        #[arg(
            long = "period",
            help = "YYYY, YYYY-MM, START:END or all (default: all)"
        )]
        period: Option<String>,

        #[arg(long = "team", help = "Restrict to one team id")]
        team: Option<i64>,
    },

    /// Workload matrix with palette colors
    List {
        #[arg(long = "period", help = "YYYY, YYYY-MM, START:END or all")]
        period: Option<String>,

        #[arg(long = "team", help = "Restrict to one team id")]
        team: Option<i64>,

        #[arg(long = "name", help = "Name contains (case-insensitive)")]
        name: Option<String>,

        #[arg(long = "subject", help = "Subject contains (case-insensitive)")]
        subject: Option<String>,

        #[arg(long = "from", help = "First visible month")]
        from: Option<String>,

        #[arg(long = "to", help = "Last visible month")]
        to: Option<String>,

        #[arg(long = "sort", value_enum)]
        sort: Option<SortKey>,

        #[arg(long = "desc", help = "Sort descending")]
        desc: bool,

        #[arg(long = "all", help = "Keep rows with no load in the window")]
        all: bool,
    },

    /// Print the active palette
    Palette {
        #[arg(long = "load", help = "Show the colors of a single load")]
        load: Option<i32>,
    },

    /// Export workload data
    Export {
        #[arg(long, value_enum)]
        format: ExportFormat,

        #[arg(long, help = "Absolute output path")]
        file: String,

        #[arg(long = "range", help = "YYYY, YYYY-MM, START:END or all")]
        range: Option<String>,

        #[arg(long = "team", help = "Restrict to one team id")]
        team: Option<i64>,

        #[arg(long, help = "Overwrite without asking")]
        force: bool,
    },

    /// Backup the database
    Backup {
        #[arg(long = "file", help = "Destination file")]
        file: String,

        #[arg(long = "compress", help = "Compress to .zip")]
        compress: bool,

        #[arg(long, help = "Overwrite without asking")]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Start the REST server
    Serve {
        #[arg(long = "bind", help = "Address to listen on (default from config)")]
        bind: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum PersonAction {
    /// Add a person
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        firstname: String,

        #[arg(long = "team", help = "Team id")]
        team: Option<i64>,
    },
    /// List persons
    List,
    /// Move a person to a team, or out of any team
    Assign {
        #[arg(long)]
        id: i64,

        #[arg(long = "team", help = "Team id; omit to remove from team")]
        team: Option<i64>,
    },
    /// Delete a person with their loads and comments
    Del {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum SubjectAction {
    /// Add a subject
    Add {
        #[arg(long)]
        name: String,
    },
    /// List subjects
    List,
    /// Delete a subject with its loads and comments
    Del {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum TeamAction {
    /// Add a team
    Add {
        #[arg(long)]
        name: String,
    },
    /// List teams
    List,
    /// Delete a team (members are kept, without team)
    Del {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum AdminAction {
    /// Grant admin rights to a person under a login
    Add {
        #[arg(long)]
        person: i64,

        #[arg(long)]
        login: String,
    },
    /// List admins
    List,
    /// Revoke an admin login
    Del {
        #[arg(long)]
        login: String,
    },
}
