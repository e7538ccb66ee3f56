//! rPlanCharge library root.
//! Exposes the CLI parser, the high-level run() function, the REST server
//! and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod server;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Person { .. } => commands::person::handle(&cli.command, cfg),
        Commands::Subject { .. } => commands::subject::handle(&cli.command, cfg),
        Commands::Team { .. } => commands::team::handle(&cli.command, cfg),
        Commands::Set { .. } | Commands::Unset { .. } => {
            commands::set::handle(&cli.command, cfg)
        }
        Commands::Comment { .. } => commands::comment::handle(&cli.command, cfg),
        Commands::Admin { .. } => commands::admin::handle(&cli.command, cfg),
        Commands::Show { .. } => commands::show::handle(&cli.command, cfg),
        Commands::List { .. } => commands::list::handle(&cli.command, cfg),
        Commands::Palette { .. } => commands::palette::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => commands::backup::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Serve { .. } => commands::serve::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // in test mode the user's config file is ignored
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
