use super::open_pool;
use crate::cli::parser::{Commands, TeamAction};
use crate::config::Config;
use crate::core::directory::TeamLogic;
use crate::db::queries::list_teams;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Team { action } = cmd {
        let mut pool = open_pool(cfg)?;

        match action {
            TeamAction::Add { name } => {
                let id = TeamLogic::add(&mut pool, name)?;
                success(format!("Team {name} added with id {id}"));
            }
            TeamAction::List => {
                let teams = list_teams(&pool.conn)?;
                if teams.is_empty() {
                    info("No teams.");
                    return Ok(());
                }

                let mut table = Table::new(vec![Column::right("ID"), Column::left("Team")])
                    .with_separator(&cfg.separator_char);
                for t in &teams {
                    table.add_row(vec![t.id.to_string(), t.team.clone()]);
                }
                print!("{}", table.render());
            }
            TeamAction::Del { id } => {
                TeamLogic::delete(&mut pool, *id)?;
                success(format!("Team {id} deleted"));
            }
        }
    }

    Ok(())
}
