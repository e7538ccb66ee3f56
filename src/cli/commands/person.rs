use super::open_pool;
use crate::cli::parser::{Commands, PersonAction};
use crate::config::Config;
use crate::core::directory::PersonLogic;
use crate::db::queries::list_persons;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::colors::{GREY, RESET};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Person { action } = cmd {
        let mut pool = open_pool(cfg)?;

        match action {
            PersonAction::Add {
                name,
                firstname,
                team,
            } => {
                let id = PersonLogic::add(&mut pool, name, firstname, *team)?;
                success(format!("Person {name} {firstname} added with id {id}"));
            }
            PersonAction::List => {
                let persons = list_persons(&pool.conn)?;
                if persons.is_empty() {
                    info("No persons.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::right("ID"),
                    Column::left("Name"),
                    Column::left("Firstname"),
                    Column::left("Team"),
                ])
                .with_separator(&cfg.separator_char);

                for p in &persons {
                    let team = p
                        .team
                        .clone()
                        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
                    table.add_row(vec![
                        p.id.to_string(),
                        p.name.clone(),
                        p.firstname.clone(),
                        team,
                    ]);
                }
                print!("{}", table.render());
            }
            PersonAction::Assign { id, team } => {
                PersonLogic::assign_team(&mut pool, *id, *team)?;
                match team {
                    Some(t) => success(format!("Person {id} moved to team {t}")),
                    None => success(format!("Person {id} removed from team")),
                }
            }
            PersonAction::Del { id } => {
                PersonLogic::delete(&mut pool, *id)?;
                success(format!("Person {id} deleted"));
            }
        }
    }

    Ok(())
}
