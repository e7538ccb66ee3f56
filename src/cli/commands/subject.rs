use super::open_pool;
use crate::cli::parser::{Commands, SubjectAction};
use crate::config::Config;
use crate::core::directory::SubjectLogic;
use crate::db::queries::list_subjects;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Subject { action } = cmd {
        let mut pool = open_pool(cfg)?;

        match action {
            SubjectAction::Add { name } => {
                let id = SubjectLogic::add(&mut pool, name)?;
                success(format!("Subject {name} added with id {id}"));
            }
            SubjectAction::List => {
                let subjects = list_subjects(&pool.conn)?;
                if subjects.is_empty() {
                    info("No subjects.");
                    return Ok(());
                }

                let mut table = Table::new(vec![Column::right("ID"), Column::left("Subject")])
                    .with_separator(&cfg.separator_char);
                for s in &subjects {
                    table.add_row(vec![s.id.to_string(), s.subject.clone()]);
                }
                print!("{}", table.render());
            }
            SubjectAction::Del { id } => {
                SubjectLogic::delete(&mut pool, *id)?;
                success(format!("Subject {id} deleted"));
            }
        }
    }

    Ok(())
}
