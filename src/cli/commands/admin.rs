use super::open_pool;
use crate::cli::parser::{AdminAction, Commands};
use crate::config::Config;
use crate::core::admin::AdminLogic;
use crate::db::queries::list_admins;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Admin { action } = cmd {
        let mut pool = open_pool(cfg)?;

        match action {
            AdminAction::Add { person, login } => {
                AdminLogic::grant(&mut pool, *person, login)?;
                success(format!("Admin '{login}' granted to person {person}"));
            }
            AdminAction::List => {
                let admins = list_admins(&pool.conn)?;
                if admins.is_empty() {
                    info("No admins.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::left("Login"),
                    Column::right("Person"),
                    Column::left("Name"),
                ])
                .with_separator(&cfg.separator_char);
                for a in &admins {
                    table.add_row(vec![
                        a.login.clone(),
                        a.person_id.to_string(),
                        format!("{} {}", a.name, a.firstname),
                    ]);
                }
                print!("{}", table.render());
            }
            AdminAction::Del { login } => {
                AdminLogic::revoke(&mut pool, login)?;
                success(format!("Admin '{login}' revoked"));
            }
        }
    }

    Ok(())
}
