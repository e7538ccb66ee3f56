use super::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::workload::SubmitLogic;
use crate::errors::AppResult;
use crate::models::month::Month;
use crate::models::workload::WorkloadEntry;
use crate::ui::messages::{success, warning};
use crate::utils::formatting::days;

/// Handle `set` and `unset`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Set {
            person,
            subject,
            month,
            load,
        } => {
            // validate before touching the database
            let month = Month::parse(month)?;
            let entry = WorkloadEntry::new(*person, *subject, month, *load)?;

            let mut pool = open_pool(cfg)?;
            let outcome = SubmitLogic::apply(&mut pool, &entry, "cli")?;
            success(format!(
                "{} ({} on {})",
                outcome.message(),
                days(*load as i64),
                month.label()
            ));
        }
        Commands::Unset {
            person,
            subject,
            month,
        } => {
            let month = Month::parse(month)?;
            let mut pool = open_pool(cfg)?;
            if SubmitLogic::remove(&mut pool, *person, *subject, &month)? {
                success(format!("Load removed for {}", month.label()));
            } else {
                warning(format!("No load recorded for {}", month.label()));
            }
        }
        _ => {}
    }

    Ok(())
}
