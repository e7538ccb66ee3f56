use super::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::{RowScope, load_workload_rows};
use crate::errors::AppResult;
use crate::models::comment::comment_or_placeholder;
use crate::ui::messages::{header, warning};
use crate::utils::colors::colorize_comment;
use crate::utils::date::{describe_period, resolve_period};
use crate::utils::table::{Column, Table};

/// Flat listing, one line per (person, subject, month).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { period, team } = cmd {
        let bounds = resolve_period(period)?;
        let pool = open_pool(cfg)?;
        let rows = load_workload_rows(
            &pool.conn,
            RowScope {
                bounds,
                team_id: *team,
            },
        )?;

        if rows.is_empty() {
            warning(format!("No workload for {}.", describe_period(bounds)));
            return Ok(());
        }

        header(
            format!("Workload, {}", describe_period(bounds)),
            &cfg.separator_char,
        );

        let mut table = Table::new(vec![
            Column::left("Month"),
            Column::right("ID"),
            Column::left("Name"),
            Column::left("Firstname"),
            Column::right("ID"),
            Column::left("Subject"),
            Column::right("Load"),
            Column::left("Comment"),
        ])
        .with_separator(&cfg.separator_char);

        for r in &rows {
            table.add_row(vec![
                r.month.label(),
                r.person_id.to_string(),
                r.name.clone(),
                r.firstname.clone(),
                r.subject_id.to_string(),
                r.subject.clone(),
                r.load.to_string(),
                colorize_comment(comment_or_placeholder(r.comment.as_deref())),
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
