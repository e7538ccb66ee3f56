use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::truncate;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;

const OP_TARGET_MAX: usize = 60;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "set" => Colour::Green,
        "unset" => Colour::Red,
        "comment" => Colour::Cyan,
        "person" | "subject" | "team" => Colour::Yellow,
        "admin" => Colour::Fixed(213),
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}

/// `operation (target)` with only the operation word colored, cut to
/// [`OP_TARGET_MAX`] visible characters.
fn render_op_target(entry: &LogEntry) -> String {
    let color = color_for_operation(&entry.operation);
    let plain = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };
    let cut = truncate(&plain, OP_TARGET_MAX);

    match cut.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(cut.as_str()).to_string(),
    }
}

fn display_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%F %T").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;
        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let rendered: Vec<(i64, String, String, &str)> = entries
            .iter()
            .map(|e| {
                (
                    e.id,
                    display_date(&e.date),
                    render_op_target(e),
                    e.message.as_str(),
                )
            })
            .collect();

        let id_w = rendered
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rendered.iter().map(|(_, d, ..)| d.len()).max().unwrap_or(0);
        let op_w = rendered
            .iter()
            .map(|(_, _, op, _)| strip_ansi(op).chars().count())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");
        for (id, date, op, message) in rendered {
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op).chars().count()));
            println!("{id:>id_w$}: {date:<date_w$} | {op}{padding} => {message}");
        }

        Ok(())
    }
}
