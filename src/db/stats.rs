use crate::db::pool::DbPool;
use crate::db::queries::month_span;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

fn count(pool: &DbPool, table: &str) -> rusqlite::Result<i64> {
    pool.conn
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TABLE COUNTS
    //
    for (label, table) in [
        ("Persons", "persons"),
        ("Subjects", "subjects"),
        ("Teams", "teams"),
        ("Workload entries", "workloads"),
        ("Comments", "comments"),
        ("Admins", "admins"),
    ] {
        let n = count(pool, table)?;
        println!("{}• {}:{} {}{}{}", CYAN, label, RESET, GREEN, n, RESET);
    }

    //
    // 3) MONTH RANGE
    //
    let span = month_span(&pool.conn)?;
    let (fmt_first, fmt_last) = match span {
        Some((a, b)) => (a.label(), b.label()),
        None => (format!("{GREY}--{RESET}"), format!("{GREY}--{RESET}")),
    };

    println!("{}• Month range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE LOAD PER ENTRY
    //
    let avg: Option<f64> = pool
        .conn
        .query_row("SELECT AVG(load) FROM workloads", [], |row| row.get(0))?;
    if let Some(avg) = avg {
        println!("{}• Average load/entry:{} {:.2} days", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
