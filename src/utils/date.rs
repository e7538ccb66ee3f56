use crate::errors::{AppError, AppResult};
use crate::models::month::Month;

/// Bounds of a single period token.
///
/// - `YYYY` → January..December
/// - `YYYY-MM`, `YYYY-MM-DD`, `MM/YYYY` → that month
fn period_bounds(p: &str) -> AppResult<(Month, Month)> {
    let p = p.trim();
    let invalid = || AppError::InvalidPeriod(p.to_string());

    if p.len() == 4 && p.chars().all(|c| c.is_ascii_digit()) {
        let year: i32 = p.parse().map_err(|_| invalid())?;
        let first = Month::first(year).ok_or_else(invalid)?;
        let last = Month::last(year).ok_or_else(invalid)?;
        return Ok((first, last));
    }

    let m = Month::parse(p).map_err(|_| invalid())?;
    Ok((m, m))
}

/// Parse a `--period` / `--range` expression into inclusive month bounds.
///
/// Supports:
/// - `all` → no bounds
/// - `YYYY`, `YYYY-MM` (and the other month forms)
/// - `START:END` with any of the above on each side
pub fn parse_period(p: &str) -> AppResult<Option<(Month, Month)>> {
    if p.trim().eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    let (start, end) = match p.split_once(':') {
        Some((a, b)) => (period_bounds(a)?.0, period_bounds(b)?.1),
        None => period_bounds(p)?,
    };

    if start > end {
        return Err(AppError::InvalidPeriod(format!(
            "{p}: start is after end"
        )));
    }

    Ok(Some((start, end)))
}

/// Resolve an optional period, defaulting to no bounds.
pub fn resolve_period(period: &Option<String>) -> AppResult<Option<(Month, Month)>> {
    match period {
        Some(p) => parse_period(p),
        None => Ok(None),
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

/// Human title for a period expression, used by PDF/HTML exports.
pub fn describe_period(bounds: Option<(Month, Month)>) -> String {
    match bounds {
        None => "all months".to_string(),
        Some((a, b)) if a == b => format!("{} {}", month_name(a.month()), a.year()),
        Some((a, b)) if a.year() == b.year() && a.month() == 1 && b.month() == 12 => {
            format!("year {}", a.year())
        }
        Some((a, b)) => format!("{} to {}", a.label(), b.label()),
    }
}
