//! Calendar month, stored as the first day of the month.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A month of the workload plan.
///
/// Always normalized to day 1, so ordering, equality and hashing are
/// month-granular. Renders as `YYYY-MM-DD` (the storage form), which also
/// sorts lexically in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NaiveDate);

impl Month {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Month)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        // day 1 always exists for a valid date's year/month
        Month(date.with_day(1).unwrap_or(date))
    }

    /// Parse a month from user or database input.
    ///
    /// Accepted forms:
    /// - `YYYY-MM`
    /// - `YYYY-MM-DD` (day is ignored)
    /// - `MM/YYYY`
    pub fn parse(input: &str) -> AppResult<Self> {
        let s = input.trim();
        let invalid = || AppError::InvalidMonth(input.to_string());

        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Month::from_date(d));
        }

        if let Some((y, m)) = s.split_once('-')
            && y.len() == 4
            && !m.contains('-')
        {
            let year: i32 = y.parse().map_err(|_| invalid())?;
            let month: u32 = m.parse().map_err(|_| invalid())?;
            return Month::new(year, month).ok_or_else(invalid);
        }

        if let Some((m, y)) = s.split_once('/')
            && y.len() == 4
        {
            let year: i32 = y.parse().map_err(|_| invalid())?;
            let month: u32 = m.parse().map_err(|_| invalid())?;
            return Month::new(year, month).ok_or_else(invalid);
        }

        Err(invalid())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// `YYYY-MM`
    pub fn label(&self) -> String {
        self.0.format("%Y-%m").to_string()
    }

    /// `MM YY`, the compact matrix header.
    pub fn short_label(&self) -> String {
        self.0.format("%m %y").to_string()
    }

    pub fn first(year: i32) -> Option<Self> {
        Month::new(year, 1)
    }

    pub fn last(year: i32) -> Option<Self> {
        Month::new(year, 12)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Month {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::parse(s)
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Month::parse(&raw).map_err(serde::de::Error::custom)
    }
}
