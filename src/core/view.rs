//! Filtered, sorted window over a [`WorkloadMatrix`].

use crate::core::aggregate::{AggregatedRow, WorkloadMatrix};
use crate::errors::{AppError, AppResult};
use crate::models::month::Month;
use clap::ValueEnum;
use serde::Deserialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Firstname,
    Subject,
}

#[derive(Debug, Clone, Default)]
pub struct MatrixFilter {
    /// Case-insensitive substring of the person's name.
    pub name: Option<String>,
    /// Case-insensitive substring of the subject.
    pub subject: Option<String>,
    pub from: Option<Month>,
    pub to: Option<Month>,
    pub sort: Option<SortKey>,
    pub descending: bool,
    /// Keep rows whose load is 0 over every visible month.
    pub keep_empty: bool,
}

impl MatrixFilter {
    pub fn validate(&self) -> AppResult<()> {
        if let (Some(from), Some(to)) = (self.from, self.to)
            && from > to
        {
            return Err(AppError::InvalidPeriod(format!(
                "min month {} is after max month {}",
                from.label(),
                to.label()
            )));
        }
        Ok(())
    }

    fn month_visible(&self, m: &Month) -> bool {
        self.from.is_none_or(|from| *m >= from) && self.to.is_none_or(|to| *m <= to)
    }

    fn row_matches(&self, row: &AggregatedRow) -> bool {
        contains_ci(&row.name, self.name.as_deref())
            && contains_ci(&row.subject, self.subject.as_deref())
    }
}

fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(n) if !n.is_empty() => haystack.to_lowercase().contains(&n.to_lowercase()),
        _ => true,
    }
}

fn compare(a: &AggregatedRow, b: &AggregatedRow, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Firstname => a.firstname.cmp(&b.firstname),
        SortKey::Subject => a.subject.cmp(&b.subject),
    }
}

/// Rows and months left visible after applying a [`MatrixFilter`].
#[derive(Debug, Clone)]
pub struct MatrixView<'a> {
    pub rows: Vec<&'a AggregatedRow>,
    pub months: Vec<Month>,
}

impl<'a> MatrixView<'a> {
    pub fn new(matrix: &'a WorkloadMatrix, filter: &MatrixFilter) -> AppResult<Self> {
        filter.validate()?;

        let months: Vec<Month> = matrix
            .months
            .iter()
            .filter(|m| filter.month_visible(m))
            .copied()
            .collect();

        let mut rows: Vec<&AggregatedRow> = matrix
            .rows
            .iter()
            .filter(|r| filter.row_matches(r))
            .collect();

        if let Some(key) = filter.sort {
            // stable: ties keep first-appearance order
            rows.sort_by(|a, b| {
                let ord = compare(a, b, key);
                if filter.descending { ord.reverse() } else { ord }
            });
        }

        if !filter.keep_empty {
            rows.retain(|r| r.load_sum(&months) > 0);
        }

        Ok(Self { rows, months })
    }

    /// Whole matrix, nothing hidden.
    pub fn all(matrix: &'a WorkloadMatrix) -> Self {
        Self {
            rows: matrix.rows.iter().collect(),
            months: matrix.months.clone(),
        }
    }

    pub fn row_sum(&self, row: &AggregatedRow) -> i64 {
        row.load_sum(&self.months)
    }

    /// Total load per visible month.
    pub fn column_sums(&self) -> Vec<i64> {
        self.months
            .iter()
            .map(|m| self.rows.iter().map(|r| r.load_for(m) as i64).sum())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
