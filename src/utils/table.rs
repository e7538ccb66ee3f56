//! Table rendering utilities for CLI outputs.
//!
//! Widths are measured on the visible text, so cells may carry ANSI styling.

use crate::utils::colors::RESET;
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern"));

pub fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            align: Align::Left,
        }
    }

    pub fn right(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            align: Align::Right,
        }
    }

    pub fn center(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            align: Align::Center,
        }
    }
}

/// A cell: text plus an optional style applied over the padded width.
pub struct Cell {
    pub text: String,
    pub style: Option<String>,
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self { text, style: None }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
            style: None,
        }
    }
}

impl Cell {
    pub fn styled(text: impl Into<String>, style: String) -> Self {
        Self {
            text: text.into(),
            style: Some(style),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
    pub separator: String,
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(visible_width(text));
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(fill)),
        Align::Right => format!("{}{}", " ".repeat(fill), text),
        Align::Center => {
            let left = fill / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(fill - left))
        }
    }
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: "-".to_string(),
        }
    }

    pub fn with_separator(mut self, sep: &str) -> Self {
        if !sep.is_empty() {
            self.separator = sep.to_string();
        }
        self
    }

    pub fn add_row<C: Into<Cell>>(&mut self, row: Vec<C>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| visible_width(&c.header))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(visible_width(&cell.text));
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&format!(" {} ", pad(&col.header, *w, col.align)));
        }
        out.push('\n');

        let total: usize = widths.iter().map(|w| w + 2).sum();
        out.push_str(&self.separator.repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, (col, w)) in self.columns.iter().zip(&widths).enumerate() {
                let text = row.get(i).map(|c| c.text.as_str()).unwrap_or("");
                let padded = pad(text, *w, col.align);
                match row.get(i).and_then(|c| c.style.as_deref()) {
                    Some(style) => out.push_str(&format!("{style} {padded} {RESET}")),
                    None => out.push_str(&format!(" {padded} ")),
                }
            }
            out.push('\n');
        }

        out
    }
}
