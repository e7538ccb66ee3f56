/// ANSI color helper utilities for terminal output.
use crate::core::palette::{Rgb, TextColor};
use crate::models::comment::NO_COMMENT;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// 24-bit background escape.
pub fn bg_rgb(c: Rgb) -> String {
    format!("\x1b[48;2;{};{};{}m", c.r, c.g, c.b)
}

/// 24-bit foreground escape.
pub fn fg_rgb(c: Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", c.r, c.g, c.b)
}

/// Escape sequence painting a matrix cell with its palette colors.
pub fn cell_style(bg: Rgb, text: TextColor) -> String {
    format!("{}{}", bg_rgb(bg), fg_rgb(text.rgb()))
}

/// Greys out the comment placeholder, leaves real comments untouched.
pub fn colorize_comment(value: &str) -> String {
    if value.trim().is_empty() || value == NO_COMMENT {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Row/column totals: grey when idle, red above a full month.
pub fn color_for_total(value: i64, months: usize) -> &'static str {
    if value == 0 {
        GREY
    } else if months > 0 && value > 31 * months as i64 {
        RED
    } else {
        RESET
    }
}
