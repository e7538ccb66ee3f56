//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Cut `s` to `max` display columns, marking the cut with "...".
pub fn truncate(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 3 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    out
}

/// "1 day", "12 days".
pub fn days(load: i64) -> String {
    if load == 1 {
        "1 day".to_string()
    } else {
        format!("{load} days")
    }
}
