//! Standalone HTML rendering of the matrix, shared by the `html` export and
//! `GET /api/list_all`.

use crate::core::palette::Palette;
use crate::core::view::MatrixView;
use crate::errors::AppResult;
use crate::export::model::{LEAD_HEADERS, lead_cells};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `<table>` element: lead columns, one column per month, cells shaded
/// with inline palette colors.
pub fn render_table(view: &MatrixView<'_>, palette: &Palette) -> String {
    let mut html = String::from("<table border=\"1\">");

    html.push_str("<thead><tr>");
    for h in LEAD_HEADERS {
        html.push_str(&format!("<th>{h}</th>"));
    }
    for m in &view.months {
        html.push_str(&format!("<th>{}</th>", m.label()));
    }
    html.push_str("<th>Total</th></tr></thead><tbody>");

    for (idx, row) in view.rows.iter().enumerate() {
        html.push_str("<tr>");
        for value in lead_cells(view, idx) {
            html.push_str(&format!("<td>{}</td>", escape(&value)));
        }
        for m in &view.months {
            let load = row.load_for(m);
            let (bg, fg) = palette.cell_colors(load);
            html.push_str(&format!(
                "<td style=\"background-color:{};color:{};text-align:center\">{load}</td>",
                bg.to_hex(),
                fg.as_hex()
            ));
        }
        html.push_str(&format!("<td>{}</td></tr>", view.row_sum(row)));
    }

    html.push_str("</tbody></table>");
    html
}

pub fn render_document(view: &MatrixView<'_>, palette: &Palette, title: &str) -> String {
    let title = escape(title);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>table{{border-collapse:collapse;font-family:sans-serif;font-size:13px}}\
         th,td{{padding:3px 6px}}th{{background:#2f75b5;color:#ffffff}}</style>\n\
         </head>\n<body>\n<h1>{title}</h1>\n{}\n</body>\n</html>\n",
        render_table(view, palette)
    )
}

pub(crate) fn export_html(
    view: &MatrixView<'_>,
    palette: &Palette,
    path: &Path,
    title: &str,
) -> AppResult<()> {
    info(format!("Exporting to HTML: {}", path.display()));
    fs::write(path, render_document(view, palette, title))?;
    notify_export_success("HTML", path);
    Ok(())
}
