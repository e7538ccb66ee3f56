use crate::core::palette::Rgb;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One table cell; `fill` paints the background.
#[derive(Debug, Clone)]
pub struct PdfCell {
    pub text: String,
    pub fill: Option<Rgb>,
    pub color: Rgb,
}

impl PdfCell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fill: None,
            color: Rgb::BLACK,
        }
    }

    pub fn filled(text: impl Into<String>, fill: Rgb, color: Rgb) -> Self {
        Self {
            text: text.into(),
            fill: Some(fill),
            color,
        }
    }
}

/// Helvetica is declared with WinAnsi encoding; other characters become `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) < 0x100 { c as u8 } else { b'?' })
        .collect()
}

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    /// A4 landscape; the matrix is wider than it is tall.
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 842.0,
            page_h: 595.0,
            margin: 36.0,
            row_h: 18.0,

            next_id: 4,
            font_id,

            font_size: 8.0,
            header_font_size: 8.5,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn draw_text(
        &self,
        content: &mut Content,
        x: f32,
        y: f32,
        size: f32,
        color: Rgb,
        text: &str,
    ) {
        let (r, g, b) = color.to_unit();
        content.begin_text();
        content.set_fill_rgb(r, g, b);
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&win_ansi(text)));
        content.end_text();
    }

    fn fill_rect(&self, content: &mut Content, x: f32, y: f32, w: f32, color: Rgb) {
        let (r, g, b) = color.to_unit();
        content.save_state();
        content.set_fill_rgb(r, g, b);
        content.rect(x, y, w, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, self.row_h);
        content.stroke();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[PdfCell],
        size: f32,
    ) {
        let mut x = self.margin;

        for (cell, w) in row.iter().zip(col_widths) {
            if let Some(fill) = cell.fill {
                self.fill_rect(content, x, y, *w, fill);
            }
            self.draw_text(content, x + 3.0, y + 5.0, size, cell.color, &cell.text);
            self.draw_cell_borders(content, x, y, *w);
            x += w;
        }
    }

    /// Widths from header and content, scaled down to fit the page.
    fn compute_col_widths(&self, headers: &[PdfCell], rows: &[Vec<PdfCell>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| h.text.chars().count() as f32 * 5.2 + 8.0)
            .collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.text.chars().count() as f32 * 4.8 + 8.0);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, page: usize) {
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin + 10.0,
            self.title_font_size,
            Rgb::BLACK,
            title,
        );

        self.draw_text(
            content,
            self.page_w - self.margin - 50.0,
            self.margin - 24.0,
            self.font_size,
            Rgb::BLACK,
            &format!("Page {page}"),
        );
    }

    /// Multi-page table; the header row is repeated on each page.
    pub fn write_table(&mut self, title: &str, headers: &[String], rows: &[Vec<PdfCell>]) {
        let header_fill = Rgb::new(0xD9, 0xDE, 0xE6);
        let header_row: Vec<PdfCell> = headers
            .iter()
            .map(|h| PdfCell::filled(h.as_str(), header_fill, Rgb::BLACK))
            .collect();
        let col_widths = self.compute_col_widths(&header_row, rows);

        let mut remaining: &[Vec<PdfCell>] = rows;
        let mut page_idx = 1;

        loop {
            let mut content = self.new_page();
            self.draw_page_header_footer(&mut content, title, page_idx);

            let mut y = self.page_h - self.margin - 30.0;
            self.draw_row(
                &mut content,
                y,
                &col_widths,
                &header_row,
                self.header_font_size,
            );
            y -= self.row_h;

            let mut consumed = 0;
            for row in remaining {
                if y - self.row_h < self.margin {
                    break;
                }
                self.draw_row(&mut content, y, &col_widths, row, self.font_size);
                y -= self.row_h;
                consumed += 1;
            }

            self.finalize_page(content);
            remaining = &remaining[consumed..];
            page_idx += 1;

            if remaining.is_empty() {
                break;
            }
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        let count = self.page_refs.len() as i32;
        self.pdf
            .pages(self.pages_id)
            .count(count)
            .kids(self.page_refs.iter().copied());

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
