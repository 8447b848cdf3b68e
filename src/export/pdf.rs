use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Minimal A4 report writer: titled pages, a paginated table and a
/// closing block of label/value lines.
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
    bold_font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Cursor left on the last page after the table, so more content can follow.
struct PageCursor {
    content: Content,
    y: f32,
    page: usize,
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 40.0,
            row_h: 18.0,

            next_id: 5,
            font_id,
            bold_font_id,

            font_size: 9.0,
            header_font_size: 10.0,
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

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(Name(b"F1"), self.font_id);
        fonts.pair(Name(b"F2"), self.bold_font_id);
        drop(fonts);
        drop(resources);
        drop(page);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn draw_text(content: &mut Content, font: &[u8], x: f32, y: f32, size: f32, text: &str) {
        let bytes: Vec<u8> = text.chars().map(win_ansi_byte).collect();

        content.begin_text();
        content.set_font(Name(font), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    /// Rough Helvetica advance width.
    fn text_width(text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * 0.52
    }

    fn fill_band(&self, content: &mut Content, y: f32, w: f32, gray: f32) {
        content.save_state();
        content.set_fill_rgb(gray, gray, gray);
        content.rect(self.margin, y, w, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        right_align: &[bool],
        row: &[String],
        font: &[u8],
        font_size: f32,
    ) {
        let mut x = self.margin;

        for (i, text) in row.iter().enumerate() {
            let w = col_widths[i];
            let tx = if right_align.get(i).copied().unwrap_or(false) {
                x + w - 4.0 - Self::text_width(text, font_size)
            } else {
                x + 4.0
            };
            Self::draw_text(content, font, tx, y + 5.0, font_size, text);

            content.save_state();
            content.set_stroke_rgb(0.65, 0.65, 0.65);
            content.rect(x, y, w, self.row_h);
            content.stroke();
            content.restore_state();

            x += w;
        }
    }

    /// Column widths from header + content, scaled down to fit the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| Self::text_width(h, self.header_font_size) + 10.0)
            .collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(Self::text_width(cell, self.font_size) + 10.0);
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

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, subtitle: &str, page: usize) {
        Self::draw_text(
            content,
            b"F2",
            self.margin,
            self.page_h - self.margin,
            self.title_font_size,
            title,
        );
        Self::draw_text(
            content,
            b"F1",
            self.margin,
            self.page_h - self.margin - 16.0,
            self.font_size,
            subtitle,
        );

        let pg = format!("Page {}", page);
        Self::draw_text(
            content,
            b"F1",
            self.page_w - self.margin - 40.0,
            self.margin - 25.0,
            self.font_size,
            &pg,
        );
    }

    fn start_page(&mut self, title: &str, subtitle: &str, page: usize) -> PageCursor {
        let mut content = self.new_page();
        self.draw_page_header_footer(&mut content, title, subtitle, page);
        PageCursor {
            content,
            y: self.page_h - self.margin - 45.0,
            page,
        }
    }

    /// Multipage table followed by a summary block.
    ///
    /// `right_align` marks numeric columns; `summary` lines are printed
    /// as "label: value" under the table.
    pub fn write_report(
        &mut self,
        title: &str,
        subtitle: &str,
        headers: &[&str],
        right_align: &[bool],
        rows: &[Vec<String>],
        summary: &[(String, String)],
    ) {
        let col_widths = self.compute_col_widths(headers, rows);
        let table_w: f32 = col_widths.iter().sum();
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        let mut cursor = self.start_page(title, subtitle, 1);
        self.fill_band(&mut cursor.content, cursor.y, table_w, 0.85);
        self.draw_row(
            &mut cursor.content,
            cursor.y,
            &col_widths,
            &[],
            &header_row,
            b"F2",
            self.header_font_size,
        );
        cursor.y -= self.row_h;

        for (i, row) in rows.iter().enumerate() {
            if cursor.y - self.row_h < self.margin {
                let next = cursor.page + 1;
                self.finalize_page(cursor.content);
                cursor = self.start_page(title, subtitle, next);
                self.fill_band(&mut cursor.content, cursor.y, table_w, 0.85);
                self.draw_row(
                    &mut cursor.content,
                    cursor.y,
                    &col_widths,
                    &[],
                    &header_row,
                    b"F2",
                    self.header_font_size,
                );
                cursor.y -= self.row_h;
            }

            if i % 2 == 0 {
                self.fill_band(&mut cursor.content, cursor.y, table_w, 0.96);
            }

            self.draw_row(
                &mut cursor.content,
                cursor.y,
                &col_widths,
                right_align,
                row,
                b"F1",
                self.font_size,
            );
            cursor.y -= self.row_h;
        }

        // Summary block, on a fresh page when it does not fit.
        let needed = (summary.len() as f32 + 1.0) * self.row_h;
        if cursor.y - needed < self.margin {
            let next = cursor.page + 1;
            self.finalize_page(cursor.content);
            cursor = self.start_page(title, subtitle, next);
        }

        cursor.y -= self.row_h;
        for (label, value) in summary {
            Self::draw_text(
                &mut cursor.content,
                b"F2",
                self.margin,
                cursor.y,
                self.header_font_size,
                &format!("{label}:"),
            );
            Self::draw_text(
                &mut cursor.content,
                b"F1",
                self.margin + 130.0,
                cursor.y,
                self.header_font_size,
                value,
            );
            cursor.y -= self.row_h;
        }

        self.finalize_page(cursor.content);
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.iter().copied());
        drop(pages);

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// WinAnsiEncoding byte for a character; `?` when the font has no glyph.
/// Matches Latin-1 from 0xA0 up, the 0x80-0x9F block holds the euro sign
/// and typographic punctuation.
pub(crate) fn win_ansi_byte(c: char) -> u8 {
    match c {
        ' '..='~' | '\u{A0}'..='\u{FF}' => c as u8,
        '€' => 0x80,
        '‚' => 0x82,
        '„' => 0x84,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '–' => 0x96,
        '—' => 0x97,
        _ => b'?',
    }
}
