//! PDF report renderer.
//!
//! Lays out [`Section`]s onto fixed-size pages and serializes them with
//! `pdf-writer`. Only the three standard Type 1 fonts are used, so the
//! output embeds no font programs and is byte-for-byte reproducible for a
//! fixed generation timestamp.

use std::io::Write;

use chrono::{DateTime, Datelike, Timelike, Utc};
use pdf_writer::{Content, Date, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use super::escape::encode_win_ansi;
use super::layout::{Align, Block, Section, Table};
use super::sections::{build_sections, ScoredProduct};
use super::types::{PageSize, ReportOptions};
use super::ReportError;
use crate::model::Product;

/// Media type of rendered reports
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

const PRODUCER: &str = concat!("product-transparency ", env!("CARGO_PKG_VERSION"));

const MARGIN: f32 = 56.0;
const FOOTER_HEIGHT: f32 = 24.0;
const FIELD_LABEL_WIDTH: f32 = 130.0;
const ITEM_INDENT: f32 = 14.0;
const CELL_PADDING: f32 = 4.0;

const BODY_SIZE: f32 = 10.5;
const BODY_LEADING: f32 = 14.0;
const TABLE_SIZE: f32 = 9.5;
const TABLE_LEADING: f32 = 12.5;
const CODE_SIZE: f32 = 8.5;
const CODE_LEADING: f32 = 11.0;

/// Advance widths of printable ASCII (0x20..=0x7E) in Helvetica, 1/1000 em
static HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

/// Advance widths of printable ASCII (0x20..=0x7E) in Helvetica-Bold, 1/1000 em
static HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0..?
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // P.._
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // `..o
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // p..~
];

/// Width assumed for proportional glyphs outside printable ASCII
const FALLBACK_WIDTH: u16 = 833;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Font {
    Regular,
    Bold,
    Mono,
}

impl Font {
    const ALL: [Self; 3] = [Self::Regular, Self::Bold, Self::Mono];

    const fn resource(self) -> Name<'static> {
        match self {
            Self::Regular => Name(b"F1"),
            Self::Bold => Name(b"F2"),
            Self::Mono => Name(b"F3"),
        }
    }

    const fn base_font(self) -> Name<'static> {
        match self {
            Self::Regular => Name(b"Helvetica"),
            Self::Bold => Name(b"Helvetica-Bold"),
            Self::Mono => Name(b"Courier"),
        }
    }

    /// Advance width of `c` in 1/1000 em
    fn glyph_width(self, c: char) -> u16 {
        let table = match self {
            Self::Mono => return 600,
            Self::Regular => &HELVETICA_WIDTHS,
            Self::Bold => &HELVETICA_BOLD_WIDTHS,
        };
        u32::from(c)
            .checked_sub(0x20)
            .and_then(|idx| table.get(idx as usize))
            .copied()
            .unwrap_or(FALLBACK_WIDTH)
    }
}

/// Rendered width of `text` in points
fn text_width(text: &str, font: Font, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(font.glyph_width(c))).sum();
    units as f32 * size / 1000.0
}

/// Word-wrap `text` to lines no wider than `max_width` points.
///
/// Words longer than a line are split; whitespace runs collapse. Always
/// returns at least one (possibly empty) line.
fn wrap(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let space = text_width(" ", font, size);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;

    for word in text.split_whitespace() {
        let word_width = text_width(word, font, size);
        if word_width > max_width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut chunks = wrap_verbatim(word, font, size, max_width);
            current = chunks.pop().unwrap_or_default();
            current_width = text_width(&current, font, size);
            lines.extend(chunks);
            continue;
        }

        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + space + word_width
        };
        if needed > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split `text` into chunks no wider than `max_width` points, keeping spaces.
fn wrap_verbatim(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;
    for c in text.chars() {
        let w = f32::from(font.glyph_width(c)) * size / 1000.0;
        if current_width + w > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0.0;
        }
        current.push(c);
        current_width += w;
    }
    lines.push(current);
    lines
}

/// Page-by-page drawing surface with a vertical cursor.
struct Canvas {
    width: f32,
    height: f32,
    footer: String,
    pages: Vec<Vec<u8>>,
    content: Content,
    /// Top of the next line box, in points from the page bottom
    cursor: f32,
}

impl Canvas {
    fn new(page_size: PageSize, footer: String) -> Self {
        let (width, height) = page_size.dimensions();
        Self {
            width,
            height,
            footer,
            pages: Vec::new(),
            content: Content::new(),
            cursor: height - MARGIN,
        }
    }

    fn top(&self) -> f32 {
        self.height - MARGIN
    }

    const fn bottom() -> f32 {
        MARGIN + FOOTER_HEIGHT
    }

    fn content_width(&self) -> f32 {
        self.width - 2.0 * MARGIN
    }

    fn at_page_top(&self) -> bool {
        (self.cursor - self.top()).abs() < f32::EPSILON
    }

    /// Start a new page unless `height` still fits on this one
    fn ensure(&mut self, height: f32) {
        if self.cursor - height < Self::bottom() && !self.at_page_top() {
            self.new_page();
        }
    }

    /// Move down by `gap`, stopping at the bottom margin
    fn skip(&mut self, gap: f32) {
        self.cursor = (self.cursor - gap).max(Self::bottom());
    }

    fn new_page(&mut self) {
        self.close_page();
        self.cursor = self.top();
    }

    fn close_page(&mut self) {
        let page_number = format!("Page {}", self.pages.len() + 1);
        let footer = self.footer.clone();
        let baseline = MARGIN;
        self.content.set_fill_gray(0.45);
        self.text(Font::Regular, 8.0, MARGIN, baseline, &footer);
        let right = self.width - MARGIN - text_width(&page_number, Font::Regular, 8.0);
        self.text(Font::Regular, 8.0, right, baseline, &page_number);
        self.content.set_fill_gray(0.0);

        let content = std::mem::replace(&mut self.content, Content::new());
        self.pages.push(content.finish());
    }

    fn finish(mut self) -> Vec<Vec<u8>> {
        self.close_page();
        self.pages
    }

    fn text(&mut self, font: Font, size: f32, x: f32, baseline: f32, text: &str) {
        let encoded = encode_win_ansi(text);
        self.content.begin_text();
        self.content.set_font(font.resource(), size);
        self.content.next_line(x, baseline);
        self.content.show(Str(&encoded));
        self.content.end_text();
    }

    fn rule(&mut self, y: f32, gray: f32) {
        let (left, right) = (MARGIN, self.width - MARGIN);
        self.content.set_stroke_gray(gray);
        self.content.set_line_width(0.5);
        self.content.move_to(left, y);
        self.content.line_to(right, y);
        self.content.stroke();
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, gray: f32) {
        self.content.set_fill_gray(gray);
        self.content.rect(x, y, width, height);
        self.content.fill_nonzero();
        self.content.set_fill_gray(0.0);
    }

    /// Wrapped lines starting at `x`, each kept on one page
    fn lines(&mut self, text: &str, font: Font, size: f32, leading: f32, x: f32, width: f32) {
        for line in wrap(text, font, size, width) {
            self.ensure(leading);
            self.text(font, size, x, self.cursor - size, &line);
            self.cursor -= leading;
        }
    }

    fn block(&mut self, block: &Block) {
        let left = MARGIN;
        let width = self.content_width();
        match block {
            Block::Title(text) => {
                self.lines(text, Font::Bold, 22.0, 28.0, left, width);
                self.rule(self.cursor - 2.0, 0.3);
                self.skip(12.0);
            }
            Block::Heading(text) => {
                if !self.at_page_top() {
                    self.skip(10.0);
                }
                // Keep the heading with at least a couple of lines below it
                self.ensure(19.0 + 3.0 * BODY_LEADING);
                self.lines(text, Font::Bold, 15.0, 19.0, left, width);
                self.rule(self.cursor - 1.0, 0.6);
                self.skip(8.0);
            }
            Block::Subheading(text) => {
                self.skip(6.0);
                self.ensure(16.0 + 2.0 * BODY_LEADING);
                self.lines(text, Font::Bold, 12.0, 16.0, left, width);
                self.skip(2.0);
            }
            Block::Paragraph(text) => {
                self.lines(text, Font::Regular, BODY_SIZE, BODY_LEADING, left, width);
                self.skip(4.0);
            }
            Block::Field { label, value } => self.field(label, value),
            Block::Highlight { label, value } => {
                self.ensure(36.0);
                let baseline = self.cursor - 26.0;
                self.text(Font::Bold, 12.0, left, baseline, label);
                self.content.set_fill_rgb(0.11, 0.42, 0.27);
                self.text(Font::Bold, 26.0, left + FIELD_LABEL_WIDTH, baseline, value);
                self.content.set_fill_gray(0.0);
                self.cursor -= 36.0;
            }
            Block::Table(table) => self.table(table),
            Block::Item { title, body } => {
                self.ensure(2.0 * BODY_LEADING);
                self.lines(title, Font::Bold, 11.0, BODY_LEADING, left, width);
                if !body.is_empty() {
                    self.lines(
                        body,
                        Font::Regular,
                        BODY_SIZE,
                        BODY_LEADING,
                        left + ITEM_INDENT,
                        width - ITEM_INDENT,
                    );
                }
                self.skip(6.0);
            }
            Block::Code(lines) => {
                for line in lines {
                    for chunk in wrap_verbatim(line, Font::Mono, CODE_SIZE, width) {
                        self.ensure(CODE_LEADING);
                        self.text(Font::Mono, CODE_SIZE, left, self.cursor - CODE_SIZE, &chunk);
                        self.cursor -= CODE_LEADING;
                    }
                }
            }
            Block::Spacer => {
                if !self.at_page_top() {
                    self.skip(12.0);
                }
            }
            Block::PageBreak => {
                if !self.at_page_top() {
                    self.new_page();
                }
            }
        }
    }

    fn field(&mut self, label: &str, value: &str) {
        let left = MARGIN;
        let value_width = self.content_width() - FIELD_LABEL_WIDTH;
        let value_lines = wrap(value, Font::Regular, BODY_SIZE, value_width);
        for (idx, line) in value_lines.iter().enumerate() {
            self.ensure(BODY_LEADING);
            let baseline = self.cursor - BODY_SIZE;
            if idx == 0 {
                self.text(Font::Bold, BODY_SIZE, left, baseline, label);
            }
            self.text(
                Font::Regular,
                BODY_SIZE,
                left + FIELD_LABEL_WIDTH,
                baseline,
                line,
            );
            self.cursor -= BODY_LEADING;
        }
        self.skip(2.0);
    }

    fn table(&mut self, table: &Table) {
        let total_width = self.content_width();
        let widths: Vec<f32> = table
            .columns
            .iter()
            .map(|c| c.width * total_width)
            .collect();
        let row_base = TABLE_LEADING + 2.0 * CELL_PADDING;

        self.skip(4.0);
        self.ensure(2.0 * row_base);
        self.table_header(table, &widths);
        // Line boxes available below a fresh header
        let page_lines = ((self.top() - row_base - Self::bottom() - 2.0 * CELL_PADDING)
            / TABLE_LEADING)
            .floor()
            .max(1.0) as usize;

        let last = table.rows.len().saturating_sub(1);
        for (idx, row) in table.rows.iter().enumerate() {
            let font = if table.total_row && idx == last {
                Font::Bold
            } else {
                Font::Regular
            };
            let cells: Vec<Vec<String>> = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| wrap(cell, font, TABLE_SIZE, w - 2.0 * CELL_PADDING))
                .collect();
            let line_count = cells.iter().map(Vec::len).max().unwrap_or(1);

            let mut start = 0;
            while start < line_count {
                let remaining = line_count - start;
                let mut fit = self.table_lines_left();
                // Rows that fit on a fresh page are never split
                if fit == 0 || (start == 0 && remaining > fit && remaining <= page_lines) {
                    self.new_page();
                    self.table_header(table, &widths);
                    fit = self.table_lines_left().max(1);
                }
                let end = start + remaining.min(fit);
                let chunk: Vec<Vec<String>> = cells
                    .iter()
                    .map(|lines| lines.iter().skip(start).take(end - start).cloned().collect())
                    .collect();
                let chunk_height = (end - start) as f32 * TABLE_LEADING + 2.0 * CELL_PADDING;
                if idx % 2 == 1 {
                    self.fill_rect(
                        MARGIN,
                        self.cursor - chunk_height,
                        total_width,
                        chunk_height,
                        0.96,
                    );
                }
                self.row_text(table, &widths, &chunk, font);
                self.cursor -= chunk_height;
                self.rule(self.cursor, 0.85);
                start = end;
            }
        }
        self.skip(8.0);
    }

    /// Table line boxes that still fit above the bottom margin
    fn table_lines_left(&self) -> usize {
        let room = self.cursor - Self::bottom() - 2.0 * CELL_PADDING;
        if room < TABLE_LEADING {
            0
        } else {
            (room / TABLE_LEADING).floor() as usize
        }
    }

    fn table_header(&mut self, table: &Table, widths: &[f32]) {
        let height = TABLE_LEADING + 2.0 * CELL_PADDING;
        self.fill_rect(
            MARGIN,
            self.cursor - height,
            self.content_width(),
            height,
            0.88,
        );
        let headers: Vec<Vec<String>> = table
            .columns
            .iter()
            .map(|c| vec![c.header.clone()])
            .collect();
        self.row_text(table, widths, &headers, Font::Bold);
        self.cursor -= height;
    }

    fn row_text(&mut self, table: &Table, widths: &[f32], cells: &[Vec<String>], font: Font) {
        let mut x = MARGIN;
        for ((column, width), lines) in table.columns.iter().zip(widths).zip(cells) {
            for (line_idx, line) in lines.iter().enumerate() {
                let baseline =
                    self.cursor - CELL_PADDING - TABLE_SIZE - line_idx as f32 * TABLE_LEADING;
                let text_x = match column.align {
                    Align::Left => x + CELL_PADDING,
                    Align::Right => x + width - CELL_PADDING - text_width(line, font, TABLE_SIZE),
                };
                self.text(font, TABLE_SIZE, text_x, baseline, line);
            }
            x += width;
        }
    }
}

/// Sequential object id allocation
struct RefAllocator(i32);

impl RefAllocator {
    fn next(&mut self) -> Ref {
        self.0 += 1;
        Ref::new(self.0)
    }
}

fn pdf_date(at: DateTime<Utc>) -> Date {
    Date::new(at.year().clamp(0, 9999) as u16)
        .month(at.month() as u8)
        .day(at.day() as u8)
        .hour(at.hour() as u8)
        .minute(at.minute() as u8)
        .second(at.second().min(59) as u8)
}

/// A rendered report ready to hand to a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    /// Suggested download name, `report_<productId>.pdf`
    pub file_name: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

/// PDF report renderer
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    options: ReportOptions,
}

impl PdfRenderer {
    /// Create a renderer with the given options
    #[must_use]
    pub const fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Score `product` and render its report into memory
    pub fn render(&self, product: &Product) -> Result<Vec<u8>, ReportError> {
        let mut buffer = Vec::new();
        self.render_to(product, &mut buffer)?;
        Ok(buffer)
    }

    /// Render and wrap the bytes with their file name and media type
    pub fn render_artifact(&self, product: &Product) -> Result<ReportArtifact, ReportError> {
        Ok(ReportArtifact {
            file_name: product.report_file_name(),
            media_type: PDF_MEDIA_TYPE,
            bytes: self.render(product)?,
        })
    }

    /// Score `product` and write its report to `writer`
    pub fn render_to<W: Write>(&self, product: &Product, writer: &mut W) -> Result<(), ReportError> {
        let scored = ScoredProduct::new(product, self.options.timestamp());
        self.render_scored(&scored, writer)
    }

    /// Write the report for an already scored product
    pub fn render_scored<W: Write>(
        &self,
        scored: &ScoredProduct<'_>,
        writer: &mut W,
    ) -> Result<(), ReportError> {
        let sections = build_sections(scored, &self.options);
        let footer = format!("{} - {}", self.options.title, scored.product.name.trim());
        let pages = self.paginate(&sections, &footer);
        let bytes = self.assemble(&pages, scored);

        tracing::info!(
            product = %scored.product.name,
            score = scored.score.score,
            pages = pages.len(),
            bytes = bytes.len(),
            "rendered transparency report"
        );

        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }

    /// Lay sections out into finished page content streams
    fn paginate(&self, sections: &[Section], footer: &str) -> Vec<Vec<u8>> {
        let mut canvas = Canvas::new(self.options.page_size, footer.to_string());
        for block in sections.iter().flat_map(|s| &s.blocks) {
            canvas.block(block);
        }
        canvas.finish()
    }

    fn assemble(&self, pages: &[Vec<u8>], scored: &ScoredProduct<'_>) -> Vec<u8> {
        let (width, height) = self.options.page_size.dimensions();
        let mut ids = RefAllocator(0);
        let catalog_id = ids.next();
        let page_tree_id = ids.next();
        let info_id = ids.next();
        let font_ids: Vec<Ref> = Font::ALL.iter().map(|_| ids.next()).collect();
        let page_ids: Vec<(Ref, Ref)> = pages.iter().map(|_| (ids.next(), ids.next())).collect();

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.pages(page_tree_id)
            .kids(page_ids.iter().map(|(page_id, _)| *page_id))
            .count(page_ids.len() as i32);

        for ((page_id, content_id), stream) in page_ids.iter().zip(pages) {
            let mut page = pdf.page(*page_id);
            page.media_box(Rect::new(0.0, 0.0, width, height));
            page.parent(page_tree_id);
            page.contents(*content_id);
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            for (font, font_id) in Font::ALL.iter().zip(&font_ids) {
                fonts.pair(font.resource(), *font_id);
            }
            fonts.finish();
            resources.finish();
            page.finish();

            pdf.stream(*content_id, stream);
        }

        for (font, font_id) in Font::ALL.iter().zip(&font_ids) {
            pdf.type1_font(*font_id)
                .base_font(font.base_font())
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        let subject = format!("Transparency report for {}", scored.product.name.trim());
        pdf.document_info(info_id)
            .title(TextStr(&self.options.title))
            .subject(TextStr(&subject))
            .producer(TextStr(PRODUCER))
            .creation_date(pdf_date(scored.generated_at));

        pdf.finish()
    }
}
