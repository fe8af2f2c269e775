//! Multi-column index page layout.
//!
//! Turns aggregated index sections into abstract page operations:
//! a list of pages, each holding positioned text placements. Keeping
//! the output abstract lets the layout be tested exactly, without a PDF
//! backend, and leaves the actual drawing to the `PageComposer`
//! capability.
//!
//! The algorithm is a single deterministic pass with a cursor over
//! (page, column, vertical offset). Space for an entry is checked as a
//! whole before placement, so a term line is never orphaned from its
//! variant lines by a column break unless the entry cannot fit a fresh
//! column at all.

use crate::color::Rgb;
use crate::index::IndexSection;

/// Page margin on all four sides, in points.
const MARGIN: f32 = 36.0;
/// Horizontal gap between columns, in points.
const COLUMN_GAP: f32 = 18.0;
/// Average glyph width as a fraction of the font size, for the
/// character-truncation heuristic.
const AVG_CHAR_WIDTH: f32 = 0.55;
/// Truncation floor so pathologically narrow columns still render
/// something.
const MIN_LINE_CHARS: usize = 4;
/// Title rendered at the top of the first index page.
const TITLE: &str = "Index of Highlighted Terms";

/// One positioned text placement on an index page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOp {
    /// X coordinate of the text baseline start
    pub x: f32,
    /// Y coordinate of the text baseline, from the page top
    pub y: f32,
    /// Font size in points
    pub font_size: f32,
    /// Text color
    pub color: Rgb,
    /// Literal text to place
    pub text: String,
}

/// One laid-out index page.
#[derive(Debug, Clone, Default)]
pub struct IndexPage {
    /// Text placements, in emission order
    pub ops: Vec<TextOp>,
}

/// The laid-out index: page dimensions plus the pages to append.
#[derive(Debug, Clone)]
pub struct IndexLayout {
    /// Width of each index page
    pub page_width: f32,
    /// Height of each index page
    pub page_height: f32,
    /// Pages in order; empty when there was nothing to lay out
    pub pages: Vec<IndexPage>,
}

/// Deterministic multi-column layout over index sections.
pub struct IndexLayoutEngine {
    page_width: f32,
    page_height: f32,
    columns: usize,
    font_size: f32,
    show_variants: bool,
    // derived
    column_width: f32,
    line_height: f32,
    header_height: f32,
    title_size: f32,
    section_size: f32,
    max_chars: usize,
}

impl IndexLayoutEngine {
    /// Create a layout engine for the given page geometry and options.
    ///
    /// Pathological numeric configuration is clamped rather than
    /// rejected: columns to at least 1, font size to at least 1pt, and
    /// the per-line character limit to a floor of four characters.
    pub fn new(
        page_width: f32,
        page_height: f32,
        columns: usize,
        font_size: f32,
        show_variants: bool,
    ) -> Self {
        let columns = columns.max(1);
        let font_size = font_size.max(1.0);
        let column_width =
            (page_width - 2.0 * MARGIN - (columns as f32 - 1.0) * COLUMN_GAP) / columns as f32;
        let max_chars = ((column_width / (font_size * AVG_CHAR_WIDTH)) as usize).max(MIN_LINE_CHARS);
        Self {
            page_width,
            page_height,
            columns,
            font_size,
            show_variants,
            column_width,
            line_height: font_size * 1.5,
            header_height: font_size * 2.0,
            title_size: font_size + 6.0,
            section_size: font_size + 2.0,
            max_chars,
        }
    }

    /// Per-line character limit derived from the column width.
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Lay out the sections into pages.
    ///
    /// Returns a layout with zero pages when `sections` is empty, in
    /// which case no index page should be appended at all.
    pub fn layout(&self, sections: &[IndexSection]) -> IndexLayout {
        let mut cursor = Cursor::new(self);
        if sections.is_empty() {
            return IndexLayout {
                page_width: self.page_width,
                page_height: self.page_height,
                pages: Vec::new(),
            };
        }

        cursor.start_page();
        for section in sections {
            let mut entries = section.entries.iter();
            let first_lines = entries.next().map(|entry| self.entry_lines(entry));

            // The header and the whole first entry advance as one
            // group, so a section header is never stranded at the
            // bottom of a column with nothing under it.
            let first_height = first_lines
                .as_ref()
                .map_or(0.0, |lines| lines.len() as f32 * self.line_height);
            cursor.ensure(self.header_height + first_height);
            cursor.place(
                self.header_height,
                self.section_size,
                section.color,
                truncate(&section.lexicon, self.max_chars),
            );
            for line in first_lines.into_iter().flatten() {
                cursor.place(self.line_height, self.font_size, line.color, line.text);
            }

            for entry in entries {
                let lines = self.entry_lines(entry);
                cursor.ensure(lines.len() as f32 * self.line_height);
                for line in lines {
                    cursor.place(self.line_height, self.font_size, line.color, line.text);
                }
            }
        }

        log::debug!(
            "index layout: {} section(s) over {} page(s), {} chars/line",
            sections.len(),
            cursor.pages.len(),
            self.max_chars
        );
        IndexLayout {
            page_width: self.page_width,
            page_height: self.page_height,
            pages: cursor.pages,
        }
    }

    /// The lines one entry occupies: the (possibly truncated) term,
    /// then parenthesized, wrapped variant lines when requested.
    ///
    /// Variants equal to the origin term case-insensitively are not
    /// variants worth listing and are dropped.
    fn entry_lines(&self, entry: &crate::index::IndexEntry) -> Vec<Line> {
        let mut lines = vec![Line {
            text: truncate(&entry.origin, self.max_chars),
            color: Rgb::new(0.0, 0.0, 0.0),
        }];
        if !self.show_variants {
            return lines;
        }
        let origin_lower = entry.origin.to_lowercase();
        let shown: Vec<&str> = entry
            .variants
            .iter()
            .filter(|v| v.to_lowercase() != origin_lower)
            .map(String::as_str)
            .collect();
        if shown.is_empty() {
            return lines;
        }
        let joined = format!("({})", shown.join(", "));
        for chunk in wrap(&joined, self.max_chars) {
            lines.push(Line {
                text: chunk,
                color: Rgb::new(0.25, 0.25, 0.25),
            });
        }
        lines
    }

    fn column_x(&self, column: usize) -> f32 {
        MARGIN + column as f32 * (self.column_width + COLUMN_GAP)
    }

    fn content_bottom(&self) -> f32 {
        self.page_height - MARGIN
    }

    /// Top of the content area; the first page reserves room for the
    /// title above the columns.
    fn content_top(&self, page: usize) -> f32 {
        if page == 0 {
            MARGIN + self.title_size * 2.0
        } else {
            MARGIN
        }
    }
}

struct Line {
    text: String,
    color: Rgb,
}

/// Layout cursor: current page, column, and vertical offset. The
/// vertical offset is the top of the next line; it never passes the
/// bottom margin without an `ensure`/`place` check forcing an advance.
struct Cursor<'a> {
    engine: &'a IndexLayoutEngine,
    pages: Vec<IndexPage>,
    column: usize,
    y: f32,
}

impl<'a> Cursor<'a> {
    fn new(engine: &'a IndexLayoutEngine) -> Self {
        Self {
            engine,
            pages: Vec::new(),
            column: 0,
            y: 0.0,
        }
    }

    fn start_page(&mut self) {
        let page_index = self.pages.len();
        self.pages.push(IndexPage::default());
        self.column = 0;
        self.y = self.engine.content_top(page_index);
        if page_index == 0 {
            let title_y = MARGIN + self.engine.title_size;
            self.pages[0].ops.push(TextOp {
                x: MARGIN,
                y: title_y,
                font_size: self.engine.title_size,
                color: Rgb::new(0.0, 0.0, 0.0),
                text: TITLE.to_string(),
            });
        }
    }

    fn at_column_top(&self) -> bool {
        self.y <= self.engine.content_top(self.pages.len() - 1)
    }

    fn fits(&self, height: f32) -> bool {
        self.y + height <= self.engine.content_bottom()
    }

    /// Advance to the next column, or to a fresh page when columns are
    /// exhausted.
    fn advance(&mut self) {
        if self.column + 1 < self.engine.columns {
            self.column += 1;
            self.y = self.engine.content_top(self.pages.len() - 1);
        } else {
            self.start_page();
        }
    }

    /// Advance until `height` fits, unless already at a column top (a
    /// block taller than a whole column is placed there and spills line
    /// by line through subsequent `place` checks).
    fn ensure(&mut self, height: f32) {
        if !self.fits(height) && !self.at_column_top() {
            self.advance();
        }
    }

    /// Place one line of the given height, advancing first if it does
    /// not fit the remaining column space.
    fn place(&mut self, height: f32, font_size: f32, color: Rgb, text: String) {
        if !self.fits(height) && !self.at_column_top() {
            self.advance();
        }
        let x = self.engine.column_x(self.column);
        // Baseline sits one font-size below the line top, inside the
        // line box.
        let y = self.y + font_size;
        self.pages
            .last_mut()
            .expect("cursor always has a current page")
            .ops
            .push(TextOp {
                x,
                y,
                font_size,
                color,
                text,
            });
        self.y += height;
    }
}

/// Truncate to `limit` characters, ellipsized.
fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let kept: String = text.chars().take(limit.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Greedy word wrap to `limit` characters per line. Words longer than
/// the limit are ellipsized rather than split mid-word.
fn wrap(text: &str, limit: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let word = if word.chars().count() > limit {
            truncate(word, limit)
        } else {
            word.to_string()
        };
        if current.is_empty() {
            current = word;
        } else if current.chars().count() + 1 + word.chars().count() <= limit {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
