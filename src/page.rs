//! Capability traits the engine requires from its document backend.
//!
//! The engine never touches the document format directly. Text
//! extraction, phrase search, highlight annotation, and page
//! composition are all provided by a backend implementing these traits
//! (a real PDF library in production, an in-memory mock in tests).

use crate::color::Rgb;
use crate::error::Result;
use crate::geometry::Rect;

/// A word-level token extracted from a page.
///
/// Ephemeral: produced per page by the extraction backend and consumed
/// immediately by the matcher.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Literal text content, case preserved
    pub text: String,
    /// Bounding rectangle on the page
    pub rect: Rect,
}

impl Token {
    /// Create a token.
    pub fn new(text: impl Into<String>, rect: Rect) -> Self {
        Self {
            text: text.into(),
            rect,
        }
    }
}

/// Word-level token extraction and literal phrase search.
///
/// Token order must be stable natural reading order as extracted;
/// first-occurrence coloring depends on it and the engine never
/// re-sorts.
pub trait TextSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Ordered word-level tokens of one page.
    fn tokens(&self, page: usize) -> Result<Vec<Token>>;

    /// Every occurrence of a literal phrase on one page, as one quad
    /// list per occurrence. Case-insensitive; an occurrence spanning a
    /// line break reports one quad per line fragment.
    fn search_phrase(&self, page: usize, phrase: &str) -> Result<Vec<Vec<Rect>>>;
}

/// Highlight annotation application.
pub trait AnnotationSink {
    /// Create a highlight mark over a region with the given color.
    fn highlight(&mut self, page: usize, region: Rect, color: Rgb) -> Result<()>;
}

/// Appending pages and placing literal text, for the index pages.
pub trait PageComposer {
    /// Width and height new pages are created at (typically the size of
    /// the document's existing pages).
    fn page_size(&self) -> (f32, f32);

    /// Append a blank page, returning its zero-based index.
    fn append_page(&mut self, width: f32, height: f32) -> Result<usize>;

    /// Place literal text with its baseline at (x, y), top-left origin.
    fn place_text(
        &mut self,
        page: usize,
        x: f32,
        y: f32,
        font_size: f32,
        color: Rgb,
        text: &str,
    ) -> Result<()>;
}
