//! Configuration for a highlighting run.
//!
//! The calling shell owns all session state (uploaded word lists,
//! slider values, selections) and passes a fully resolved `RunConfig`
//! into each run. The engine never reads global state.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Configuration for one processing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Match via stemmed roots instead of exact lowercased equality.
    pub stemming: bool,

    /// Opacity of repeat occurrences, in [0, 1]. Repeats are tinted
    /// toward white by `1 - repeat_opacity`.
    pub repeat_opacity: f32,

    /// Append index pages listing matched terms.
    pub build_index: bool,

    /// Column count for the index pages (practically 1–4).
    pub index_columns: usize,

    /// Font size for index entries (practically 8–16).
    pub index_font_size: f32,

    /// Lexicon names to highlight, in selection order.
    pub highlight_lexicons: Vec<String>,

    /// Lexicon names to include in the index, in selection order.
    /// Only lexicons that are also highlighted produce matches.
    pub index_lexicons: Vec<String>,

    /// List observed surface variants under each index entry.
    /// Meaningful only when stemming is on; without stemming a term's
    /// only surface forms are case variants of itself.
    pub show_variants: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            stemming: false,
            repeat_opacity: 0.4,
            build_index: true,
            index_columns: 2,
            index_font_size: 10.0,
            highlight_lexicons: Vec::new(),
            index_lexicons: Vec::new(),
            show_variants: true,
        }
    }
}

impl RunConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable stem matching.
    pub fn with_stemming(mut self, enable: bool) -> Self {
        self.stemming = enable;
        self
    }

    /// Set the repeat opacity (validated at run start).
    pub fn with_repeat_opacity(mut self, opacity: f32) -> Self {
        self.repeat_opacity = opacity;
        self
    }

    /// Enable or disable index page generation.
    pub fn with_index(mut self, enable: bool) -> Self {
        self.build_index = enable;
        self
    }

    /// Set the index column count.
    pub fn with_index_columns(mut self, columns: usize) -> Self {
        self.index_columns = columns;
        self
    }

    /// Set the index font size.
    pub fn with_index_font_size(mut self, size: f32) -> Self {
        self.index_font_size = size;
        self
    }

    /// Select lexicons for highlighting, in order.
    pub fn with_highlight_lexicons<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.highlight_lexicons = names.into_iter().map(Into::into).collect();
        self
    }

    /// Select lexicons for indexing, in order.
    pub fn with_index_lexicons<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_lexicons = names.into_iter().map(Into::into).collect();
        self
    }

    /// Show or hide surface variants in the index.
    pub fn with_show_variants(mut self, show: bool) -> Self {
        self.show_variants = show;
        self
    }

    /// Validate before any processing starts.
    ///
    /// Rejects an empty highlight selection and an out-of-range repeat
    /// opacity. Numeric layout parameters are not rejected here; the
    /// layout engine clamps them instead.
    pub fn validate(&self) -> Result<()> {
        if self.highlight_lexicons.is_empty() {
            return Err(Error::NoLexiconSelected);
        }
        if !(0.0..=1.0).contains(&self.repeat_opacity) || self.repeat_opacity.is_nan() {
            return Err(Error::InvalidOpacity(self.repeat_opacity));
        }
        Ok(())
    }
}
