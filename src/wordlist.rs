//! Word-source ingestion boundary.
//!
//! Spreadsheet parsing lives outside the crate; what arrives here is
//! either a flat term list or delimited text from manual entry. A
//! source that fails to parse is isolated: the run continues with the
//! remaining sources and the failure is reported alongside the usable
//! ones.

use crate::color::Rgb;
use crate::error::{Error, Result};

/// One named, colored word source ready for lexicon compilation.
#[derive(Debug, Clone)]
pub struct WordSource {
    /// Display name (file name or user-chosen label)
    pub name: String,
    /// Base highlight color
    pub color: Rgb,
    /// Trimmed terms; may still contain duplicates, compilation dedups
    pub terms: Vec<String>,
}

impl WordSource {
    /// Create a source from an already-parsed term list.
    pub fn new(name: impl Into<String>, color: Rgb, terms: Vec<String>) -> Self {
        Self {
            name: name.into(),
            color,
            terms,
        }
    }

    /// Create a source from newline- or comma-delimited text, the
    /// manual-entry path. Entries are trimmed; blanks are dropped;
    /// duplicates keep their first occurrence.
    pub fn from_delimited(name: impl Into<String>, color: Rgb, raw: &str) -> Self {
        Self {
            name: name.into(),
            color,
            terms: parse_terms(raw),
        }
    }
}

/// Split delimited text into a clean term list.
pub fn parse_terms(raw: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    raw.split(['\n', ','])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.to_string()))
        .map(str::to_string)
        .collect()
}

/// The outcome of ingesting a batch of word sources: the usable
/// sources plus per-source failures.
#[derive(Debug, Default)]
pub struct SourceSet {
    /// Sources that parsed successfully, in ingestion order
    pub sources: Vec<WordSource>,
    /// Ingestion failures, one per bad source
    pub failures: Vec<Error>,
}

impl SourceSet {
    /// Partition per-source parse results, turning each failure into an
    /// [`Error::Ingestion`] that names the source.
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = (String, Rgb, Result<Vec<String>>)>,
    {
        let mut set = Self::default();
        for (name, color, result) in results {
            match result {
                Ok(terms) => set.sources.push(WordSource::new(name, color, terms)),
                Err(err) => {
                    log::warn!("word source '{}' failed to parse: {}", name, err);
                    set.failures.push(Error::Ingestion {
                        source_name: name,
                        reason: err.to_string(),
                    });
                },
            }
        }
        set
    }

    /// Find a source by name.
    pub fn get(&self, name: &str) -> Option<&WordSource> {
        self.sources.iter().find(|s| s.name == name)
    }
}
