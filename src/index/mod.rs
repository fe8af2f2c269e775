//! Index aggregation: matched terms and their observed variants.
//!
//! The aggregator collects, per lexicon, a mapping from the authored
//! origin term to the set of distinct surface strings that matched it
//! over the whole document. Only observed matches are recorded; an
//! origin term that never matched does not appear. The aggregated data
//! feeds the index page layout after the page loop finishes.

pub mod layout;

use crate::color::Rgb;
use crate::lexicon::Lexicon;
use crate::matcher::MatchEvent;
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// One term in the index: the authored origin plus its observed
/// surface variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// The authored term
    pub origin: String,
    /// Distinct surface strings observed, sorted, case preserved
    pub variants: Vec<String>,
}

/// One lexicon's slice of the index, in selection order.
#[derive(Debug, Clone)]
pub struct IndexSection {
    /// Lexicon name, used as the section header
    pub lexicon: String,
    /// The lexicon's base color, used for the header
    pub color: Rgb,
    /// Entries sorted case-insensitively by origin term
    pub entries: Vec<IndexEntry>,
}

/// Accumulates match events for the lexicons selected for indexing.
#[derive(Debug, Default)]
pub struct IndexAggregator {
    // lexicon name -> origin term -> distinct surfaces
    observed: IndexMap<String, IndexMap<String, BTreeSet<String>>>,
}

impl IndexAggregator {
    /// Create an empty aggregator. One instance per processing run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted match. Duplicate surfaces collapse via set
    /// semantics.
    pub fn record(&mut self, event: &MatchEvent) {
        self.observed
            .entry(event.lexicon.clone())
            .or_default()
            .entry(event.origin.clone())
            .or_default()
            .insert(event.surface.clone());
    }

    /// True when nothing was recorded for any lexicon.
    pub fn is_empty(&self) -> bool {
        self.observed.values().all(IndexMap::is_empty)
    }

    /// Build index sections for the given lexicons, in the order given
    /// (selection order). Lexicons with no observed matches yield no
    /// section. Entries are sorted case-insensitively ascending.
    pub fn sections(&self, lexicons: &[&Lexicon]) -> Vec<IndexSection> {
        let mut sections = Vec::new();
        for lexicon in lexicons {
            let Some(terms) = self.observed.get(lexicon.name()) else {
                continue;
            };
            if terms.is_empty() {
                continue;
            }
            let mut entries: Vec<IndexEntry> = terms
                .iter()
                .map(|(origin, surfaces)| IndexEntry {
                    origin: origin.clone(),
                    variants: surfaces.iter().cloned().collect(),
                })
                .collect();
            entries.sort_by(|a, b| a.origin.to_lowercase().cmp(&b.origin.to_lowercase()));
            sections.push(IndexSection {
                lexicon: lexicon.name().to_string(),
                color: lexicon.color(),
                entries,
            });
        }
        sections
    }
}
