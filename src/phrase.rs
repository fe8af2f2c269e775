//! Phrase matching via page-level literal search.
//!
//! Multi-word terms cannot go through the token-level sets because word
//! segmentation breaks the span. Each phrase is located with the
//! backend's full-text search instead, at the cost of no stemming
//! support for phrases. The canonical key of a phrase occurrence is the
//! lowercased phrase.

use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::matcher::MatchEvent;
use crate::page::TextSource;

/// Locates phrase occurrences for a set of compiled lexicons.
pub struct PhraseMatcher<'a> {
    lexicons: &'a [Lexicon],
}

impl<'a> PhraseMatcher<'a> {
    /// Create a phrase matcher over the given lexicons.
    pub fn new(lexicons: &'a [Lexicon]) -> Self {
        Self { lexicons }
    }

    /// All phrase occurrences on one page, in lexicon selection order.
    ///
    /// Each occurrence yields exactly one event; when an occurrence
    /// spans a line break its quads are merged into one covering
    /// region, so a wrapped phrase is neither double-counted nor
    /// half-tinted as its own repeat. The backend reports only
    /// regions, so the surface form recorded for a phrase hit is the
    /// authored phrase itself.
    pub fn matches<S: TextSource + ?Sized>(
        &self,
        source: &S,
        page: usize,
    ) -> Result<Vec<MatchEvent>> {
        let mut events = Vec::new();
        for lexicon in self.lexicons {
            for phrase in lexicon.phrases() {
                for quads in source.search_phrase(page, phrase)? {
                    let Some(region) = quads.iter().copied().reduce(|a, b| a.union(&b)) else {
                        continue;
                    };
                    events.push(MatchEvent {
                        lexicon: lexicon.name().to_string(),
                        key: phrase.to_lowercase(),
                        origin: phrase.clone(),
                        surface: phrase.clone(),
                        region,
                        page,
                    });
                }
            }
        }
        Ok(events)
    }
}
