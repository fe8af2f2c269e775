//! Token-level matching against compiled lexicons.
//!
//! For each extracted token the matcher lowercases once, normalizes
//! once, and tests set membership per lexicon. A token may match
//! several lexicons; each match is emitted independently and the same
//! region may end up with overlapping highlights. That is intentional,
//! there is no precedence rule.

use crate::geometry::Rect;
use crate::lexicon::Lexicon;
use crate::page::Token;
use crate::stem::Normalizer;

/// One accepted match: a token or phrase occurrence that belongs to a
/// lexicon.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchEvent {
    /// Name of the matching lexicon
    pub lexicon: String,
    /// Canonical key used for first-seen tracking
    pub key: String,
    /// The authored term that produced the match
    pub origin: String,
    /// Literal text found in the document, case preserved
    pub surface: String,
    /// Bounding region of the occurrence
    pub region: Rect,
    /// Zero-based page index
    pub page: usize,
}

/// Matches tokens against a fixed set of compiled lexicons.
pub struct TokenMatcher<'a> {
    lexicons: &'a [Lexicon],
    normalizer: &'a Normalizer,
}

impl<'a> TokenMatcher<'a> {
    /// Create a matcher over the given lexicons.
    pub fn new(lexicons: &'a [Lexicon], normalizer: &'a Normalizer) -> Self {
        Self {
            lexicons,
            normalizer,
        }
    }

    /// All lexicon matches for one token, in lexicon selection order.
    pub fn matches(&self, token: &Token, page: usize) -> Vec<MatchEvent> {
        let lowered = token.text.to_lowercase();
        let root = self
            .normalizer
            .is_stemming()
            .then(|| self.normalizer.canonical(&lowered));

        let mut events = Vec::new();
        for lexicon in self.lexicons {
            if let Some(hit) = lexicon.resolve(&lowered, root.as_deref()) {
                events.push(MatchEvent {
                    lexicon: lexicon.name().to_string(),
                    key: hit.key,
                    origin: hit.origin,
                    surface: token.text.clone(),
                    region: token.rect,
                    page,
                });
            }
        }
        events
    }
}
