//! Lexicon compilation.
//!
//! A lexicon is one named, colored word list compiled into
//! matching-ready structures: lowercased exact sets or stemmed sets for
//! single words, a literal phrase list for multi-word terms, and
//! reverse maps from canonical form back to the authored term for
//! display in the index.

use crate::color::Rgb;
use crate::stem::Normalizer;
use std::collections::{HashMap, HashSet};

/// A single-word hit resolved against one lexicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermHit {
    /// Canonical key (stem or lowercased text) for first-seen tracking
    pub key: String,
    /// The originally authored term this key maps back to
    pub origin: String,
}

/// A compiled word list with its highlight color.
///
/// Immutable for the duration of one processing run. Every single-word
/// term lives in exactly one membership space (exact in exact mode,
/// stem in stemming mode); terms with interior whitespace go to the
/// phrase list and never into the single-word sets.
#[derive(Debug, Clone)]
pub struct Lexicon {
    name: String,
    color: Rgb,
    exact_set: HashSet<String>,
    stem_set: HashSet<String>,
    phrases: Vec<String>,
    exact_to_origin: HashMap<String, String>,
    stem_to_origin: HashMap<String, String>,
}

impl Lexicon {
    /// Compile a raw term list into a lexicon.
    ///
    /// Terms are trimmed; blanks are dropped; duplicates keep their
    /// first occurrence. Terms containing interior whitespace become
    /// phrases, kept in their authored case and spacing. Single words
    /// are lowercased into the exact set, or stemmed into the stem set
    /// when the normalizer is in stemming mode.
    ///
    /// When two distinct authored terms reduce to the same stem, the
    /// most recently processed one wins the root-to-origin mapping.
    /// This last-write-wins behavior is deliberate and relied upon by
    /// the index display.
    ///
    /// An empty term list compiles to an empty lexicon; whether to skip
    /// it is the caller's call.
    pub fn compile(name: &str, terms: &[String], color: Rgb, normalizer: &Normalizer) -> Self {
        let mut lexicon = Self {
            name: name.to_string(),
            color,
            exact_set: HashSet::new(),
            stem_set: HashSet::new(),
            phrases: Vec::new(),
            exact_to_origin: HashMap::new(),
            stem_to_origin: HashMap::new(),
        };

        let mut seen = HashSet::new();
        for raw in terms {
            let term = raw.trim();
            if term.is_empty() || !seen.insert(term.to_string()) {
                continue;
            }
            if term.contains(char::is_whitespace) {
                lexicon.phrases.push(term.to_string());
                continue;
            }
            let lowered = term.to_lowercase();
            if normalizer.is_stemming() {
                let root = normalizer.canonical(&lowered);
                lexicon.stem_set.insert(root.clone());
                lexicon.stem_to_origin.insert(root, term.to_string());
            } else {
                lexicon.exact_set.insert(lowered.clone());
                lexicon.exact_to_origin.insert(lowered, term.to_string());
            }
        }
        lexicon
    }

    /// Lexicon name, as the user labeled the word source.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base highlight color.
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Multi-word terms, in authored case and spacing.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// True when the lexicon has neither single words nor phrases.
    pub fn is_empty(&self) -> bool {
        self.exact_set.is_empty() && self.stem_set.is_empty() && self.phrases.is_empty()
    }

    /// Number of compiled single-word terms.
    pub fn word_count(&self) -> usize {
        self.exact_set.len() + self.stem_set.len()
    }

    /// Test a token against this lexicon's single-word terms.
    ///
    /// `lowered` is the token text lowercased once by the caller;
    /// `root` is its canonical root, present only in stemming mode.
    /// Membership is a set lookup, so "cat" never matches inside
    /// "scatter" the way substring search would.
    pub fn resolve(&self, lowered: &str, root: Option<&str>) -> Option<TermHit> {
        match root {
            Some(root) => {
                if self.stem_set.contains(root) {
                    Some(TermHit {
                        key: root.to_string(),
                        origin: self.stem_to_origin.get(root)?.clone(),
                    })
                } else {
                    None
                }
            },
            None => {
                if self.exact_set.contains(lowered) {
                    Some(TermHit {
                        key: lowered.to_string(),
                        origin: self.exact_to_origin.get(lowered)?.clone(),
                    })
                } else {
                    None
                }
            },
        }
    }
}
