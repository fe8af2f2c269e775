//! Morphological normalization.
//!
//! Maps a lowercased token to its canonical root. In stemming mode the
//! root comes from the English Snowball algorithm (rule-based suffix
//! stripping, deterministic, no dictionary); in exact mode the
//! normalizer is the identity over the lowercased text.
//!
//! Snowball is intentionally literal: irregular forms like "ran" do not
//! reduce to "run". Callers must not expect dictionary-grade
//! lemmatization.

use rust_stemmers::{Algorithm, Stemmer};

/// Canonicalizes tokens for lexicon membership tests and first-seen
/// tracking.
pub struct Normalizer {
    mode: Mode,
}

enum Mode {
    Exact,
    Snowball(Stemmer),
}

impl Normalizer {
    /// Identity normalizer: the canonical key of a token is its
    /// lowercased text.
    pub fn exact() -> Self {
        Self { mode: Mode::Exact }
    }

    /// English Snowball stemming normalizer.
    pub fn english() -> Self {
        Self {
            mode: Mode::Snowball(Stemmer::create(Algorithm::English)),
        }
    }

    /// Whether this normalizer performs stemming.
    pub fn is_stemming(&self) -> bool {
        matches!(self.mode, Mode::Snowball(_))
    }

    /// Canonical root of an already-lowercased token.
    ///
    /// The input must be lowercased by the caller; the token matcher
    /// lowercases each token exactly once before consulting this.
    pub fn canonical(&self, lowered: &str) -> String {
        match &self.mode {
            Mode::Exact => lowered.to_string(),
            Mode::Snowball(stemmer) => stemmer.stem(lowered).to_string(),
        }
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.mode {
            Mode::Exact => f.write_str("Normalizer::Exact"),
            Mode::Snowball(_) => f.write_str("Normalizer::Snowball(English)"),
        }
    }
}
