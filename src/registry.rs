//! First-occurrence tracking and repeat tinting.
//!
//! Per lexicon, the registry remembers which canonical keys have
//! already been rendered in the base color. The first match for a key
//! gets the lexicon's saturated color; every later match for the same
//! key gets the color blended toward white by the whiteness factor
//! (1 − repeat opacity). Keys only ever move from unseen to seen.
//!
//! Granularity is the canonical key, not the surface string: in
//! stemming mode "running" and "runs" share a key and the second one
//! encountered is a repeat.

use crate::color::Rgb;
use crate::lexicon::Lexicon;
use std::collections::{HashMap, HashSet};

/// Per-run occurrence state. One instance per processing run; never
/// shared across concurrent documents.
#[derive(Debug)]
pub struct OccurrenceRegistry {
    whiteness: f32,
    seen: HashMap<String, HashSet<String>>,
}

impl OccurrenceRegistry {
    /// Create a registry from the user-configured repeat opacity.
    ///
    /// Opacity 1 means repeats keep the base color; opacity 0 means
    /// repeats are tinted fully to white.
    pub fn new(repeat_opacity: f32) -> Self {
        Self {
            whiteness: 1.0 - repeat_opacity.clamp(0.0, 1.0),
            seen: HashMap::new(),
        }
    }

    /// Whiteness factor applied to repeat occurrences.
    pub fn whiteness(&self) -> f32 {
        self.whiteness
    }

    /// Resolve the highlight color for a match, recording the key.
    ///
    /// Returns the base color on the first sighting of `key` within the
    /// lexicon, the tinted color on every sighting after that.
    pub fn color_for(&mut self, lexicon: &Lexicon, key: &str) -> Rgb {
        let first = self
            .seen
            .entry(lexicon.name().to_string())
            .or_default()
            .insert(key.to_string());
        if first {
            lexicon.color()
        } else {
            lexicon.color().tinted(self.whiteness)
        }
    }

    /// Number of distinct keys seen for a lexicon so far.
    pub fn seen_count(&self, lexicon_name: &str) -> usize {
        self.seen.get(lexicon_name).map_or(0, HashSet::len)
    }
}
