//! The processing run.
//!
//! One call to [`Highlighter::run`] takes a document backend and the
//! ingested word sources, and performs the whole pass: lexicon
//! compilation, sequential page-by-page token and phrase matching with
//! first-occurrence coloring, highlight application, index aggregation,
//! and finally index page composition.
//!
//! Processing is strictly sequential: a page is fully matched (tokens,
//! then phrases) before the next page begins, and token order is taken
//! from the extraction backend untouched. Which occurrence of a term
//! gets the saturated base color depends on that order.

use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::index::layout::IndexLayoutEngine;
use crate::index::IndexAggregator;
use crate::lexicon::Lexicon;
use crate::matcher::{MatchEvent, TokenMatcher};
use crate::page::{AnnotationSink, PageComposer, TextSource};
use crate::phrase::PhraseMatcher;
use crate::registry::OccurrenceRegistry;
use crate::stem::Normalizer;
use crate::wordlist::WordSource;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;

/// What one run did: per-lexicon highlight counts (selection order),
/// pages processed, and index pages appended.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Number of document pages processed
    pub pages_processed: usize,
    /// Highlights applied per lexicon, in selection order
    pub highlights: IndexMap<String, usize>,
    /// Number of index pages appended (0 when indexing was off or
    /// nothing matched)
    pub index_pages: usize,
}

/// Runs highlighting passes over documents.
pub struct Highlighter {
    config: RunConfig,
}

impl Highlighter {
    /// Create a highlighter with the given configuration.
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// The configuration this highlighter runs with.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Process one document.
    ///
    /// Validates the configuration, compiles the selected lexicons,
    /// highlights every match with first-occurrence coloring, and
    /// appends index pages when enabled and anything matched.
    ///
    /// Failures inside the page loop are fatal to the run and carry the
    /// page index and the work in progress; the document should not be
    /// saved as complete output after such a failure.
    pub fn run<D>(&self, doc: &mut D, sources: &[WordSource]) -> Result<RunReport>
    where
        D: TextSource + AnnotationSink + PageComposer,
    {
        self.config.validate()?;
        let page_count = doc.page_count();
        if page_count == 0 {
            return Err(Error::EmptyDocument);
        }

        let normalizer = if self.config.stemming {
            Normalizer::english()
        } else {
            Normalizer::exact()
        };
        let lexicons = self.compile_lexicons(sources, &normalizer)?;
        let indexed: HashSet<&str> = self
            .config
            .index_lexicons
            .iter()
            .map(String::as_str)
            .collect();

        let mut registry = OccurrenceRegistry::new(self.config.repeat_opacity);
        let mut aggregator = IndexAggregator::new();
        let mut highlights: IndexMap<String, usize> = self
            .config
            .highlight_lexicons
            .iter()
            .map(|name| (name.clone(), 0))
            .collect();

        let token_matcher = TokenMatcher::new(&lexicons, &normalizer);
        let phrase_matcher = PhraseMatcher::new(&lexicons);

        for page in 0..page_count {
            let tokens = doc
                .tokens(page)
                .map_err(|e| e.on_page(page, "token extraction"))?;
            let mut events: Vec<MatchEvent> = tokens
                .iter()
                .flat_map(|token| token_matcher.matches(token, page))
                .collect();
            events.extend(
                phrase_matcher
                    .matches(&*doc, page)
                    .map_err(|e| e.on_page(page, "phrase search"))?,
            );
            log::debug!("page {}: {} token(s), {} match(es)", page, tokens.len(), events.len());

            for event in events {
                let lexicon = lexicons
                    .iter()
                    .find(|l| l.name() == event.lexicon)
                    .expect("events only come from compiled lexicons");
                let color = registry.color_for(lexicon, &event.key);
                doc.highlight(page, event.region, color)
                    .map_err(|e| e.on_page(page, format!("lexicon '{}'", event.lexicon)))?;
                *highlights.entry(event.lexicon.clone()).or_insert(0) += 1;
                if self.config.build_index && indexed.contains(event.lexicon.as_str()) {
                    aggregator.record(&event);
                }
            }
        }

        let index_pages = if self.config.build_index {
            self.compose_index(doc, &lexicons, &aggregator)?
        } else {
            0
        };

        let total: usize = highlights.values().sum();
        log::info!(
            "run complete: {} page(s), {} highlight(s), {} index page(s)",
            page_count,
            total,
            index_pages
        );
        Ok(RunReport {
            pages_processed: page_count,
            highlights,
            index_pages,
        })
    }

    /// Compile the highlight-selected lexicons, in selection order.
    ///
    /// A selected name with no matching source is a configuration
    /// error; a source that compiled to an empty lexicon is skipped
    /// with a warning.
    fn compile_lexicons(
        &self,
        sources: &[WordSource],
        normalizer: &Normalizer,
    ) -> Result<Vec<Lexicon>> {
        let mut lexicons = Vec::new();
        for name in &self.config.highlight_lexicons {
            let source = sources
                .iter()
                .find(|s| &s.name == name)
                .ok_or_else(|| Error::UnknownLexicon(name.clone()))?;
            let lexicon = Lexicon::compile(&source.name, &source.terms, source.color, normalizer);
            if lexicon.is_empty() {
                log::warn!("lexicon '{}' has no usable terms, skipping", name);
                continue;
            }
            log::debug!(
                "compiled lexicon '{}': {} word(s), {} phrase(s)",
                name,
                lexicon.word_count(),
                lexicon.phrases().len()
            );
            lexicons.push(lexicon);
        }
        Ok(lexicons)
    }

    /// Lay out and append the index pages. Returns how many were added;
    /// zero (and no page at all) when nothing was aggregated.
    fn compose_index<D>(
        &self,
        doc: &mut D,
        lexicons: &[Lexicon],
        aggregator: &IndexAggregator,
    ) -> Result<usize>
    where
        D: PageComposer,
    {
        let selected: Vec<&Lexicon> = self
            .config
            .index_lexicons
            .iter()
            .filter_map(|name| lexicons.iter().find(|l| l.name() == name))
            .collect();
        let sections = aggregator.sections(&selected);
        if sections.is_empty() {
            return Ok(0);
        }

        let (width, height) = doc.page_size();
        let engine = IndexLayoutEngine::new(
            width,
            height,
            self.config.index_columns,
            self.config.index_font_size,
            self.config.show_variants,
        );
        let layout = engine.layout(&sections);
        for page in &layout.pages {
            let index = doc.append_page(width, height)?;
            for op in &page.ops {
                doc.place_text(index, op.x, op.y, op.font_size, op.color, &op.text)?;
            }
        }
        Ok(layout.pages.len())
    }
}
