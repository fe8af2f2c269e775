//! End-to-end tests for the highlighting run against an in-memory
//! document backend.

use lexitint::color::Rgb;
use lexitint::error::{Error, Result};
use lexitint::geometry::Rect;
use lexitint::page::{AnnotationSink, PageComposer, TextSource, Token};
use lexitint::{Highlighter, RunConfig, WordSource};

/// One applied highlight, as recorded by the mock backend.
#[derive(Debug, Clone, PartialEq)]
struct AppliedHighlight {
    page: usize,
    region: Rect,
    color: Rgb,
}

/// One placed text op, as recorded by the mock backend.
#[derive(Debug, Clone)]
struct PlacedText {
    page: usize,
    text: String,
    color: Rgb,
}

/// In-memory document: per-page token lists, naive phrase search over
/// the joined token text, and recording sinks for highlights and
/// composed pages.
struct MockDocument {
    pages: Vec<Vec<Token>>,
    page_size: (f32, f32),
    highlights: Vec<AppliedHighlight>,
    appended_pages: usize,
    placed: Vec<PlacedText>,
}

/// Wire test logging into the engine's `log` output once per process.
fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

impl MockDocument {
    fn new(pages: Vec<Vec<&str>>) -> Self {
        init_logs();
        let pages = pages
            .into_iter()
            .map(|words| {
                words
                    .into_iter()
                    .enumerate()
                    .map(|(i, text)| Token::new(text, Rect::new(i as f32 * 50.0, 0.0, 40.0, 12.0)))
                    .collect()
            })
            .collect();
        Self {
            pages,
            page_size: (612.0, 792.0),
            highlights: Vec::new(),
            appended_pages: 0,
            placed: Vec::new(),
        }
    }

    fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.page_size = (width, height);
        self
    }

    fn page_text(&self, page: usize) -> String {
        self.pages[page]
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl TextSource for MockDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn tokens(&self, page: usize) -> Result<Vec<Token>> {
        self.pages
            .get(page)
            .cloned()
            .ok_or_else(|| Error::Backend(format!("no page {}", page)))
    }

    fn search_phrase(&self, page: usize, phrase: &str) -> Result<Vec<Vec<Rect>>> {
        let haystack = self.page_text(page).to_lowercase();
        let needle = phrase.to_lowercase();
        let mut occurrences = Vec::new();
        let mut start = 0;
        while let Some(at) = haystack[start..].find(&needle) {
            let offset = start + at;
            occurrences.push(vec![Rect::new(
                offset as f32,
                0.0,
                needle.len() as f32,
                12.0,
            )]);
            start = offset + needle.len();
        }
        Ok(occurrences)
    }
}

impl AnnotationSink for MockDocument {
    fn highlight(&mut self, page: usize, region: Rect, color: Rgb) -> Result<()> {
        self.highlights.push(AppliedHighlight {
            page,
            region,
            color,
        });
        Ok(())
    }
}

impl PageComposer for MockDocument {
    fn page_size(&self) -> (f32, f32) {
        self.page_size
    }

    fn append_page(&mut self, _width: f32, _height: f32) -> Result<usize> {
        let index = self.pages.len() + self.appended_pages;
        self.appended_pages += 1;
        Ok(index)
    }

    fn place_text(
        &mut self,
        page: usize,
        _x: f32,
        _y: f32,
        _font_size: f32,
        color: Rgb,
        text: &str,
    ) -> Result<()> {
        self.placed.push(PlacedText {
            page,
            text: text.to_string(),
            color,
        });
        Ok(())
    }
}

fn source(name: &str, color: Rgb, terms: &[&str]) -> WordSource {
    WordSource::new(name, color, terms.iter().map(|s| s.to_string()).collect())
}

const YELLOW: Rgb = Rgb {
    r: 1.0,
    g: 1.0,
    b: 0.0,
};
const GREEN: Rgb = Rgb {
    r: 0.0,
    g: 1.0,
    b: 0.0,
};

mod exact_mode {
    use super::*;

    #[test]
    fn test_first_occurrence_base_then_repeat_tinted() {
        // Tokens: "Deep" matches (base), "deep" repeats (tint),
        // "learning" and "learn" never match.
        let mut doc = MockDocument::new(vec![vec!["Deep", "learning", "deep", "learn"]]);
        let sources = [source("terms", YELLOW, &["deep"])];
        let config = RunConfig::new()
            .with_repeat_opacity(0.4)
            .with_index(false)
            .with_highlight_lexicons(["terms"]);

        let report = Highlighter::new(config).run(&mut doc, &sources).unwrap();

        assert_eq!(report.pages_processed, 1);
        assert_eq!(report.highlights["terms"], 2);
        assert_eq!(doc.highlights.len(), 2);
        assert_eq!(doc.highlights[0].color, YELLOW);
        assert_eq!(doc.highlights[1].color, YELLOW.tinted(1.0 - 0.4));
        // The two highlights sit on tokens 0 and 2.
        assert_eq!(doc.highlights[0].region.x, 0.0);
        assert_eq!(doc.highlights[1].region.x, 100.0);
    }

    #[test]
    fn test_no_substring_matches() {
        let mut doc = MockDocument::new(vec![vec!["scatter", "category", "cat"]]);
        let sources = [source("terms", YELLOW, &["cat"])];
        let config = RunConfig::new()
            .with_index(false)
            .with_highlight_lexicons(["terms"]);

        let report = Highlighter::new(config).run(&mut doc, &sources).unwrap();

        assert_eq!(report.highlights["terms"], 1);
        assert_eq!(doc.highlights[0].region.x, 100.0);
    }

    #[test]
    fn test_first_seen_tracked_across_pages() {
        let mut doc = MockDocument::new(vec![vec!["deep"], vec!["deep"]]);
        let sources = [source("terms", YELLOW, &["deep"])];
        let config = RunConfig::new()
            .with_repeat_opacity(0.5)
            .with_index(false)
            .with_highlight_lexicons(["terms"]);

        Highlighter::new(config).run(&mut doc, &sources).unwrap();

        assert_eq!(doc.highlights[0].color, YELLOW);
        assert_eq!(doc.highlights[1].page, 1);
        assert_eq!(doc.highlights[1].color, YELLOW.tinted(1.0 - 0.5));
    }

    #[test]
    fn test_distinct_keys_in_exact_mode() {
        // Without stemming, "run" and "running" are different keys and
        // each gets its own base-colored first occurrence.
        let mut doc = MockDocument::new(vec![vec!["run", "running"]]);
        let sources = [source("terms", YELLOW, &["run", "running"])];
        let config = RunConfig::new()
            .with_index(false)
            .with_highlight_lexicons(["terms"]);

        Highlighter::new(config).run(&mut doc, &sources).unwrap();

        assert_eq!(doc.highlights.len(), 2);
        assert_eq!(doc.highlights[0].color, YELLOW);
        assert_eq!(doc.highlights[1].color, YELLOW);
    }

    #[test]
    fn test_token_matching_multiple_lexicons_gets_overlapping_highlights() {
        let mut doc = MockDocument::new(vec![vec!["model"]]);
        let sources = [
            source("first", YELLOW, &["model"]),
            source("second", GREEN, &["model"]),
        ];
        let config = RunConfig::new()
            .with_index(false)
            .with_highlight_lexicons(["first", "second"]);

        let report = Highlighter::new(config).run(&mut doc, &sources).unwrap();

        assert_eq!(report.highlights["first"], 1);
        assert_eq!(report.highlights["second"], 1);
        assert_eq!(doc.highlights.len(), 2);
        assert_eq!(doc.highlights[0].region, doc.highlights[1].region);
    }
}

mod stemming_mode {
    use super::*;

    #[test]
    fn test_inflections_share_a_key() {
        // Snowball: "running" -> "run" matches; "ran" and "runner" keep
        // their own roots and do not match a lexicon of {"run"}.
        let mut doc = MockDocument::new(vec![vec!["running", "ran", "runner"]]);
        let sources = [source("terms", YELLOW, &["run"])];
        let config = RunConfig::new()
            .with_stemming(true)
            .with_index(false)
            .with_highlight_lexicons(["terms"]);

        let report = Highlighter::new(config).run(&mut doc, &sources).unwrap();

        assert_eq!(report.highlights["terms"], 1);
        assert_eq!(doc.highlights[0].region.x, 0.0);
    }

    #[test]
    fn test_shared_root_counts_as_repeat() {
        let mut doc = MockDocument::new(vec![vec!["running", "runs"]]);
        let sources = [source("terms", YELLOW, &["run"])];
        let config = RunConfig::new()
            .with_stemming(true)
            .with_repeat_opacity(0.4)
            .with_index(false)
            .with_highlight_lexicons(["terms"]);

        Highlighter::new(config).run(&mut doc, &sources).unwrap();

        assert_eq!(doc.highlights[0].color, YELLOW);
        assert_eq!(doc.highlights[1].color, YELLOW.tinted(1.0 - 0.4));
    }
}

mod phrases {
    use super::*;

    #[test]
    fn test_phrase_and_single_word_both_highlight() {
        let mut doc = MockDocument::new(vec![vec!["deep", "learning", "helps", "cat"]]);
        let sources = [source("terms", GREEN, &["cat", "deep learning"])];
        let config = RunConfig::new()
            .with_index(false)
            .with_highlight_lexicons(["terms"]);

        let report = Highlighter::new(config).run(&mut doc, &sources).unwrap();

        // One token hit ("cat") plus one phrase hit ("deep learning").
        assert_eq!(report.highlights["terms"], 2);
    }

    #[test]
    fn test_phrase_repeats_are_tinted() {
        let mut doc = MockDocument::new(vec![
            vec!["deep", "learning", "and", "deep", "learning"],
        ]);
        let sources = [source("terms", GREEN, &["deep learning"])];
        let config = RunConfig::new()
            .with_repeat_opacity(0.3)
            .with_index(false)
            .with_highlight_lexicons(["terms"]);

        Highlighter::new(config).run(&mut doc, &sources).unwrap();

        assert_eq!(doc.highlights.len(), 2);
        assert_eq!(doc.highlights[0].color, GREEN);
        assert_eq!(doc.highlights[1].color, GREEN.tinted(1.0 - 0.3));
    }
}

mod index_pages {
    use super::*;

    #[test]
    fn test_index_appended_with_matched_terms() {
        let mut doc = MockDocument::new(vec![vec!["Running", "runs", "cat"]]);
        let sources = [source("terms", YELLOW, &["run", "cat"])];
        let config = RunConfig::new()
            .with_stemming(true)
            .with_highlight_lexicons(["terms"])
            .with_index_lexicons(["terms"]);

        let report = Highlighter::new(config).run(&mut doc, &sources).unwrap();

        assert_eq!(report.index_pages, 1);
        assert_eq!(doc.appended_pages, 1);
        let texts: Vec<&str> = doc.placed.iter().map(|p| p.text.as_str()).collect();
        assert!(texts.contains(&"terms"), "section header missing: {:?}", texts);
        assert!(texts.contains(&"run"));
        assert!(texts.contains(&"cat"));
        // Variant line lists the observed surfaces, case preserved.
        assert!(texts.iter().any(|t| t.contains("Running")));
    }

    #[test]
    fn test_no_index_page_when_nothing_matched() {
        let mut doc = MockDocument::new(vec![vec!["nothing", "here"]]);
        let sources = [source("terms", YELLOW, &["cat"])];
        let config = RunConfig::new()
            .with_highlight_lexicons(["terms"])
            .with_index_lexicons(["terms"]);

        let report = Highlighter::new(config).run(&mut doc, &sources).unwrap();

        assert_eq!(report.index_pages, 0);
        assert_eq!(doc.appended_pages, 0);
    }

    #[test]
    fn test_no_index_when_disabled() {
        let mut doc = MockDocument::new(vec![vec!["cat"]]);
        let sources = [source("terms", YELLOW, &["cat"])];
        let config = RunConfig::new()
            .with_index(false)
            .with_highlight_lexicons(["terms"])
            .with_index_lexicons(["terms"]);

        let report = Highlighter::new(config).run(&mut doc, &sources).unwrap();

        assert_eq!(report.index_pages, 0);
        assert_eq!(doc.appended_pages, 0);
    }

    #[test]
    fn test_index_restricted_to_selected_lexicons() {
        let mut doc = MockDocument::new(vec![vec!["cat", "dog"]]);
        let sources = [
            source("indexed", YELLOW, &["cat"]),
            source("unindexed", GREEN, &["dog"]),
        ];
        let config = RunConfig::new()
            .with_highlight_lexicons(["indexed", "unindexed"])
            .with_index_lexicons(["indexed"]);

        Highlighter::new(config).run(&mut doc, &sources).unwrap();

        let texts: Vec<&str> = doc.placed.iter().map(|p| p.text.as_str()).collect();
        assert!(texts.contains(&"cat"));
        assert!(!texts.contains(&"dog"));
        assert!(!texts.contains(&"unindexed"));
    }

    #[test]
    fn test_section_header_uses_lexicon_color() {
        let mut doc = MockDocument::new(vec![vec!["cat"]]);
        let sources = [source("terms", GREEN, &["cat"])];
        let config = RunConfig::new()
            .with_highlight_lexicons(["terms"])
            .with_index_lexicons(["terms"]);

        Highlighter::new(config).run(&mut doc, &sources).unwrap();

        let header = doc.placed.iter().find(|p| p.text == "terms").unwrap();
        assert_eq!(header.color, GREEN);
    }

    #[test]
    fn test_small_page_spans_multiple_index_pages() {
        let words: Vec<String> = (0..50).map(|i| format!("term{:02}", i)).collect();
        let word_refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let mut doc = MockDocument::new(vec![word_refs.clone()]).with_page_size(300.0, 150.0);
        let sources = [source("terms", YELLOW, &word_refs)];
        let config = RunConfig::new()
            .with_index_columns(1)
            .with_highlight_lexicons(["terms"])
            .with_index_lexicons(["terms"]);

        let report = Highlighter::new(config).run(&mut doc, &sources).unwrap();

        assert!(report.index_pages > 1);
        assert_eq!(doc.appended_pages, report.index_pages);
        // Every entry landed on some appended page.
        assert!(doc.placed.iter().any(|p| p.text == "term49"));
    }
}

mod configuration_errors {
    use super::*;

    #[test]
    fn test_no_lexicon_selected_fails_before_processing() {
        let mut doc = MockDocument::new(vec![vec!["cat"]]);
        let err = Highlighter::new(RunConfig::new())
            .run(&mut doc, &[])
            .unwrap_err();
        assert!(matches!(err, Error::NoLexiconSelected));
        assert!(doc.highlights.is_empty());
    }

    #[test]
    fn test_empty_document_is_rejected() {
        let mut doc = MockDocument::new(vec![]);
        let sources = [source("terms", YELLOW, &["cat"])];
        let config = RunConfig::new().with_highlight_lexicons(["terms"]);
        let err = Highlighter::new(config).run(&mut doc, &sources).unwrap_err();
        assert!(matches!(err, Error::EmptyDocument));
    }

    #[test]
    fn test_unknown_lexicon_name_is_rejected() {
        let mut doc = MockDocument::new(vec![vec!["cat"]]);
        let sources = [source("terms", YELLOW, &["cat"])];
        let config = RunConfig::new().with_highlight_lexicons(["missing"]);
        let err = Highlighter::new(config).run(&mut doc, &sources).unwrap_err();
        assert!(matches!(err, Error::UnknownLexicon(name) if name == "missing"));
    }

    #[test]
    fn test_empty_lexicon_is_skipped_not_fatal() {
        let mut doc = MockDocument::new(vec![vec!["cat"]]);
        let sources = [
            source("empty", YELLOW, &["  ", ""]),
            source("terms", GREEN, &["cat"]),
        ];
        let config = RunConfig::new()
            .with_index(false)
            .with_highlight_lexicons(["empty", "terms"]);

        let report = Highlighter::new(config).run(&mut doc, &sources).unwrap();

        assert_eq!(report.highlights["empty"], 0);
        assert_eq!(report.highlights["terms"], 1);
    }
}

mod reporting {
    use super::*;

    #[test]
    fn test_report_counts_follow_selection_order() {
        let mut doc = MockDocument::new(vec![vec!["cat", "dog", "cat"]]);
        let sources = [
            source("b", GREEN, &["dog"]),
            source("a", YELLOW, &["cat"]),
        ];
        let config = RunConfig::new()
            .with_index(false)
            .with_highlight_lexicons(["b", "a"]);

        let report = Highlighter::new(config).run(&mut doc, &sources).unwrap();

        let names: Vec<&String> = report.highlights.keys().collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(report.highlights["a"], 2);
        assert_eq!(report.highlights["b"], 1);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let mut doc = MockDocument::new(vec![vec!["cat"]]);
        let sources = [source("terms", YELLOW, &["cat"])];
        let config = RunConfig::new()
            .with_index(false)
            .with_highlight_lexicons(["terms"]);

        let report = Highlighter::new(config).run(&mut doc, &sources).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"pages_processed\":1"));
        assert!(json.contains("\"terms\":1"));
    }
}
