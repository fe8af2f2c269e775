//! Error types for the highlighting engine.
//!
//! This module defines all error types that can occur while compiling
//! lexicons and processing a document. The taxonomy distinguishes
//! configuration errors (rejected before any processing starts),
//! ingestion errors (isolated to one word source), and processing
//! errors (fatal to the current run).

/// Result type alias for highlighting operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during a highlighting run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document has no pages to process.
    #[error("Document is empty: no pages to process")]
    EmptyDocument,

    /// No lexicon was selected for highlighting.
    #[error("No lexicon selected for highlighting")]
    NoLexiconSelected,

    /// A selected lexicon name does not correspond to any word source.
    #[error("Unknown lexicon: '{0}' is not among the compiled word sources")]
    UnknownLexicon(String),

    /// Repeat opacity outside the valid range.
    #[error("Invalid repeat opacity {0}: must be within [0, 1]")]
    InvalidOpacity(f32),

    /// A color string could not be parsed.
    #[error("Invalid color '{value}': {reason}")]
    InvalidColor {
        /// The string that failed to parse
        value: String,
        /// Reason for parse failure
        reason: String,
    },

    /// A word source failed to parse into a term list.
    ///
    /// Ingestion errors are isolated to the one source; the run
    /// continues with the remaining lexicons.
    #[error("Word source '{source_name}' failed to parse: {reason}")]
    Ingestion {
        /// Name of the word source that failed
        source_name: String,
        /// Reason for ingestion failure
        reason: String,
    },

    /// A failure during the page loop, fatal to the current run.
    #[error("Processing failed on page {page} ({context}): {source}")]
    Processing {
        /// Zero-based index of the page being processed
        page: usize,
        /// What was in progress (e.g. the lexicon being matched)
        context: String,
        /// The underlying failure
        #[source]
        source: Box<Error>,
    },

    /// A capability collaborator (extraction, annotation, composition)
    /// reported a failure.
    #[error("Document backend error: {0}")]
    Backend(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap a failure with the page index and in-progress context.
    pub(crate) fn on_page(self, page: usize, context: impl Into<String>) -> Error {
        Error::Processing {
            page,
            context: context.into(),
            source: Box::new(self),
        }
    }
}
