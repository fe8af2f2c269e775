// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]
#![allow(clippy::match_like_matches_macro)]

//! # Lexitint
//!
//! Lexicon-driven PDF highlighting: match user-supplied word lists
//! against a document, color each lexicon's matches with its own color,
//! render first occurrences saturated and repeats tinted toward white,
//! and append a multi-column alphabetical index of everything that
//! matched.
//!
//! ## Core Features
//!
//! - **Token matching**: case-insensitive, whole-token set membership —
//!   never substring scanning, so "cat" cannot match inside "scatter"
//! - **Stem matching**: optional English Snowball normalization, so
//!   "running" and "runs" match a lexicon containing "run"
//! - **Phrase matching**: multi-word terms located via literal
//!   full-text search per page
//! - **First-occurrence coloring**: per-lexicon tracking of canonical
//!   keys; repeats get a configurable whitened tint
//! - **Index pages**: matched terms with their observed surface
//!   variants, laid out across columns and pages with overflow handling
//!
//! ## Architecture
//!
//! The engine is format-agnostic: text extraction, phrase search,
//! highlight annotation, and page composition are capability traits
//! ([`page::TextSource`], [`page::AnnotationSink`],
//! [`page::PageComposer`]) implemented by the document backend. One
//! [`engine::Highlighter::run`] call owns all mutable run state; runs
//! over different documents are fully independent.
//!
//! ## Quick Start
//!
//! ```ignore
//! use lexitint::{Highlighter, RunConfig, WordSource};
//! use lexitint::color::Rgb;
//!
//! # fn main() -> lexitint::Result<()> {
//! let mut doc = open_backend("paper.pdf")?; // your TextSource + AnnotationSink + PageComposer
//!
//! let terms = WordSource::from_delimited(
//!     "Core Terms",
//!     Rgb::from_hex("#FFFF00")?,
//!     "gradient, descent\ndeep learning",
//! );
//!
//! let config = RunConfig::new()
//!     .with_stemming(true)
//!     .with_repeat_opacity(0.35)
//!     .with_highlight_lexicons(["Core Terms"])
//!     .with_index_lexicons(["Core Terms"]);
//!
//! let report = Highlighter::new(config).run(&mut doc, &[terms])?;
//! println!("{} highlights", report.highlights["Core Terms"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0
//! * MIT license
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Value types
pub mod color;
pub mod geometry;

// Lexicon compilation and matching
pub mod lexicon;
pub mod matcher;
pub mod phrase;
pub mod stem;

// Occurrence state and index building
pub mod index;
pub mod registry;

// Run configuration and orchestration
pub mod config;
pub mod engine;
pub mod page;
pub mod wordlist;

pub use color::Rgb;
pub use config::RunConfig;
pub use engine::{Highlighter, RunReport};
pub use error::{Error, Result};
pub use lexicon::Lexicon;
pub use page::{AnnotationSink, PageComposer, TextSource, Token};
pub use wordlist::WordSource;
