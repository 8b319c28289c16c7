//! # Precis - Extractive Text Summarizer
//!
//! Precis condenses a document into its most representative sentences using
//! word-frequency scoring.
//!
//! ## Overview
//!
//! The summarizer is a single forward pipeline of pure stages:
//!
//! 1. **Sanitize** - control characters become spaces, footnote markers such
//!    as `[3]` are dropped, whitespace runs collapse
//! 2. **Tokenize** - rule-based sentence segmentation plus a lower-cased,
//!    stopword-filtered word list
//! 3. **Score** - each sentence sums the document frequency of its words
//! 4. **Select** - the top N sentences are returned in document order
//!
//! Input comes from a local file or from the paragraphs of a web page, and
//! the summary is rendered word-wrapped at 80 columns.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use precis::{read_source, Config, Summarizer};
//!
//! let config = Config::default();
//! let raw = read_source("article.txt", &config.source)?;
//!
//! let summary = Summarizer::new().summarize(&raw, config.summary.length)?;
//! println!("{}", summary.text);
//! # Ok::<(), precis::PrecisError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`text`] - Sanitization, word tokenization, and stopwords
//! - [`segmentation`] - Sentence boundary detection
//! - [`summary`] - Frequency scoring, top-N selection, and the [`Summarizer`]
//! - [`source`] - File and URL retrieval
//! - [`presenter`] - Word wrap and summary file output

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod presenter;
pub mod segmentation;
pub mod source;
pub mod summary;
pub mod text;

// Re-export commonly used types
pub use config::{Config, OutputConfig, SourceConfig, SummaryConfig, WrapConfig};
pub use error::{PrecisError, Result};
pub use presenter::{present, wrap};
pub use segmentation::split_sentences;
pub use source::read_source;
pub use summary::{score, select, FrequencyTable, SentenceScores, Summarizer, Summary};
pub use text::{sanitize, tokenize, StopwordFilter, TokenizedText, WordTokenizer};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of sentences in a summary.
pub const DEFAULT_LENGTH: usize = 4;
