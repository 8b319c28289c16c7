//! Extractive summarization.
//!
//! The pipeline runs four pure stages over one input string:
//!
//! 1. [`sanitize`](crate::text::sanitize) normalizes whitespace and strips footnote markers
//! 2. [`tokenize`](crate::text::tokenize) splits sentences and collects scoring words
//! 3. [`score`] weights each sentence by document word frequency
//! 4. [`select`] keeps the top sentences in document order
//!
//! [`Summarizer`] bundles the shared stopword set and tokenizer and runs the
//! whole pipeline in one call.

pub mod scorer;
pub mod selector;

pub use scorer::{score, FrequencyTable, SentenceScores};
pub use selector::{select, select_indices};

use crate::error::Result;
use crate::text::{sanitize, tokenize, StopwordFilter, WordTokenizer};
use log::debug;

/// A finished summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Selected sentences joined by single spaces, in document order.
    pub text: String,
    /// Positions of the selected sentences in the document, ascending.
    pub indices: Vec<usize>,
    /// Score of every sentence in the document.
    pub scores: SentenceScores,
    /// Number of sentences found in the document.
    pub num_sentences: usize,
}

impl Summary {
    /// Number of sentences in the summary.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the summary holds no sentences.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Frequency-based extractive summarizer.
///
/// Holds the read-only stopword set; build it once and reuse it for every
/// document.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    stopwords: StopwordFilter,
    tokenizer: WordTokenizer,
}

impl Summarizer {
    /// Creates a summarizer with the English stopword set.
    pub fn new() -> Self {
        Self::with_stopwords(StopwordFilter::english())
    }

    /// Creates a summarizer with a custom stopword set.
    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self {
            stopwords,
            tokenizer: WordTokenizer::new(),
        }
    }

    /// The stopword set in use.
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Summarizes raw text into its `length` most representative sentences.
    ///
    /// # Errors
    /// [`PrecisError::LengthExceedsAvailable`](crate::PrecisError::LengthExceedsAvailable)
    /// if the document has fewer than `length` sentences.
    ///
    /// # Example
    /// ```
    /// use precis::Summarizer;
    ///
    /// let text = "Crabs walk sideways. Rust crabs are orange. \
    ///             Orange crabs love Rust. The weather was fine.";
    /// let summary = Summarizer::new().summarize(text, 2)?;
    /// assert_eq!(summary.text, "Rust crabs are orange. Orange crabs love Rust.");
    /// # Ok::<(), precis::PrecisError>(())
    /// ```
    pub fn summarize(&self, raw: &str, length: usize) -> Result<Summary> {
        let clean = sanitize(raw);
        let tokens = tokenize(&clean, &self.tokenizer, &self.stopwords);

        selector::check_length(length, tokens.sentences.len())?;

        let scores = score(&tokens.words, &tokens.sentences, &self.tokenizer);
        let indices = select_indices(&scores, length);
        let text = selector::join_selected(&tokens.sentences, &indices);

        debug!("selected sentences {:?} of {}", indices, tokens.sentences.len());

        Ok(Summary {
            text,
            indices,
            num_sentences: tokens.sentences.len(),
            scores,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrecisError;

    const TEXT: &str = "Crabs walk sideways. Rust crabs are orange. \
                        Orange crabs love Rust. The weather was fine.";

    #[test]
    fn test_summarize() {
        let summary = Summarizer::new().summarize(TEXT, 2).unwrap();

        assert_eq!(summary.num_sentences, 4);
        assert_eq!(summary.indices, vec![1, 2]);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary.scores.len(), 4);
        assert_eq!(summary.text, "Rust crabs are orange. Orange crabs love Rust.");
    }

    #[test]
    fn test_summarize_checks_length_first() {
        let err = Summarizer::new().summarize(TEXT, 5).unwrap_err();
        assert!(matches!(
            err,
            PrecisError::LengthExceedsAvailable {
                requested: 5,
                available: 4
            }
        ));
    }

    #[test]
    fn test_summarize_sanitizes() {
        let raw = "Crabs[1] are\tcrustaceans.\r\nCrabs\n\nscuttle.";
        let summary = Summarizer::new().summarize(raw, 2).unwrap();
        assert_eq!(summary.text, "Crabs are crustaceans. Crabs scuttle.");
    }

    #[test]
    fn test_custom_stopwords() {
        let summarizer = Summarizer::with_stopwords(StopwordFilter::from_list(&["crabs"]));
        assert!(summarizer.stopwords().is_stopword("crabs"));

        let summary = summarizer.summarize(TEXT, 1).unwrap();
        assert_eq!(summary.len(), 1);
    }

    #[test]
    fn test_summary_text_matches_indices() {
        let summary = Summarizer::new().summarize(TEXT, 3).unwrap();
        let sentences = crate::split_sentences(TEXT);
        let expected: Vec<&str> = summary.indices.iter().map(|&i| sentences[i].as_str()).collect();

        assert_eq!(summary.text, expected.join(" "));
        assert_eq!(summary.text, select(&summary.scores, &sentences, 3).unwrap());
    }

    #[test]
    fn test_empty_document() {
        let summary = Summarizer::new().summarize("", 0).unwrap();
        assert!(summary.is_empty());
        assert_eq!(summary.text, "");
        assert!(Summarizer::new().summarize("  \n ", 1).is_err());
    }
}
