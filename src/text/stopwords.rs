//! Stopword filtering
//!
//! The English list comes from the NLTK corpus shipped by the `stop-words`
//! crate. Every single ASCII punctuation character is treated as a stopword
//! as well, so bare punctuation tokens never reach the frequency table.

use rustc_hash::FxHashSet;
use stop_words::get;

/// ASCII punctuation symbols, each one a stopword on its own.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// A read-only set of words excluded from frequency scoring.
///
/// Build it once at start-up and share it by reference.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// English stopwords plus single punctuation characters.
    pub fn english() -> Self {
        let mut filter = Self::from_list(get("en"));
        filter
            .stopwords
            .extend(PUNCTUATION.chars().map(|c| c.to_string()));
        filter
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Check if a token is a stopword.
    ///
    /// Tokens are expected to be lowercase already; no case folding happens here.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Keeps the tokens that are not stopwords, preserving order.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|t| !self.is_stopword(t))
            .collect()
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
