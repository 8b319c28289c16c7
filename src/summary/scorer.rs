//! Frequency-based sentence scoring.

use crate::text::WordTokenizer;
use log::debug;
use rustc_hash::FxHashMap;

/// Score per sentence, indexed by the sentence's position in the document.
pub type SentenceScores = Vec<usize>;

/// Occurrence count of every distinct scoring word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: FxHashMap<String, usize>,
}

impl FrequencyTable {
    /// Counts the occurrences of each word.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for word in words {
            *counts.entry(word.as_ref().to_string()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for `word`, if it appears in the table.
    #[inline]
    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table has no words.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sums the counts of the given tokens; unknown tokens add nothing.
    pub fn total<S: AsRef<str>>(&self, tokens: &[S]) -> usize {
        tokens
            .iter()
            .filter_map(|t| self.get(t.as_ref()))
            .sum()
    }
}

/// Scores every sentence by the document frequency of its words.
///
/// Each sentence is lower-cased and re-tokenized with the full word
/// tokenizer. Tokens absent from the frequency table (stopwords among them)
/// contribute nothing, so every sentence gets a score, possibly zero.
pub fn score<S: AsRef<str>>(
    filtered_words: &[S],
    sentences: &[String],
    tokenizer: &WordTokenizer,
) -> SentenceScores {
    let table = FrequencyTable::from_words(filtered_words);

    let scores: SentenceScores = sentences
        .iter()
        .map(|sentence| table.total(&tokenizer.tokenize_lowercase(sentence)))
        .collect();

    debug!(
        "scored {} sentences against {} distinct words",
        scores.len(),
        table.len()
    );

    scores
}
