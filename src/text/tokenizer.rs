//! Word tokenization following Penn Treebank conventions.

use crate::segmentation::split_sentences;
use crate::text::StopwordFilter;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// An ordered regex rewrite applied to a padded sentence.
struct Rule {
    pattern: Lazy<Regex>,
    replacement: &'static str,
}

macro_rules! rule {
    ($pattern:expr, $replacement:expr) => {
        Rule {
            pattern: Lazy::new(|| Regex::new($pattern).unwrap()),
            replacement: $replacement,
        }
    };
}

// Punctuation, then quotes. Commas and colons inside numbers (1,000 and 10:30) stay put.
// The final period must split off before quotes are padded.
static PUNCTUATION_RULES: [Rule; 9] = [
    rule!(r"([:,])([^\d])", " ${1} ${2}"),
    rule!(r"([:,])$", " ${1} "),
    rule!(r"\.\.\.", " ... "),
    rule!(r"[;@#$%&]", " $0 "),
    rule!(r#"([^.])(\.)([\])}>"'\u{201C}\u{201D}\u{2019}]*)\s*$"#, "${1} ${2}${3} "),
    rule!(r#"["\u{201C}\u{201D}]"#, " $0 "),
    rule!(r"[?!]", " $0 "),
    rule!(r"[\]\[(){}<>]", " $0 "),
    rule!(r"--", " -- "),
];

// Clitics, applied once the sentence is padded with spaces.
static CONTRACTION_RULES: [Rule; 7] = [
    rule!(r"([^'])' ", "${1} ' "),
    rule!(r"(?i)([^' ])('[sdm]|') ", "${1} ${2} "),
    rule!(r"(?i)([^' ])('ll|'re|'ve|n't) ", "${1} ${2} "),
    rule!(r"(?i)\b(can)(not)\b", "${1} ${2}"),
    rule!(r"(?i)\b(gon)(na)\b", "${1} ${2}"),
    rule!(r"(?i)\b(got)(ta)\b", "${1} ${2}"),
    rule!(r"(?i)\b(wan)(na)\b", "${1} ${2}"),
];

/// Word tokenizer that splits punctuation and clitics into separate tokens.
///
/// Text is segmented into sentences first, so only the period that closes a
/// sentence is split off; periods inside abbreviations stay attached
/// (`"U.S.A. is big."` yields `U.S.A.`, `is`, `big`, `.`).
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Creates a new word tokenizer.
    pub fn new() -> Self {
        Self
    }

    /// Tokenizes text into word and punctuation tokens, preserving case.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        split_sentences(text)
            .iter()
            .flat_map(|sentence| self.tokenize_sentence(sentence))
            .collect()
    }

    /// Lower-cases text, then tokenizes it.
    pub fn tokenize_lowercase(&self, text: &str) -> Vec<String> {
        self.tokenize(&text.to_lowercase())
    }

    /// Tokenizes a single sentence.
    pub fn tokenize_sentence(&self, sentence: &str) -> Vec<String> {
        let mut text = sentence.to_string();

        for rule in &PUNCTUATION_RULES {
            text = rule.pattern.replace_all(&text, rule.replacement).into_owned();
        }

        text = format!(" {text} ");

        for rule in &CONTRACTION_RULES {
            text = rule.pattern.replace_all(&text, rule.replacement).into_owned();
        }

        text.split_whitespace().map(str::to_string).collect()
    }
}

/// Sentences and scoring words extracted from sanitized text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizedText {
    /// Sentences in document order, original case.
    pub sentences: Vec<String>,
    /// Lower-cased word tokens with stopwords and punctuation removed.
    pub words: Vec<String>,
}

/// Splits clean text into sentences and stopword-filtered, lower-cased words.
///
/// The word list carries no link back to the sentences; it only feeds the
/// frequency table.
pub fn tokenize(clean: &str, tokenizer: &WordTokenizer, stopwords: &StopwordFilter) -> TokenizedText {
    let sentences = split_sentences(clean);
    let words = stopwords.filter(tokenizer.tokenize_lowercase(clean));

    debug!(
        "tokenized {} sentences, {} scoring words",
        sentences.len(),
        words.len()
    );

    TokenizedText { sentences, words }
}
