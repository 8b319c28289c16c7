//! Text processing module for sanitization, word tokenization, and stopword filtering.

mod sanitizer;
mod stopwords;
mod tokenizer;

pub use sanitizer::sanitize;
pub use stopwords::{StopwordFilter, PUNCTUATION};
pub use tokenizer::{tokenize, TokenizedText, WordTokenizer};
