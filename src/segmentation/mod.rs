//! Sentence segmentation.
//!
//! Rule-based English sentence boundary detection that keeps abbreviations,
//! initials, decimal numbers and suspension points inside their sentence.

mod sentence;

pub use sentence::split_sentences;
