//! Error types for the precis summarizer.

use thiserror::Error;

/// The main error type for precis operations.
#[derive(Error, Debug)]
pub enum PrecisError {
    /// The input location is neither a readable file nor a reachable URL.
    #[error("Fatal Error: File ({location}) could not be located or is not readable: {reason}")]
    SourceUnavailable {
        /// The path or URL that was requested.
        location: String,
        /// What went wrong on the last attempt.
        reason: String,
    },

    /// More summary sentences were requested than the document contains.
    #[error(
        "Error, more sentences requested ({requested}) than available ({available}). \
         Use -l (--length) flag to adjust."
    )]
    LengthExceedsAvailable {
        /// Requested summary length.
        requested: usize,
        /// Number of sentences found in the document.
        available: usize,
    },

    /// Sentence scores and sentences do not line up one to one.
    #[error("Score count ({scores}) does not match sentence count ({sentences})")]
    ScoreMismatch {
        /// Number of scores supplied.
        scores: usize,
        /// Number of sentences supplied.
        sentences: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PrecisError {
    /// Builds a [`PrecisError::SourceUnavailable`] for `location`.
    pub fn source_unavailable(location: impl Into<String>, reason: impl ToString) -> Self {
        PrecisError::SourceUnavailable {
            location: location.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for precis operations.
pub type Result<T> = std::result::Result<T, PrecisError>;
