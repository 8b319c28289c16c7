//! Configuration for the precis summarizer.

use crate::error::{PrecisError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for a summarization run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Summary selection configuration.
    pub summary: SummaryConfig,

    /// Source fetching configuration.
    pub source: SourceConfig,

    /// Word-wrap configuration for the rendered summary.
    pub wrap: WrapConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Summary selection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Number of sentences to return.
    /// Default: 4.
    pub length: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            length: crate::DEFAULT_LENGTH,
        }
    }
}

/// Source fetching configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// HTTP request timeout in seconds.
    /// Default: 30.
    pub timeout_secs: u64,

    /// User agent sent with HTTP requests.
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: format!("precis/{}", crate::VERSION),
        }
    }
}

/// Word-wrap configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapConfig {
    /// Maximum line width in characters, indent included.
    /// Default: 80.
    pub width: usize,

    /// Prefix for the first line.
    /// Default: four spaces.
    pub initial_indent: String,

    /// Prefix for every following line.
    /// Default: four spaces.
    pub subsequent_indent: String,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            width: 80,
            initial_indent: " ".repeat(4),
            subsequent_indent: " ".repeat(4),
        }
    }
}

impl WrapConfig {
    /// Checks that every line has room for at least one character.
    pub fn validate(&self) -> Result<()> {
        let indent = self
            .initial_indent
            .chars()
            .count()
            .max(self.subsequent_indent.chars().count());

        if self.width == 0 {
            return Err(PrecisError::Config("wrap width must be positive".to_string()));
        }
        if indent >= self.width {
            return Err(PrecisError::Config(format!(
                "indent ({indent}) must be narrower than wrap width ({})",
                self.width
            )));
        }
        Ok(())
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File the rendered summary is written to.
    /// Default: `summary.txt` in the working directory.
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("summary.txt"),
        }
    }
}
