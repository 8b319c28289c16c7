//! Source text retrieval from local files and web pages.
//!
//! A location is first read as a local file. If that fails it is treated
//! as an `http`/`https` URL, and the text of every `<p>` element of the
//! fetched page becomes the document.

use crate::config::SourceConfig;
use crate::error::{PrecisError, Result};
use log::{info, warn};
use scraper::{Html, Selector};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Reads raw text from a local file or, failing that, a web page.
///
/// A file that exists but is not valid UTF-8 is reported as is and never
/// retried as a URL.
///
/// # Errors
/// [`PrecisError::SourceUnavailable`] when `location` is neither a readable
/// file nor a reachable, well-formed URL.
pub fn read_source(location: &str, config: &SourceConfig) -> Result<String> {
    match read_file(Path::new(location)) {
        Ok(text) => {
            info!("read {} bytes from file {}", text.len(), location);
            Ok(text)
        }
        Err(file_err) if file_err.kind() == ErrorKind::InvalidData => {
            Err(PrecisError::source_unavailable(location, file_err))
        }
        Err(file_err) => {
            warn!("{location} is not a readable file ({file_err}), trying as URL");
            fetch_url(location, config)
        }
    }
}

/// Reads a UTF-8 text file.
pub fn read_file(path: &Path) -> std::io::Result<String> {
    fs::read_to_string(path)
}

/// Parses `location` as an absolute `http` or `https` URL.
pub fn parse_url(location: &str) -> Result<Url> {
    let url = Url::parse(location).map_err(|e| PrecisError::source_unavailable(location, e))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(PrecisError::source_unavailable(
            location,
            format!("unsupported URL scheme '{other}'"),
        )),
    }
}

/// Fetches a web page and returns the concatenated text of its paragraphs.
pub fn fetch_url(location: &str, config: &SourceConfig) -> Result<String> {
    let url = parse_url(location)?;
    let unavailable = |e: reqwest::Error| PrecisError::source_unavailable(location, e);

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(unavailable)?;

    let html = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(unavailable)?;

    let text = extract_paragraphs(&html);
    info!(
        "fetched {} bytes of HTML from {}, {} bytes of paragraph text",
        html.len(),
        location,
        text.len()
    );

    Ok(text)
}

/// Concatenates the text content of every `<p>` element, in document order,
/// with no separator.
pub fn extract_paragraphs(html: &str) -> String {
    let Some(selector) = Selector::parse("p").ok() else {
        return String::new();
    };

    Html::parse_document(html)
        .select(&selector)
        .flat_map(|paragraph| paragraph.text())
        .collect()
}
