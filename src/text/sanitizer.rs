//! Raw text sanitization.

use once_cell::sync::Lazy;
use regex::Regex;

// `[12]`, `[]` style footnote markers
static FOOTNOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[0-9]*\]").unwrap());

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalizes raw file or web text before tokenization.
///
/// - formfeeds, tabs and newlines become a single space each
/// - carriage returns are removed
/// - footnote markers such as `[3]` become a single space
/// - every whitespace run collapses to one space
///
/// The function is total and idempotent.
///
/// # Example
/// ```
/// use precis::text::sanitize;
///
/// assert_eq!(sanitize("\r\n\t"), " ");
/// assert_eq!(sanitize("Rust[1] is\tfast."), "Rust is fast.");
/// ```
pub fn sanitize(raw: &str) -> String {
    let translated: String = raw
        .chars()
        .filter(|&c| c != '\r')
        .map(|c| match c {
            '\u{000C}' | '\t' | '\n' => ' ',
            other => other,
        })
        .collect();

    let without_footnotes = FOOTNOTE.replace_all(&translated, " ");

    WHITESPACE_RUN
        .replace_all(&without_footnotes, " ")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_characters() {
        assert_eq!(sanitize("\r\n\t"), " ");
        assert_eq!(sanitize("a\u{000C}b"), "a b");
        assert_eq!(sanitize("line\r\nbreak"), "line break");
    }

    #[test]
    fn test_carriage_return_removed_not_spaced() {
        assert_eq!(sanitize("ab\rcd"), "abcd");
    }

    #[test]
    fn test_footnotes() {
        assert_eq!(
            sanitize("Ferris[12] is a crab[].  He lives[3] here."),
            "Ferris is a crab . He lives here."
        );
        // Only digits inside the brackets count as a footnote
        assert_eq!(sanitize("see [a] and [1a]"), "see [a] and [1a]");
    }

    #[test]
    fn test_no_whitespace_runs() {
        let out = sanitize("one  \t two\n\n\nthree \u{000C} four");
        assert_eq!(out, "one two three four");
        assert!(!out.contains("  "));
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "",
            " leading and trailing ",
            "Para one.\n\nPara two[4].\r\n",
            "[1][2][3]",
            "tabs\t\tand\u{000C}feeds",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "not idempotent for {input:?}");
            assert!(!once.contains(['\t', '\n', '\r', '\u{000C}']));
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
    }
}
