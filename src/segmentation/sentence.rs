//! Regex-based sentence segmentation.
//!
//! Boundary detection uses a protect-split-repair approach. Dots that do not
//! end a sentence (abbreviations, initials, titles, `et al.`, suspension
//! points) are swapped for placeholders, the text is cut after every run of
//! sentence enders that is followed by whitespace, and the placeholders are
//! restored. Decimal numbers never need protecting because a boundary always
//! requires trailing whitespace.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Placeholder tokens for protected patterns.
/// These use sequences unlikely to appear in natural text.
mod placeholder {
    pub const COMPOSITE_DOT: &str = "\u{FEFF}CD\u{FEFF}"; // et al.
    pub const SUSPENSION: &str = "\u{FEFF}SUS\u{FEFF}"; // ...
    pub const ABBREV_DOT: &str = "\u{FEFF}AD\u{FEFF}"; // U.S.A., e.g.
    pub const INITIAL_DOT: &str = "\u{FEFF}ID\u{FEFF}"; // J.
    pub const TITLE_DOT: &str = "\u{FEFF}TD\u{FEFF}"; // Dr. Mr.
}

// Matches "et al." optionally followed by another period
static COMPOSITE_ABBREV: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<comp>\bet al)\.(?:\.)?").unwrap());

static SUSPENSION_POINTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{3}").unwrap());

static ABBREVIATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:[A-Za-z]\.){2,}").unwrap());

// A lone "I." is a sentence end, not an initial.
static INITIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-HJ-Z]\.").unwrap());

static NEXT_INITIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+\p{Lu}\.").unwrap());

static NEXT_CAPITALIZED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+\p{Lu}").unwrap());

static NEXT_LOWERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+\p{Ll}").unwrap());

const CLOSERS: [char; 6] = ['"', '\'', ')', ']', '\u{2019}', '\u{201D}'];

static TITLES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?P<title>mr|mrs|ms|dr|prof|sr|jr|st|vs|fig|gen|gov|sen|rep|col|capt|lt|sgt|mt|rev|hon)\.",
    )
    .unwrap()
});

// A run of enders, any closing quotes or brackets, then whitespace or end of text.
static BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.!?]+["'\u{2019}\u{201D})\]}]*(?:\s+|$)"#).unwrap());

/// Splits text into sentences using regex-based boundary detection.
///
/// This function handles common edge cases including:
/// - Abbreviations (U.S.A., e.g., Dr., Mr.)
/// - Initials (J. K. Rowling)
/// - Floating-point numbers (3.14, .625)
/// - Suspension points (...)
/// - Quoted and parenthesized sentence endings
///
/// Sentences are trimmed and never empty.
///
/// # Example
/// ```
/// use precis::segmentation::split_sentences;
///
/// let text = "Dr. Smith went to Washington. He arrived at 3.14 p.m. sharp.";
/// let sentences = split_sentences(text);
/// assert_eq!(sentences.len(), 2);
/// ```
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![];
    }

    let protected = protect(text);

    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in BOUNDARY.find_iter(&protected) {
        push_sentence(&mut sentences, &protected[start..boundary.end()]);
        start = boundary.end();
    }
    push_sentence(&mut sentences, &protected[start..]);

    sentences
}

/// Replaces non-terminal dots with placeholders.
fn protect(text: &str) -> String {
    let mut protected = COMPOSITE_ABBREV
        .replace_all(text, |caps: &Captures| {
            format!("{}{}", &caps["comp"], placeholder::COMPOSITE_DOT)
        })
        .into_owned();

    protected = SUSPENSION_POINTS
        .replace_all(&protected, placeholder::SUSPENSION)
        .into_owned();

    protected = ABBREVIATION
        .replace_all(&protected, |caps: &Captures| {
            caps[0].replace('.', placeholder::ABBREV_DOT)
        })
        .into_owned();

    protected = TITLES
        .replace_all(&protected, |caps: &Captures| {
            format!("{}{}", &caps["title"], placeholder::TITLE_DOT)
        })
        .into_owned();

    protect_initials(&protected)
}

/// Protects the dot of single-letter initials that belong to a name.
///
/// An initial is kept inside its sentence when another initial follows it
/// (`J. K.`), when a lowercase word follows it (`C. arabica`), or when it
/// follows a title, an initial, or a sentence start and a capitalized word
/// comes next (`Dr. C. Jeung`). Anything else, such as `vitamin C. It` or
/// `Plan B.`, is left as a possible sentence end.
fn protect_initials(text: &str) -> String {
    let mut protected = String::with_capacity(text.len());
    let mut last = 0;
    let mut previous_initial_end = None;

    for m in INITIAL.find_iter(text) {
        let before = text[..m.start()].trim_end();
        let after = &text[m.end()..];

        let after_initial =
            previous_initial_end.is_some_and(|end| text[end..m.start()].trim().is_empty());
        let opens_name = after_initial
            || before.ends_with(placeholder::TITLE_DOT)
            || starts_sentence(before);

        if NEXT_INITIAL.is_match(after)
            || NEXT_LOWERCASE.is_match(after)
            || (opens_name && NEXT_CAPITALIZED.is_match(after))
        {
            protected.push_str(&text[last..m.end() - 1]);
            protected.push_str(placeholder::INITIAL_DOT);
            last = m.end();
            previous_initial_end = Some(m.end());
        }
    }

    protected.push_str(&text[last..]);
    protected
}

fn starts_sentence(before: &str) -> bool {
    before.is_empty()
        || before
            .trim_end_matches(CLOSERS)
            .ends_with(['.', '!', '?'])
}

fn push_sentence(sentences: &mut Vec<String>, segment: &str) {
    let repaired = repair_sentence(segment);
    if !repaired.is_empty() {
        sentences.push(repaired);
    }
}

/// Repairs placeholders back to original text
fn repair_sentence(s: &str) -> String {
    s.trim()
        .replace(placeholder::COMPOSITE_DOT, ".")
        .replace(placeholder::SUSPENSION, "...")
        .replace(placeholder::ABBREV_DOT, ".")
        .replace(placeholder::INITIAL_DOT, ".")
        .replace(placeholder::TITLE_DOT, ".")
}
