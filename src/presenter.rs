//! Summary rendering: fixed-width word wrap and file output.

use crate::config::{OutputConfig, WrapConfig};
use crate::error::Result;
use log::info;
use std::fs;

/// Word-wraps `text` greedily to `config.width` columns.
///
/// Any whitespace separates words and each line starts with its indent.
/// Words are never split, neither at hyphens nor when they are too long: a
/// word wider than the line sits alone on its own line. Whitespace-only text
/// renders as an empty string.
///
/// # Example
/// ```
/// use precis::{presenter::wrap, WrapConfig};
///
/// let config = WrapConfig { width: 16, ..WrapConfig::default() };
/// assert_eq!(wrap("one two three four", &config), "    one two\n    three four");
/// ```
pub fn wrap(text: &str, config: &WrapConfig) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let indent = indent_for(lines.len(), config);
        let available = config.width.saturating_sub(indent.chars().count());
        let word_len = word.chars().count();

        if line_len > 0 && line_len + 1 + word_len > available {
            lines.push(format!("{indent}{line}"));
            line.clear();
            line_len = 0;
        }

        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }

    if line_len > 0 {
        let indent = indent_for(lines.len(), config);
        lines.push(format!("{indent}{line}"));
    }

    lines.join("\n")
}

fn indent_for(line_index: usize, config: &WrapConfig) -> &str {
    if line_index == 0 {
        &config.initial_indent
    } else {
        &config.subsequent_indent
    }
}

/// Wraps the summary, writes it to the output file, and returns the rendering
/// for display.
pub fn present(summary: &str, wrap_config: &WrapConfig, output: &OutputConfig) -> Result<String> {
    wrap_config.validate()?;

    let rendered = wrap(summary, wrap_config);
    fs::write(&output.path, &rendered)?;
    info!("wrote summary to {}", output.path.display());

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_wrap_breaks_long_line() {
        let text = "1234567890 ".repeat(11);
        let wrapped = wrap(&text, &WrapConfig::default());

        assert!(wrapped.contains('\n'));
        let lines: Vec<&str> = wrapped.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 80);
        for line in &lines {
            assert!(line.starts_with("    1234567890"));
            assert!(line.len() <= 80);
        }
    }

    #[test]
    fn test_wrap_keeps_long_word_intact() {
        let digits = "9".repeat(100);
        let text = format!("short {digits} tail");
        let wrapped = wrap(&text, &WrapConfig::default());

        assert_eq!(wrapped, format!("    short\n    {digits}\n    tail"));
    }

    #[test]
    fn test_wrap_does_not_break_hyphens() {
        let config = WrapConfig {
            width: 20,
            ..WrapConfig::default()
        };
        let wrapped = wrap("a well-established-word here", &config);

        assert_eq!(wrapped, "    a\n    well-established-word\n    here");
    }

    #[test]
    fn test_wrap_normalizes_whitespace() {
        assert_eq!(
            wrap("\n  one\ttwo  \n", &WrapConfig::default()),
            "    one two"
        );
        assert_eq!(wrap("   ", &WrapConfig::default()), "");
    }

    #[test]
    fn test_wrap_indents() {
        let config = WrapConfig {
            width: 10,
            initial_indent: "> ".to_string(),
            subsequent_indent: String::new(),
        };
        assert_eq!(wrap("aaaa bbbb cccc dddd", &config), "> aaaa\nbbbb cccc\ndddd");
    }

    #[test]
    fn test_present_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputConfig {
            path: dir.path().join("summary.txt"),
        };

        let rendered = present("Crabs are crustaceans.", &WrapConfig::default(), &output).unwrap();

        assert_eq!(rendered, "    Crabs are crustaceans.");
        assert_eq!(fs::read_to_string(&output.path).unwrap(), rendered);
    }

    #[test]
    fn test_present_rejects_bad_config() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputConfig {
            path: dir.path().join("summary.txt"),
        };
        let config = WrapConfig {
            width: 2,
            ..WrapConfig::default()
        };

        assert!(present("text", &config, &output).is_err());
        assert!(!output.path.exists());
    }

    #[test]
    fn test_present_unwritable_path() {
        let output = OutputConfig {
            path: PathBuf::from("/nonexistent-dir/for/sure/summary.txt"),
        };
        assert!(present("text", &WrapConfig::default(), &output).is_err());
    }
}
