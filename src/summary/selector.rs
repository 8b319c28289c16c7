//! Top-N sentence selection.

use crate::error::{PrecisError, Result};
use std::cmp::Reverse;

/// Indices of the `n` highest-scoring sentences, in document order.
///
/// Among equal scores the sentence that comes first in the document wins.
/// Returns fewer than `n` indices only when there are fewer than `n` scores.
pub fn select_indices(scores: &[usize], n: usize) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    // Stable sort keeps ascending index order within a score.
    ranked.sort_by_key(|&i| Reverse(scores[i]));
    ranked.truncate(n);
    ranked.sort_unstable();
    ranked
}

/// Picks the `n` best sentences and joins them with single spaces.
///
/// Fails with [`PrecisError::ScoreMismatch`] when there is not exactly one
/// score per sentence, and with [`PrecisError::LengthExceedsAvailable`] when
/// `n` exceeds the number of sentences; no partial summary is produced.
pub fn select(scores: &[usize], sentences: &[String], n: usize) -> Result<String> {
    if scores.len() != sentences.len() {
        return Err(PrecisError::ScoreMismatch {
            scores: scores.len(),
            sentences: sentences.len(),
        });
    }
    check_length(n, sentences.len())?;

    Ok(join_selected(sentences, &select_indices(scores, n)))
}

/// Joins the sentences at `indices` with single spaces.
pub(crate) fn join_selected(sentences: &[String], indices: &[usize]) -> String {
    indices
        .iter()
        .map(|&i| sentences[i].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rejects a summary length larger than the document.
pub(crate) fn check_length(requested: usize, available: usize) -> Result<()> {
    if requested > available {
        return Err(PrecisError::LengthExceedsAvailable {
            requested,
            available,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences() -> Vec<String> {
        ["First one.", "Second one.", "Third one.", "Fourth one."]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_select_restores_document_order() {
        let scores = [1, 9, 3, 7];
        let summary = select(&scores, &sentences(), 2).unwrap();
        assert_eq!(summary, "Second one. Fourth one.");
    }

    #[test]
    fn test_select_count() {
        let scores = [4, 2, 8, 6];
        for n in 0..=4 {
            let summary = select(&scores, &sentences(), n).unwrap();
            let count = if summary.is_empty() { 0 } else { summary.matches(". ").count() + 1 };
            assert_eq!(count, n);
        }
    }

    #[test]
    fn test_tie_prefers_earlier_sentence() {
        let scores = [5, 5, 5, 5];
        assert_eq!(select_indices(&scores, 2), vec![0, 1]);

        let scores = [1, 5, 2, 5];
        assert_eq!(select_indices(&scores, 1), vec![1]);
        assert_eq!(select_indices(&scores, 3), vec![1, 2, 3]);
    }

    #[test]
    fn test_zero_scores_are_selectable() {
        let scores = [0, 0, 3, 0];
        assert_eq!(select_indices(&scores, 3), vec![0, 1, 2]);
    }

    #[test]
    fn test_length_exceeds_available() {
        let scores = [1, 2, 3, 4];
        let err = select(&scores, &sentences(), 5).unwrap_err();
        assert!(matches!(
            err,
            PrecisError::LengthExceedsAvailable {
                requested: 5,
                available: 4
            }
        ));
    }

    #[test]
    fn test_select_all() {
        let scores = [1, 2, 3, 4];
        assert_eq!(
            select(&scores, &sentences(), 4).unwrap(),
            "First one. Second one. Third one. Fourth one."
        );
    }

    #[test]
    fn test_score_count_must_match_sentences() {
        let err = select(&[1], &sentences(), 3).unwrap_err();
        assert!(matches!(
            err,
            PrecisError::ScoreMismatch {
                scores: 1,
                sentences: 4
            }
        ));

        let err = select(&[1, 2, 3, 4, 5], &sentences(), 2).unwrap_err();
        assert!(matches!(err, PrecisError::ScoreMismatch { .. }));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(select(&[], &[], 0).unwrap(), "");
        assert!(select(&[], &[], 1).is_err());
    }
}
