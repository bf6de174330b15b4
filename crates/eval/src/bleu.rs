//! Sentence-level BLEU.
//!
//! Modified n-gram precision up to 4-grams with a brevity penalty.
//! Higher-order precisions use add-one smoothing so a single missing
//! 4-gram does not zero out short sentences; unigram precision is left
//! unsmoothed so fully disjoint texts still score 0.

use std::collections::HashMap;

/// Score `candidate` against `reference`, in [0, 1].
///
/// Tokens are whitespace-separated words, case-sensitive. Identical
/// texts score 1.0; texts sharing no words score 0.0.
pub fn sentence_bleu(reference: &str, candidate: &str) -> f64 {
    let reference: Vec<&str> = reference.split_whitespace().collect();
    let candidate: Vec<&str> = candidate.split_whitespace().collect();

    if reference.is_empty() || candidate.is_empty() {
        return 0.0;
    }

    let max_n = 4.min(candidate.len()).min(reference.len());
    let mut log_precision_sum = 0.0;

    for n in 1..=max_n {
        let (matches, total) = clipped_matches(&reference, &candidate, n);
        let precision = if n == 1 {
            matches as f64 / total as f64
        } else {
            (matches as f64 + 1.0) / (total as f64 + 1.0)
        };
        if precision == 0.0 {
            return 0.0;
        }
        log_precision_sum += precision.ln();
    }

    let geometric_mean = (log_precision_sum / max_n as f64).exp();

    let brevity_penalty = if candidate.len() >= reference.len() {
        1.0
    } else {
        (1.0 - reference.len() as f64 / candidate.len() as f64).exp()
    };

    brevity_penalty * geometric_mean
}

/// Count candidate n-grams that also occur in the reference, clipped by
/// the reference count of each n-gram. Returns (matches, total).
fn clipped_matches(reference: &[&str], candidate: &[&str], n: usize) -> (usize, usize) {
    let reference_counts = ngram_counts(reference, n);
    let candidate_counts = ngram_counts(candidate, n);

    let matches = candidate_counts
        .iter()
        .map(|(ngram, &count)| count.min(*reference_counts.get(ngram).unwrap_or(&0)))
        .sum();
    let total = candidate.len() + 1 - n;

    (matches, total)
}

fn ngram_counts<'a>(tokens: &'a [&'a str], n: usize) -> HashMap<&'a [&'a str], usize> {
    let mut counts = HashMap::new();
    for window in tokens.windows(n) {
        *counts.entry(window).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_score_one() {
        let text = "the quick brown fox jumps over the lazy dog";
        assert!((sentence_bleu(text, text) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_texts_score_zero() {
        assert_eq!(sentence_bleu("alpha beta gamma", "delta epsilon zeta"), 0.0);
    }

    #[test]
    fn empty_inputs_score_zero() {
        assert_eq!(sentence_bleu("", "something"), 0.0);
        assert_eq!(sentence_bleu("something", ""), 0.0);
    }

    #[test]
    fn partial_overlap_scores_between_zero_and_one() {
        let score = sentence_bleu(
            "the cat sat on the mat",
            "the cat lay on the mat",
        );
        assert!(score > 0.0 && score < 1.0, "got {score}");
    }

    #[test]
    fn short_candidates_are_penalized() {
        let reference = "a long reference sentence with many words in it";
        let full = sentence_bleu(reference, reference);
        let short = sentence_bleu(reference, "a long reference");
        assert!(short < full);
    }

    #[test]
    fn word_order_matters_beyond_unigrams() {
        let reference = "the cat sat on the mat";
        let in_order = sentence_bleu(reference, "the cat sat on the mat");
        let shuffled = sentence_bleu(reference, "mat the on sat cat the");
        assert!(shuffled < in_order);
    }

    #[test]
    fn score_is_bounded() {
        for (reference, candidate) in [
            ("one two three", "one two three four five"),
            ("a b", "a"),
            ("x", "x"),
        ] {
            let score = sentence_bleu(reference, candidate);
            assert!((0.0..=1.0).contains(&score), "{score} out of bounds");
        }
    }
}
