//! ROUGE-N and ROUGE-L f-measures.
//!
//! Tokens are lowercased alphanumeric runs, so punctuation and casing
//! differences don't count against recall. No stemming.

use std::collections::HashMap;

/// Precision / recall / f-measure triple for one ROUGE variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RougeScore {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl RougeScore {
    const ZERO: Self = Self {
        precision: 0.0,
        recall: 0.0,
        f1: 0.0,
    };

    fn from_counts(overlap: usize, candidate_total: usize, reference_total: usize) -> Self {
        if candidate_total == 0 || reference_total == 0 || overlap == 0 {
            return Self::ZERO;
        }
        let precision = overlap as f64 / candidate_total as f64;
        let recall = overlap as f64 / reference_total as f64;
        Self {
            precision,
            recall,
            f1: 2.0 * precision * recall / (precision + recall),
        }
    }
}

/// ROUGE-N: n-gram overlap between reference and candidate.
pub fn rouge_n(reference: &str, candidate: &str, n: usize) -> RougeScore {
    let reference = tokenize(reference);
    let candidate = tokenize(candidate);
    if n == 0 || reference.len() < n || candidate.len() < n {
        return RougeScore::ZERO;
    }

    let reference_counts = ngram_counts(&reference, n);
    let candidate_counts = ngram_counts(&candidate, n);

    let overlap: usize = candidate_counts
        .iter()
        .map(|(ngram, &count)| count.min(*reference_counts.get(ngram).unwrap_or(&0)))
        .sum();

    RougeScore::from_counts(
        overlap,
        candidate.len() + 1 - n,
        reference.len() + 1 - n,
    )
}

/// ROUGE-L: longest common subsequence of words.
pub fn rouge_l(reference: &str, candidate: &str) -> RougeScore {
    let reference = tokenize(reference);
    let candidate = tokenize(candidate);
    if reference.is_empty() || candidate.is_empty() {
        return RougeScore::ZERO;
    }

    let lcs = lcs_length(&reference, &candidate);
    RougeScore::from_counts(lcs, candidate.len(), reference.len())
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

fn ngram_counts(tokens: &[String], n: usize) -> HashMap<&[String], usize> {
    let mut counts = HashMap::new();
    for window in tokens.windows(n) {
        *counts.entry(window).or_insert(0) += 1;
    }
    counts
}

/// Classic O(n·m) dynamic-programming LCS, single-row variant.
fn lcs_length(a: &[String], b: &[String]) -> usize {
    let mut row = vec![0usize; b.len() + 1];
    for token_a in a {
        let mut prev_diagonal = 0;
        for (j, token_b) in b.iter().enumerate() {
            let current = row[j + 1];
            row[j + 1] = if token_a == token_b {
                prev_diagonal + 1
            } else {
                row[j + 1].max(row[j])
            };
            prev_diagonal = current;
        }
    }
    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_score_one() {
        let text = "The quick brown fox.";
        assert!((rouge_n(text, text, 1).f1 - 1.0).abs() < 1e-9);
        assert!((rouge_n(text, text, 2).f1 - 1.0).abs() < 1e-9);
        assert!((rouge_l(text, text).f1 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_texts_score_zero() {
        assert_eq!(rouge_n("alpha beta", "gamma delta", 1), RougeScore::ZERO);
        assert_eq!(rouge_l("alpha beta", "gamma delta"), RougeScore::ZERO);
    }

    #[test]
    fn casing_and_punctuation_are_ignored() {
        let score = rouge_n("The cat sat.", "the cat sat", 1);
        assert!((score.f1 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rouge1_known_value() {
        // ref: [the, cat, sat], cand: [the, cat]
        // overlap 2 → P = 1.0, R = 2/3, F1 = 0.8
        let score = rouge_n("the cat sat", "the cat", 1);
        assert!((score.precision - 1.0).abs() < 1e-9);
        assert!((score.recall - 2.0 / 3.0).abs() < 1e-9);
        assert!((score.f1 - 0.8).abs() < 1e-9);
    }

    #[test]
    fn rouge2_known_value() {
        // ref bigrams: {the cat, cat sat}, cand bigrams: {the cat}
        // overlap 1 → P = 1.0, R = 0.5, F1 = 2/3
        let score = rouge_n("the cat sat", "the cat", 2);
        assert!((score.f1 - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn rouge_l_rewards_order() {
        // Same words, reversed order: LCS is only 1 token long.
        let score = rouge_l("one two three", "three two one");
        assert!(score.f1 < 0.5);
    }

    #[test]
    fn rouge_l_handles_subsequences_with_gaps() {
        // LCS of [a, b, c, d] and [a, x, c, d] is [a, c, d] = 3
        let score = rouge_l("a b c d", "a x c d");
        assert!((score.precision - 0.75).abs() < 1e-9);
        assert!((score.recall - 0.75).abs() < 1e-9);
    }

    #[test]
    fn empty_inputs_score_zero() {
        assert_eq!(rouge_n("", "text", 1), RougeScore::ZERO);
        assert_eq!(rouge_l("text", ""), RougeScore::ZERO);
    }
}
