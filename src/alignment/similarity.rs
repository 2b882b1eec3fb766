//! Fuzzy similarity scores on a 0-100 scale.
//!
//! `ratio` is the character-level, order-sensitive measure used for window
//! refinement. `weighted_ratio` layers token-order tolerance and length
//! robustness on top of it and is the sentence-selection scorer.

use std::collections::BTreeSet;

const TOKEN_SCALE: f64 = 0.95;
const PARTIAL_SCALE: f64 = 0.9;
const LONG_PARTIAL_SCALE: f64 = 0.6;
const PARTIAL_LENGTH_RATIO: f64 = 1.5;
const LONG_LENGTH_RATIO: f64 = 8.0;

/// Character-level, order-sensitive similarity.
pub fn ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b) * 100.0
}

/// Best `ratio` of the shorter string against any equal-length character
/// window of the longer one.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (short, long) = if a_chars.len() <= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };
    if short.is_empty() {
        return if long.is_empty() { 100.0 } else { 0.0 };
    }

    let short_text: String = short.iter().collect();
    let mut best = 0.0f64;
    for window in long.windows(short.len()) {
        let window_text: String = window.iter().collect();
        let score = ratio(&short_text, &window_text);
        if score > best {
            best = score;
            if best >= 100.0 {
                break;
            }
        }
    }
    best
}

/// `ratio` after sorting tokens, tolerant to word reordering.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a).join(" "), &sorted_tokens(b).join(" "))
}

/// Set-based score, tolerant to one side carrying extra words: a token
/// subset scores 100 against its superset.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return if tokens_a.is_empty() && tokens_b.is_empty() {
            100.0
        } else {
            0.0
        };
    }

    let common = tokens_a
        .intersection(&tokens_b)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    let only_a = tokens_a
        .difference(&tokens_b)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    let only_b = tokens_b
        .difference(&tokens_a)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    let combined_a = join_nonempty(&common, &only_a);
    let combined_b = join_nonempty(&common, &only_b);

    ratio(&common, &combined_a)
        .max(ratio(&common, &combined_b))
        .max(ratio(&combined_a, &combined_b))
}

/// Weighted similarity for sentence selection: order-tolerant via the token
/// scores, length-robust via a sliding partial score once lengths diverge.
pub fn weighted_ratio(a: &str, b: &str) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a == 0 || len_b == 0 {
        return if len_a == len_b { 100.0 } else { 0.0 };
    }

    let base = ratio(a, b);
    let token_best = token_sort_ratio(a, b).max(token_set_ratio(a, b)) * TOKEN_SCALE;
    let mut best = base.max(token_best);

    let length_ratio = len_a.max(len_b) as f64 / len_a.min(len_b) as f64;
    if length_ratio >= PARTIAL_LENGTH_RATIO {
        let scale = if length_ratio < LONG_LENGTH_RATIO {
            PARTIAL_SCALE
        } else {
            LONG_PARTIAL_SCALE
        };
        best = best.max(partial_ratio(a, b) * scale);
    }
    best
}

fn sorted_tokens(text: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens
}

fn join_nonempty(left: &str, right: &str) -> String {
    match (left.is_empty(), right.is_empty()) {
        (true, _) => right.to_string(),
        (_, true) => left.to_string(),
        (false, false) => format!("{left} {right}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_identical_is_100() {
        assert_eq!(ratio("the quick brown fox", "the quick brown fox"), 100.0);
    }

    #[test]
    fn ratio_empty_cases() {
        assert_eq!(ratio("", ""), 100.0);
        assert_eq!(ratio("abc", ""), 0.0);
    }

    #[test]
    fn ratio_is_order_sensitive() {
        let straight = ratio("alpha beta", "alpha beta");
        let swapped = ratio("alpha beta", "beta alpha");
        assert!(swapped < straight);
    }

    #[test]
    fn token_sort_ratio_ignores_word_order() {
        assert_eq!(
            token_sort_ratio("quick brown fox", "fox quick brown"),
            100.0
        );
    }

    #[test]
    fn token_set_ratio_scores_subset_as_100() {
        assert_eq!(
            token_set_ratio("the cat sat", "yesterday evening the cat sat on the mat"),
            100.0
        );
    }

    #[test]
    fn token_set_ratio_empty_side_is_zero() {
        assert_eq!(token_set_ratio("", "something"), 0.0);
        assert_eq!(token_set_ratio("", ""), 100.0);
    }

    #[test]
    fn weighted_ratio_identical_is_100() {
        assert_eq!(weighted_ratio("hello world", "hello world"), 100.0);
    }

    #[test]
    fn weighted_ratio_tolerates_reordering() {
        let score = weighted_ratio("quick brown fox", "fox quick brown");
        assert!(score > 94.0, "got {score}");
    }

    #[test]
    fn weighted_ratio_tolerates_excerpt_of_longer_sentence() {
        let score = weighted_ratio(
            "the cat sat",
            "yesterday evening the cat sat on the mat while it rained",
        );
        assert!(score >= 90.0, "got {score}");
    }

    #[test]
    fn weighted_ratio_low_for_unrelated_text() {
        let score = weighted_ratio("quarterly revenue grew", "the fox jumped over the dog");
        assert!(score < 50.0, "got {score}");
    }

    #[test]
    fn weighted_ratio_empty_side_is_zero() {
        assert_eq!(weighted_ratio("", "anything"), 0.0);
        assert_eq!(weighted_ratio("", ""), 100.0);
    }

    #[test]
    fn partial_ratio_finds_embedded_match() {
        assert_eq!(partial_ratio("brown fox", "the quick brown fox jumped"), 100.0);
    }
}
