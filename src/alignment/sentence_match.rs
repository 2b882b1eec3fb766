use crate::alignment::similarity::weighted_ratio;
use crate::types::{Sentence, SummaryPhrase};

/// Best-scoring transcript sentence for a phrase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentenceMatch {
    /// Index into the segmented sentence list, transcript order.
    pub index: usize,
    /// Weighted similarity on the 0-100 scale.
    pub score: f64,
}

/// Score every sentence against the normalized phrase and keep the first
/// maximum, in transcript order.
///
/// Returns `None` only when no sentences exist. The acceptance threshold is
/// the caller's concern, so a rejected phrase can still be reported together
/// with its best score.
pub fn best_sentence(phrase: &SummaryPhrase, sentences: &[Sentence]) -> Option<SentenceMatch> {
    let mut best: Option<SentenceMatch> = None;
    for (index, sentence) in sentences.iter().enumerate() {
        let score = weighted_ratio(&phrase.normalized, &sentence.normalized);
        let replace = match best {
            None => true,
            Some(current) => score > current.score,
        };
        if replace {
            best = Some(SentenceMatch { index, score });
        }
    }
    best
}
