use serde::Serialize;

use crate::types::AlignedSpan;

/// Per-phrase outcome of one alignment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseOutcome {
    /// Window text equalled the sentence text verbatim.
    MatchedExact,
    /// Window accepted after a strictly improving forward expansion.
    MatchedExpanded,
    /// No transcript sentence reached the acceptance threshold.
    SkippedNoSentence,
    /// Sentence matched but no word window was found. Blank phrase lines
    /// also land here.
    SkippedNoWindow,
}

impl PhraseOutcome {
    pub fn is_matched(self) -> bool {
        matches!(self, Self::MatchedExact | Self::MatchedExpanded)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PhraseReport {
    pub phrase_index: usize,
    pub phrase: String,
    pub outcome: PhraseOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_sentence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentence_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<AlignedSpan>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    pub total: u32,
    pub matched_exact: u32,
    pub matched_expanded: u32,
    pub skipped_no_sentence: u32,
    pub skipped_no_window: u32,
}

/// Per-phrase outcomes of a full run, with aggregate counts. Serializable so
/// operators can locate unaligned phrases without parsing log text.
#[derive(Debug, Clone, Serialize)]
pub struct AlignmentReport {
    pub phrases: Vec<PhraseReport>,
    pub counts: OutcomeCounts,
}

impl AlignmentReport {
    pub fn new(phrases: Vec<PhraseReport>) -> Self {
        let counts = aggregate_outcomes(&phrases);
        Self { phrases, counts }
    }
}

pub fn aggregate_outcomes(phrases: &[PhraseReport]) -> OutcomeCounts {
    let mut counts = OutcomeCounts {
        total: to_u32(phrases.len()),
        ..OutcomeCounts::default()
    };
    for phrase in phrases {
        match phrase.outcome {
            PhraseOutcome::MatchedExact => counts.matched_exact += 1,
            PhraseOutcome::MatchedExpanded => counts.matched_expanded += 1,
            PhraseOutcome::SkippedNoSentence => counts.skipped_no_sentence += 1,
            PhraseOutcome::SkippedNoWindow => counts.skipped_no_window += 1,
        }
    }
    counts
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
