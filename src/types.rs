use serde::{Deserialize, Serialize};

use crate::alignment::normalize::normalize;
use crate::alignment::report::AlignmentReport;

/// One time-stamped word from the speech-to-text engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Word {
    #[serde(rename = "word")]
    pub text: String,
    /// Seconds from the start of the recording. `start <= end` and
    /// chronological ordering across words are expected but not enforced;
    /// malformed ordering degrades match quality, it never panics.
    pub start: f64,
    pub end: f64,
}

/// One transcript sentence with its canonical form precomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Segmenter output: original casing, punctuation already stripped.
    pub text: String,
    /// Computed once at construction and never changes afterwards.
    pub normalized: String,
}

impl Sentence {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let normalized = normalize(&text);
        Self { text, normalized }
    }
}

/// One line of the human-written summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryPhrase {
    pub raw: String,
    pub normalized: String,
}

impl SummaryPhrase {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        Self { raw, normalized }
    }
}

/// Final output unit. Both endpoints come from existing word boundaries,
/// never synthesized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlignedSpan {
    pub start: f64,
    pub end: f64,
}

/// The three artifacts one alignment run consumes.
#[derive(Debug, Clone)]
pub struct AlignmentInput {
    /// Summary lines in file order. Blank lines are legal and reported as
    /// skipped.
    pub summary_phrases: Vec<String>,
    /// The full transcript text, sentence-structured with `.` `!` `?`.
    pub transcript_text: String,
    /// Chronologically ordered word-level timestamps.
    pub words: Vec<Word>,
}

#[derive(Debug, Clone)]
pub struct AlignmentOutput {
    /// Spans for successfully aligned phrases, in phrase order.
    pub spans: Vec<AlignedSpan>,
    /// Per-phrase outcomes, including the skipped ones.
    pub report: AlignmentReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_new_precomputes_normalized_form() {
        let sentence = Sentence::new("The Quick  Brown Fox");
        assert_eq!(sentence.text, "The Quick  Brown Fox");
        assert_eq!(sentence.normalized, "the quick brown fox");
    }

    #[test]
    fn summary_phrase_new_normalizes_raw_line() {
        let phrase = SummaryPhrase::new("  Hello, World!  ");
        assert_eq!(phrase.raw, "  Hello, World!  ");
        assert_eq!(phrase.normalized, "hello world");
    }

    #[test]
    fn blank_phrase_normalizes_to_empty() {
        let phrase = SummaryPhrase::new("   ");
        assert!(phrase.normalized.is_empty());
    }

    #[test]
    fn word_deserializes_from_timestamp_record() {
        let word: Word =
            serde_json::from_str(r#"{"word": " the", "start": 0.0, "end": 0.2}"#).expect("valid");
        assert_eq!(word.text, " the");
        assert_eq!(word.start, 0.0);
        assert_eq!(word.end, 0.2);
    }
}
