use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Sentence;

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("sentence boundary pattern is valid"));

/// Split a full transcript into sentences on terminal punctuation.
///
/// Non-terminator punctuation is stripped before splitting, and the
/// terminators themselves are stripped afterwards, so stored sentences carry
/// no punctuation at all. Case is preserved; callers normalize before fuzzy
/// comparison. Output order is transcript order.
pub fn segment_sentences(transcript: &str) -> Vec<Sentence> {
    let kept: String = transcript
        .chars()
        .filter(|c| !c.is_ascii_punctuation() || SENTENCE_TERMINATORS.contains(c))
        .collect();
    let collapsed = kept.split_whitespace().collect::<Vec<_>>().join(" ");

    SENTENCE_BOUNDARY
        .split(&collapsed)
        .map(|piece| piece.replace(&SENTENCE_TERMINATORS[..], ""))
        .map(|piece| piece.trim().to_string())
        .filter(|piece| !piece.is_empty())
        .map(Sentence::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(transcript: &str) -> Vec<String> {
        segment_sentences(transcript)
            .into_iter()
            .map(|s| s.text)
            .collect()
    }

    #[test]
    fn splits_on_all_three_terminators() {
        assert_eq!(
            texts("First one. Second one! Third one? Fourth one."),
            ["First one", "Second one", "Third one", "Fourth one"]
        );
    }

    #[test]
    fn preserves_transcript_order_and_case() {
        let sentences = segment_sentences("Alpha went Home. beta stayed OUT!");
        assert_eq!(sentences[0].text, "Alpha went Home");
        assert_eq!(sentences[1].text, "beta stayed OUT");
        assert_eq!(sentences[0].normalized, "alpha went home");
    }

    #[test]
    fn strips_non_terminator_punctuation_before_splitting() {
        assert_eq!(
            texts("Well, you know -- it's fine. Sure thing."),
            ["Well you know its fine", "Sure thing"]
        );
    }

    #[test]
    fn trailing_terminator_without_whitespace_is_stripped() {
        assert_eq!(texts("Only one sentence."), ["Only one sentence"]);
    }

    #[test]
    fn text_without_terminators_is_a_single_sentence() {
        assert_eq!(texts("no punctuation at all here"), [
            "no punctuation at all here"
        ]);
    }

    #[test]
    fn consecutive_terminators_produce_no_empty_sentences() {
        assert_eq!(texts("Really?! Yes... Fine."), ["Really", "Yes", "Fine"]);
    }

    #[test]
    fn whitespace_runs_are_collapsed() {
        assert_eq!(texts("One  sentence.\n\nAnother   one."), [
            "One sentence",
            "Another one"
        ]);
    }

    #[test]
    fn empty_input_yields_no_sentences() {
        assert!(segment_sentences("").is_empty());
        assert!(segment_sentences("  \n ").is_empty());
        assert!(segment_sentences("...").is_empty());
    }

    #[test]
    fn abbreviation_periods_split_like_any_terminator() {
        // Terminal punctuation is the only boundary signal, so "Mr. Smith"
        // becomes two sentences.
        assert_eq!(texts("Mr. Smith arrived."), ["Mr", "Smith arrived"]);
    }
}
