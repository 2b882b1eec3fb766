use crate::alignment::segment::segment_sentences;
use crate::alignment::sentence_match::{best_sentence, SentenceMatch};
use crate::alignment::window::{locate_window, WindowMatch};
use crate::pipeline::traits::{SentenceMatcher, SentenceSegmenter, WindowLocator};
use crate::types::{Sentence, SummaryPhrase, Word};

pub struct TerminatorSegmenter;

impl SentenceSegmenter for TerminatorSegmenter {
    fn segment(&self, transcript: &str) -> Vec<Sentence> {
        segment_sentences(transcript)
    }
}

pub struct WeightedRatioMatcher;

impl SentenceMatcher for WeightedRatioMatcher {
    fn best_match(&self, phrase: &SummaryPhrase, sentences: &[Sentence]) -> Option<SentenceMatch> {
        best_sentence(phrase, sentences)
    }
}

pub struct ScanWindowLocator;

impl WindowLocator for ScanWindowLocator {
    fn locate(
        &self,
        sentence: &Sentence,
        words: &[Word],
        refine_threshold: f64,
        max_extension: usize,
    ) -> Option<WindowMatch> {
        locate_window(&sentence.text, words, refine_threshold, max_extension)
    }
}
