use crate::alignment::sentence_match::SentenceMatch;
use crate::alignment::window::WindowMatch;
use crate::types::{Sentence, SummaryPhrase, Word};

pub trait SentenceSegmenter: Send + Sync {
    fn segment(&self, transcript: &str) -> Vec<Sentence>;
}

pub trait SentenceMatcher: Send + Sync {
    /// Best-scoring sentence for the phrase, `None` only when `sentences` is
    /// empty. The acceptance threshold is applied by the caller so rejected
    /// phrases can still be reported with their best score.
    fn best_match(&self, phrase: &SummaryPhrase, sentences: &[Sentence]) -> Option<SentenceMatch>;
}

pub trait WindowLocator: Send + Sync {
    fn locate(
        &self,
        sentence: &Sentence,
        words: &[Word],
        refine_threshold: f64,
        max_extension: usize,
    ) -> Option<WindowMatch>;
}
