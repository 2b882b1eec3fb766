use crate::alignment::report::{AlignmentReport, PhraseOutcome, PhraseReport};
use crate::alignment::window::WindowMatchKind;
use crate::config::AlignConfig;
use crate::error::AlignError;
use crate::pipeline::traits::{SentenceMatcher, SentenceSegmenter, WindowLocator};
use crate::types::{AlignmentInput, AlignmentOutput, SummaryPhrase};

pub struct PhraseAligner {
    config: AlignConfig,
    segmenter: Box<dyn SentenceSegmenter>,
    matcher: Box<dyn SentenceMatcher>,
    locator: Box<dyn WindowLocator>,
}

pub(crate) struct PhraseAlignerParts {
    pub config: AlignConfig,
    pub segmenter: Box<dyn SentenceSegmenter>,
    pub matcher: Box<dyn SentenceMatcher>,
    pub locator: Box<dyn WindowLocator>,
}

impl PhraseAligner {
    pub(crate) fn from_parts(parts: PhraseAlignerParts) -> Self {
        Self {
            config: parts.config,
            segmenter: parts.segmenter,
            matcher: parts.matcher,
            locator: parts.locator,
        }
    }

    pub fn config(&self) -> &AlignConfig {
        &self.config
    }

    /// Align every summary phrase against the transcript.
    ///
    /// Per-phrase misses are recovered locally: one unmatched phrase never
    /// aborts the batch. Output spans preserve phrase order; the report
    /// enumerates every phrase including the skipped ones.
    pub fn align(&self, input: &AlignmentInput) -> Result<AlignmentOutput, AlignError> {
        let sentences = self.segmenter.segment(&input.transcript_text);
        if sentences.is_empty() {
            tracing::warn!(
                phrase_count = input.summary_phrases.len(),
                "transcript yielded no sentences; every phrase will be skipped"
            );
        }

        let mut spans = Vec::new();
        let mut phrase_reports = Vec::with_capacity(input.summary_phrases.len());

        for (phrase_index, raw) in input.summary_phrases.iter().enumerate() {
            let phrase = SummaryPhrase::new(raw.clone());
            if phrase.normalized.is_empty() {
                tracing::debug!(phrase_index, "blank phrase line, nothing to locate");
                phrase_reports.push(PhraseReport {
                    phrase_index,
                    phrase: raw.clone(),
                    outcome: PhraseOutcome::SkippedNoWindow,
                    matched_sentence: None,
                    sentence_score: None,
                    span: None,
                });
                continue;
            }

            let Some(best) = self.matcher.best_match(&phrase, &sentences) else {
                tracing::warn!(
                    phrase_index,
                    phrase = phrase.normalized.as_str(),
                    "no transcript sentences to match against"
                );
                phrase_reports.push(PhraseReport {
                    phrase_index,
                    phrase: raw.clone(),
                    outcome: PhraseOutcome::SkippedNoSentence,
                    matched_sentence: None,
                    sentence_score: None,
                    span: None,
                });
                continue;
            };

            let sentence = &sentences[best.index];
            tracing::debug!(
                phrase_index,
                phrase = phrase.normalized.as_str(),
                sentence = sentence.normalized.as_str(),
                score = format!("{:.1}", best.score),
                "matcher: best sentence candidate"
            );

            if best.score < self.config.sentence_score_threshold {
                tracing::warn!(
                    phrase_index,
                    phrase = phrase.normalized.as_str(),
                    score = format!("{:.1}", best.score),
                    threshold = self.config.sentence_score_threshold,
                    "matcher: best sentence below threshold, skipping phrase"
                );
                phrase_reports.push(PhraseReport {
                    phrase_index,
                    phrase: raw.clone(),
                    outcome: PhraseOutcome::SkippedNoSentence,
                    matched_sentence: Some(sentence.text.clone()),
                    sentence_score: Some(best.score),
                    span: None,
                });
                continue;
            }

            let located = self.locator.locate(
                sentence,
                &input.words,
                self.config.window_refine_threshold,
                self.config.max_window_extension,
            );
            let Some(window) = located else {
                tracing::warn!(
                    phrase_index,
                    sentence = sentence.normalized.as_str(),
                    "locator: no word window found, skipping phrase"
                );
                phrase_reports.push(PhraseReport {
                    phrase_index,
                    phrase: raw.clone(),
                    outcome: PhraseOutcome::SkippedNoWindow,
                    matched_sentence: Some(sentence.text.clone()),
                    sentence_score: Some(best.score),
                    span: None,
                });
                continue;
            };

            tracing::debug!(
                phrase_index,
                start = window.span.start,
                end = window.span.end,
                exact = matches!(window.kind, WindowMatchKind::Exact),
                "locator: window accepted"
            );
            spans.push(window.span);
            phrase_reports.push(PhraseReport {
                phrase_index,
                phrase: raw.clone(),
                outcome: match window.kind {
                    WindowMatchKind::Exact => PhraseOutcome::MatchedExact,
                    WindowMatchKind::Expanded => PhraseOutcome::MatchedExpanded,
                },
                matched_sentence: Some(sentence.text.clone()),
                sentence_score: Some(best.score),
                span: Some(window.span),
            });
        }

        Ok(AlignmentOutput {
            spans,
            report: AlignmentReport::new(phrase_reports),
        })
    }
}
