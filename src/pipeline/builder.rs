use crate::config::AlignConfig;
use crate::error::AlignError;
use crate::pipeline::defaults::{ScanWindowLocator, TerminatorSegmenter, WeightedRatioMatcher};
use crate::pipeline::runtime::{PhraseAligner, PhraseAlignerParts};
use crate::pipeline::traits::{SentenceMatcher, SentenceSegmenter, WindowLocator};

pub struct PhraseAlignerBuilder {
    config: AlignConfig,
    segmenter: Option<Box<dyn SentenceSegmenter>>,
    matcher: Option<Box<dyn SentenceMatcher>>,
    locator: Option<Box<dyn WindowLocator>>,
}

impl PhraseAlignerBuilder {
    pub fn new(config: AlignConfig) -> Self {
        Self {
            config,
            segmenter: None,
            matcher: None,
            locator: None,
        }
    }

    pub fn with_segmenter(mut self, segmenter: Box<dyn SentenceSegmenter>) -> Self {
        self.segmenter = Some(segmenter);
        self
    }

    pub fn with_matcher(mut self, matcher: Box<dyn SentenceMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    pub fn with_locator(mut self, locator: Box<dyn WindowLocator>) -> Self {
        self.locator = Some(locator);
        self
    }

    pub fn build(self) -> Result<PhraseAligner, AlignError> {
        validate_threshold(
            "sentence_score_threshold",
            self.config.sentence_score_threshold,
        )?;
        validate_threshold(
            "window_refine_threshold",
            self.config.window_refine_threshold,
        )?;

        Ok(PhraseAligner::from_parts(PhraseAlignerParts {
            config: self.config,
            segmenter: self
                .segmenter
                .unwrap_or_else(|| Box::new(TerminatorSegmenter)),
            matcher: self
                .matcher
                .unwrap_or_else(|| Box::new(WeightedRatioMatcher)),
            locator: self.locator.unwrap_or_else(|| Box::new(ScanWindowLocator)),
        }))
    }
}

fn validate_threshold(name: &str, value: f64) -> Result<(), AlignError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(AlignError::invalid_input(format!(
            "{name} must be a finite score in [0, 100], got {value}"
        )));
    }
    Ok(())
}
