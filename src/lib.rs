pub mod alignment;
pub mod config;
pub mod error;
pub mod input;
pub mod pipeline;
pub mod types;

pub use alignment::report::{
    aggregate_outcomes, AlignmentReport, OutcomeCounts, PhraseOutcome, PhraseReport,
};
pub use alignment::sentence_match::SentenceMatch;
pub use alignment::window::{WindowMatch, WindowMatchKind};
pub use config::AlignConfig;
pub use error::AlignError;
pub use pipeline::builder::PhraseAlignerBuilder;
pub use pipeline::runtime::PhraseAligner;
pub use pipeline::traits::{SentenceMatcher, SentenceSegmenter, WindowLocator};
pub use types::{AlignedSpan, AlignmentInput, AlignmentOutput, Sentence, SummaryPhrase, Word};
