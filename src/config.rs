/// Tunable thresholds for the alignment engine.
///
/// All scores live on a 0-100 similarity scale.
#[derive(Debug, Clone)]
pub struct AlignConfig {
    /// Minimum weighted similarity for a phrase to claim a transcript
    /// sentence. Inclusive: a score equal to the threshold is accepted.
    pub sentence_score_threshold: f64,
    /// Base window ratio above which forward expansion is attempted.
    pub window_refine_threshold: f64,
    /// Maximum number of trailing words an expansion may append.
    pub max_window_extension: usize,
}

impl AlignConfig {
    pub const DEFAULT_SENTENCE_SCORE_THRESHOLD: f64 = 80.0;
    pub const DEFAULT_WINDOW_REFINE_THRESHOLD: f64 = 90.0;
    pub const DEFAULT_MAX_WINDOW_EXTENSION: usize = 2;
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            sentence_score_threshold: Self::DEFAULT_SENTENCE_SCORE_THRESHOLD,
            window_refine_threshold: Self::DEFAULT_WINDOW_REFINE_THRESHOLD,
            max_window_extension: Self::DEFAULT_MAX_WINDOW_EXTENSION,
        }
    }
}
