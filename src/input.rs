use std::path::Path;

use crate::error::AlignError;
use crate::types::Word;

/// Load the word-level timestamp artifact: a JSON array of
/// `{"word", "start", "end"}` records in chronological order.
///
/// Structural problems (missing fields, non-numeric times) are fatal; there
/// is no safe partial interpretation of a corrupted timestamp source.
/// Ordering problems only warn, the engine tolerates them.
pub fn load_word_transcript(path: &Path) -> Result<Vec<Word>, AlignError> {
    let data =
        std::fs::read_to_string(path).map_err(|e| AlignError::io("read word transcript", e))?;
    let words: Vec<Word> =
        serde_json::from_str(&data).map_err(|e| AlignError::json("parse word transcript", e))?;
    validate_word_transcript(&words)?;
    Ok(words)
}

/// Load the summary file, one phrase per line. Blank lines are kept so the
/// report can account for them instead of silently dropping them.
pub fn load_summary_phrases(path: &Path) -> Result<Vec<String>, AlignError> {
    let data =
        std::fs::read_to_string(path).map_err(|e| AlignError::io("read summary phrases", e))?;
    Ok(data.lines().map(str::to_string).collect())
}

/// Load the full transcript text blob.
pub fn load_transcript_text(path: &Path) -> Result<String, AlignError> {
    std::fs::read_to_string(path).map_err(|e| AlignError::io("read full transcript", e))
}

fn validate_word_transcript(words: &[Word]) -> Result<(), AlignError> {
    for (index, word) in words.iter().enumerate() {
        if !word.start.is_finite() || !word.end.is_finite() {
            return Err(AlignError::invalid_input(format!(
                "word {index} ({:?}) has a non-finite timestamp",
                word.text
            )));
        }
        if word.end < word.start {
            tracing::warn!(
                index,
                word = word.text.as_str(),
                start = word.start,
                end = word.end,
                "word ends before it starts"
            );
        }
    }
    if let Some(position) = words
        .windows(2)
        .position(|pair| pair[1].start < pair[0].start)
    {
        tracing::warn!(
            position,
            "word transcript start times are not chronological"
        );
    }
    Ok(())
}
