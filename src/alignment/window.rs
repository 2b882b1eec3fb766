use crate::alignment::normalize::normalize;
use crate::alignment::similarity::ratio;
use crate::types::{AlignedSpan, Word};

/// How a window came to match its sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMatchKind {
    /// Concatenated window text equals the sentence text verbatim.
    Exact,
    /// Fuzzy window whose ratio improved under forward expansion.
    Expanded,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowMatch {
    pub span: AlignedSpan,
    pub kind: WindowMatchKind,
}

/// Locate the contiguous word window whose text best corresponds to the
/// sentence, returning its start/end timestamps.
///
/// The first exact match wins and terminates the scan. A fuzzy candidate
/// only returns if forward expansion strictly improves its ratio; expansion
/// never moves the window start and is capped at `max_extension` trailing
/// words. Expansion state is never carried from one start index to the next.
pub fn locate_window(
    sentence_text: &str,
    words: &[Word],
    refine_threshold: f64,
    max_extension: usize,
) -> Option<WindowMatch> {
    let target = normalize(sentence_text);
    if target.is_empty() {
        return None;
    }
    let tokens: Vec<&str> = target.split(' ').collect();
    let token_count = tokens.len();
    let first_token = tokens[0];

    for start in 0..words.len() {
        if normalize(&words[start].text) != first_token {
            continue;
        }
        let end = start + token_count;
        if end > words.len() {
            continue;
        }

        let candidate = normalized_window_text(&words[start..end]);
        if candidate == target {
            return Some(WindowMatch {
                span: AlignedSpan {
                    start: words[start].start,
                    end: words[end - 1].end,
                },
                kind: WindowMatchKind::Exact,
            });
        }

        let base_ratio = ratio(&target, &candidate);
        if base_ratio <= refine_threshold {
            continue;
        }

        let mut best_ratio = base_ratio;
        let mut best_end = end - 1;
        for extra in 1..=max_extension {
            let extended_end = end - 1 + extra;
            if extended_end >= words.len() {
                break;
            }
            let extended = normalized_window_text(&words[start..=extended_end]);
            let extended_ratio = ratio(&target, &extended);
            if extended_ratio > best_ratio {
                best_ratio = extended_ratio;
                best_end = extended_end;
            }
        }

        if best_ratio > base_ratio {
            return Some(WindowMatch {
                span: AlignedSpan {
                    start: words[start].start,
                    end: words[best_end].end,
                },
                kind: WindowMatchKind::Expanded,
            });
        }
    }

    None
}

fn normalized_window_text(window: &[Word]) -> String {
    let joined = window
        .iter()
        .map(|w| w.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    normalize(&joined)
}
