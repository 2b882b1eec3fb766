/// Canonicalize text for comparison: trim, lowercase, strip ASCII
/// punctuation, collapse whitespace runs to single spaces.
///
/// Total and idempotent: any string maps to a canonical form, and applying
/// the function twice equals applying it once.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
