//! Text normalisation shared by retrieval and intent matching.

/// Normalise text for lexical comparison.
///
/// Lowercases, blanks out everything outside `[a-z0-9 ]` and collapses runs
/// of whitespace, so `"What's  up?"` becomes `"what s up"`.
pub fn norm_compare(text: &str) -> String {
    let blanked: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect();
    collapse(&blanked)
}

/// Normalise text for regex intent matching.
///
/// Punctuation is preserved so word-boundary patterns still see it.
pub fn norm_intent(text: &str) -> String {
    collapse(&text.to_lowercase())
}

/// Whitespace-split token set of `norm_compare` output.
pub fn tokens(normalised: &str) -> std::collections::HashSet<&str> {
    normalised.split_whitespace().collect()
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
