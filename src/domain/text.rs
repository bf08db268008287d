use unicode_normalization::UnicodeNormalization;

/// Folds text for search comparisons: strips diacritics and lowercases.
///
/// "México", "Mexico" and "MEXICO" all fold to "mexico".
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|ch| !is_diacritic(*ch))
        .collect()
}

// Combining Diacritical Marks block.
fn is_diacritic(ch: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&ch)
}
