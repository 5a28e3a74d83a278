//! Utility functions for string processing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search: lowercase, strip diacritics, and collapse whitespace.
///
/// Transliterated Surah names and vowelled Arabic both need this:
/// - "Al-Fātiḥah" → "al-fatihah"
/// - "الرَّحْمَٰنِ" → "الرحمن"
/// - "  Ar-Raʿd " → "ar-raʿd"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks and Arabic tashkeel
/// 3. Lowercase
/// 4. Collapse whitespace
///
/// # Algorithm (without unicode-normalization)
///
/// Same, minus the NFD step. Precomposed Latin letters keep their accents;
/// Arabic marks are separate code points and are still stripped.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if a character is a combining mark or Arabic vocalization sign.
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{0610}'..='\u{061A}' |  // Arabic honorific signs
        '\u{064B}'..='\u{065F}' |  // Arabic harakat (fathatan .. wavy hamza below)
        '\u{0670}' |               // Superscript alef
        '\u{0640}' |               // Tatweel
        '\u{06D6}'..='\u{06ED}' |  // Quranic annotation marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
