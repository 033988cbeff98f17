//! Unicode normalization to a lowercase, accent-free, Latin-script form
//! suitable for indexing and matching (spec §4.1).

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Step 1: strip accents via NFD decomposition, drop combining marks, then
/// recompose to NFC.
pub fn unaccent(input: &str) -> String {
    input.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}

/// Step 2: fold quote-like characters — `U+02B9` becomes an ASCII
/// apostrophe, hyphen-minus and ASCII apostrophe both become a space.
pub fn unquote(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\u{02B9}' => '\'',
            '\u{002D}' => ' ',
            '\u{0027}' => ' ',
            other => other,
        })
        .collect()
}

/// Step 3: drop every character that is neither alphanumeric nor
/// whitespace (the fixed separator set has already been folded to spaces
/// by [`unquote`]; this removes the remaining punctuation).
pub fn unpunctuate(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Step 4: transliterate non-Latin script to Latin, then re-apply
/// decomposition, combining-mark removal, recomposition, and lowercasing.
pub fn transliterate(input: &str) -> String {
    let ascii = deunicode::deunicode(input);
    ascii.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect::<String>().to_lowercase()
}

/// Apply the four sub-transformations in fixed order (spec §4.1).
///
/// Idempotent: `normalize(normalize(x)) == normalize(x)`. Length is not
/// preserved; output is valid UTF-8 and lowercase.
pub fn normalize(input: &str) -> String {
    let step1 = unaccent(input);
    let step2 = unquote(&step1);
    let step3 = unpunctuate(&step2);
    transliterate(&step3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_and_lowercases() {
        assert_eq!(normalize("Côte d'Azur"), "cote d azur");
    }

    #[test]
    fn is_idempotent() {
        let once = normalize("San Francisco International!");
        let twice = normalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn folds_hyphen_and_apostrophe_to_space() {
        assert_eq!(normalize("Aix-en-Provence"), "aix en provence");
    }

    #[test]
    fn transliterates_non_latin_script() {
        let normalized = normalize("Москва");
        assert!(normalized.chars().all(|c| c.is_ascii()));
        assert!(!normalized.is_empty());
    }
}
