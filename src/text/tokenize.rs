//! Splitting a normalized phrase into tokens and deciding which of them are
//! indexable/searchable (spec §4.2).

/// Fixed separator set the tokenizer splits on.
const SEPARATORS: &[char] = &[
    ' ', '.', ',', ';', ':', '|', '+', '-', '*', '/', '_', '=', '!', '@', '#', '$', '%', '`', '~',
    '^', '&', '(', ')', '{', '}', '[', ']', '?', '\'', '<', '>', '"',
];

/// Built-in blacklist of airport/city words across several languages
/// (spec §4.2 rule 3).
const BLACKLIST: &[&str] = &[
    "airport", "aeroport", "aéroport", "flughafen", "aeropuerto", "aeroporto", "luchthaven",
    "lotnisko", "letiste", "repuloter", "aerodrome", "aerodromo", "международный", "international",
    "intl", "internacional", "internationale", "internazionale", "city", "ville", "stadt",
    "ciudad", "cidade", "citta", "città", "stad", "miasto",
];

/// Split a phrase on the fixed separator set, producing an ordered sequence
/// of non-empty tokens.
pub fn tokenize(phrase: &str) -> Vec<String> {
    phrase
        .split(SEPARATORS)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Decide whether `token` should be kept for indexing/searching, given the
/// full phrase it came from and the configured minimum word length.
///
/// Rules applied in order; first match decides (spec §4.2):
/// 1. the token equals the entire phrase → keep
/// 2. shorter than `min_len` → drop
/// 3. in the built-in blacklist → drop
/// 4. otherwise → keep
pub fn filter_token(token: &str, phrase: &str, min_len: usize) -> bool {
    if token == phrase {
        return true;
    }
    if token.chars().count() < min_len {
        return false;
    }
    if BLACKLIST.contains(&token.to_lowercase().as_str()) {
        return false;
    }
    true
}

/// Iteratively strip outer tokens that fail [`filter_token`] from both ends
/// of `phrase`, until both ends are valid or no tokens remain. Interior
/// tokens are never dropped here.
pub fn trim(phrase: &str, min_len: usize) -> String {
    let mut tokens = tokenize(phrase);
    loop {
        if tokens.is_empty() {
            break;
        }
        let front_ok = filter_token(&tokens[0], phrase, min_len);
        let back_ok = tokens.len() == 1 || filter_token(tokens.last().unwrap(), phrase, min_len);
        if front_ok && back_ok {
            break;
        }
        if !front_ok {
            tokens.remove(0);
            continue;
        }
        if !back_ok {
            tokens.pop();
        }
    }
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_fixed_separators() {
        assert_eq!(
            tokenize("san-francisco, ca"),
            vec!["san".to_string(), "francisco".to_string(), "ca".to_string()]
        );
    }

    #[test]
    fn whole_phrase_survives_short_length() {
        assert!(filter_token("nce", "nce", 3));
        assert!(!filter_token("of", "city of nowhere", 3));
    }

    #[test]
    fn blacklist_words_are_dropped() {
        assert!(!filter_token("airport", "chelsea municipal airport", 3));
    }

    #[test]
    fn trim_strips_outer_blacklisted_tokens() {
        assert_eq!(trim("chelsea municipal airport", 3), "chelsea municipal");
    }

    #[test]
    fn trim_never_drops_interior_tokens() {
        assert_eq!(trim("san airport francisco", 3), "san airport francisco");
    }
}
