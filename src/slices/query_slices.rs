//! Find cut points where two adjacent tokens have no co-match, splitting a
//! query into independent slices (spec §4.5).

use crate::matcher::FullTextMatcher;

/// Default co-match floor (Xapian-equivalent percentage points) above
/// which two adjacent tokens are considered to co-match and stay in the
/// same slice. Resolved from spec §4.5's Open Question; see `DESIGN.md`.
pub const DEFAULT_CO_MATCH_FLOOR: f64 = 5.0;

/// Split `tokens` into an ordered list of independent slices.
///
/// For each adjacent pair, consult the index via `matcher.match_exists` on
/// their two-token phrase; a boundary is inserted wherever they don't
/// co-match. Slices cover the input without overlap; each has at least one
/// token; a single-token query yields one slice (spec §4.5 invariant).
pub fn build_slices(tokens: &[String], matcher: &FullTextMatcher<'_>, co_match_floor: f64) -> Vec<Vec<String>> {
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut slices = Vec::new();
    let mut current = vec![tokens[0].clone()];

    for window in tokens.windows(2) {
        let (left, right) = (&window[0], &window[1]);
        let pair_phrase = format!("{left} {right}");
        if matcher.match_exists(&pair_phrase, co_match_floor) {
            current.push(right.clone());
        } else {
            slices.push(std::mem::take(&mut current));
            current.push(right.clone());
        }
    }
    slices.push(current);
    slices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::por::PorCatalogRow;
    use crate::index::builder::{IndexBuilder, InMemoryCatalog};
    use crate::index::TravelIndex;

    fn world_index() -> TravelIndex {
        let rows = vec![
            PorCatalogRow {
                iata_code: "SFO".to_string(),
                geonames_id: 1,
                name: "San Francisco".to_string(),
                ascii_name: "San Francisco".to_string(),
                iata_type: 'A',
                feature_code: "AIRP".to_string(),
                ..Default::default()
            },
            PorCatalogRow {
                iata_code: "NCE".to_string(),
                geonames_id: 2,
                name: "Nice".to_string(),
                ascii_name: "Nice".to_string(),
                iata_type: 'A',
                feature_code: "AIRP".to_string(),
                ..Default::default()
            },
        ];
        IndexBuilder::new(3).build(&InMemoryCatalog(rows)).expect("build")
    }

    #[test]
    fn single_token_query_yields_one_slice() {
        let index = world_index();
        let matcher = FullTextMatcher::new(&index);
        let slices = build_slices(&["nce".to_string()], &matcher, DEFAULT_CO_MATCH_FLOOR);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0], vec!["nce".to_string()]);
    }

    #[test]
    fn slices_cover_every_token_without_overlap() {
        let index = world_index();
        let matcher = FullTextMatcher::new(&index);
        let tokens: Vec<String> = vec!["san", "francisco", "nce"].into_iter().map(String::from).collect();
        let slices = build_slices(&tokens, &matcher, DEFAULT_CO_MATCH_FLOOR);
        let recovered: Vec<String> = slices.iter().flatten().cloned().collect();
        assert_eq!(recovered, tokens);
    }

    #[test]
    fn unrelated_tokens_split_into_separate_slices() {
        let index = world_index();
        let matcher = FullTextMatcher::new(&index);
        let tokens: Vec<String> = vec!["san", "francisco", "nce"].into_iter().map(String::from).collect();
        let slices = build_slices(&tokens, &matcher, DEFAULT_CO_MATCH_FLOOR);
        assert!(slices.len() >= 2);
    }
}
