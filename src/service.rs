//! The top-level service surface (spec §6.4): `interpret`, `build_index`,
//! `size`, `sample`, backed by one committed [`TravelIndex`] and an
//! [`Enricher`].

use crate::core::error::{ServiceError, ServiceResult};
use crate::index::builder::CatalogSource;
use crate::index::document::Document;
use crate::index::{IndexBuilder, TravelIndex};
use crate::interpreter::{Enricher, Location, NullEnricher, RequestInterpreter};
use crate::security::{validate_limit, validate_query};

/// A running search service: one committed index, one enricher, and the
/// tunables that govern tokenization and matching.
pub struct TrepService<E: Enricher = NullEnricher> {
    index: TravelIndex,
    enricher: E,
    min_word_length: usize,
    co_match_floor: f64,
}

impl TrepService<NullEnricher> {
    /// A service over an empty index with no secondary enrichment store.
    pub fn new(min_word_length: usize, co_match_floor: f64) -> Self {
        Self::with_enricher(TravelIndex::new(), NullEnricher, min_word_length, co_match_floor)
    }
}

impl<E: Enricher> TrepService<E> {
    /// A service over an already-committed index, with an explicit enricher.
    pub fn with_enricher(index: TravelIndex, enricher: E, min_word_length: usize, co_match_floor: f64) -> Self {
        Self {
            index,
            enricher,
            min_word_length,
            co_match_floor,
        }
    }

    /// `interpret(query, max_matches?) -> (locations, unmatched_words)` (spec
    /// §6.4). `max_matches`, if given, truncates the returned location list
    /// after ordering but does not affect which slices or partitions are
    /// evaluated.
    pub fn interpret(&self, query: &str, max_matches: Option<usize>) -> ServiceResult<(Vec<Location>, Vec<String>)> {
        let query = validate_query(query).map_err(ServiceError::from)?;
        if let Some(limit) = max_matches {
            validate_limit(limit).map_err(ServiceError::from)?;
        }

        let interpreter = RequestInterpreter::new(&self.index, &self.enricher, self.min_word_length, self.co_match_floor);
        let (mut locations, unmatched_words) = interpreter.interpret(query)?;

        // `interpreter.interpret` already orders locations primarily by
        // slice (spec §5) with weight only breaking ties inside a slice;
        // re-sorting here would destroy that ordering.
        if let Some(limit) = max_matches {
            locations.truncate(limit);
        }

        Ok((locations, unmatched_words))
    }

    /// `build_index(catalog_source) -> count` (spec §6.4). Replaces the
    /// service's committed index with a freshly built one; the previous
    /// index is kept if the build fails (spec §7: "the build is
    /// transactional").
    pub fn build_index(&mut self, source: &dyn CatalogSource) -> ServiceResult<usize> {
        let builder = IndexBuilder::new(self.min_word_length);
        let index = builder.build(source).map_err(ServiceError::from)?;
        let count = index.size();
        self.index = index;
        Ok(count)
    }

    /// `size() -> count` (spec §6.3/§6.4).
    pub fn size(&self) -> usize {
        self.index.size()
    }

    /// `sample(n) -> locations` (spec §6.4): uniform sampling over the
    /// committed documents, decoded and enriched like any matched result.
    pub fn sample(&self, n: usize) -> ServiceResult<Vec<Location>> {
        let mut locations = Vec::new();
        for document in self.index.sample(n) {
            locations.push(self.location_for(document)?);
        }
        Ok(locations)
    }

    /// Persist the committed index to `path` (spec §4.6).
    pub fn save_index(&self, path: impl AsRef<std::path::Path>) -> ServiceResult<()> {
        crate::storage::persist(&self.index, path).map_err(ServiceError::from)
    }

    /// Replace the committed index with one loaded from `path`.
    pub fn load_index(&mut self, path: impl AsRef<std::path::Path>) -> ServiceResult<()> {
        self.index = crate::storage::load(path).map_err(ServiceError::from)?;
        Ok(())
    }

    fn location_for(&self, document: &Document) -> ServiceResult<Location> {
        let record = document.decode().map_err(ServiceError::from)?;
        let city_details = self.enricher.resolve_city_details(&record.key)?;
        let keywords = record.name_utf.clone();

        Ok(Location {
            city_details,
            original_keywords: keywords.clone(),
            corrected_keywords: keywords,
            matching_percentage: 100.0,
            edit_distance: 0,
            allowable_edit_distance: 0,
            extra_list: Vec::new(),
            alternate_list: Vec::new(),
            record,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::por::PorCatalogRow;
    use crate::index::builder::InMemoryCatalog;

    fn nce_row() -> PorCatalogRow {
        PorCatalogRow {
            iata_code: "NCE".to_string(),
            icao_code: "LFMN".to_string(),
            geonames_id: 6299418,
            name: "Nice Cote d'Azur".to_string(),
            ascii_name: "Nice Cote d'Azur".to_string(),
            country_code: "FR".to_string(),
            iata_type: 'A',
            page_rank: 0.8,
            ..Default::default()
        }
    }

    #[test]
    fn build_index_commits_rows_and_reports_their_count() {
        let mut service = TrepService::new(3, 5.0);
        let source = InMemoryCatalog(vec![nce_row()]);

        let count = service.build_index(&source).expect("build");
        assert_eq!(count, 1);
        assert_eq!(service.size(), 1);

        let (locations, unmatched) = service.interpret("nce", None).expect("interpret");
        assert_eq!(unmatched, Vec::<String>::new());
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].record.key.iata_code, "NCE");
        assert_eq!(locations[0].matching_percentage, 100.0);
    }

    #[test]
    fn interpret_rejects_an_empty_query() {
        let service = TrepService::new(3, 5.0);
        assert!(matches!(service.interpret("", None), Err(ServiceError::Empty)));
    }

    #[test]
    fn sample_is_clamped_and_decodes_real_records() {
        let mut service = TrepService::new(3, 5.0);
        let source = InMemoryCatalog(vec![nce_row()]);
        service.build_index(&source).expect("build");

        let sampled = service.sample(5).expect("sample");
        assert_eq!(sampled.len(), 1);
        assert_eq!(sampled[0].record.key.iata_code, "NCE");
    }
}
