//! Orchestrates normalize → tokenize → slice → (partition × match × score)
//! → combine → enrich, producing the final location list (spec §4.10).

pub mod enricher;
pub mod location;

pub use enricher::{Enricher, NullEnricher};
pub use location::Location;

use crate::combo::string_partition::enumerate_partitions;
use crate::core::error::{ServiceError, ServiceResult};
use crate::core::por::PorRecord;
use crate::index::TravelIndex;
use crate::matcher::FullTextMatcher;
use crate::result::{MatchResult, ResultCombination, ResultHolder};
use crate::slices::build_slices;
use crate::text::tokenize::{tokenize, trim};
use crate::text::transliterate::normalize;

/// Orchestrates one query end to end against a committed [`TravelIndex`]
/// and an [`Enricher`] for secondary attributes.
pub struct RequestInterpreter<'a> {
    index: &'a TravelIndex,
    enricher: &'a dyn Enricher,
    min_word_length: usize,
    co_match_floor: f64,
}

impl<'a> RequestInterpreter<'a> {
    /// Build an interpreter over `index`, resolving secondary attributes
    /// through `enricher`.
    pub fn new(index: &'a TravelIndex, enricher: &'a dyn Enricher, min_word_length: usize, co_match_floor: f64) -> Self {
        Self {
            index,
            enricher,
            min_word_length,
            co_match_floor,
        }
    }

    /// `interpret(query, index, enricher) -> (locations, unmatched_words)`
    /// (spec §4.10).
    pub fn interpret(&self, query: &str) -> ServiceResult<(Vec<Location>, Vec<String>)> {
        if query.trim().is_empty() {
            return Err(ServiceError::Empty);
        }

        let normalized = normalize(query);
        let trimmed = trim(&normalized, self.min_word_length);
        let tokens = tokenize(&trimmed);
        if tokens.is_empty() {
            return Err(ServiceError::Empty);
        }

        // Fast path (spec §4.10 step 4): every token resolves directly as
        // a code or numeric geonames id.
        if let Some(locations) = self.try_code_fast_path(&tokens)? {
            return Ok((locations, Vec::new()));
        }

        let matcher = FullTextMatcher::new(self.index);
        let slices = build_slices(&tokens, &matcher, self.co_match_floor);

        let mut locations = Vec::new();
        let mut unmatched_words = Vec::new();

        for slice in slices {
            let mut holders = Vec::new();

            for partition in enumerate_partitions(&slice) {
                let mut results = Vec::new();
                for sub_phrase in &partition {
                    let outcome = matcher.match_phrase(sub_phrase);
                    unmatched_words.extend(outcome.removed_tokens.clone());
                    results.push(MatchResult::from_outcome(sub_phrase.clone(), outcome));
                }
                let mut holder = ResultHolder::new(partition, results);
                holder.calculate_envelope_weights(self.index);
                holder.calculate_code_matches(self.index);
                holder.calculate_page_ranks(self.index);
                holder.calculate_heuristic_weights();
                holder.calculate_combined_weights();
                holders.push(holder);
            }

            let mut combination = ResultCombination::new(holders);
            if combination.choose_best_matching_result_holder().is_none() {
                continue;
            }

            // Within a slice, rank by descending combined weight
            // (IATA-ascending tiebreak); across slices, preserve slice order
            // rather than re-sorting globally (spec §5: primary ordering is
            // slice order, with weight breaking ties only inside a slice).
            let mut slice_locations: Vec<(f64, Location)> = Vec::new();
            for result in self.winning_results(&combination) {
                if let Some(location) = self.build_location(result)? {
                    slice_locations.push((result.combined_weight, location));
                }
            }
            slice_locations.sort_by(|a, b| {
                b.0.partial_cmp(&a.0)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.1.record.key.iata_code.cmp(&b.1.record.key.iata_code))
            });
            locations.extend(slice_locations.into_iter().map(|(_, location)| location));
        }

        Ok((locations, unmatched_words))
    }

    fn winning_results<'r>(&self, combination: &'r ResultCombination) -> Vec<&'r MatchResult> {
        combination.winner().map(|h| h.results.iter().collect()).unwrap_or_default()
    }

    fn try_code_fast_path(&self, tokens: &[String]) -> ServiceResult<Option<Vec<Location>>> {
        let mut locations = Vec::new();
        for token in tokens {
            match self.index.lookup_code(token) {
                Some(doc_id) => {
                    let doc = self.index.document(doc_id).ok_or(ServiceError::IndexInconsistent(
                        "code resolved to a missing document".to_string(),
                    ))?;
                    let record = doc.decode().map_err(ServiceError::from)?;
                    locations.push(self.location_from_record(&record, token, token, 100.0, 0, 0, Vec::new(), Vec::new())?);
                }
                None => return Ok(None),
            }
        }
        Ok(Some(locations))
    }

    fn build_location(&self, result: &MatchResult) -> ServiceResult<Option<Location>> {
        let Some(doc_id) = result.best_doc else {
            return Ok(None);
        };
        let doc = self.index.document(doc_id).ok_or(ServiceError::IndexInconsistent(
            "matched document missing from index".to_string(),
        ))?;
        let record = doc.decode().map_err(ServiceError::from)?;

        let extra_keys: Vec<crate::core::types::PorKey> = result
            .outcome
            .extra
            .iter()
            .filter_map(|id| self.index.document(*id).map(|d| d.key.clone()))
            .collect();
        let alternate_keys: Vec<crate::core::types::PorKey> = result
            .outcome
            .alternate
            .iter()
            .filter_map(|id| self.index.document(*id).map(|d| d.key.clone()))
            .collect();

        self.location_from_record(
            &record,
            &result.outcome.matched_phrase,
            &result.outcome.corrected_phrase,
            result.outcome.best_score,
            result.outcome.effective_edit_distance,
            result.outcome.allowable_edit_distance,
            extra_keys,
            alternate_keys,
        )
        .map(Some)
    }

    #[allow(clippy::too_many_arguments)]
    fn location_from_record(
        &self,
        record: &PorRecord,
        original_keywords: &str,
        corrected_keywords: &str,
        matching_percentage: f64,
        edit_distance: u32,
        allowable_edit_distance: u32,
        extra_list: Vec<crate::core::types::PorKey>,
        alternate_list: Vec<crate::core::types::PorKey>,
    ) -> ServiceResult<Location> {
        // Enricher failures are fatal for the request (spec §4.10 failure
        // semantics: enricher-row-missing / backend errors abort, not just
        // this Location).
        let city_details = self.enricher.resolve_city_details(&record.key)?;

        Ok(Location {
            record: record.clone(),
            city_details,
            original_keywords: original_keywords.to_string(),
            corrected_keywords: corrected_keywords.to_string(),
            matching_percentage: matching_percentage.clamp(0.0, 100.0),
            edit_distance,
            allowable_edit_distance,
            extra_list,
            alternate_list,
        })
    }
}
