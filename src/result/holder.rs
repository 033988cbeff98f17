//! One partition's aggregated results (spec §4.9, `ResultHolder`).

use crate::core::score::{ScoreType, DEFAULT_HEURISTIC_PCT};
use crate::index::TravelIndex;
use crate::result::match_result::MatchResult;

/// One partition's held [`MatchResult`]s (one per sub-phrase), plus the
/// partition's aggregated weight once scored.
#[derive(Debug, Clone, Default)]
pub struct ResultHolder {
    /// The partition's sub-phrases, in enumeration order.
    pub partition: Vec<String>,
    /// One [`MatchResult`] per sub-phrase.
    pub results: Vec<MatchResult>,
    /// Aggregated weight across the partition's results, once scored.
    pub aggregated_weight: f64,
}

impl ResultHolder {
    /// Build a holder from an already-matched partition.
    pub fn new(partition: Vec<String>, results: Vec<MatchResult>) -> Self {
        Self {
            partition,
            results,
            aggregated_weight: 0.0,
        }
    }

    /// Set `ENV_ID` on every document's ScoreBoard in every held result
    /// (spec §4.8 override rule).
    pub fn calculate_envelope_weights(&mut self, index: &TravelIndex) {
        for result in &mut self.results {
            for (doc_id, board) in result.boards.iter_mut() {
                if let Some(record) = index.document(*doc_id).and_then(|d| d.decode().ok()) {
                    board.set_env_id(record.envelope_id.0);
                }
            }
        }
    }

    /// Set `CODE_FULL_MATCH` on every document's ScoreBoard: exact when the
    /// sub-phrase equals the document's IATA or ICAO code (spec §4.8).
    pub fn calculate_code_matches(&mut self, index: &TravelIndex) {
        for result in &mut self.results {
            let upper = result.sub_phrase.to_uppercase();
            for (doc_id, board) in result.boards.iter_mut() {
                if let Some(doc) = index.document(*doc_id) {
                    let exact = doc.key.iata_code == upper || doc.key.icao_code == upper;
                    board.set_code_full_match(exact);
                }
            }
        }
    }

    /// Set `PAGE_RANK` from each document's stored PageRank (spec §4.8).
    pub fn calculate_page_ranks(&mut self, index: &TravelIndex) {
        for result in &mut self.results {
            for (doc_id, board) in result.boards.iter_mut() {
                if let Some(record) = index.document(*doc_id).and_then(|d| d.decode().ok()) {
                    board.set_page_rank(record.page_rank);
                }
            }
        }
    }

    /// Set `HEURISTIC` to its default unity value (spec §4.8, §9 Design
    /// Notes: reserved hook, no local rule applied).
    pub fn calculate_heuristic_weights(&mut self) {
        for result in &mut self.results {
            for board in result.boards.values_mut() {
                board.set_heuristic(DEFAULT_HEURISTIC_PCT);
            }
        }
    }

    /// Set `XAPIAN_PCT` from the matcher's best score, compute `COMBINATION`
    /// for every document, cache each result's best document and weight,
    /// then aggregate the partition's weight as the normalized product of
    /// its results' best combined weights (spec §4.8: "the ResultHolder
    /// computes product over sub-phrases of the sub-phrase's best combined
    /// weight, also normalized the same way").
    pub fn calculate_combined_weights(&mut self) {
        for result in &mut self.results {
            let score = result.outcome.best_score;
            let mut best: Option<(crate::core::types::DocId, f64)> = None;
            for (doc_id, board) in result.boards.iter_mut() {
                board.set(ScoreType::XapianPct, score);
                let combined = board.calculate_combination();
                if best.as_ref().map(|(_, w)| combined > *w).unwrap_or(true) {
                    best = Some((*doc_id, combined));
                }
            }
            if let Some((doc_id, weight)) = best {
                result.best_doc = Some(doc_id);
                result.combined_weight = weight;
            }
        }

        let weighted: Vec<f64> = self.results.iter().map(|r| r.combined_weight).collect();
        self.aggregated_weight = if weighted.is_empty() {
            0.0
        } else {
            100.0 * weighted.iter().map(|w| w / 100.0).product::<f64>()
        };
    }
}
