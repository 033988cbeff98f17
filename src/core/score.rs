//! Typed multi-signal scoring (spec §4.8).

use std::collections::BTreeMap;

/// One individually-tracked scoring signal, plus the derived combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub enum ScoreType {
    /// Raw percentage returned by the full-text matcher.
    XapianPct,
    /// The record's PageRank percentage.
    PageRank,
    /// Implementation-free local-rule hook; defaults to unity (`100.0`).
    Heuristic,
    /// Envelope-validity signal: `100.0` if currently valid, else de-ranked.
    EnvId,
    /// Exact IATA/ICAO code match signal.
    CodeFullMatch,
    /// Derived: the combination of every individual signal above.
    Combination,
}

impl ScoreType {
    /// `true` for every variant but [`ScoreType::Combination`], which is
    /// always derived rather than written directly.
    pub fn is_individual(&self) -> bool {
        !matches!(self, ScoreType::Combination)
    }
}

/// Huge constant that lets an exact code match dominate the combined score
/// even against the tiny default PageRank (spec §4.8).
pub const K_FULL_CODE_MATCH_PCT: f64 = 110_000.0;

/// Stored `CODE_FULL_MATCH` value for a sub-phrase that is not an exact code
/// match (spec §4.8).
pub const K_MODIFIED_MATCHING_PCT: f64 = 99.999;

/// Stored `ENV_ID` value for a non-zero (historical) envelope (spec §4.8).
pub const K_ENVELOPE_PCT: f64 = 0.10;

/// Default `HEURISTIC` value: a unity hook with no local rule applied.
pub const DEFAULT_HEURISTIC_PCT: f64 = 100.0;

/// `ENV_ID` value for a currently-valid (envelope id `0`) document.
pub const CURRENT_ENVELOPE_PCT: f64 = 100.0;

/// Per-(slice, partition, sub-phrase, document) map of scoring signals
/// (spec §4.8).
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ScoreBoard {
    signals: BTreeMap<ScoreType, f64>,
}

impl ScoreBoard {
    /// An empty board with no signals recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an individual signal. Panics in debug builds if called with
    /// [`ScoreType::Combination`], which is always derived.
    pub fn set(&mut self, score_type: ScoreType, value: f64) {
        debug_assert!(
            score_type.is_individual(),
            "COMBINATION is derived, not written directly"
        );
        self.signals.insert(score_type, value);
    }

    /// Read a signal, if recorded.
    pub fn get(&self, score_type: ScoreType) -> Option<f64> {
        self.signals.get(&score_type).copied()
    }

    /// Record the `CODE_FULL_MATCH` signal, applying the override rule:
    /// [`K_FULL_CODE_MATCH_PCT`] for an exact code match, otherwise
    /// [`K_MODIFIED_MATCHING_PCT`] (spec §4.8).
    pub fn set_code_full_match(&mut self, is_exact_code_match: bool) {
        let value = if is_exact_code_match {
            K_FULL_CODE_MATCH_PCT
        } else {
            K_MODIFIED_MATCHING_PCT
        };
        self.set(ScoreType::CodeFullMatch, value);
    }

    /// Record the `ENV_ID` signal, applying the override rule: `100.0` when
    /// the raw envelope id is `0`, else [`K_ENVELOPE_PCT`] (spec §4.8).
    pub fn set_env_id(&mut self, envelope_id: u32) {
        let value = if envelope_id == 0 {
            CURRENT_ENVELOPE_PCT
        } else {
            K_ENVELOPE_PCT
        };
        self.set(ScoreType::EnvId, value);
    }

    /// Record the `PAGE_RANK` signal from the record's stored PageRank
    /// percentage (spec §4.8). Callers pass `0.10` for records with none.
    pub fn set_page_rank(&mut self, page_rank_pct: f64) {
        self.set(ScoreType::PageRank, page_rank_pct);
    }

    /// Record the `XAPIAN_PCT` signal as returned by the matcher.
    pub fn set_xapian_pct(&mut self, pct: f64) {
        self.set(ScoreType::XapianPct, pct);
    }

    /// Record the `HEURISTIC` signal, defaulting to unity when no local
    /// rule applies (spec §4.8, §9 Design Notes).
    pub fn set_heuristic(&mut self, value: f64) {
        self.set(ScoreType::Heuristic, value);
    }

    /// Compute and cache `COMBINATION`: the product of every recorded
    /// individual signal, divided by `100^(n-1)` where `n` is the count of
    /// signals multiplied in, so the result stays a percentage-scale value
    /// (spec §4.8 invariant). Returns the combined value.
    pub fn calculate_combination(&mut self) -> f64 {
        let individual: Vec<f64> = self
            .signals
            .iter()
            .filter(|(t, _)| t.is_individual())
            .map(|(_, v)| *v)
            .collect();
        let n = individual.len();
        let combined = if n == 0 {
            0.0
        } else {
            let product: f64 = individual.iter().product();
            let divisor = 100f64.powi((n as i32) - 1);
            product / divisor
        };
        self.signals.insert(ScoreType::Combination, combined);
        combined
    }

    /// The cached `COMBINATION` value, if [`calculate_combination`] has run.
    ///
    /// [`calculate_combination`]: Self::calculate_combination
    pub fn combination(&self) -> Option<f64> {
        self.get(ScoreType::Combination)
    }

    /// Human-readable one-line diagnostic (spec §9 supplemented diagnostics).
    pub fn describe(&self) -> String {
        let mut parts: Vec<String> = self
            .signals
            .iter()
            .map(|(t, v)| format!("{:?}={:.3}", t, v))
            .collect();
        parts.sort();
        format!("ScoreBoard[{}]", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combination_divides_by_hundred_power() {
        let mut board = ScoreBoard::new();
        board.set_xapian_pct(80.0);
        board.set_page_rank(50.0);
        let combined = board.calculate_combination();
        // (80 * 50) / 100^(2-1) = 4000 / 100 = 40.0
        assert!((combined - 40.0).abs() < 1e-9);
    }

    #[test]
    fn exact_code_match_dominates() {
        let mut board = ScoreBoard::new();
        board.set_code_full_match(true);
        board.set_page_rank(0.10);
        let combined = board.calculate_combination();
        assert!(combined > 1000.0);
    }

    #[test]
    fn envelope_veto_deranks_historical_entries() {
        let mut current = ScoreBoard::new();
        current.set_xapian_pct(90.0);
        current.set_env_id(0);
        let current_combined = current.calculate_combination();

        let mut historical = ScoreBoard::new();
        historical.set_xapian_pct(90.0);
        historical.set_env_id(7);
        let historical_combined = historical.calculate_combination();

        assert!(current_combined > historical_combined);
    }
}
