//! One sub-phrase's matching outcome, with its per-document ScoreBoards
//! (spec §4.9, first paragraph).

use crate::core::score::ScoreBoard;
use crate::core::types::DocId;
use crate::matcher::MatchOutcome;
use std::collections::BTreeMap;

/// Holds the outcome of matching one sub-phrase, plus the full
/// per-document ScoreBoard map.
#[derive(Debug, Clone, Default)]
pub struct MatchResult {
    /// The sub-phrase this result covers.
    pub sub_phrase: String,
    /// The underlying matcher outcome.
    pub outcome: MatchOutcome,
    /// Per-document score boards, keyed by document id.
    pub boards: BTreeMap<DocId, ScoreBoard>,
    /// Cached best document id, once scoring has run.
    pub best_doc: Option<DocId>,
    /// Cached combined weight of `best_doc`.
    pub combined_weight: f64,
}

impl MatchResult {
    /// Build a result from a matcher outcome, seeding an empty ScoreBoard
    /// for the best document plus every "extra" document sharing its score.
    pub fn from_outcome(sub_phrase: String, outcome: MatchOutcome) -> Self {
        let mut boards = BTreeMap::new();
        if let Some(doc) = outcome.best_doc {
            boards.insert(doc, ScoreBoard::new());
        }
        for doc in &outcome.extra {
            boards.entry(*doc).or_insert_with(ScoreBoard::new);
        }
        Self {
            sub_phrase,
            outcome,
            boards,
            best_doc: None,
            combined_weight: 0.0,
        }
    }

    /// Human-readable one-line diagnostic (spec §9 supplemented).
    pub fn describe(&self) -> String {
        format!(
            "MatchResult[{} -> {:?}, weight={:.3}]",
            self.sub_phrase, self.best_doc, self.combined_weight
        )
    }
}
