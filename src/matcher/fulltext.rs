//! Probabilistic + boolean query matching with spelling correction and
//! iterative shortening on no-match (spec §4.7).

use crate::core::score::ScoreBoard;
use crate::core::types::DocId;
use crate::index::TravelIndex;
use crate::text::tokenize::tokenize;

/// Matching-set cap (spec §4.7 step 3): at most this many candidates are
/// retained per match.
pub const MATCHING_SET_CAP: usize = 30;

/// Outcome of matching one sub-phrase against the index.
#[derive(Debug, Clone, Default)]
pub struct MatchOutcome {
    /// The (possibly shortened) phrase that actually produced a match.
    pub matched_phrase: String,
    /// The corrected form of `matched_phrase`, post spelling-correction.
    pub corrected_phrase: String,
    /// Best document found, if any.
    pub best_doc: Option<DocId>,
    /// Best Xapian-equivalent percentage, in `[0, 100]`.
    pub best_score: f64,
    /// Effective Levenshtein edit distance between input and corrected form.
    pub effective_edit_distance: u32,
    /// The allowable edit distance for this phrase's length.
    pub allowable_edit_distance: u32,
    /// Other documents sharing the best score, in index order.
    pub extra: Vec<DocId>,
    /// Documents with a lower score than the best, up to the cap.
    pub alternate: Vec<DocId>,
    /// Tokens stripped from the right during iterative shortening, in
    /// removal order (spec §4.7 step 5).
    pub removed_tokens: Vec<String>,
}

impl MatchOutcome {
    fn rejected(removed_tokens: Vec<String>) -> Self {
        Self {
            removed_tokens,
            ..Default::default()
        }
    }

    /// Whether this outcome represents an accepted match.
    pub fn is_match(&self) -> bool {
        self.best_doc.is_some()
    }
}

/// Allowable edit distance for a phrase of `nb_letters` characters
/// (spec §4.7 step 4).
pub fn allowable_edit_distance(nb_letters: usize) -> u32 {
    match nb_letters {
        0..=3 => 0,
        4..=6 => 1,
        7..=9 => 2,
        10..=14 => 3,
        15..=19 => 4,
        l => (l / 5) as u32,
    }
}

/// Stateless matcher bound to one [`TravelIndex`].
pub struct FullTextMatcher<'a> {
    index: &'a TravelIndex,
}

impl<'a> FullTextMatcher<'a> {
    /// Build a matcher over `index`.
    pub fn new(index: &'a TravelIndex) -> Self {
        Self { index }
    }

    /// `match(phrase, index) -> MatchingDocuments` (spec §4.7).
    ///
    /// `phrase` must already be normalized (spec §4.1). Iteratively strips
    /// the rightmost token and retries until a match is found or the
    /// phrase is empty (step 5's state machine).
    pub fn match_phrase(&self, phrase: &str) -> MatchOutcome {
        let mut tokens = tokenize(phrase);
        let mut removed = Vec::new();

        loop {
            if tokens.is_empty() {
                return MatchOutcome::rejected(removed);
            }
            let candidate = tokens.join(" ");
            if let Some(outcome) = self.try_match(&candidate, removed.clone()) {
                return outcome;
            }
            removed.push(tokens.pop().expect("checked non-empty above"));
        }
    }

    /// Cheap boolean variant used by query-slice boundary detection
    /// (spec §4.5): whether `phrase` yields any match with a best score
    /// above `floor`.
    pub fn match_exists(&self, phrase: &str, floor: f64) -> bool {
        let corrected = self.correct(phrase);
        let candidates = self.index.postings_for(&corrected);
        !candidates.is_empty() && self.score_for(phrase, &corrected) > floor
    }

    fn try_match(&self, phrase: &str, removed_tokens: Vec<String>) -> Option<MatchOutcome> {
        let corrected = self.correct(phrase);
        let effective_edit_distance = levenshtein(phrase, &corrected);

        let exact_full_match = self.index.contains_term(phrase) && effective_edit_distance == 0;
        let allowable = allowable_edit_distance(phrase.chars().count());

        if !exact_full_match && effective_edit_distance > allowable {
            return None;
        }

        let mut candidates: Vec<DocId> = self.index.postings_for(&corrected).to_vec();
        if candidates.is_empty() {
            return None;
        }
        candidates.truncate(MATCHING_SET_CAP);

        let best_score = self.score_for(phrase, &corrected);

        // Rank candidates by their combined weight (spec §4.8's XAPIAN_PCT,
        // shared by every candidate here, times PAGE_RANK and ENV_ID, which
        // vary per document) so "extra" (tied with the best) and
        // "alternate" (strictly lower) are genuinely distinguished, not just
        // every other postings entry (spec §4.7 step 6, §3).
        let mut weighted: Vec<(DocId, f64)> =
            candidates.iter().map(|&id| (id, self.candidate_weight(id, best_score))).collect();
        weighted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let best_doc = weighted.first().map(|(id, _)| *id);
        let best_weight = weighted.first().map(|(_, w)| *w).unwrap_or(0.0);

        let mut extra = Vec::new();
        let mut alternate = Vec::new();
        for (id, weight) in weighted.iter().skip(1) {
            if (*weight - best_weight).abs() < f64::EPSILON {
                extra.push(*id);
            } else {
                alternate.push(*id);
            }
        }

        Some(MatchOutcome {
            matched_phrase: phrase.to_string(),
            corrected_phrase: corrected,
            best_doc,
            best_score,
            effective_edit_distance,
            allowable_edit_distance: allowable,
            extra,
            alternate,
            removed_tokens,
        })
    }

    /// A document's combined weight for ranking candidates that share one
    /// postings entry: `XAPIAN_PCT` (identical for all of them here) times
    /// `PAGE_RANK` and `ENV_ID` (spec §4.8), via the same [`ScoreBoard`]
    /// combination the holder uses downstream.
    fn candidate_weight(&self, doc_id: DocId, xapian_pct: f64) -> f64 {
        let Some(record) = self.index.document(doc_id).and_then(|d| d.decode().ok()) else {
            return 0.0;
        };
        let mut board = ScoreBoard::new();
        board.set_xapian_pct(xapian_pct);
        board.set_page_rank(record.page_rank);
        board.set_env_id(record.envelope_id.0);
        board.calculate_combination()
    }

    /// Find the index's closest known term to `phrase` by edit distance;
    /// returns `phrase` unchanged if it is already indexed verbatim or no
    /// candidate is close enough to be worth proposing.
    fn correct(&self, phrase: &str) -> String {
        if self.index.contains_term(phrase) {
            return phrase.to_string();
        }
        let allowable = allowable_edit_distance(phrase.chars().count());
        let mut best: Option<(String, u32)> = None;
        for term in self.index.terms() {
            let distance = levenshtein(phrase, term);
            if distance > allowable {
                continue;
            }
            if best.as_ref().map(|(_, d)| distance < *d).unwrap_or(true) {
                best = Some((term.to_string(), distance));
            }
        }
        best.map(|(term, _)| term).unwrap_or_else(|| phrase.to_string())
    }

    fn score_for(&self, phrase: &str, corrected: &str) -> f64 {
        if phrase == corrected && self.index.contains_term(phrase) {
            return 100.0;
        }
        if !self.index.contains_term(corrected) {
            return 0.0;
        }
        strsim::normalized_levenshtein(phrase, corrected) * 100.0
    }
}

fn levenshtein(a: &str, b: &str) -> u32 {
    strsim::levenshtein(a, b) as u32
}
