//! One slice's held partitions and the choice of the best one (spec §4.9,
//! last paragraph; partition-selection rule at spec §4.9 preceding text).

use crate::result::holder::ResultHolder;

/// One slice's held [`ResultHolder`]s (one per partition) plus the outcome
/// of partition selection.
#[derive(Debug, Default)]
pub struct ResultCombination {
    /// Every partition's holder, in enumeration order (finest to coarsest).
    pub holders: Vec<ResultHolder>,
    winner_index: Option<usize>,
}

impl ResultCombination {
    /// Build a combination over every partition's already-scored holder.
    pub fn new(holders: Vec<ResultHolder>) -> Self {
        Self {
            holders,
            winner_index: None,
        }
    }

    /// Run partition selection: the greatest aggregated weight wins; ties
    /// are broken by fewer sub-phrases (coarser segmentation), then by
    /// earliest enumeration order. A partition with a non-positive weight
    /// is never selected; if none qualifies, no best partition exists.
    pub fn choose_best_matching_result_holder(&mut self) -> Option<&ResultHolder> {
        let mut best_index: Option<usize> = None;
        for (index, holder) in self.holders.iter().enumerate() {
            if holder.aggregated_weight <= 0.0 {
                continue;
            }
            best_index = match best_index {
                None => Some(index),
                Some(current) => {
                    let current_holder = &self.holders[current];
                    if holder.aggregated_weight > current_holder.aggregated_weight {
                        Some(index)
                    } else if holder.aggregated_weight == current_holder.aggregated_weight
                        && holder.partition.len() < current_holder.partition.len()
                    {
                        Some(index)
                    } else {
                        Some(current)
                    }
                }
            };
        }
        self.winner_index = best_index;
        self.winner_index.map(|i| &self.holders[i])
    }

    /// The winning holder, if partition selection has run and found one.
    pub fn winner(&self) -> Option<&ResultHolder> {
        self.winner_index.map(|i| &self.holders[i])
    }

    /// The winning aggregated weight, or `0.0` if there is no winner.
    pub fn winning_weight(&self) -> f64 {
        self.winner().map(|h| h.aggregated_weight).unwrap_or(0.0)
    }

    /// The corrected sub-phrases of the winning partition's results, in
    /// order, or an empty list if there is no winner.
    pub fn corrected_sub_phrases(&self) -> Vec<String> {
        self.winner()
            .map(|holder| holder.results.iter().map(|r| r.outcome.corrected_phrase.clone()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::match_result::MatchResult;
    use crate::matcher::MatchOutcome;

    fn holder_with_weight(weight: f64, sub_phrase_count: usize) -> ResultHolder {
        let partition: Vec<String> = (0..sub_phrase_count).map(|i| format!("p{i}")).collect();
        let results: Vec<MatchResult> = partition
            .iter()
            .map(|p| MatchResult::from_outcome(p.clone(), MatchOutcome::default()))
            .collect();
        let mut holder = ResultHolder::new(partition, results);
        holder.aggregated_weight = weight;
        holder
    }

    #[test]
    fn picks_the_holder_with_greatest_weight() {
        let mut combination = ResultCombination::new(vec![holder_with_weight(10.0, 2), holder_with_weight(50.0, 1)]);
        let winner = combination.choose_best_matching_result_holder().expect("winner");
        assert_eq!(winner.aggregated_weight, 50.0);
    }

    #[test]
    fn ties_prefer_fewer_sub_phrases() {
        let mut combination = ResultCombination::new(vec![holder_with_weight(40.0, 2), holder_with_weight(40.0, 1)]);
        let winner = combination.choose_best_matching_result_holder().expect("winner");
        assert_eq!(winner.partition.len(), 1);
    }

    #[test]
    fn no_positive_weight_yields_no_winner() {
        let mut combination = ResultCombination::new(vec![holder_with_weight(0.0, 1), holder_with_weight(-1.0, 2)]);
        assert!(combination.choose_best_matching_result_holder().is_none());
    }
}
