//! Per-slice results, per-partition aggregation, and choice of the best
//! partition (spec §4.9).

pub mod combination;
pub mod holder;
pub mod match_result;

pub use combination::ResultCombination;
pub use holder::ResultHolder;
pub use match_result::MatchResult;
