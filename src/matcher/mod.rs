//! Per-sub-phrase full-text matching with fuzzy correction (spec §4.7).

pub mod fulltext;

pub use fulltext::{FullTextMatcher, MatchOutcome};
