//! The flattened output record returned by a search request (spec §6.2).

use crate::core::por::{CityDetails, PorRecord};
use crate::core::types::PorKey;

/// Flattened POR record plus the per-query matching metadata (spec §6.2).
///
/// Derives `Serialize` so a caller can plug in any wire encoder; no
/// particular serialization format is mandated (spec §1 Non-goals).
#[derive(Debug, Clone, serde::Serialize)]
pub struct Location {
    /// The matched POR record.
    pub record: PorRecord,
    /// Associated city details, resolved through the [`crate::interpreter::Enricher`].
    pub city_details: Option<CityDetails>,
    /// The sub-phrase as originally tokenized.
    pub original_keywords: String,
    /// The sub-phrase after spelling correction.
    pub corrected_keywords: String,
    /// Combined matching percentage, in `[0, 100]`.
    pub matching_percentage: f64,
    /// Effective Levenshtein edit distance between original and corrected.
    pub edit_distance: u32,
    /// The allowable edit distance for this phrase's length.
    pub allowable_edit_distance: u32,
    /// Other documents sharing the best score.
    pub extra_list: Vec<PorKey>,
    /// Documents with a lower score than the best, up to the matching cap.
    pub alternate_list: Vec<PorKey>,
}
