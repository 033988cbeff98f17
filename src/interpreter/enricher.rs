//! The secondary relational store's minimal lookup contract (spec §4.10
//! step 7, §A.5 external collaborator contract).

use crate::core::error::ServiceResult;
use crate::core::por::CityDetails;
use crate::core::types::PorKey;

/// Resolves optional denormalized attributes for a matched document.
///
/// The real relational store is out of scope (spec §1); this is the
/// contract `RequestInterpreter` needs of it.
pub trait Enricher {
    /// Resolve city details for `key`, if any apply.
    fn resolve_city_details(&self, key: &PorKey) -> ServiceResult<Option<CityDetails>>;
}

/// An [`Enricher`] that never resolves anything, for tests and for callers
/// with no secondary store configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEnricher;

impl Enricher for NullEnricher {
    fn resolve_city_details(&self, _key: &PorKey) -> ServiceResult<Option<CityDetails>> {
        Ok(None)
    }
}
