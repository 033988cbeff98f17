//! Core scalar type definitions shared across the search stack.

use std::fmt;

/// Internal, build-stable identifier for a document within one index build.
///
/// Assigned sequentially as documents are committed (spec §6.3: "document id
/// assignment stable within a build"). Not persisted across rebuilds.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct DocId(pub u32);

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Doc#{}", self.0)
    }
}

/// Geonames gazetteer identifier (spec §3, GLOSSARY).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct GeonamesId(pub u32);

impl fmt::Display for GeonamesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Envelope identifier: `0` means currently valid, non-zero means
/// historically valid only (spec §3, §4.8).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, serde::Serialize, serde::Deserialize)]
pub struct EnvelopeId(pub u32);

impl EnvelopeId {
    /// Currently-valid envelope.
    pub const VALID: Self = Self(0);

    /// Whether this envelope marks the POR as currently valid.
    pub fn is_valid(&self) -> bool {
        self.0 == 0
    }
}

/// The triple `(iata_code, icao_code, geonames_id)` that uniquely identifies
/// one document in the index (spec §3, "POR key").
///
/// IATA code alone is not unique — a city and its airport may share one —
/// so all three fields take part in equality and hashing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct PorKey {
    /// 3-letter IATA code, upper-cased. May be shared with another POR.
    pub iata_code: String,
    /// 4-letter ICAO code, upper-cased, or empty.
    pub icao_code: String,
    /// Geonames gazetteer identifier.
    pub geonames_id: GeonamesId,
}

impl PorKey {
    /// Build a key from its three constituent parts.
    pub fn new(iata_code: impl Into<String>, icao_code: impl Into<String>, geonames_id: u32) -> Self {
        Self {
            iata_code: iata_code.into().to_uppercase(),
            icao_code: icao_code.into().to_uppercase(),
            geonames_id: GeonamesId(geonames_id),
        }
    }
}

impl fmt::Display for PorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.iata_code, self.icao_code, self.geonames_id)
    }
}

/// A percentage value, conventionally in `[0, 100]` but allowed to exceed
/// that range internally for `CODE_FULL_MATCH` combinations (spec §4.8,
/// §9 Open Questions) — ordering must be preserved even when the reported
/// value is renormalized at the service boundary.
pub type Percentage = f64;

/// Levenshtein edit distance between an input token and its corrected form.
pub type EditDistance = u32;
