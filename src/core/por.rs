//! The point-of-reference (POR) data model (spec §3, §6.1).

use crate::core::types::{EnvelopeId, GeonamesId, PorKey};
use std::collections::BTreeMap;

/// Tagged enumeration of POR kinds (spec §3, "POR type").
///
/// The `Cty*` variants represent combined city+transport entries, as in the
/// source gazetteer where a city and its single airport share one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PorType {
    /// Combined city and airport.
    CtyAirp,
    /// Combined city and heliport.
    CtyHpt,
    /// Combined city and railway station.
    CtyRstn,
    /// Combined city and bus station.
    CtyBstn,
    /// Combined city and ferry port.
    CtyFerry,
    /// City, with no specific associated transport type.
    City,
    /// Airport, airfield, or aerodrome.
    Airp,
    /// Heliport.
    Hpt,
    /// Railway station.
    Rstn,
    /// Bus station.
    Bstn,
    /// Ferry or maritime port.
    Ferry,
    /// Off-line point: no specific transportation service.
    Off,
}

impl PorType {
    /// The single-character external label for this type (e.g. `'A'`, `'C'`).
    pub fn label(&self) -> char {
        match self {
            PorType::CtyAirp => 'a',
            PorType::CtyHpt => 'h',
            PorType::CtyRstn => 'r',
            PorType::CtyBstn => 'b',
            PorType::CtyFerry => 'p',
            PorType::City => 'C',
            PorType::Airp => 'A',
            PorType::Hpt => 'H',
            PorType::Rstn => 'R',
            PorType::Bstn => 'B',
            PorType::Ferry => 'P',
            PorType::Off => 'O',
        }
    }

    /// Parse a type from its single-character external label.
    pub fn from_label(label: char) -> Option<Self> {
        Some(match label {
            'a' => PorType::CtyAirp,
            'h' => PorType::CtyHpt,
            'r' => PorType::CtyRstn,
            'b' => PorType::CtyBstn,
            'p' => PorType::CtyFerry,
            'C' => PorType::City,
            'A' => PorType::Airp,
            'H' => PorType::Hpt,
            'R' => PorType::Rstn,
            'B' => PorType::Bstn,
            'P' => PorType::Ferry,
            'O' => PorType::Off,
            _ => return None,
        })
    }

    /// Whether this type carries a combined city+transport meaning.
    pub fn is_combined_city(&self) -> bool {
        matches!(
            self,
            PorType::CtyAirp
                | PorType::CtyHpt
                | PorType::CtyRstn
                | PorType::CtyBstn
                | PorType::CtyFerry
        )
    }
}

/// Mapping `language_code -> ordered list of names` (spec §3, "Name matrix").
///
/// Insertion order within a language is preserved; iteration order across
/// languages follows insertion order of the languages themselves.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct NameMatrix {
    entries: Vec<(String, Vec<String>)>,
}

impl NameMatrix {
    /// An empty name matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a name for the given language, creating the language's entry
    /// if this is its first name.
    pub fn push(&mut self, language_code: &str, name: impl Into<String>) {
        if let Some((_, names)) = self.entries.iter_mut().find(|(lang, _)| lang == language_code) {
            names.push(name.into());
        } else {
            self.entries.push((language_code.to_string(), vec![name.into()]));
        }
    }

    /// Names registered for a given language, in insertion order.
    pub fn names_for(&self, language_code: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(lang, _)| lang == language_code)
            .map(|(_, names)| names.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate over `(language_code, names)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(lang, names)| (lang.as_str(), names.as_slice()))
    }

    /// Total number of distinct names across all languages.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, names)| names.len()).sum()
    }

    /// Whether the matrix holds no names at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// City details associated with a non-city POR (spec §3, "optional
/// associated city-details list").
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CityDetails {
    /// The city's own POR key, when resolvable.
    pub city_key: Option<PorKey>,
    /// City IATA code.
    pub city_code: String,
    /// City primary name.
    pub city_name: String,
}

/// One POR record, as required by the core search stack (spec §3).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PorRecord {
    /// Uniqueness key: `(iata_code, icao_code, geonames_id)`.
    pub key: PorKey,
    /// POR kind.
    pub por_type: PorType,
    /// Primary name, UTF-8.
    pub name_utf: String,
    /// ASCII transliteration of the primary name.
    pub name_ascii: String,
    /// FAA code, if any.
    pub faa_code: String,
    /// City IATA code (may equal `key.iata_code` for a combined entry).
    pub city_code: String,
    /// State/province code.
    pub state_code: String,
    /// Country code.
    pub country_code: String,
    /// Alternate country code.
    pub alt_country_code: String,
    /// Region code.
    pub region_code: String,
    /// Continent code.
    pub continent_code: String,
    /// Latitude in WGS84 degrees.
    pub latitude: f64,
    /// Longitude in WGS84 degrees.
    pub longitude: f64,
    /// Geonames feature class.
    pub feature_class: String,
    /// Geonames feature code.
    pub feature_code: String,
    /// Administrative code, level 1.
    pub admin1_code: String,
    /// Administrative code, level 2.
    pub admin2_code: String,
    /// Administrative code, level 3.
    pub admin3_code: String,
    /// Administrative code, level 4.
    pub admin4_code: String,
    /// Population.
    pub population: u64,
    /// Elevation, meters.
    pub elevation: i32,
    /// GTOPO30 elevation estimate, meters.
    pub gtopo30: i32,
    /// Timezone identifier (e.g. `"Europe/Paris"`).
    pub timezone: String,
    /// GMT offset, hours.
    pub gmt_offset: f32,
    /// Daylight-saving offset, hours.
    pub dst_offset: f32,
    /// Raw (effective) UTC offset, hours.
    pub raw_offset: f32,
    /// Last modification date, `YYYY-MM-DD`.
    pub modification_date: String,
    /// Whether this record originates from the Geonames gazetteer.
    pub is_geonames: bool,
    /// Whether this POR is an airport.
    pub is_airport: bool,
    /// Whether this POR handles commercial traffic.
    pub is_commercial: bool,
    /// Wikipedia link, if any.
    pub wiki_link: String,
    /// PageRank percentage in `(0, 100]`; defaults to `0.10`.
    pub page_rank: f64,
    /// Envelope id: `0` = currently valid, non-zero = historical only.
    pub envelope_id: EnvelopeId,
    /// Names by language.
    pub names: NameMatrix,
    /// Associated city details, for non-city POR types.
    pub city_details: Option<CityDetails>,
}

impl PorRecord {
    /// Default PageRank assigned to a record with no known popularity score.
    pub const DEFAULT_PAGE_RANK: f64 = 0.10;
}

/// The field schema a catalog row delivers to the indexer (spec §6.1).
///
/// The CSV parser itself is out of scope; this struct is the contract the
/// indexer consumes. Field order matches the schema description, not
/// Rust convention, so that a real parser can populate it positionally.
#[derive(Debug, Clone, Default)]
pub struct PorCatalogRow {
    /// IATA code.
    pub iata_code: String,
    /// ICAO code.
    pub icao_code: String,
    /// FAA code.
    pub faa_code: String,
    /// Geonames id.
    pub geonames_id: u32,
    /// Envelope id.
    pub envelope_id: u32,
    /// Primary UTF-8 name.
    pub name: String,
    /// ASCII transliteration of the primary name.
    pub ascii_name: String,
    /// Latitude, degrees.
    pub latitude: f64,
    /// Longitude, degrees.
    pub longitude: f64,
    /// Geonames feature class.
    pub feature_class: String,
    /// Geonames feature code.
    pub feature_code: String,
    /// PageRank percentage.
    pub page_rank: f64,
    /// ISO start-of-validity date.
    pub date_from: String,
    /// ISO end-of-validity date.
    pub date_until: String,
    /// Free-text comment flag.
    pub comment_flag: String,
    /// Country code.
    pub country_code: String,
    /// Country name.
    pub country_name: String,
    /// Continent name.
    pub continent_name: String,
    /// Administrative code/name fields, levels 1-4.
    pub admin1_code: String,
    /// Admin1 UTF-8 name.
    pub admin1_name_utf: String,
    /// Admin1 ASCII name.
    pub admin1_name_ascii: String,
    /// Admin2 code.
    pub admin2_code: String,
    /// Admin2 UTF-8 name.
    pub admin2_name_utf: String,
    /// Admin2 ASCII name.
    pub admin2_name_ascii: String,
    /// Admin3 code.
    pub admin3_code: String,
    /// Admin4 code.
    pub admin4_code: String,
    /// Population.
    pub population: u64,
    /// Elevation, meters.
    pub elevation: i32,
    /// GTOPO30 elevation estimate.
    pub gtopo30: i32,
    /// Timezone identifier.
    pub timezone: String,
    /// GMT offset.
    pub gmt_offset: f32,
    /// DST offset.
    pub dst_offset: f32,
    /// Raw offset.
    pub raw_offset: f32,
    /// Last modification date.
    pub modification_date: String,
    /// Comma-separated list of associated city codes.
    pub city_code_list: Vec<String>,
    /// Parallel list of associated city names.
    pub city_name_list: Vec<String>,
    /// Parallel list of associated city detail blobs.
    pub city_detail_list: Vec<String>,
    /// Travel-POR list (other PORs served by this one).
    pub tvl_por_list: Vec<String>,
    /// IATA type single-character label.
    pub iata_type: char,
    /// Wikipedia link.
    pub wiki_link: String,
    /// Alternate name entries: `(language_code, name, short_name, comment)`.
    pub alt_names: Vec<(String, String, String, String)>,
}

/// Map from language code to the alternate names carried by a catalog row,
/// derived from [`PorCatalogRow::alt_names`].
pub fn group_alt_names(row: &PorCatalogRow) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (lang, name, _short_name, _comment) in &row.alt_names {
        grouped.entry(lang.clone()).or_default().push(name.clone());
    }
    grouped
}
