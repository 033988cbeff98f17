//! Builds one [`TravelIndex`] from a catalog source (spec §4.6).

use crate::combo::word_combination::WordCombinationHolder;
use crate::core::error::{Result, TrepError};
use crate::core::por::{group_alt_names, CityDetails, NameMatrix, PorCatalogRow, PorRecord, PorType};
use crate::core::types::{EnvelopeId, PorKey};
use crate::index::document::encode_payload;
use crate::index::document::Document;
use crate::index::TravelIndex;
use crate::text::transliterate::normalize;
use tracing::warn;

/// Source of catalog rows consumed by the indexer (spec §A.5, external
/// collaborator contract). The real CSV parser is out of scope; this trait
/// is the schema boundary.
pub trait CatalogSource {
    /// Yield every row in the catalog, in file order.
    fn rows(&self) -> Result<Vec<PorCatalogRow>>;
}

/// In-memory [`CatalogSource`] used by tests and by callers who already
/// have rows in hand.
pub struct InMemoryCatalog(pub Vec<PorCatalogRow>);

impl CatalogSource for InMemoryCatalog {
    fn rows(&self) -> Result<Vec<PorCatalogRow>> {
        Ok(self.0.clone())
    }
}

/// Builds a [`TravelIndex`] from a [`CatalogSource`] within one
/// transaction: either every document is indexed or the previous index is
/// returned untouched (spec §4.6, transactional discipline).
pub struct IndexBuilder {
    min_word_length: usize,
}

impl IndexBuilder {
    /// A builder using the given minimum word length (spec §4.2).
    pub fn new(min_word_length: usize) -> Self {
        Self { min_word_length }
    }

    /// Build a fresh index from every row in `source`. Rows that fail to
    /// convert into a [`PorRecord`] are skipped and logged (spec §7,
    /// *Parse* kind); the build itself only fails if the source cannot be
    /// read at all.
    pub fn build(&self, source: &dyn CatalogSource) -> Result<TravelIndex> {
        let rows = source.rows()?;
        let mut index = TravelIndex::new();

        for (row_number, row) in rows.iter().enumerate() {
            match row_to_record(row) {
                Ok(record) => self.add_document(&mut index, &record),
                Err(reason) => {
                    warn!(row = row_number, %reason, "skipping unparseable catalog row");
                }
            }
        }

        Ok(index)
    }

    /// Index one POR record: terms for codes, terms and spelling entries
    /// for every name in the name matrix, and the payload, then commit the
    /// document (spec §4.6 steps 1-4).
    pub fn add_document(&self, index: &mut TravelIndex, record: &PorRecord) {
        let payload = encode_payload(record);
        let doc_id = index.push_document(Document {
            doc_id: crate::core::types::DocId(0), // assigned by push_document
            key: record.key.clone(),
            payload,
        });

        // step 1: code and administrative terms
        index.add_code(&record.key.iata_code, doc_id);
        if !record.key.icao_code.is_empty() {
            index.add_code(&record.key.icao_code, doc_id);
        }
        index.add_code(&record.key.geonames_id.0.to_string(), doc_id);
        if record.city_code != record.key.iata_code {
            index.add_term(&normalize(&record.city_code), doc_id);
        }
        index.add_term(&normalize(&record.state_code), doc_id);
        index.add_term(&normalize(&record.country_code), doc_id);
        index.add_term(&normalize(&record.region_code), doc_id);

        // step 2: every name in the name matrix
        for (_lang, names) in record.names.iter() {
            for name in names {
                let normalized = normalize(name);
                let holder = WordCombinationHolder::build(&normalized, self.min_word_length);
                for combination in holder.combinations() {
                    index.add_term(combination, doc_id);
                }
                index.add_term(&normalized, doc_id);
            }
        }
        let normalized_primary = normalize(&record.name_utf);
        let holder = WordCombinationHolder::build(&normalized_primary, self.min_word_length);
        for combination in holder.combinations() {
            index.add_term(combination, doc_id);
        }
        index.add_term(&normalized_primary, doc_id);
    }
}

fn row_to_record(row: &PorCatalogRow) -> std::result::Result<PorRecord, String> {
    if row.iata_code.is_empty() && row.geonames_id == 0 {
        return Err("row has neither IATA code nor geonames id".to_string());
    }
    let por_type = PorType::from_label(row.iata_type)
        .ok_or_else(|| format!("unknown IATA type label '{}'", row.iata_type))?;

    let mut names = NameMatrix::new();
    names.push("utf", row.name.clone());
    for (lang, group) in group_alt_names(row) {
        for name in group {
            names.push(&lang, name);
        }
    }

    let city_details = row.city_code_list.first().map(|code| CityDetails {
        city_key: None,
        city_code: code.clone(),
        city_name: row.city_name_list.first().cloned().unwrap_or_default(),
    });

    Ok(PorRecord {
        key: PorKey::new(row.iata_code.clone(), row.icao_code.clone(), row.geonames_id),
        por_type,
        name_utf: row.name.clone(),
        name_ascii: row.ascii_name.clone(),
        faa_code: row.faa_code.clone(),
        city_code: row.city_code_list.first().cloned().unwrap_or_else(|| row.iata_code.clone()),
        state_code: row.admin1_code.clone(),
        country_code: row.country_code.clone(),
        alt_country_code: String::new(),
        region_code: row.admin2_code.clone(),
        continent_code: row.continent_name.clone(),
        latitude: row.latitude,
        longitude: row.longitude,
        feature_class: row.feature_class.clone(),
        feature_code: row.feature_code.clone(),
        admin1_code: row.admin1_code.clone(),
        admin2_code: row.admin2_code.clone(),
        admin3_code: row.admin3_code.clone(),
        admin4_code: row.admin4_code.clone(),
        population: row.population,
        elevation: row.elevation,
        gtopo30: row.gtopo30,
        timezone: row.timezone.clone(),
        gmt_offset: row.gmt_offset,
        dst_offset: row.dst_offset,
        raw_offset: row.raw_offset,
        modification_date: row.modification_date.clone(),
        is_geonames: row.geonames_id != 0,
        is_airport: matches!(
            por_type,
            PorType::Airp | PorType::CtyAirp
        ),
        is_commercial: row.feature_code != "AIRF",
        wiki_link: row.wiki_link.clone(),
        page_rank: if row.page_rank > 0.0 { row.page_rank } else { PorRecord::DEFAULT_PAGE_RANK },
        envelope_id: EnvelopeId(row.envelope_id),
        names,
        city_details,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> PorCatalogRow {
        PorCatalogRow {
            iata_code: "NCE".to_string(),
            icao_code: "LFMN".to_string(),
            geonames_id: 6299418,
            name: "Nice Cote d Azur".to_string(),
            ascii_name: "Nice Cote d Azur".to_string(),
            iata_type: 'A',
            country_code: "FR".to_string(),
            feature_code: "AIRP".to_string(),
            city_code_list: vec!["NCE".to_string()],
            city_name_list: vec!["Nice".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn builds_index_with_code_and_name_terms() {
        let catalog = InMemoryCatalog(vec![sample_row()]);
        let builder = IndexBuilder::new(3);
        let index = builder.build(&catalog).expect("build");
        assert_eq!(index.size(), 1);
        assert!(index.lookup_code("NCE").is_some());
        assert!(index.contains_term("nice cote d azur"));
    }

    #[test]
    fn skips_unparseable_rows_without_failing_the_build() {
        let mut bad_row = sample_row();
        bad_row.iata_type = 'Z';
        let catalog = InMemoryCatalog(vec![bad_row, sample_row()]);
        let builder = IndexBuilder::new(3);
        let index = builder.build(&catalog).expect("build");
        assert_eq!(index.size(), 1);
    }
}
