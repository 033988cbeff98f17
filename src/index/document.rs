//! Index documents and their payload encoding (spec §4.6 step 3).

use crate::core::error::{Result, TrepError};
use crate::core::por::{CityDetails, NameMatrix, PorRecord, PorType};
use crate::core::types::{DocId, EnvelopeId, GeonamesId, PorKey};

/// Field separator used by the payload encoding. Chosen outside the
/// tokenizer's separator set so payload fields never collide with term
/// content during decode.
const FIELD_SEP: char = '\u{001F}';

/// One committed document: its assigned id, its key, and the raw payload
/// from which the original [`PorRecord`] can be reconstructed.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Document {
    /// Build-stable id (spec §6.3).
    pub doc_id: DocId,
    /// The document's POR key.
    pub key: PorKey,
    /// Single UTF-8 payload string, parseable back into a full POR record.
    pub payload: String,
}

impl Document {
    /// Reconstruct the originating [`PorRecord`] from this document's
    /// payload in a single pass (spec §4.6 step 3).
    pub fn decode(&self) -> Result<PorRecord> {
        decode_payload(&self.payload)
    }
}

/// Encode a POR record into the payload string committed alongside a
/// document: token-delimited, beginning with
/// `iata_code icao_code geonames_id envelope_id page_rank`, the remainder
/// implementation-defined but parseable back in one pass.
pub fn encode_payload(record: &PorRecord) -> String {
    let city = record
        .city_details
        .as_ref()
        .map(|c| format!("{}\u{001E}{}", c.city_code, c.city_name))
        .unwrap_or_default();

    let names: Vec<String> = record
        .names
        .iter()
        .map(|(lang, names)| format!("{}\u{001D}{}", lang, names.join("\u{001E}")))
        .collect();

    let fields = [
        record.key.iata_code.clone(),
        record.key.icao_code.clone(),
        record.key.geonames_id.0.to_string(),
        record.envelope_id.0.to_string(),
        record.page_rank.to_string(),
        (record.por_type.label()).to_string(),
        record.name_utf.clone(),
        record.name_ascii.clone(),
        record.faa_code.clone(),
        record.city_code.clone(),
        record.state_code.clone(),
        record.country_code.clone(),
        record.alt_country_code.clone(),
        record.region_code.clone(),
        record.continent_code.clone(),
        record.latitude.to_string(),
        record.longitude.to_string(),
        record.feature_class.clone(),
        record.feature_code.clone(),
        record.admin1_code.clone(),
        record.admin2_code.clone(),
        record.admin3_code.clone(),
        record.admin4_code.clone(),
        record.population.to_string(),
        record.elevation.to_string(),
        record.gtopo30.to_string(),
        record.timezone.clone(),
        record.gmt_offset.to_string(),
        record.dst_offset.to_string(),
        record.raw_offset.to_string(),
        record.modification_date.clone(),
        (record.is_geonames as u8).to_string(),
        (record.is_airport as u8).to_string(),
        (record.is_commercial as u8).to_string(),
        record.wiki_link.clone(),
        city,
        names.join("\u{001C}"),
    ];
    fields.join(&FIELD_SEP.to_string())
}

/// Inverse of [`encode_payload`].
pub fn decode_payload(payload: &str) -> Result<PorRecord> {
    let fields: Vec<&str> = payload.split(FIELD_SEP).collect();
    if fields.len() < 37 {
        return Err(TrepError::InvalidFormat(format!(
            "payload has {} fields, expected at least 37",
            fields.len()
        )));
    }

    let parse_f64 = |s: &str| s.parse::<f64>().map_err(|_| TrepError::CodeConversion(s.to_string()));
    let parse_f32 = |s: &str| s.parse::<f32>().map_err(|_| TrepError::CodeConversion(s.to_string()));
    let parse_u32 = |s: &str| s.parse::<u32>().map_err(|_| TrepError::CodeConversion(s.to_string()));
    let parse_u64 = |s: &str| s.parse::<u64>().map_err(|_| TrepError::CodeConversion(s.to_string()));
    let parse_i32 = |s: &str| s.parse::<i32>().map_err(|_| TrepError::CodeConversion(s.to_string()));

    let key = PorKey::new(fields[0], fields[1], parse_u32(fields[2])?);
    let envelope_id = EnvelopeId(parse_u32(fields[3])?);
    let page_rank = parse_f64(fields[4])?;
    let label = fields[5].chars().next().ok_or_else(|| TrepError::CodeConversion(fields[5].to_string()))?;
    let por_type = PorType::from_label(label).ok_or_else(|| TrepError::CodeConversion(label.to_string()))?;

    let city_details = if fields[35].is_empty() {
        None
    } else {
        let mut parts = fields[35].splitn(2, '\u{001E}');
        let city_code = parts.next().unwrap_or_default().to_string();
        let city_name = parts.next().unwrap_or_default().to_string();
        Some(CityDetails {
            city_key: None,
            city_code,
            city_name,
        })
    };

    let mut names = NameMatrix::new();
    if !fields[36].is_empty() {
        for lang_block in fields[36].split('\u{001C}') {
            let mut parts = lang_block.splitn(2, '\u{001D}');
            let lang = parts.next().unwrap_or_default();
            if let Some(name_list) = parts.next() {
                for name in name_list.split('\u{001E}') {
                    if !name.is_empty() {
                        names.push(lang, name.to_string());
                    }
                }
            }
        }
    }

    Ok(PorRecord {
        key,
        por_type,
        name_utf: fields[6].to_string(),
        name_ascii: fields[7].to_string(),
        faa_code: fields[8].to_string(),
        city_code: fields[9].to_string(),
        state_code: fields[10].to_string(),
        country_code: fields[11].to_string(),
        alt_country_code: fields[12].to_string(),
        region_code: fields[13].to_string(),
        continent_code: fields[14].to_string(),
        latitude: parse_f64(fields[15])?,
        longitude: parse_f64(fields[16])?,
        feature_class: fields[17].to_string(),
        feature_code: fields[18].to_string(),
        admin1_code: fields[19].to_string(),
        admin2_code: fields[20].to_string(),
        admin3_code: fields[21].to_string(),
        admin4_code: fields[22].to_string(),
        population: parse_u64(fields[23])?,
        elevation: parse_i32(fields[24])?,
        gtopo30: parse_i32(fields[25])?,
        timezone: fields[26].to_string(),
        gmt_offset: parse_f32(fields[27])?,
        dst_offset: parse_f32(fields[28])?,
        raw_offset: parse_f32(fields[29])?,
        modification_date: fields[30].to_string(),
        is_geonames: fields[31] == "1",
        is_airport: fields[32] == "1",
        is_commercial: fields[33] == "1",
        wiki_link: fields[34].to_string(),
        page_rank,
        envelope_id,
        names,
        city_details,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::por::PorType;

    fn sample_record() -> PorRecord {
        let mut names = NameMatrix::new();
        names.push("en", "Nice");
        names.push("fr", "Nice");
        PorRecord {
            key: PorKey::new("NCE", "LFMN", 6299418),
            por_type: PorType::Airp,
            name_utf: "Nice".to_string(),
            name_ascii: "Nice".to_string(),
            faa_code: String::new(),
            city_code: "NCE".to_string(),
            state_code: String::new(),
            country_code: "FR".to_string(),
            alt_country_code: String::new(),
            region_code: String::new(),
            continent_code: "EU".to_string(),
            latitude: 43.66,
            longitude: 7.215,
            feature_class: "S".to_string(),
            feature_code: "AIRP".to_string(),
            admin1_code: String::new(),
            admin2_code: String::new(),
            admin3_code: String::new(),
            admin4_code: String::new(),
            population: 0,
            elevation: 4,
            gtopo30: 4,
            timezone: "Europe/Paris".to_string(),
            gmt_offset: 1.0,
            dst_offset: 2.0,
            raw_offset: 1.0,
            modification_date: "2024-01-01".to_string(),
            is_geonames: true,
            is_airport: true,
            is_commercial: true,
            wiki_link: String::new(),
            page_rank: 0.42,
            envelope_id: EnvelopeId::VALID,
            names,
            city_details: None,
        }
    }

    #[test]
    fn payload_roundtrips() {
        let record = sample_record();
        let payload = encode_payload(&record);
        let decoded = decode_payload(&payload).expect("decode");
        assert_eq!(decoded.key, record.key);
        assert_eq!(decoded.name_utf, record.name_utf);
        assert_eq!(decoded.por_type, record.por_type);
        assert_eq!(decoded.names.names_for("en"), record.names.names_for("en"));
    }
}
