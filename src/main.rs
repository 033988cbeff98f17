//! Command-line demo: build a tiny in-memory index and interpret a query.

use trep::core::por::PorCatalogRow;
use trep::index::builder::InMemoryCatalog;
use trep::logging;
use trep::service::TrepService;

fn demo_rows() -> Vec<PorCatalogRow> {
    vec![
        PorCatalogRow {
            iata_code: "NCE".to_string(),
            icao_code: "LFMN".to_string(),
            geonames_id: 6299418,
            name: "Nice Cote d'Azur".to_string(),
            ascii_name: "Nice Cote d'Azur".to_string(),
            country_code: "FR".to_string(),
            iata_type: 'A',
            page_rank: 0.8,
            city_code_list: vec!["NCE".to_string()],
            city_name_list: vec!["Nice".to_string()],
            ..Default::default()
        },
        PorCatalogRow {
            iata_code: "SFO".to_string(),
            icao_code: "KSFO".to_string(),
            geonames_id: 5391959,
            name: "San Francisco International".to_string(),
            ascii_name: "San Francisco International".to_string(),
            country_code: "US".to_string(),
            iata_type: 'A',
            page_rank: 0.9,
            city_code_list: vec!["SFO".to_string()],
            city_name_list: vec!["San Francisco".to_string()],
            ..Default::default()
        },
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging()?;

    let mut service = TrepService::new(3, 5.0);
    let count = service.build_index(&InMemoryCatalog(demo_rows()))?;
    println!("indexed {count} points of reference");

    for query in ["nce", "sna francicso"] {
        let (locations, unmatched) = service.interpret(query, Some(5))?;
        println!("\nquery: {query}");
        for location in &locations {
            println!(
                "  {} ({:.1}%, edit distance {})",
                location.record.key.iata_code, location.matching_percentage, location.edit_distance
            );
        }
        if !unmatched.is_empty() {
            println!("  unmatched: {unmatched:?}");
        }
    }

    Ok(())
}
