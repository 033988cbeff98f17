//! End-to-end scenarios E1-E6: a service built over a small world catalog,
//! queried the way a caller would.

use trep::core::por::PorCatalogRow;
use trep::index::builder::InMemoryCatalog;
use trep::service::TrepService;
use trep::ServiceError;

fn row(iata: &str, icao: &str, geonames_id: u32, name: &str, country: &str, page_rank: f64) -> PorCatalogRow {
    PorCatalogRow {
        iata_code: iata.to_string(),
        icao_code: icao.to_string(),
        geonames_id,
        name: name.to_string(),
        ascii_name: name.to_string(),
        country_code: country.to_string(),
        iata_type: 'A',
        page_rank,
        city_code_list: vec![iata.to_string()],
        city_name_list: vec![name.to_string()],
        ..Default::default()
    }
}

fn world_catalog() -> Vec<PorCatalogRow> {
    vec![
        row("NCE", "LFMN", 6299418, "Nice Cote d'Azur", "FR", 0.4),
        row("SFO", "KSFO", 5391959, "San Francisco International", "US", 0.9),
        row("RIO", "SBRJ", 3451190, "Rio de Janeiro Santos Dumont", "BR", 0.5),
        row("LAX", "KLAX", 5368361, "Los Angeles International", "US", 0.9),
        row("REK", "BIRK", 3413829, "Reykjavik", "IS", 0.3),
        row("IEV", "UKKK", 703448, "Kiev Zhuliany International", "UA", 0.3),
        row("MOW", "UUWW", 524901, "Moscow", "RU", 0.5),
        row("CXJ", "SBCX", 3459492, "Chelsea Municipal", "US", 0.1),
        row("SNA", "KSNA", 5405675, "Santa Ana John Wayne", "US", 0.4),
    ]
}

fn built_service() -> TrepService {
    let mut service = TrepService::new(3, 5.0);
    service.build_index(&InMemoryCatalog(world_catalog())).expect("build index");
    service
}

#[test]
fn e1_exact_code_matches_with_zero_edit_distance() {
    let service = built_service();
    let (locations, unmatched) = service.interpret("nce", None).expect("interpret");

    assert_eq!(unmatched, Vec::<String>::new());
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].record.key.iata_code, "NCE");
    assert_eq!(locations[0].matching_percentage, 100.0);
    assert_eq!(locations[0].edit_distance, 0);
}

#[test]
fn e2_misspelled_multi_place_query_recovers_every_code() {
    let service = built_service();
    let (locations, _unmatched) = service
        .interpret("sna francicso rio de janero lso angles reykyavki nce iev mow", None)
        .expect("interpret");

    let codes: Vec<&str> = locations.iter().map(|l| l.record.key.iata_code.as_str()).collect();
    let expected = ["SFO", "RIO", "LAX", "REK", "NCE", "IEV", "MOW"];
    let in_slice_order: Vec<&str> = codes.iter().copied().filter(|c| expected.contains(c)).collect();
    assert_eq!(in_slice_order, expected, "expected codes in slice order, got {codes:?}");
    for location in &locations {
        assert!(location.edit_distance <= location.allowable_edit_distance);
    }
}

#[test]
fn e3_blacklisted_trailing_word_is_dropped_before_matching() {
    let service = built_service();
    let (locations, _unmatched) = service.interpret("chelsea municipal airport", None).expect("interpret");

    assert!(locations.iter().any(|l| l.record.key.iata_code == "CXJ"));
    let chelsea = locations.iter().find(|l| l.record.key.iata_code == "CXJ").unwrap();
    assert!(chelsea.matching_percentage >= 90.0);
}

#[test]
fn e4_coarser_partition_wins_the_tie_and_yields_one_location() {
    let service = built_service();
    let (locations, _unmatched) = service.interpret("san francisco", None).expect("interpret");

    let sfo_matches: Vec<_> = locations.iter().filter(|l| l.record.key.iata_code == "SFO").collect();
    assert_eq!(sfo_matches.len(), 1);
    assert!(sfo_matches[0].matching_percentage >= 99.999);
}

#[test]
fn e5_empty_query_fails_with_empty() {
    let service = built_service();
    assert!(matches!(service.interpret("", None), Err(ServiceError::Empty)));
    assert!(matches!(service.interpret("   ", None), Err(ServiceError::Empty)));
}

#[test]
fn e6_build_index_reports_row_count_and_is_immediately_queryable() {
    let mut service = TrepService::new(3, 5.0);
    let count = service.build_index(&InMemoryCatalog(world_catalog())).expect("build");

    assert_eq!(count, 9);
    assert_eq!(service.size(), 9);

    let (locations, _) = service.interpret("nce", None).expect("interpret");
    assert_eq!(locations.len(), 1);
}
