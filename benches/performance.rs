//! Benchmarks for the hot paths of query interpretation: normalization,
//! partition enumeration, and full-text matching against a small committed
//! index.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trep::combo::enumerate_partitions;
use trep::core::por::PorCatalogRow;
use trep::index::builder::{IndexBuilder, InMemoryCatalog};
use trep::matcher::FullTextMatcher;
use trep::text::transliterate::normalize;

fn benchmark_normalize(c: &mut Criterion) {
    let phrase = "Sna Fra\u{0301}ncicso Rio de Janeiro";
    c.bench_function("normalize", |b| {
        b.iter(|| black_box(normalize(black_box(phrase))));
    });
}

fn benchmark_partition_enumeration(c: &mut Criterion) {
    let tokens: Vec<String> = "san francisco international airport terminal two".split(' ').map(String::from).collect();
    c.bench_function("enumerate_partitions_6_tokens", |b| {
        b.iter(|| black_box(enumerate_partitions(black_box(&tokens))));
    });
}

fn sample_catalog() -> Vec<PorCatalogRow> {
    (0..200)
        .map(|i| PorCatalogRow {
            iata_code: format!("A{i:02}"),
            geonames_id: 1_000_000 + i,
            name: format!("Sample Airport Number {i}"),
            ascii_name: format!("Sample Airport Number {i}"),
            iata_type: 'A',
            country_code: "FR".to_string(),
            ..Default::default()
        })
        .collect()
}

fn benchmark_full_text_match(c: &mut Criterion) {
    let builder = IndexBuilder::new(3);
    let index = builder.build(&InMemoryCatalog(sample_catalog())).expect("build");
    let matcher = FullTextMatcher::new(&index);

    c.bench_function("match_phrase_exact", |b| {
        b.iter(|| black_box(matcher.match_phrase(black_box("sample airport number 42"))));
    });

    c.bench_function("match_phrase_misspelled", |b| {
        b.iter(|| black_box(matcher.match_phrase(black_box("smaple airpotr number 42"))));
    });
}

criterion_group!(benches, benchmark_normalize, benchmark_partition_enumeration, benchmark_full_text_match);
criterion_main!(benches);
