//! Query benchmarks over a synthetic dataset sized like the real one
//! (about 250 countries, 5 000 states, 150 000 cities).
//!
//! Run with: cargo bench -p geodata-core

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use geodata_core::prelude::*;
use std::hint::black_box;

const COUNTRIES: u32 = 250;
const STATES_PER_COUNTRY: u32 = 20;
const CITIES_PER_STATE: u32 = 30;

fn iso2(i: u32) -> String {
    let a = (b'A' + (i / 26) as u8) as char;
    let b = (b'A' + (i % 26) as u8) as char;
    format!("{a}{b}")
}

fn synthetic() -> GeoDataset {
    let countries: Vec<Country> = (0..COUNTRIES)
        .map(|i| {
            serde_json::from_value(serde_json::json!({
                "id": i + 1,
                "name": format!("Country {i}"),
                "iso2": iso2(i),
                "iso3": format!("{}X", iso2(i)),
                "phone_code": (i % 40).to_string(),
                "currency": format!("C{:02}", i % 60),
                "region": format!("Region {}", i % 6),
                "subregion": format!("Subregion {}", i % 22),
                "timezones": [{
                    "zoneName": format!("Zone/{}", i % 120),
                    "gmtOffset": 0,
                    "gmtOffsetName": "UTC+00:00",
                    "abbreviation": "UTC",
                    "tzName": "Universal"
                }],
            }))
            .expect("synthetic country")
        })
        .collect();

    let mut states = Vec::new();
    let mut cities = Vec::new();
    for c in 1..=COUNTRIES {
        let mut nodes = Vec::new();
        for s in 0..STATES_PER_COUNTRY {
            let id = c * 100 + s;
            states.push(
                serde_json::from_value(serde_json::json!({
                    "id": id,
                    "name": format!("State {id}"),
                    "country_id": c,
                    "state_code": format!("S{s}"),
                }))
                .expect("synthetic state"),
            );
            nodes.push(StateCities {
                id,
                cities: (0..CITIES_PER_STATE)
                    .map(|k| City {
                        id: k,
                        name: format!("City {id}-{k}"),
                        latitude: None,
                        longitude: None,
                    })
                    .collect(),
            });
        }
        cities.push(CountryCities { id: c, states: nodes });
    }

    GeoDataset {
        countries,
        states,
        cities,
        regions: Vec::new(),
        languages: Vec::new(),
    }
}

// ============================================================================
// Index construction
// ============================================================================

fn bench_build(c: &mut Criterion) {
    let data = synthetic();
    c.bench_function("build_index", |b| {
        b.iter(|| GeoDb::new(black_box(data.clone())))
    });
}

// ============================================================================
// Lookups: indexed vs linear scan
// ============================================================================

fn bench_lookups(c: &mut Criterion) {
    let db = GeoDb::new(synthetic());
    let mut group = c.benchmark_group("country_by_code");

    for code in ["AA", "JP", "JPX"] {
        group.bench_with_input(BenchmarkId::new("indexed", code), code, |b, code| {
            b.iter(|| db.country_by_code(black_box(code)))
        });
        group.bench_with_input(BenchmarkId::new("linear", code), code, |b, code| {
            b.iter(|| {
                let upper = black_box(code).to_uppercase();
                db.countries()
                    .iter()
                    .find(|c| c.iso2 == upper || c.iso3 == upper)
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("states_by_country");
    group.bench_function("indexed", |b| b.iter(|| db.states_by_country(black_box("JP"))));
    group.bench_function("linear", |b| {
        b.iter(|| {
            let id = db.country_by_code(black_box("JP")).map(|c| c.id);
            db.states()
                .iter()
                .filter(|s| Some(s.country_id) == id)
                .count()
        })
    });
    group.finish();

    c.bench_function("cities_by_state", |b| {
        b.iter(|| db.cities_by_state(black_box(24_019)).len())
    });
}

// ============================================================================
// Free-text search
// ============================================================================

fn bench_search(c: &mut Criterion) {
    let db = GeoDb::new(synthetic());
    let mut group = c.benchmark_group("search_cities");

    group.bench_function("global", |b| {
        b.iter(|| db.search_cities(black_box("-17"), None, None).len())
    });
    group.bench_function("by_country", |b| {
        b.iter(|| db.search_cities(black_box("-17"), Some("JP"), None).len())
    });
    group.bench_function("by_state", |b| {
        b.iter(|| db.search_cities(black_box("-17"), None, Some(24_019)).len())
    });
    group.finish();

    c.bench_function("search_states", |b| {
        b.iter(|| db.search_states(black_box("state 24"), Some("ZZ")).len())
    });
}

// ============================================================================
// Derived catalogs
// ============================================================================

fn bench_catalogs(c: &mut Criterion) {
    let data = synthetic();
    c.bench_function("currencies_cold", |b| {
        b.iter_batched(
            || GeoDb::new(data.clone()),
            |db| db.currencies().len(),
            BatchSize::SmallInput,
        )
    });

    let db = GeoDb::new(data);
    db.currencies();
    c.bench_function("currencies_warm", |b| b.iter(|| db.currencies().len()));
    c.bench_function("statistics", |b| b.iter(|| db.statistics()));
}

criterion_group!(benches, bench_build, bench_lookups, bench_search, bench_catalogs);
criterion_main!(benches);
