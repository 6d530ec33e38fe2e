//! Property tests: the indexed engine must agree with a plain linear scan
//! over the same collections, element for element and in the same order.
//!
//! The generators draw ids and codes from small pools so that duplicate
//! ids, shared currencies, orphan states and repeated hierarchy entries are
//! common.

use geodata_core::prelude::*;
use proptest::prelude::*;
use proptest::sample::select;
use serde_json::json;

// ============================================================================
// Generators
// ============================================================================

fn arb_timezone() -> impl Strategy<Value = serde_json::Value> {
    (
        select(vec!["Europe/Paris", "America/New_York", "Asia/Tokyo", "UTC"]),
        select(vec!["CET", "EST", "JST", "UTC"]),
    )
        .prop_map(|(zone, abbr)| {
            json!({
                "zoneName": zone,
                "gmtOffset": 0,
                "gmtOffsetName": "UTC+00:00",
                "abbreviation": abbr,
                "tzName": format!("{abbr} time"),
            })
        })
}

fn arb_country() -> impl Strategy<Value = Country> {
    (
        1u32..6,
        select(vec!["AA", "AB", "BA", "BB", "CC"]),
        select(vec!["AAA", "ABB", "BAA", "CCC"]),
        select(vec!["Alpha", "Beta", "Gamma Land", "delta", "Épsilon"]),
        select(vec!["USD", "EUR", "XAF"]),
        select(vec!["Dollar", "Euro", "Franc"]),
        select(vec!["1", "44", "1-684"]),
        select(vec!["Europe", "Asia", ""]),
        select(vec!["North", "South", "West"]),
        prop::collection::vec(arb_timezone(), 0..3),
    )
        .prop_map(
            |(id, iso2, iso3, name, currency, currency_name, phone, region, subregion, tzs)| {
                serde_json::from_value(json!({
                    "id": id,
                    "name": name,
                    "iso2": iso2,
                    "iso3": iso3,
                    "phone_code": phone,
                    "capital": format!("{name} City"),
                    "currency": currency,
                    "currency_name": currency_name,
                    "currency_symbol": "$",
                    "native": name.to_uppercase(),
                    "region": region,
                    "subregion": subregion,
                    "nationality": format!("{name}ian"),
                    "timezones": tzs,
                }))
                .unwrap()
            },
        )
}

fn arb_state() -> impl Strategy<Value = State> {
    (
        1u32..8,
        0u32..7,
        select(vec!["A", "B", "CA"]),
        select(vec!["Northland", "Southland", "California", "Baja California"]),
    )
        .prop_map(|(id, country_id, code, name)| {
            serde_json::from_value(json!({
                "id": id,
                "name": name,
                "country_id": country_id,
                "state_code": code,
            }))
            .unwrap()
        })
}

fn arb_city() -> impl Strategy<Value = City> {
    (1u32..5, select(vec!["Springfield", "Shelbyville", "Ogdenville", "springs"])).prop_map(
        |(id, name)| City {
            id,
            name: name.to_owned(),
            latitude: None,
            longitude: None,
        },
    )
}

fn arb_hierarchy() -> impl Strategy<Value = Vec<CountryCities>> {
    let state_node = (0u32..8, prop::collection::vec(arb_city(), 0..4))
        .prop_map(|(id, cities)| StateCities { id, cities });
    let country_node = (0u32..7, prop::collection::vec(state_node, 0..4))
        .prop_map(|(id, states)| CountryCities { id, states });
    prop::collection::vec(country_node, 0..5)
}

fn arb_dataset() -> impl Strategy<Value = GeoDataset> {
    (
        prop::collection::vec(arb_country(), 0..6),
        prop::collection::vec(arb_state(), 0..10),
        arb_hierarchy(),
    )
        .prop_map(|(countries, states, cities)| GeoDataset {
            countries,
            states,
            cities,
            regions: Vec::new(),
            languages: Vec::new(),
        })
}

fn arb_code() -> impl Strategy<Value = &'static str> {
    select(vec!["AA", "ab", "Bb", "AAA", "abb", "ccc", "ZZ", ""])
}

fn arb_query() -> impl Strategy<Value = &'static str> {
    select(vec!["", "a", "AL", "land", "cali", "spring", "x", "épsilon"])
}

// ============================================================================
// Linear-scan reference
// ============================================================================

fn addrs<T>(items: &[&T]) -> Vec<*const T> {
    items.iter().map(|&item| item as *const T).collect()
}

fn lin_country<'a>(data: &'a GeoDataset, code: &str) -> Option<&'a Country> {
    let upper = code.to_uppercase();
    data.countries
        .iter()
        .find(|c| {
            (!c.iso2.is_empty() && c.iso2 == upper) || (!c.iso3.is_empty() && c.iso3 == upper)
        })
}

fn lin_states_by_country<'a>(data: &'a GeoDataset, code: &str) -> Vec<&'a State> {
    match lin_country(data, code) {
        Some(country) => data.states.iter().filter(|s| s.country_id == country.id).collect(),
        None => Vec::new(),
    }
}

fn lin_search_states<'a>(data: &'a GeoDataset, query: &str, code: Option<&str>) -> Vec<&'a State> {
    let q = query.to_lowercase();
    let scope = code.filter(|c| !c.is_empty()).and_then(|c| lin_country(data, c));
    data.states
        .iter()
        .filter(|s| scope.map_or(true, |country| s.country_id == country.id))
        .filter(|s| s.name.to_lowercase().contains(&q))
        .collect()
}

fn lin_cities_by_state(data: &GeoDataset, state_id: u32) -> &[City] {
    for country in &data.cities {
        for state in &country.states {
            if state.id == state_id {
                return &state.cities;
            }
        }
    }
    &[]
}

fn lin_cities_by_country<'a>(data: &'a GeoDataset, code: &str) -> Vec<&'a City> {
    let Some(country) = lin_country(data, code) else {
        return Vec::new();
    };
    match data.cities.iter().find(|c| c.id == country.id) {
        Some(entry) => entry.states.iter().flat_map(|s| s.cities.iter()).collect(),
        None => Vec::new(),
    }
}

fn lin_search_cities<'a>(
    data: &'a GeoDataset,
    query: &str,
    code: Option<&str>,
    state_id: Option<u32>,
) -> Vec<&'a City> {
    let q = query.to_lowercase();
    let target = match code.filter(|c| !c.is_empty()) {
        Some(c) => match lin_country(data, c) {
            Some(country) => Some(country.id),
            None => return Vec::new(),
        },
        None => None,
    };
    let mut out = Vec::new();
    for country in &data.cities {
        if target.is_some_and(|id| id != country.id) {
            continue;
        }
        for state in &country.states {
            if state_id.is_some_and(|id| id != state.id) {
                continue;
            }
            out.extend(state.cities.iter().filter(|c| c.name.to_lowercase().contains(&q)));
        }
    }
    out
}

fn lin_currencies(data: &GeoDataset) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = Vec::new();
    for c in &data.countries {
        if !out.iter().any(|(code, _)| *code == c.currency) {
            out.push((c.currency.clone(), c.currency_name.clone()));
        }
    }
    out
}

fn lin_timezones(data: &GeoDataset) -> Vec<Timezone> {
    let mut out: Vec<Timezone> = Vec::new();
    for tz in data.countries.iter().flat_map(|c| c.timezones.iter()) {
        if !out.iter().any(|t| t.zone_name == tz.zone_name) {
            out.push(tz.clone());
        }
    }
    out
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_country_lookup_matches_scan(data in arb_dataset(), code in arb_code()) {
        let db = GeoDb::new(data);
        prop_assert_eq!(
            db.country_by_code(code).map(|c| c as *const Country),
            lin_country(db.raw(), code).map(|c| c as *const Country)
        );
    }

    #[test]
    fn prop_country_scoped_queries_match_scan(data in arb_dataset(), code in arb_code()) {
        let db = GeoDb::new(data);
        let raw = db.raw();

        prop_assert_eq!(
            addrs(&db.states_by_country(code)),
            addrs(&lin_states_by_country(raw, code))
        );
        prop_assert_eq!(
            addrs(&db.cities_by_country(code)),
            addrs(&lin_cities_by_country(raw, code))
        );
        prop_assert_eq!(db.is_valid_country_code(code), lin_country(raw, code).is_some());

        if let Some(info) = db.country_info(code) {
            let expected_states = raw.states.iter().filter(|s| s.country_id == info.id).count();
            prop_assert_eq!(info.state_count, expected_states);
            prop_assert_eq!(info.city_count, lin_cities_by_country(raw, code).len());
        }
    }

    #[test]
    fn prop_state_by_code_matches_scan(
        data in arb_dataset(),
        code in arb_code(),
        state_code in select(vec!["A", "B", "CA", "ca"]),
    ) {
        let db = GeoDb::new(data);
        let raw = db.raw();
        let expected = lin_country(raw, code).and_then(|country| {
            raw.states
                .iter()
                .find(|s| s.state_code == state_code && s.country_id == country.id)
        });
        prop_assert_eq!(
            db.state_by_code(state_code, code).map(|s| s as *const State),
            expected.map(|s| s as *const State)
        );
    }

    #[test]
    fn prop_search_states_matches_scan(
        data in arb_dataset(),
        query in arb_query(),
        code in proptest::option::of(arb_code()),
    ) {
        let db = GeoDb::new(data);
        prop_assert_eq!(
            addrs(&db.search_states(query, code)),
            addrs(&lin_search_states(db.raw(), query, code))
        );
    }

    #[test]
    fn prop_city_queries_match_scan(
        data in arb_dataset(),
        query in arb_query(),
        code in proptest::option::of(arb_code()),
        state_id in proptest::option::of(0u32..8),
    ) {
        let db = GeoDb::new(data);
        let raw = db.raw();

        let got = db.search_cities(query, code, state_id);
        prop_assert_eq!(addrs(&got), addrs(&lin_search_cities(raw, query, code, state_id)));

        // Narrowing never adds matches.
        let all = addrs(&db.search_cities(query, None, None));
        for city in addrs(&got) {
            prop_assert!(all.contains(&city));
        }

        if let Some(id) = state_id {
            let indexed: Vec<&City> = db.cities_by_state(id).iter().collect();
            let scanned: Vec<&City> = lin_cities_by_state(raw, id).iter().collect();
            prop_assert_eq!(addrs(&indexed), addrs(&scanned));
        }
    }

    #[test]
    fn prop_attribute_filters_match_scan(
        data in arb_dataset(),
        currency in select(vec!["USD", "EUR", "XAF", "usd"]),
        phone in select(vec!["1", "+1", "44", "+44", "1-684", "+1-684", "7"]),
        zone in select(vec!["Europe/Paris", "UTC", "Mars/Olympus"]),
        region in select(vec!["Europe", "Asia", "", "europe"]),
    ) {
        let db = GeoDb::new(data);
        let raw = db.raw();
        let bare = phone.strip_prefix('+').unwrap_or(phone);

        let scan = |pred: &dyn Fn(&Country) -> bool| -> Vec<*const Country> {
            raw.countries.iter().filter(|&c| pred(c)).map(|c| c as *const Country).collect()
        };

        prop_assert_eq!(addrs(&db.countries_by_currency(currency)), scan(&|c| c.currency == currency));
        prop_assert_eq!(addrs(&db.countries_by_phone_code(phone)), scan(&|c| c.phone_code == bare));
        prop_assert_eq!(addrs(&db.countries_by_timezone(zone)), scan(&|c| c.has_timezone(zone)));
        prop_assert_eq!(addrs(&db.countries_by_region(region)), scan(&|c| c.region == region));
        prop_assert_eq!(addrs(&db.countries_by_subregion("North")), scan(&|c| c.subregion == "North"));
    }

    #[test]
    fn prop_search_countries_matches_scan(data in arb_dataset(), query in arb_query()) {
        let db = GeoDb::new(data);
        let q = query.to_lowercase();
        let expected: Vec<*const Country> = db
            .raw()
            .countries
            .iter()
            .filter(|c| {
                [&c.name, &c.native_name, &c.capital, &c.nationality]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&q))
            })
            .map(|c| c as *const Country)
            .collect();
        prop_assert_eq!(addrs(&db.search_countries(query)), expected);
    }

    #[test]
    fn prop_catalogs_are_first_seen_and_unique(data in arb_dataset()) {
        let db = GeoDb::new(data);
        let raw = db.raw();

        let currencies: Vec<(String, String)> = db
            .currencies()
            .iter()
            .map(|c| (c.code.clone(), c.name.clone()))
            .collect();
        prop_assert_eq!(&currencies, &lin_currencies(raw));
        let expected_timezones = lin_timezones(raw);
        prop_assert_eq!(db.timezones(), expected_timezones.as_slice());

        let stats = db.statistics();
        prop_assert_eq!(stats.total_currencies, db.currencies().len());
        prop_assert_eq!(stats.total_timezones, db.timezones().len());

        for (code, name) in &currencies {
            let first = raw.countries.iter().find(|c| &c.currency == code).unwrap();
            let by_code = db.currency_by_code(code).unwrap();
            prop_assert_eq!(&by_code.name, &first.currency_name);
            prop_assert_eq!(&by_code.name, name);
        }
    }

    #[test]
    fn prop_queries_are_idempotent(
        data in arb_dataset(),
        query in arb_query(),
        code in arb_code(),
    ) {
        let db = GeoDb::new(data);
        prop_assert_eq!(
            addrs(&db.search_states(query, Some(code))),
            addrs(&db.search_states(query, Some(code)))
        );
        prop_assert_eq!(
            addrs(&db.search_cities(query, Some(code), None)),
            addrs(&db.search_cities(query, Some(code), None))
        );
        prop_assert_eq!(db.currencies().as_ptr(), db.currencies().as_ptr());
        prop_assert_eq!(db.country_info(code), db.country_info(code));
        prop_assert_eq!(db.unique_regions(), db.unique_regions());
    }
}
