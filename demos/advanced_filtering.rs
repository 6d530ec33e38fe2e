//! Advanced filtering example for geodata-rs
//!
//! This example demonstrates combining the exact-match filters, the derived
//! currency/timezone catalogs and scoped free-text searches.
//!
//! Run with: cargo run --example advanced_filtering

use geodata_core::prelude::*;

fn main() -> Result<()> {
    println!("=== geodata-rs Advanced Filtering Example ===\n");

    let db = GeoDb::load()?;

    // Example 1: Countries in a region using a given currency
    println!("--- Example 1: Countries in Europe using Euro ---");
    let euro_countries: Vec<_> = db
        .countries_by_region("Europe")
        .into_iter()
        .filter(|c| c.currency() == "EUR")
        .collect();
    println!("Found {} countries:", euro_countries.len());
    for country in &euro_countries {
        println!("- {} ({})", country.name(), country.iso2());
    }
    println!();

    // Example 2: Free-text search looks at name, native name, capital and nationality
    println!("--- Example 2: Countries matching 'united' ---");
    for country in db.search_countries("united") {
        println!("- {} (native: {})", country.name(), country.native_name);
    }
    println!();

    // Example 3: Largest states by number of cities
    println!("--- Example 3: States by number of cities ---");
    let mut by_size: Vec<(&State, usize)> = db
        .states()
        .iter()
        .map(|s| (s, db.cities_by_state(s.id).len()))
        .filter(|(_, n)| *n > 0)
        .collect();
    by_size.sort_by(|a, b| b.1.cmp(&a.1));
    for (state, n) in by_size.iter().take(5) {
        println!("- {} ({}): {n} cities", state.name(), state.country_code);
    }
    println!();

    // Example 4: State search, scoped and with an unknown country
    println!("--- Example 4: States matching 'cali' ---");
    let scoped = db.search_states("cali", Some("US"));
    let global = db.search_states("cali", Some("ZZ"));
    println!("In the US: {}", names(&scoped));
    println!("Unknown country (searches everywhere): {}", names(&global));
    println!();

    // Example 5: City search narrowed by country and state
    println!("--- Example 5: Narrowing a city search ---");
    let everywhere = db.search_cities("o", None, None);
    let in_canada = db.search_cities("o", Some("CAN"), None);
    let in_ontario = db
        .state_by_code("ON", "CA")
        .map(|on| db.search_cities("o", Some("CA"), Some(on.id)))
        .unwrap_or_default();
    println!(
        "'o': {} everywhere, {} in Canada, {} in Ontario",
        everywhere.len(),
        in_canada.len(),
        in_ontario.len()
    );
    println!();

    // Example 6: Derived currency catalog (first country wins on conflicts)
    println!("--- Example 6: Currencies ---");
    for currency in db.currencies() {
        let users = db.countries_by_currency(&currency.code);
        println!(
            "- {} {} {} used by {} countries",
            currency.code,
            currency.symbol,
            currency.name,
            users.len()
        );
    }
    println!();

    // Example 7: Timezones shared by several countries
    println!("--- Example 7: Shared timezones ---");
    for tz in db.timezones() {
        let countries = db.countries_by_timezone(&tz.zone_name);
        if countries.len() > 1 {
            let list: Vec<&str> = countries.iter().map(|c| c.iso2()).collect();
            println!("- {} ({}): {}", tz.zone_name, tz.gmt_offset_name, list.join(", "));
        }
    }
    println!();

    // Example 8: Regions and subregions as they appear on countries
    println!("--- Example 8: Regions ---");
    println!("Regions: {}", db.unique_regions().join(", "));
    println!("Subregions: {}", db.unique_subregions().join(", "));

    println!("\n=== Example completed successfully ===");
    Ok(())
}

fn names(states: &[&State]) -> String {
    states
        .iter()
        .map(|s| s.name())
        .collect::<Vec<_>>()
        .join(", ")
}
