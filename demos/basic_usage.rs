//! Basic usage example for geodata-rs
//!
//! This example demonstrates how to:
//! - Load the process-wide database
//! - Look up countries by code and list their states
//! - Walk the country -> state -> city hierarchy
//! - Search by phone code
//!
//! Run with: cargo run --example basic_usage

use geodata_core::prelude::*;

fn main() -> Result<()> {
    println!("=== geodata-rs Basic Usage Example ===\n");

    println!("Loading geographic database...");
    let db = GeoDb::load()?;
    println!("✓ Database loaded from {}\n", GeoDb::default_data_dir().display());

    // Example 1: Get all countries
    println!("--- Example 1: List all countries ---");
    let countries = db.countries();
    println!("Total countries: {}", countries.len());
    for (i, country) in countries.iter().take(5).enumerate() {
        println!("{}. {} {} ({})", i + 1, country.flag(), country.name(), country.iso2());
    }
    println!();

    // Example 2: Find a specific country, ISO2 or ISO3, any case
    println!("--- Example 2: Find country by code ---");
    for code in ["US", "usa", "De"] {
        match db.country_info(code) {
            Some(info) => println!(
                "{code}: {} | capital {} | {} states, {} cities",
                info.name(),
                info.capital,
                info.state_count,
                info.city_count
            ),
            None => println!("{code}: not found"),
        }
    }
    println!();

    // Example 3: Get states for a country
    println!("--- Example 3: List states for a country ---");
    let states = db.states_by_country("US");
    println!("States in the US: {}", states.len());
    for state in &states {
        println!("- {} ({})", state.name(), state.state_code());
    }
    println!();

    // Example 4: Cities of one state
    println!("--- Example 4: Cities of California ---");
    if let Some(california) = db.state_by_code("CA", "US") {
        for city in db.cities_by_state(california.id) {
            println!("- {}", city.name());
        }
    }
    println!();

    // Example 5: Search cities
    println!("--- Example 5: Cities containing 'san' ---");
    for city in db.search_cities("san", None, None) {
        println!("- {}", city.name());
    }
    println!();

    // Example 6: Phone codes, with or without '+'
    println!("--- Example 6: Countries with phone code +1 ---");
    for country in db.countries_by_phone_code("+1") {
        println!(
            "- {} {}",
            country.name(),
            db.country_phone_format(country.iso2()).unwrap_or_default()
        );
    }
    println!();

    // Example 7: Aggregates
    println!("--- Example 7: Statistics ---");
    let stats = db.statistics();
    println!(
        "{} countries, {} states, {} currencies, {} timezones",
        stats.total_countries, stats.total_states, stats.total_currencies, stats.total_timezones
    );

    println!("\n=== Example completed successfully ===");
    Ok(())
}
