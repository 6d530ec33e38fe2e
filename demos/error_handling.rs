//! Error handling example for geodata-rs
//!
//! Loading is the only fallible step; every query answers `None` or an
//! empty list when nothing matches.
//!
//! Run with: cargo run --example error_handling

use geodata_core::prelude::*;

fn main() -> Result<()> {
    println!("=== geodata-rs Error Handling Example ===\n");

    // Example 1: Handling database load errors
    println!("--- Example 1: Loading from a missing path ---");
    match GeoDb::load_from_path("/definitely/not/here") {
        Ok(_) => println!("✗ unexpectedly loaded"),
        Err(GeoError::NotFound(msg)) => println!("✓ NotFound: {msg}"),
        Err(e) => println!("✗ other error: {e}"),
    }
    println!();

    println!("--- Example 2: Loading the default dataset ---");
    let db = match GeoDb::load() {
        Ok(db) => {
            println!("✓ Database loaded successfully");
            println!("  Countries: {}", db.countries().len());
            db
        }
        Err(e) => {
            eprintln!("✗ Failed to load database: {e}");
            return Err(e);
        }
    };
    println!();

    // Example 3: Handling missing countries
    println!("--- Example 3: Searching for non-existent countries ---");
    for code in ["XX", "YY", "ZZ", "", "A", "ABCD", "123"] {
        match db.country_by_code(code) {
            Some(country) => println!("  Found: {} ({})", country.name(), country.iso2()),
            None => println!("  Not found: {code:?}"),
        }
    }
    println!();

    // Example 4: Validation helpers
    println!("--- Example 4: Validation ---");
    println!("  country 'usa': {}", db.is_valid_country_code("usa"));
    println!("  state 'CA' in US: {}", db.is_valid_state_code("CA", "US"));
    println!("  state 'ca' in US: {}", db.is_valid_state_code("ca", "US"));
    println!("  language 'EN': {}", db.is_valid_language_code("EN"));
    println!("  currency 'usd': {}", db.is_valid_currency_code("usd"));
    println!();

    // Example 5: Empty results are not errors
    println!("--- Example 5: Empty results ---");
    println!("  states of 'ZZ': {}", db.states_by_country("ZZ").len());
    println!("  cities in 'ZZ': {}", db.search_cities("a", Some("ZZ"), None).len());
    println!("  cities of state 0: {}", db.cities_by_state(0).len());
    println!("  phone code +999: {}", db.countries_by_phone_code("+999").len());
    println!();

    // Example 6: Safe access to optional fields
    println!("--- Example 6: Safe country data access ---");
    if let Some(country) = db.country_by_code("US") {
        println!("  Country: {} ({})", country.name(), country.iso3());
        println!("  Coordinates: {:?}, {:?}", country.latitude(), country.longitude());
        println!("  German name: {:?}", country.translation("de"));
        println!("  Klingon name: {:?}", country.translation("tlh"));
    } else {
        println!("  Country 'US' not found");
    }

    Ok(())
}
