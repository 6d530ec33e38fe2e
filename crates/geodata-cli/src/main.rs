//! geodata-cli: command-line interface for geodata-core
//!
//! Loads a dataset once and answers one query per invocation.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ geodata-cli stats
//!
//! - Country details by ISO2 or ISO3 code (case-insensitive)
//!   $ geodata-cli country us
//!   $ geodata-cli --json country deu
//!
//! - States of a country, cities by substring
//!   $ geodata-cli states US --query cali
//!   $ geodata-cli cities san --country US
//!
//! - Countries by dialing code
//!   $ geodata-cli phone +1
//!
//! Data source
//! -----------
//!
//! Without `--input` the CLI reads `$GEODATA_DIR`, falling back to the sample
//! dataset bundled with `geodata-core`. `--input` accepts either a directory
//! of JSON collections or a snapshot written by `geodata-cli snapshot`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use geodata_core::model::SNAPSHOT_SUFFIX;
use geodata_core::phone::format_phone_code;
use geodata_core::prelude::*;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_countries(countries: &[&Country]) {
    for c in countries {
        println!("{} {} ({}/{})", c.flag(), c.name(), c.iso2(), c.iso3());
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let input = args.input.unwrap_or_else(GeoDb::default_data_dir);
    let db = GeoDb::load_from_path(&input)
        .with_context(|| format!("loading dataset from {}", input.display()))?;
    tracing::debug!(path = %input.display(), "Dataset ready");

    match args.command {
        Commands::Stats => {
            let stats = db.statistics();
            if args.json {
                return print_json(&stats);
            }
            println!("Database statistics:");
            println!("  Countries: {}", stats.total_countries);
            println!("  States/Regions: {}", stats.total_states);
            println!("  Cities: {}", db.raw().city_count());
            println!("  Regions: {}", stats.total_regions);
            println!("  Languages: {}", stats.total_languages);
            println!("  Currencies: {}", stats.total_currencies);
            println!("  Timezones: {}", stats.total_timezones);
        }

        Commands::Countries { query, region } => {
            let mut hits = match &query {
                Some(q) => db.search_countries(q),
                None => db.countries().iter().collect(),
            };
            if let Some(region) = &region {
                hits.retain(|c| c.region() == region.as_str());
            }
            if args.json {
                return print_json(&hits);
            }
            print_countries(&hits);
        }

        Commands::Country { code } => match db.country_info(&code) {
            Some(info) if args.json => return print_json(&info),
            Some(info) => {
                println!("Country: {} {}", info.flag(), info.name());
                println!("ISO2: {}", info.iso2());
                println!("ISO3: {}", info.iso3());
                println!("Capital: {}", info.capital);
                println!("Phone Code: {}", format_phone_code(info.phone_code()));
                println!(
                    "Currency: {} ({}, {})",
                    info.currency(),
                    info.currency_name,
                    info.currency_symbol
                );
                println!("Region: {} / {}", info.region(), info.subregion());
                let zones: Vec<&str> = info
                    .timezones()
                    .iter()
                    .map(|t| t.zone_name.as_str())
                    .collect();
                println!("Timezones: {}", zones.join(", "));
                println!("States: {}", info.state_count);
                println!("Cities: {}", info.city_count);
            }
            None => anyhow::bail!("No country found for: {code}"),
        },

        Commands::States { code, query } => {
            let country = db
                .country_by_code(&code)
                .with_context(|| format!("Country {code} not found"))?;
            let states = match &query {
                Some(q) => db.search_states(q, Some(code.as_str())),
                None => db.states_by_country_id(country.id),
            };
            if args.json {
                return print_json(&states);
            }
            println!("States in {}:", country.name());
            for s in states {
                println!("- {} [{}] (id {})", s.name(), s.state_code(), s.id);
            }
        }

        Commands::Cities {
            query,
            country,
            state_id,
        } => {
            let matches = db.search_cities(&query, country.as_deref(), state_id);
            if args.json {
                return print_json(&matches);
            }
            if matches.is_empty() {
                println!("No cities found matching: {query}");
            }
            for city in matches {
                match (city.latitude(), city.longitude()) {
                    (Some(lat), Some(lng)) => println!("{} ({lat:.4}, {lng:.4})", city.name()),
                    _ => println!("{}", city.name()),
                }
            }
        }

        Commands::Currencies => {
            if args.json {
                return print_json(db.currencies());
            }
            for c in db.currencies() {
                println!("{} {} {}", c.code, c.symbol, c.name);
            }
        }

        Commands::Timezones => {
            if args.json {
                return print_json(db.timezones());
            }
            for tz in db.timezones() {
                println!("{} {} ({})", tz.zone_name, tz.gmt_offset_name, tz.abbreviation);
            }
        }

        Commands::Regions => {
            if args.json {
                return print_json(db.regions());
            }
            for r in db.regions() {
                let count = db.countries_by_region(&r.name).len();
                println!("{} {} ({count} countries)", r.id, r.name);
            }
        }

        Commands::Languages { query } => {
            let langs = match &query {
                Some(q) => db.search_languages(q),
                None => db.languages().iter().collect(),
            };
            if args.json {
                return print_json(&langs);
            }
            for l in langs {
                println!("{} {} ({})", l.code, l.name, l.native_name);
            }
        }

        Commands::Phone { code } => {
            let hits = db.countries_by_phone_code(&code);
            if args.json {
                return print_json(&hits);
            }
            if hits.is_empty() {
                println!("No country uses dialing code {code}");
            }
            print_countries(&hits);
        }

        Commands::Snapshot { out } => {
            let out = out.unwrap_or_else(|| format!("geodata.{SNAPSHOT_SUFFIX}").into());
            db.save_as(&out)
                .with_context(|| format!("writing snapshot to {}", out.display()))?;
            println!("Wrote snapshot to {}", out.display());
        }
    }

    Ok(())
}
