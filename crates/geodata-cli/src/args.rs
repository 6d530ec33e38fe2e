use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for geodata-cli
#[derive(Debug, Parser)]
#[command(
    name = "geodata-cli",
    version,
    about = "CLI for querying countries, states, cities and their derived catalogs"
)]
pub struct CliArgs {
    /// Dataset directory (five JSON collections) or binary snapshot file.
    /// Defaults to $GEODATA_DIR, then the sample data bundled with geodata-core.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v: info, -vv: debug). RUST_LOG overrides.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the database contents
    Stats,

    /// List all countries
    Countries {
        /// Only countries whose name, native name, capital or nationality
        /// contains this text
        query: Option<String>,

        /// Only countries of this region (exact name, e.g. Europe)
        #[arg(long)]
        region: Option<String>,
    },

    /// Lookup a country by ISO2 or ISO3 code, with state and city counts
    Country {
        /// ISO2 or ISO3 code (e.g. DE, USA)
        code: String,
    },

    /// List states of a country, optionally filtered by name
    States {
        /// ISO2 or ISO3 code of the country
        code: String,

        /// Substring to search (case-insensitive)
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Search for cities containing a substring
    Cities {
        /// Substring to search (case-insensitive)
        query: String,

        /// Restrict to a country (ISO2 or ISO3)
        #[arg(short, long)]
        country: Option<String>,

        /// Restrict to a state id
        #[arg(short, long)]
        state_id: Option<u32>,
    },

    /// List the distinct currencies
    Currencies,

    /// List the distinct timezones
    Timezones,

    /// List regions
    Regions,

    /// List languages, optionally filtered by name, native name or code
    Languages {
        query: Option<String>,
    },

    /// Countries sharing a dialing code (with or without a leading +)
    Phone {
        code: String,
    },

    /// Write the loaded dataset as a binary snapshot (gzipped if the name ends in .gz)
    Snapshot {
        /// Output file (default: geodata.bin)
        out: Option<PathBuf>,
    },
}
