// crates/geodata-core/src/loader/json.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'json' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "json")]

use super::common_io;
use crate::error::Result;
use crate::model::GeoDataset;
use serde::de::DeserializeOwned;
use std::path::Path;

/// File stems of the five source collections.
pub const COLLECTIONS: [&str; 5] = ["countries", "states", "cities", "regions", "languages"];

fn read_collection<T: DeserializeOwned>(dir: &Path, stem: &str) -> Result<Vec<T>> {
    let path = common_io::locate_collection(dir, stem)?;
    tracing::debug!(path = %path.display(), "Reading collection");
    let reader = common_io::open_stream(&path)?;
    Ok(serde_json::from_reader(reader)?)
}

impl GeoDataset {
    /// Loads the five collections from `<dir>/<name>.json` files.
    ///
    /// With the `compact` feature a `<name>.json.gz` file is used when the
    /// plain file is absent.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let data = GeoDataset {
            countries: read_collection(dir, COLLECTIONS[0])?,
            states: read_collection(dir, COLLECTIONS[1])?,
            cities: read_collection(dir, COLLECTIONS[2])?,
            regions: read_collection(dir, COLLECTIONS[3])?,
            languages: read_collection(dir, COLLECTIONS[4])?,
        };
        tracing::info!(
            dir = %dir.display(),
            countries = data.countries.len(),
            states = data.states.len(),
            cities = data.city_count(),
            "Loaded dataset"
        );
        Ok(data)
    }

    /// Parses the five collections from in-memory JSON documents
    /// (e.g. `include_bytes!` data).
    pub fn from_json_slices(
        countries: &[u8],
        states: &[u8],
        cities: &[u8],
        regions: &[u8],
        languages: &[u8],
    ) -> Result<Self> {
        Ok(GeoDataset {
            countries: serde_json::from_slice(countries)?,
            states: serde_json::from_slice(states)?,
            cities: serde_json::from_slice(cities)?,
            regions: serde_json::from_slice(regions)?,
            languages: serde_json::from_slice(languages)?,
        })
    }
}
