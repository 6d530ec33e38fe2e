//! Shared fixture access for the integration tests.
#![allow(dead_code)]

use geodata_core::prelude::*;
use std::path::PathBuf;

/// The bundled sample dataset (five JSON collections).
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn fixture_dataset() -> GeoDataset {
    GeoDataset::load_from_dir(fixture_dir()).expect("fixture dataset should load")
}

pub fn fixture_db() -> GeoDb {
    GeoDb::new(fixture_dataset())
}

pub fn ids<T, F>(items: &[&T], id: F) -> Vec<u32>
where
    F: Fn(&T) -> u32,
{
    items.iter().map(|&item| id(item)).collect()
}
