// crates/geodata-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to
//! specific parsers (JSON collections vs binary snapshot). All I/O happens
//! here, once, before the first query.

use crate::db::GeoDb;
use crate::error::{GeoError, Result};
use crate::model::GeoDataset;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

mod binary;
pub mod common_io;

#[cfg(feature = "json")]
pub mod json;

/// Environment variable overriding [`GeoDb::default_data_dir`].
pub const DATA_DIR_ENV: &str = "GEODATA_DIR";

// Single in-process instance so the dataset is loaded and indexed only once.
static GEO_DB: OnceCell<GeoDb> = OnceCell::new();

impl GeoDb {
    /// `$GEODATA_DIR` if set, otherwise `data/` next to this crate's manifest.
    pub fn default_data_dir() -> PathBuf {
        match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"),
        }
    }

    /// The process-wide database, loaded from [`GeoDb::default_data_dir`] on
    /// first call.
    ///
    /// Concurrent first calls block until one of them has finished building;
    /// every caller then shares the same instance. A failed load is not
    /// cached, so a later call retries.
    pub fn load() -> Result<&'static GeoDb> {
        GEO_DB.get_or_try_init(|| Self::load_from_path(Self::default_data_dir()))
    }

    /// Loads and indexes a dataset.
    ///
    /// - directory: the five JSON collections (feature `json`)
    /// - file: a binary snapshot written by [`GeoDataset::save_as`]
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = if path.is_dir() {
            load_dir(path)?
        } else if path.is_file() {
            GeoDataset::load_binary_file(path)?
        } else {
            return Err(GeoError::NotFound(format!(
                "Dataset not found at path: {}",
                path.display()
            )));
        };
        Ok(GeoDb::new(data))
    }

    /// Writes the underlying dataset as a binary snapshot.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        self.raw().save_as(path)
    }
}

#[cfg(feature = "json")]
fn load_dir(dir: &Path) -> Result<GeoDataset> {
    GeoDataset::load_from_dir(dir)
}

#[cfg(not(feature = "json"))]
fn load_dir(dir: &Path) -> Result<GeoDataset> {
    Err(GeoError::InvalidData(format!(
        "{} is a directory but 'json' is disabled",
        dir.display()
    )))
}
