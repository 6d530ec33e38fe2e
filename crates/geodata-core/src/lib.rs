// crates/geodata-core/src/lib.rs

//! In-memory query engine over geographic reference data: countries,
//! states, cities, regions, languages, and the currency/timezone catalogs
//! derived from them.
//!
//! A [`GeoDb`] is built once from a [`GeoDataset`] (see [`loader`]) and then
//! answers every query in [`GeoSearch`] from memory, without locking.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod db;
pub mod derived;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
pub mod phone;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::{CountryInfo, Statistics};
pub use crate::db::GeoDb;
pub use crate::error::{GeoError, Result};
pub use crate::model::{
    City, Country, CountryCities, Currency, GeoDataset, Language, Region, State, StateCities,
    Timezone,
};
pub use crate::traits::{GeoSearch, NameMatch};

/// Common types and traits in one import.
pub mod prelude {
    pub use crate::common::{CountryInfo, Statistics};
    pub use crate::db::GeoDb;
    pub use crate::error::{GeoError, Result};
    pub use crate::model::{
        City, Country, CountryCities, Currency, GeoDataset, Language, Region, State,
        StateCities, Timezone,
    };
    pub use crate::phone::normalize_phone_code;
    pub use crate::traits::{GeoSearch, NameMatch};
}
