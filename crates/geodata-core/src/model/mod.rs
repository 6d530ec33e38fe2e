// crates/geodata-core/src/model/mod.rs

//! Entity types.
//!
//! All entities are plain owned data deserialized straight from the dataset
//! shapes. Nothing in the crate mutates them after loading.

pub mod catalog;
pub mod country;
pub mod dataset;
pub mod state;

pub use catalog::{Currency, Language, Region};
pub use country::{Country, Timezone};
pub use dataset::GeoDataset;
pub use state::{City, CountryCities, State, StateCities};

/// File extension of a binary dataset snapshot.
pub const SNAPSHOT_SUFFIX: &str = "bin";
