// crates/geodata-core/src/common.rs
use crate::model::Country;
use serde::{Deserialize, Serialize};

/// Aggregate counts over the loaded dataset.
///
/// Returned by [`crate::GeoSearch::statistics`]. Currency and timezone totals
/// are the sizes of the deduplicated catalogs, not per-country counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_countries: usize,
    pub total_states: usize,
    pub total_languages: usize,
    pub total_regions: usize,
    pub total_currencies: usize,
    pub total_timezones: usize,
}

/// A country together with its subdivision counts.
///
/// Serializes as a single flat object: every country field plus
/// `stateCount` and `cityCount`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryInfo<'a> {
    #[serde(flatten)]
    pub country: &'a Country,
    /// Number of states whose `country_id` is this country's id.
    pub state_count: usize,
    /// Number of cities nested under this country in the hierarchy.
    pub city_count: usize,
}

impl std::ops::Deref for CountryInfo<'_> {
    type Target = Country;

    fn deref(&self) -> &Country {
        self.country
    }
}
