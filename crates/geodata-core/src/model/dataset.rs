// crates/geodata-core/src/model/dataset.rs
use super::{Country, CountryCities, Language, Region, State};
use serde::{Deserialize, Serialize};

/// The five source collections, exactly as supplied by a loader.
///
/// This is also the "raw data" surface: [`crate::GeoDb::raw`] hands it back
/// unmodified for callers that want to bypass the query engine.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoDataset {
    pub countries: Vec<Country>,
    pub states: Vec<State>,
    /// country -> state -> city hierarchy. The only path to city data.
    pub cities: Vec<CountryCities>,
    pub regions: Vec<Region>,
    pub languages: Vec<Language>,
}

impl GeoDataset {
    pub fn new(
        countries: Vec<Country>,
        states: Vec<State>,
        cities: Vec<CountryCities>,
        regions: Vec<Region>,
        languages: Vec<Language>,
    ) -> Self {
        GeoDataset {
            countries,
            states,
            cities,
            regions,
            languages,
        }
    }

    /// Number of cities reachable through the hierarchy.
    pub fn city_count(&self) -> usize {
        self.cities.iter().map(CountryCities::city_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
            && self.states.is_empty()
            && self.cities.is_empty()
            && self.regions.is_empty()
            && self.languages.is_empty()
    }
}
