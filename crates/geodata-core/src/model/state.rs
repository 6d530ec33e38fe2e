// crates/geodata-core/src/model/state.rs
use crate::text::parse_opt_f64;
use serde::{Deserialize, Serialize};

/// A first-level administrative subdivision (state, province, region, ...).
///
/// `state_code` is only unique inside its parent country. `country_id` is
/// expected to reference a [`super::Country`]; when it does not, the state is
/// simply never returned by country-scoped queries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub id: u32,
    pub name: String,
    pub country_id: u32,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub country_name: String,
    #[serde(default)]
    pub state_code: String,
    /// Optional classifier such as "province" or "state".
    #[serde(rename = "type", default)]
    pub state_type: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
}

impl State {
    /// State/region display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short code for the state (e.g. "CA").
    pub fn state_code(&self) -> &str {
        &self.state_code
    }

    pub fn latitude(&self) -> Option<f64> {
        parse_opt_f64(self.latitude.as_deref())
    }

    pub fn longitude(&self) -> Option<f64> {
        parse_opt_f64(self.longitude.as_deref())
    }
}

/// A city. Only reachable through the country -> state -> city hierarchy;
/// its id is meaningful inside its state only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
}

impl City {
    /// City display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> Option<f64> {
        parse_opt_f64(self.latitude.as_deref())
    }

    pub fn longitude(&self) -> Option<f64> {
        parse_opt_f64(self.longitude.as_deref())
    }
}

/// Hierarchy node: the cities of one state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateCities {
    pub id: u32,
    #[serde(default)]
    pub cities: Vec<City>,
}

/// Hierarchy root: the states (with cities) of one country.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryCities {
    pub id: u32,
    #[serde(default)]
    pub states: Vec<StateCities>,
}

impl CountryCities {
    /// Total number of cities nested under this country.
    pub fn city_count(&self) -> usize {
        self.states.iter().map(|s| s.cities.len()).sum()
    }

    /// Cities of all states, in state-then-city order.
    pub fn iter_cities(&self) -> impl Iterator<Item = &City> {
        self.states.iter().flat_map(|s| s.cities.iter())
    }
}
