// crates/geodata-core/src/search.rs

//! # Query Engine
//!
//! [`GeoSearch`] implemented against the [`crate::index::GeoIndex`].
//! Code and id lookups are hash hits; hierarchy traversals touch only the
//! matching slice. Free-text searches still scan their candidate pool, but the
//! pool is narrowed through the indices first.

use crate::common::{CountryInfo, Statistics};
use crate::db::GeoDb;
use crate::derived::unique_strings;
use crate::model::{City, Country, Currency, Language, Region, State, StateCities, Timezone};
use crate::phone::normalize_phone_code;
use crate::text::{contains_folded, fold_lower, normalize_country_code, normalize_language_code};
use crate::traits::{GeoSearch, NameMatch};
use std::fmt::Display;

/// An empty code counts as "no code given".
#[inline]
fn given(code: Option<&str>) -> Option<&str> {
    code.filter(|c| !c.is_empty())
}

impl GeoDb {
    fn countries_at(&self, positions: &[usize]) -> Vec<&Country> {
        positions.iter().map(|&p| &self.data.countries[p]).collect()
    }

    fn states_at(&self, positions: &[usize]) -> Vec<&State> {
        positions.iter().map(|&p| &self.data.states[p]).collect()
    }

    /// Hierarchy state nodes to search, in traversal order.
    fn city_pool(&self, country_id: Option<u32>, state_id: Option<u32>) -> Vec<&StateCities> {
        let hierarchy = &self.data.cities;
        match (country_id, state_id) {
            (_, Some(sid)) => self
                .index
                .hierarchy_of_state(sid)
                .iter()
                .filter(|&&(c, _)| country_id.map_or(true, |cid| hierarchy[c].id == cid))
                .map(|&(c, s)| &hierarchy[c].states[s])
                .collect(),
            (Some(cid), None) => self
                .index
                .hierarchy_of_country(cid)
                .iter()
                .flat_map(|&c| hierarchy[c].states.iter())
                .collect(),
            (None, None) => hierarchy.iter().flat_map(|c| c.states.iter()).collect(),
        }
    }
}

impl GeoSearch for GeoDb {
    fn countries(&self) -> &[Country] {
        &self.data.countries
    }

    fn country_by_code(&self, code: &str) -> Option<&Country> {
        self.index
            .country_by_code(&normalize_country_code(code))
            .map(|p| &self.data.countries[p])
    }

    fn country_by_id(&self, id: u32) -> Option<&Country> {
        self.index
            .country_by_id(id)
            .map(|p| &self.data.countries[p])
    }

    fn countries_by_region(&self, region: &str) -> Vec<&Country> {
        self.countries_at(self.index.countries_by_region(region))
    }

    fn countries_by_subregion(&self, subregion: &str) -> Vec<&Country> {
        self.countries_at(self.index.countries_by_subregion(subregion))
    }

    fn search_countries(&self, query: &str) -> Vec<&Country> {
        let q = fold_lower(query);
        self.data
            .countries
            .iter()
            .filter(|c| {
                c.name_contains_folded(&q)
                    || contains_folded(&c.native_name, &q)
                    || contains_folded(&c.capital, &q)
                    || contains_folded(&c.nationality, &q)
            })
            .collect()
    }

    fn countries_by_currency(&self, currency: &str) -> Vec<&Country> {
        self.countries_at(self.index.countries_by_currency(currency))
    }

    fn countries_by_phone_code(&self, code: impl Display) -> Vec<&Country> {
        let code = normalize_phone_code(code);
        self.countries_at(self.index.countries_by_phone_code(&code))
    }

    fn states(&self) -> &[State] {
        &self.data.states
    }

    fn states_by_country(&self, country_code: &str) -> Vec<&State> {
        match self.country_by_code(country_code) {
            Some(country) => self.states_by_country_id(country.id),
            None => Vec::new(),
        }
    }

    fn states_by_country_id(&self, country_id: u32) -> Vec<&State> {
        self.states_at(self.index.states_of_country(country_id))
    }

    fn state_by_code(&self, state_code: &str, country_code: &str) -> Option<&State> {
        let country = self.country_by_code(country_code)?;
        self.index
            .states_of_country(country.id)
            .iter()
            .map(|&p| &self.data.states[p])
            .find(|s| s.state_code == state_code)
    }

    fn search_states(&self, query: &str, country_code: Option<&str>) -> Vec<&State> {
        let q = fold_lower(query);
        let scope = given(country_code).and_then(|code| self.country_by_code(code));
        match scope {
            Some(country) => self
                .states_by_country_id(country.id)
                .into_iter()
                .filter(|s| s.name_contains_folded(&q))
                .collect(),
            // Unresolved (or absent) country: search the whole pool.
            None => self
                .data
                .states
                .iter()
                .filter(|s| s.name_contains_folded(&q))
                .collect(),
        }
    }

    fn cities_by_state(&self, state_id: u32) -> &[City] {
        self.state_cities(state_id)
    }

    fn cities_by_country(&self, country_code: &str) -> Vec<&City> {
        match self.country_by_code(country_code) {
            Some(country) => self.country_cities(country.id),
            None => Vec::new(),
        }
    }

    fn search_cities(
        &self,
        query: &str,
        country_code: Option<&str>,
        state_id: Option<u32>,
    ) -> Vec<&City> {
        let country_id = match given(country_code) {
            Some(code) => match self.country_by_code(code) {
                Some(country) => Some(country.id),
                // Unresolved country: nothing can match.
                None => return Vec::new(),
            },
            None => None,
        };

        let q = fold_lower(query);
        self.city_pool(country_id, state_id)
            .into_iter()
            .flat_map(|node| node.cities.iter())
            .filter(|city| city.name_contains_folded(&q))
            .collect()
    }

    fn regions(&self) -> &[Region] {
        &self.data.regions
    }

    fn region_by_id(&self, region_id: &str) -> Option<&Region> {
        self.index
            .region_by_id(region_id)
            .map(|p| &self.data.regions[p])
    }

    fn unique_regions(&self) -> Vec<&str> {
        unique_strings(&self.data.countries, |c| c.region.as_str())
    }

    fn unique_subregions(&self) -> Vec<&str> {
        unique_strings(&self.data.countries, |c| c.subregion.as_str())
    }

    fn languages(&self) -> &[Language] {
        &self.data.languages
    }

    fn language_by_code(&self, code: &str) -> Option<&Language> {
        self.index
            .language_by_code(&normalize_language_code(code))
            .map(|p| &self.data.languages[p])
    }

    fn search_languages(&self, query: &str) -> Vec<&Language> {
        let q = fold_lower(query);
        self.data
            .languages
            .iter()
            .filter(|l| {
                l.name_contains_folded(&q)
                    || contains_folded(&l.native_name, &q)
                    || contains_folded(&l.code, &q)
            })
            .collect()
    }

    fn currencies(&self) -> &[Currency] {
        self.currency_catalog()
    }

    fn currency_by_code(&self, code: &str) -> Option<Currency> {
        // First country with the code, not the deduplicated catalog entry.
        self.index
            .countries_by_currency(code)
            .first()
            .map(|&p| Currency::of(&self.data.countries[p]))
    }

    fn timezones(&self) -> &[Timezone] {
        self.timezone_catalog()
    }

    fn countries_by_timezone(&self, zone_name: &str) -> Vec<&Country> {
        self.countries_at(self.index.countries_by_timezone(zone_name))
    }

    fn country_info(&self, country_code: &str) -> Option<CountryInfo<'_>> {
        let country = self.country_by_code(country_code)?;
        let city_count = self
            .index
            .hierarchy_of_country(country.id)
            .first()
            .map_or(0, |&c| self.data.cities[c].city_count());
        Some(CountryInfo {
            country,
            state_count: self.index.states_of_country(country.id).len(),
            city_count,
        })
    }

    fn statistics(&self) -> Statistics {
        Statistics {
            total_countries: self.data.countries.len(),
            total_states: self.data.states.len(),
            total_languages: self.data.languages.len(),
            total_regions: self.data.regions.len(),
            total_currencies: self.currencies().len(),
            total_timezones: self.timezones().len(),
        }
    }
}
