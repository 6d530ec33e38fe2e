// crates/geodata-core/src/traits.rs
use crate::common::{CountryInfo, Statistics};
use crate::model::{City, Country, Currency, Language, Region, State, Timezone};
use crate::phone::format_phone_code;
use crate::text::{contains_folded, fold_lower};
use std::fmt::Display;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Comparisons are case-insensitive (Unicode lowercase). Implementors provide
/// a `&str` view of their name via [`NameMatch::name_str`] and get:
/// - [`NameMatch::is_named`]: equality ignoring case
/// - [`NameMatch::name_contains`]: substring ignoring case
///
/// # Examples
/// ```rust
/// use geodata_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("California").is_named("CALIFORNIA"));
/// assert!(Place("California").name_contains("cali"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_lower(self.name_str()) == fold_lower(q)
    }

    /// Case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        self.name_contains_folded(&fold_lower(q))
    }

    /// Like [`NameMatch::name_contains`] for a query that is already folded
    /// with [`fold_lower`]; searches use this to fold the query only once.
    #[inline]
    fn name_contains_folded(&self, folded: &str) -> bool {
        contains_folded(self.name_str(), folded)
    }
}

impl NameMatch for Country {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

impl NameMatch for State {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

impl NameMatch for City {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

impl NameMatch for Language {
    #[inline]
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// The query surface over a loaded dataset.
///
/// Every operation is total: single-entity lookups return `Option`, filters
/// and searches return a (possibly empty) `Vec`, nothing returns an error.
/// Results borrow from the database and come back in dataset order.
///
/// # Example
///
/// ```no_run
/// use geodata_core::prelude::*;
///
/// let db = GeoDb::load().unwrap();
///
/// if let Some(us) = db.country_by_code("us") {
///     let states = db.states_by_country(us.iso2());
///     println!("{} has {} states", us.name(), states.len());
/// }
/// ```
pub trait GeoSearch {
    // ---- Countries -------------------------------------------------------

    /// All countries in dataset order.
    fn countries(&self) -> &[Country];

    /// Finds a country by ISO2 or ISO3 code, ignoring case.
    fn country_by_code(&self, code: &str) -> Option<&Country>;

    fn country_by_id(&self, id: u32) -> Option<&Country>;

    /// Countries whose region equals `region` exactly (case-sensitive).
    fn countries_by_region(&self, region: &str) -> Vec<&Country>;

    /// Countries whose subregion equals `subregion` exactly (case-sensitive).
    fn countries_by_subregion(&self, subregion: &str) -> Vec<&Country>;

    /// Case-insensitive substring search over name, native name, capital and
    /// nationality. An empty query matches every country.
    fn search_countries(&self, query: &str) -> Vec<&Country>;

    /// Countries whose currency code equals `currency` exactly.
    fn countries_by_currency(&self, currency: &str) -> Vec<&Country>;

    /// Countries with the given dialing code. `"+1"`, `"1"` and `1` are
    /// equivalent queries.
    fn countries_by_phone_code(&self, code: impl Display) -> Vec<&Country>;

    // ---- States ----------------------------------------------------------

    /// All states in dataset order.
    fn states(&self) -> &[State];

    /// States of the country with this code; empty for an unknown code.
    fn states_by_country(&self, country_code: &str) -> Vec<&State>;

    fn states_by_country_id(&self, country_id: u32) -> Vec<&State>;

    /// Finds a state by exact state code inside the given country.
    fn state_by_code(&self, state_code: &str, country_code: &str) -> Option<&State>;

    /// Case-insensitive substring search over state names.
    ///
    /// With a country code that resolves, only that country's states are
    /// searched. A country code that does not resolve is ignored and every
    /// state is searched.
    fn search_states(&self, query: &str, country_code: Option<&str>) -> Vec<&State>;

    // ---- Cities ----------------------------------------------------------

    /// Cities of a state; empty if the state id is not in the hierarchy.
    fn cities_by_state(&self, state_id: u32) -> &[City];

    /// All cities of a country in state-then-city order.
    fn cities_by_country(&self, country_code: &str) -> Vec<&City>;

    /// Case-insensitive substring search over city names.
    ///
    /// The optional country code narrows to that country; unlike
    /// [`GeoSearch::search_states`], a code that does not resolve yields no
    /// cities at all. The optional state id further narrows to one state.
    fn search_cities(
        &self,
        query: &str,
        country_code: Option<&str>,
        state_id: Option<u32>,
    ) -> Vec<&City>;

    // ---- Regions ---------------------------------------------------------

    fn regions(&self) -> &[Region];

    fn region_by_id(&self, region_id: &str) -> Option<&Region>;

    /// Distinct country region names in first-occurrence order.
    fn unique_regions(&self) -> Vec<&str>;

    /// Distinct country subregion names in first-occurrence order.
    fn unique_subregions(&self) -> Vec<&str>;

    // ---- Languages -------------------------------------------------------

    fn languages(&self) -> &[Language];

    /// Finds a language by code, ignoring case.
    fn language_by_code(&self, code: &str) -> Option<&Language>;

    /// Case-insensitive substring search over name, native name and code.
    fn search_languages(&self, query: &str) -> Vec<&Language>;

    // ---- Currencies & timezones -----------------------------------------

    /// One entry per distinct currency code, first country wins.
    fn currencies(&self) -> &[Currency];

    /// Currency fields of the first country using `code`.
    fn currency_by_code(&self, code: &str) -> Option<Currency>;

    /// One entry per distinct zone name, first country wins.
    fn timezones(&self) -> &[Timezone];

    /// Countries listing a timezone with this zone name.
    fn countries_by_timezone(&self, zone_name: &str) -> Vec<&Country>;

    // ---- Aggregates ------------------------------------------------------

    /// The country plus its state and city counts.
    fn country_info(&self, country_code: &str) -> Option<CountryInfo<'_>>;

    fn statistics(&self) -> Statistics;

    // ---- Validation (derived from the lookups above) ---------------------

    fn is_valid_country_code(&self, code: &str) -> bool {
        self.country_by_code(code).is_some()
    }

    fn is_valid_state_code(&self, state_code: &str, country_code: &str) -> bool {
        self.state_by_code(state_code, country_code).is_some()
    }

    fn is_valid_language_code(&self, code: &str) -> bool {
        self.language_by_code(code).is_some()
    }

    fn is_valid_currency_code(&self, code: &str) -> bool {
        self.currency_by_code(code).is_some()
    }

    // ---- Projections -----------------------------------------------------

    /// Flag glyph of the country.
    fn country_flag(&self, country_code: &str) -> Option<&str> {
        self.country_by_code(country_code).map(Country::flag)
    }

    /// Dialing code formatted for display, e.g. `"+49"`.
    fn country_phone_format(&self, country_code: &str) -> Option<String> {
        self.country_by_code(country_code)
            .map(|c| format_phone_code(c.phone_code()))
    }
}
