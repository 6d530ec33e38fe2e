// crates/geodata-core/src/db.rs
use crate::derived;
use crate::index::GeoIndex;
use crate::model::{City, Currency, GeoDataset, Timezone};
use once_cell::sync::OnceCell;

/// The process-wide query context: the dataset plus its indices.
///
/// Built once from a [`GeoDataset`] and read-only afterwards, so a shared
/// `&GeoDb` can be queried from any number of threads without locking. The
/// currency and timezone catalogs are derived on first use and memoized.
///
/// Queries are provided by the [`crate::GeoSearch`] trait.
#[derive(Debug, Clone)]
pub struct GeoDb {
    pub(crate) data: GeoDataset,
    pub(crate) index: GeoIndex,
    currencies: OnceCell<Vec<Currency>>,
    timezones: OnceCell<Vec<Timezone>>,
}

impl GeoDb {
    /// Indexes a dataset.
    pub fn new(data: GeoDataset) -> Self {
        let index = GeoIndex::build(&data);
        GeoDb {
            data,
            index,
            currencies: OnceCell::new(),
            timezones: OnceCell::new(),
        }
    }

    /// The source collections, unmodified.
    pub fn raw(&self) -> &GeoDataset {
        &self.data
    }

    /// Gives the source collections back, dropping the indices.
    pub fn into_raw(self) -> GeoDataset {
        self.data
    }

    /// Cities of the first hierarchy node with this state id; empty if none.
    pub(crate) fn state_cities(&self, state_id: u32) -> &[City] {
        match self.index.hierarchy_of_state(state_id).first() {
            Some(&(c, s)) => self.data.cities[c].states[s].cities.as_slice(),
            None => &[],
        }
    }

    /// Cities of the first hierarchy entry with this country id, in
    /// state-then-city order.
    pub(crate) fn country_cities(&self, country_id: u32) -> Vec<&City> {
        match self.index.hierarchy_of_country(country_id).first() {
            Some(&c) => self.data.cities[c].iter_cities().collect(),
            None => Vec::new(),
        }
    }

    pub(crate) fn currency_catalog(&self) -> &[Currency] {
        self.currencies
            .get_or_init(|| derived::unique_currencies(&self.data.countries))
    }

    pub(crate) fn timezone_catalog(&self) -> &[Timezone] {
        self.timezones
            .get_or_init(|| derived::unique_timezones(&self.data.countries))
    }
}

impl From<GeoDataset> for GeoDb {
    fn from(data: GeoDataset) -> Self {
        GeoDb::new(data)
    }
}
