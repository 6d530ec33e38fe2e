// crates/geodata-core/src/index.rs

//! # Index Builder
//!
//! Turns the linear collections of a [`GeoDataset`] into hash lookups.
//!
//! Indices store positions into the dataset vectors rather than references,
//! so a [`crate::GeoDb`] can own both the data and its indices. Every
//! multi-valued index keeps positions in dataset order, and every key
//! conflict resolves first-seen-wins, so an indexed answer is always the
//! answer a linear `find`/`filter` over the dataset would give.

use crate::model::{Country, GeoDataset};
use crate::text::normalize_country_code;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Position of a state node inside the hierarchy: (country entry, state entry).
pub(crate) type HierarchyPos = (usize, usize);

/// Lookup structures over a [`GeoDataset`]. Built once, read-only afterwards.
#[derive(Debug, Default, Clone)]
pub struct GeoIndex {
    /// Upper-cased iso2 and iso3 -> country position.
    code_index: HashMap<String, usize>,
    /// Country id -> country position.
    id_index: HashMap<u32, usize>,
    /// State id -> state position.
    state_id_index: HashMap<u32, usize>,
    /// Country id -> state positions.
    states_by_country_id: HashMap<u32, Vec<usize>>,
    /// Country id -> hierarchy country entries.
    hierarchy_by_country_id: HashMap<u32, Vec<usize>>,
    /// State id -> hierarchy state nodes, in traversal order.
    hierarchy_by_state_id: HashMap<u32, Vec<HierarchyPos>>,

    // Exact-match attribute indices over countries.
    by_region: HashMap<String, Vec<usize>>,
    by_subregion: HashMap<String, Vec<usize>>,
    by_currency: HashMap<String, Vec<usize>>,
    by_phone_code: HashMap<String, Vec<usize>>,
    by_timezone: HashMap<String, Vec<usize>>,

    /// Stored language code -> language position.
    language_index: HashMap<String, usize>,
    /// Region id -> region position.
    region_id_index: HashMap<String, usize>,
}

fn insert_first<K: std::hash::Hash + Eq>(map: &mut HashMap<K, usize>, key: K, pos: usize) -> bool {
    match map.entry(key) {
        Entry::Vacant(v) => {
            v.insert(pos);
            true
        }
        Entry::Occupied(_) => false,
    }
}

/// Appends `pos` unless it is already the last entry for `key`.
///
/// Positions are pushed in ascending order, so this keeps each position at
/// most once per key.
fn push_unique(map: &mut HashMap<String, Vec<usize>>, key: &str, pos: usize) {
    let list = map.entry(key.to_owned()).or_default();
    if list.last() != Some(&pos) {
        list.push(pos);
    }
}

impl GeoIndex {
    /// Builds every index in a single pass per collection.
    pub fn build(data: &GeoDataset) -> Self {
        let mut idx = GeoIndex::default();

        for (pos, country) in data.countries.iter().enumerate() {
            idx.index_country(pos, country);
        }

        let mut orphan_states = 0usize;
        for (pos, state) in data.states.iter().enumerate() {
            if !insert_first(&mut idx.state_id_index, state.id, pos) {
                tracing::debug!(state_id = state.id, "duplicate state id, keeping first");
            }
            if !idx.id_index.contains_key(&state.country_id) {
                orphan_states += 1;
            }
            idx.states_by_country_id
                .entry(state.country_id)
                .or_default()
                .push(pos);
        }
        if orphan_states > 0 {
            tracing::debug!(
                count = orphan_states,
                "states reference unknown country ids; they are only reachable globally"
            );
        }

        for (c_pos, entry) in data.cities.iter().enumerate() {
            idx.hierarchy_by_country_id
                .entry(entry.id)
                .or_default()
                .push(c_pos);
            for (s_pos, node) in entry.states.iter().enumerate() {
                idx.hierarchy_by_state_id
                    .entry(node.id)
                    .or_default()
                    .push((c_pos, s_pos));
            }
        }

        for (pos, lang) in data.languages.iter().enumerate() {
            insert_first(&mut idx.language_index, lang.code.clone(), pos);
        }
        for (pos, region) in data.regions.iter().enumerate() {
            insert_first(&mut idx.region_id_index, region.id.clone(), pos);
        }

        tracing::info!(
            countries = data.countries.len(),
            codes = idx.code_index.len(),
            states = data.states.len(),
            hierarchy_states = idx.hierarchy_by_state_id.len(),
            "Built geo index"
        );
        idx
    }

    fn index_country(&mut self, pos: usize, country: &Country) {
        for code in [&country.iso2, &country.iso3] {
            if code.is_empty() {
                continue;
            }
            if !insert_first(&mut self.code_index, normalize_country_code(code), pos) {
                tracing::warn!(code = %code, country = %country.name, "country code collision, keeping first");
            }
        }
        if !insert_first(&mut self.id_index, country.id, pos) {
            tracing::warn!(id = country.id, "duplicate country id, keeping first");
        }

        push_unique(&mut self.by_region, &country.region, pos);
        push_unique(&mut self.by_subregion, &country.subregion, pos);
        push_unique(&mut self.by_currency, &country.currency, pos);
        push_unique(&mut self.by_phone_code, &country.phone_code, pos);
        for tz in &country.timezones {
            push_unique(&mut self.by_timezone, &tz.zone_name, pos);
        }
    }

    /// Country position for an already upper-cased iso2/iso3 code.
    pub(crate) fn country_by_code(&self, normalized: &str) -> Option<usize> {
        self.code_index.get(normalized).copied()
    }

    pub(crate) fn country_by_id(&self, id: u32) -> Option<usize> {
        self.id_index.get(&id).copied()
    }

    pub(crate) fn state_by_id(&self, id: u32) -> Option<usize> {
        self.state_id_index.get(&id).copied()
    }

    /// State positions of a country id, in dataset order.
    pub(crate) fn states_of_country(&self, country_id: u32) -> &[usize] {
        self.states_by_country_id
            .get(&country_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Hierarchy entries carrying a country id, in dataset order.
    pub(crate) fn hierarchy_of_country(&self, country_id: u32) -> &[usize] {
        self.hierarchy_by_country_id
            .get(&country_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Hierarchy state nodes carrying a state id, in traversal order.
    pub(crate) fn hierarchy_of_state(&self, state_id: u32) -> &[HierarchyPos] {
        self.hierarchy_by_state_id
            .get(&state_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub(crate) fn countries_by_region(&self, region: &str) -> &[usize] {
        self.by_region.get(region).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn countries_by_subregion(&self, subregion: &str) -> &[usize] {
        self.by_subregion.get(subregion).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn countries_by_currency(&self, currency: &str) -> &[usize] {
        self.by_currency.get(currency).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn countries_by_phone_code(&self, phone_code: &str) -> &[usize] {
        self.by_phone_code.get(phone_code).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn countries_by_timezone(&self, zone_name: &str) -> &[usize] {
        self.by_timezone.get(zone_name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Language position for a stored (lowercase) code.
    pub(crate) fn language_by_code(&self, code: &str) -> Option<usize> {
        self.language_index.get(code).copied()
    }

    pub(crate) fn region_by_id(&self, id: &str) -> Option<usize> {
        self.region_id_index.get(id).copied()
    }
}
