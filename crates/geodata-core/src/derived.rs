// crates/geodata-core/src/derived.rs

//! # Derived-View Builder
//!
//! Catalogs computed from denormalized per-country fields. All of them use
//! first-seen-wins deduplication: the output order is the order in which a
//! key first appears while scanning countries in dataset order, and a later
//! country sharing a key never overrides the stored entry.

use crate::model::{Country, Currency, Timezone};
use std::collections::HashSet;

/// Ordered, first-insertion-wins collector.
struct FirstSeen<'k, T> {
    seen: HashSet<&'k str>,
    out: Vec<T>,
}

impl<'k, T> FirstSeen<'k, T> {
    fn new() -> Self {
        FirstSeen {
            seen: HashSet::new(),
            out: Vec::new(),
        }
    }

    /// Inserts `make()` under `key` unless the key was seen before.
    fn offer(&mut self, key: &'k str, make: impl FnOnce() -> T) {
        if self.seen.insert(key) {
            self.out.push(make());
        }
    }

    fn finish(self) -> Vec<T> {
        self.out
    }
}

/// One [`Currency`] per distinct currency code.
///
/// Name and symbol come from the first country carrying the code.
pub fn unique_currencies(countries: &[Country]) -> Vec<Currency> {
    let mut acc = FirstSeen::new();
    for c in countries {
        acc.offer(c.currency.as_str(), || Currency::of(c));
    }
    acc.finish()
}

/// One [`Timezone`] per distinct zone name, first occurrence kept.
pub fn unique_timezones(countries: &[Country]) -> Vec<Timezone> {
    let mut acc = FirstSeen::new();
    for tz in countries.iter().flat_map(|c| c.timezones.iter()) {
        acc.offer(tz.zone_name.as_str(), || tz.clone());
    }
    acc.finish()
}

/// Distinct values of a string field, in first-occurrence order.
pub fn unique_strings<'a>(
    countries: &'a [Country],
    field: impl Fn(&'a Country) -> &'a str,
) -> Vec<&'a str> {
    let mut acc = FirstSeen::new();
    for c in countries {
        let v = field(c);
        acc.offer(v, || v);
    }
    acc.finish()
}
