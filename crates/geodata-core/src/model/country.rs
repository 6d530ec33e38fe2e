// crates/geodata-core/src/model/country.rs
use crate::text::parse_opt_f64;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A timezone entry attached to a country.
///
/// ```json
/// {
///   "zoneName": "Europe/Andorra",
///   "gmtOffset": 3600,
///   "gmtOffsetName": "UTC+01:00",
///   "abbreviation": "CET",
///   "tzName": "Central European Time"
/// }
/// ```
///
/// `zone_name` is the identity of a timezone: the global catalog keeps one
/// entry per zone name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timezone {
    pub zone_name: String,
    /// Offset from UTC in seconds.
    pub gmt_offset: i64,
    pub gmt_offset_name: String,
    pub abbreviation: String,
    pub tz_name: String,
}

/// A country entry.
///
/// Currency, region and timezone data are denormalized onto every country;
/// the currency/timezone catalogs and the region name sets are derived from
/// these fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: u32,
    pub name: String,
    pub iso3: String,
    pub iso2: String,
    #[serde(default)]
    pub numeric_code: String,
    /// Dialing code, digits only (no leading `+`).
    #[serde(default)]
    pub phone_code: String,
    #[serde(default)]
    pub capital: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub currency_name: String,
    #[serde(default)]
    pub currency_symbol: String,
    #[serde(default)]
    pub tld: String,
    #[serde(rename = "native", default)]
    pub native_name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub region_id: String,
    #[serde(default)]
    pub subregion: String,
    #[serde(default)]
    pub subregion_id: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub timezones: Vec<Timezone>,
    /// translations: { "de": "Andorra", "fr": "Andorre", ... }
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    /// Flag glyph.
    #[serde(default)]
    pub emoji: String,
    #[serde(rename = "emojiU", default)]
    pub emoji_u: String,
}

impl Country {
    /// Country display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ISO 3166-1 alpha-2 code as stored (e.g. "US").
    pub fn iso2(&self) -> &str {
        &self.iso2
    }

    /// ISO 3166-1 alpha-3 code as stored (e.g. "USA").
    pub fn iso3(&self) -> &str {
        &self.iso3
    }

    pub fn phone_code(&self) -> &str {
        &self.phone_code
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn subregion(&self) -> &str {
        &self.subregion
    }

    pub fn flag(&self) -> &str {
        &self.emoji
    }

    pub fn timezones(&self) -> &[Timezone] {
        &self.timezones
    }

    /// Translated name for a language code, if the dataset carries one.
    pub fn translation(&self, lang: &str) -> Option<&str> {
        self.translations.get(lang).map(String::as_str)
    }

    pub fn latitude(&self) -> Option<f64> {
        parse_opt_f64(self.latitude.as_deref())
    }

    pub fn longitude(&self) -> Option<f64> {
        parse_opt_f64(self.longitude.as_deref())
    }

    /// True if one of this country's timezones has the given zone name.
    pub fn has_timezone(&self, zone_name: &str) -> bool {
        self.timezones.iter().any(|tz| tz.zone_name == zone_name)
    }
}
