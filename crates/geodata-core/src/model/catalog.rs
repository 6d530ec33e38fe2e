// crates/geodata-core/src/model/catalog.rs
use serde::{Deserialize, Serialize};

/// A world region (e.g. "Europe").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: String,
    pub name: String,
    /// Whether any country currently references this region.
    #[serde(default)]
    pub has_countries: bool,
}

/// A spoken language. `code` is the lowercase ISO identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
    #[serde(rename = "native", default)]
    pub native_name: String,
}

/// A currency, projected from the currency fields of a country.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
    pub symbol: String,
}

impl Currency {
    pub(crate) fn of(country: &super::Country) -> Self {
        Currency {
            code: country.currency.clone(),
            name: country.currency_name.clone(),
            symbol: country.currency_symbol.clone(),
        }
    }
}
