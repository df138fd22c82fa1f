//! `countries`
//!
//! Static metadata for 247 countries and territories (name, capital, area,
//! coordinates and ISO 3166 / IOC codes) with case-insensitive lookup by
//! name or code.
//!
//! ```rust
//! use countries::LookupField;
//!
//! let cuba = countries::get(LookupField::Cioc, "cub").unwrap();
//! assert_eq!(cuba.name, "Cuba");
//! assert_eq!(countries::get(LookupField::Cca2, "CA").unwrap().name, "Canada");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One country record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Common English name
    pub name: String,
    /// Area in km²
    pub area: f64,
    /// IOC code; empty for territories without one
    pub cioc: String,
    /// ISO 3166-1 alpha-2 code
    pub cca2: String,
    /// ISO 3166-1 alpha-3 code
    pub cca3: String,
    /// Capital city; empty where there is none
    pub capital: String,
    /// Latitude of the country centre
    pub lat: f64,
    /// Longitude of the country centre
    pub lng: f64,
}

/// Key space a lookup searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupField {
    /// Country name
    Name,
    /// ISO alpha-2 code
    Cca2,
    /// ISO alpha-3 code
    Cca3,
    /// IOC code
    Cioc,
}

impl LookupField {
    /// All lookup fields.
    pub const ALL: [LookupField; 4] = [
        LookupField::Cioc,
        LookupField::Cca2,
        LookupField::Cca3,
        LookupField::Name,
    ];

    /// Field name as used in records.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LookupField::Name => "name",
            LookupField::Cca2 => "cca2",
            LookupField::Cca3 => "cca3",
            LookupField::Cioc => "cioc",
        }
    }

    fn key(self, country: &Country) -> &str {
        match self {
            LookupField::Name => &country.name,
            LookupField::Cca2 => &country.cca2,
            LookupField::Cca3 => &country.cca3,
            LookupField::Cioc => &country.cioc,
        }
    }
}

impl fmt::Display for LookupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown lookup field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown lookup field '{0}'. Must be one of: name, cca2, cca3, cioc")]
pub struct UnknownField(pub String);

impl FromStr for LookupField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LookupField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

static COUNTRIES: Lazy<Vec<Country>> = Lazy::new(load_table);

#[allow(clippy::expect_used)]
fn load_table() -> Vec<Country> {
    serde_json::from_str(include_str!("../data/countries.json"))
        .expect("embedded country table is valid")
}

static INDEXES: Lazy<HashMap<LookupField, HashMap<String, usize>>> = Lazy::new(|| {
    LookupField::ALL
        .into_iter()
        .map(|field| {
            let mut index = HashMap::with_capacity(COUNTRIES.len());
            for (i, country) in COUNTRIES.iter().enumerate() {
                let key = field.key(country).to_lowercase();
                // Later records replace earlier ones with the same key.
                if !key.is_empty() {
                    index.insert(key, i);
                }
            }
            (field, index)
        })
        .collect()
});

/// Every record in table order.
pub fn all() -> &'static [Country] {
    &COUNTRIES
}

/// Find the record whose `field` equals `symbol`, ignoring case.
pub fn get(field: LookupField, symbol: &str) -> Option<&'static Country> {
    let index = INDEXES.get(&field)?;
    index.get(&symbol.to_lowercase()).map(|&i| &COUNTRIES[i])
}
