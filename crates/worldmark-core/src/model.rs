// crates/worldmark-core/src/model.rs

//! # Country model
//!
//! Mirrors the restcountries v3.1 record shape. Everything beyond the handful
//! of fields the view pipeline touches (`name.common`, `cca3`, `region`,
//! `population`) is carried through untouched for display purposes.
//!
//! The dataset is immutable after load: records are never edited in place,
//! only superseded by a fresh load.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One country record as delivered by the upstream dataset.
///
/// All descriptive fields are optional with serde defaults so a sparse
/// payload never fails deserialization; only `name` and `cca3` are required.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    /// Unique 3-letter code, the stable key across sessions.
    pub cca3: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub currencies: Option<BTreeMap<String, Currency>>,
    #[serde(default)]
    pub languages: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub borders: Option<Vec<String>>,
    /// Latitude and longitude, when present.
    #[serde(default)]
    pub latlng: Option<[f64; 2]>,
    /// Land area in sq km.
    #[serde(default)]
    pub area: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
    #[serde(default)]
    pub native_name: Option<BTreeMap<String, NativeName>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NativeName {
    #[serde(default)]
    pub official: String,
    #[serde(default)]
    pub common: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Currency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

impl Country {
    /// Display name used for search matching and name-sort.
    pub fn name(&self) -> &str {
        &self.name.common
    }

    /// The stable 3-letter identifier.
    pub fn code(&self) -> &str {
        &self.cca3
    }

    /// Region as a plain string; empty when absent.
    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or("")
    }

    /// First listed capital, if any.
    pub fn capital(&self) -> Option<&str> {
        self.capital
            .as_deref()
            .and_then(|c| c.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_record() {
        let json = r#"{"name":{"common":"France","official":"French Republic"},"cca3":"FRA"}"#;
        let c: Country = serde_json::from_str(json).unwrap();
        assert_eq!(c.name(), "France");
        assert_eq!(c.code(), "FRA");
        assert_eq!(c.region(), "");
        assert_eq!(c.population, 0);
        assert!(c.capital().is_none());
    }

    #[test]
    fn deserializes_nested_fields() {
        let json = r#"{
            "name": {"common": "Germany", "official": "Federal Republic of Germany",
                     "nativeName": {"deu": {"official": "Bundesrepublik Deutschland", "common": "Deutschland"}}},
            "cca3": "DEU",
            "region": "Europe",
            "subregion": "Western Europe",
            "capital": ["Berlin"],
            "population": 83240525,
            "flags": {"png": "https://flagcdn.com/w320/de.png", "svg": "https://flagcdn.com/de.svg"},
            "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
            "languages": {"deu": "German"},
            "borders": ["AUT", "BEL"],
            "latlng": [51.0, 9.0],
            "area": 357114.0
        }"#;
        let c: Country = serde_json::from_str(json).unwrap();
        assert_eq!(c.region(), "Europe");
        assert_eq!(c.capital(), Some("Berlin"));
        assert_eq!(c.population, 83_240_525);
        assert_eq!(c.currencies.as_ref().unwrap()["EUR"].name, "Euro");
    }
}
