//! Country registry models

use serde::{Deserialize, Serialize};

use super::{DecodeError, FromPayload, Location, LocationSet};

/// One entry of the country registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub name: String,

    /// Empty for territories without a capital
    #[serde(default)]
    pub capital: String,

    /// Capital latitude
    pub latitude: f64,

    /// Capital longitude
    pub longitude: f64,

    pub alpha2code: String,

    #[serde(default)]
    pub alt_spellings: Vec<String>,

    #[serde(default)]
    pub currencies: Vec<CurrencyInfo>,

    #[serde(default)]
    pub flag: String,

    /// Square kilometres, not reported for every territory
    #[serde(default)]
    pub area: Option<f64>,

    #[serde(default)]
    pub languages: Vec<Language>,

    pub population: u64,

    #[serde(default)]
    pub subregion: String,

    #[serde(default)]
    pub timezones: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    #[serde(default)]
    pub native_name: String,
}

impl Country {
    /// Case-insensitive match on name, alpha-2 code or any alternative spelling
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        self.name.to_lowercase() == query
            || self.alpha2code.to_lowercase() == query
            || self.alt_spellings.iter().any(|s| s.to_lowercase() == query)
    }

    /// The location this country contributes, if it has a capital
    pub fn location(&self) -> Result<Option<Location>, DecodeError> {
        if self.capital.trim().is_empty() {
            return Ok(None);
        }
        Location::new(&self.name, &self.capital, &self.alpha2code)
            .map(Some)
            .map_err(|e| DecodeError::new(format!("{}: {}", self.name, e)))
    }
}

impl FromPayload for Vec<Country> {
    fn from_payload(payload: &[u8]) -> Result<Self, DecodeError> {
        let countries: Vec<Country> = serde_json::from_slice(payload)?;
        for country in &countries {
            if country.alpha2code.chars().count() != 2 {
                return Err(DecodeError::new(format!(
                    "{}: alpha2code '{}' must be exactly two characters",
                    country.name, country.alpha2code
                )));
            }
        }
        Ok(countries)
    }
}

/// Derive the location set from a country list, skipping capital-less entries
pub fn locations_of(countries: &[Country]) -> Result<LocationSet, DecodeError> {
    let mut locations = LocationSet::new();
    for country in countries {
        match country.location()? {
            Some(location) => {
                locations.insert(location);
            }
            None => log::debug!("{} has no capital, no location derived", country.name),
        }
    }
    Ok(locations)
}
