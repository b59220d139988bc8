//! Location join key shared by the per-place categories

use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;

/// A (country, capital, alpha-2 code) triple
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Location {
    country: String,
    capital: String,
    alpha2code: String,
}

/// Locations are kept ordered so every run visits them the same way
pub type LocationSet = BTreeSet<Location>;

#[derive(Debug, Error, PartialEq)]
#[error("alpha2code '{0}' must be exactly two characters")]
pub struct InvalidLocation(pub String);

impl Location {
    pub fn new(
        country: impl Into<String>,
        capital: impl Into<String>,
        alpha2code: impl Into<String>,
    ) -> Result<Self, InvalidLocation> {
        let alpha2code = alpha2code.into();
        if alpha2code.chars().count() != 2 {
            return Err(InvalidLocation(alpha2code));
        }
        Ok(Self {
            country: country.into(),
            capital: capital.into(),
            alpha2code,
        })
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn capital(&self) -> &str {
        &self.capital
    }

    pub fn alpha2code(&self) -> &str {
        &self.alpha2code
    }

    /// Weather sub-key source: `capital_alpha2code`
    pub fn weather_id(&self) -> String {
        format!("{}_{}", self.capital, self.alpha2code)
    }

    /// News sub-key source: the country name
    pub fn news_id(&self) -> &str {
        &self.country
    }

    /// City query understood by the weather provider
    pub fn weather_query(&self) -> String {
        format!("{},{}", self.capital, self.alpha2code)
    }
}
