//! Country list rows

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Country;
use crate::output::formatters::format_population;

/// One row of `geobrief countries`
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CountryDisplay {
    #[tabled(rename = "CODE")]
    pub alpha2code: String,

    #[tabled(rename = "COUNTRY")]
    pub name: String,

    #[tabled(rename = "CAPITAL")]
    pub capital: String,

    #[tabled(rename = "SUBREGION")]
    pub subregion: String,

    #[tabled(rename = "POPULATION")]
    pub population: String,
}

impl From<&Country> for CountryDisplay {
    fn from(country: &Country) -> Self {
        Self {
            alpha2code: country.alpha2code.clone(),
            name: country.name.clone(),
            capital: if country.capital.is_empty() {
                "-".to_string()
            } else {
                country.capital.clone()
            },
            subregion: country.subregion.clone(),
            population: format_population(country.population),
        }
    }
}
