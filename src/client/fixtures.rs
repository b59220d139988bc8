//! Recorded provider payloads for tests
//!
//! Import via `use crate::client::fixtures::*` in test modules. Each constant
//! is a trimmed real response of the provider it stands in for.

#![allow(dead_code)]

use super::models::Location;

/// apilayer geo: `/geo/country/region/europe`, trimmed to one territory
pub const COUNTRIES_PAYLOAD: &str = r#"[
  {
    "name": "Aland",
    "capital": "Mariehamn",
    "latitude": 60.116667,
    "longitude": 19.9,
    "alpha2code": "AX",
    "alt_spellings": ["AX", "Aaland", "Aland", "Ahvenanmaa"],
    "currencies": [{"code": "EUR", "name": "Euro", "symbol": "€"}],
    "flag": "https://upload.wikimedia.org/wikipedia/commons/5/52/Flag_of_%C3%85land.svg",
    "area": 1580,
    "languages": [{"iso639_1": "sv", "name": "Swedish", "native_name": "svenska"}],
    "population": 28875,
    "subregion": "Northern Europe",
    "timezones": ["UTC+02:00"]
  }
]"#;

/// apilayer fixer: `/fixer/latest?base=rub`
pub const RATES_PAYLOAD: &str = r#"{
  "success": true,
  "timestamp": 1663177503,
  "base": "RUB",
  "date": "2022-09-14",
  "rates": {
    "EUR": 0.016503,
    "USD": 0.016496,
    "SEK": 0.177379
  }
}"#;

/// OpenWeatherMap: `/data/2.5/weather?q=Mariehamn,AX&units=metric`
pub const WEATHER_PAYLOAD: &str = r#"{
  "coord": {"lon": 19.9361, "lat": 60.0973},
  "weather": [{"id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d"}],
  "base": "stations",
  "main": {"temp": 13.92, "feels_like": 12.8, "pressure": 1023, "humidity": 54},
  "visibility": 10000,
  "wind": {"speed": 4.63, "deg": 240},
  "dt": 1677332220,
  "timezone": 7200,
  "name": "Mariehamn",
  "cod": 200
}"#;

/// NewsAPI: `/v2/everything?q=Aland&sortBy=publishedAt`
pub const NEWS_PAYLOAD: &str = r#"{
  "status": "ok",
  "totalResults": 2,
  "articles": [
    {
      "source": {"id": "abc-news", "name": "ABC News"},
      "author": "STEVE KARNOWSKI Associated Press",
      "title": "PolyMet mine in Minnesota becomes NewRange Copper Nickel again",
      "description": "The company behind the proposed PolyMet copper-nickel mine is changing its name.",
      "url": "https://abcnews.go.com/",
      "publishedAt": "2023-02-25T02:22:40Z"
    },
    {
      "source": {"id": null, "name": "Yle"},
      "author": null,
      "title": "Aland ferry traffic resumes after strike",
      "description": null,
      "url": "https://yle.fi/",
      "publishedAt": "2023-02-24T18:05:00Z"
    }
  ]
}"#;

/// The one location derived from [`COUNTRIES_PAYLOAD`]
pub fn aland() -> Location {
    Location::new("Aland", "Mariehamn", "AX").expect("fixture location is valid")
}

/// A location that never appears in [`COUNTRIES_PAYLOAD`]
pub fn sweden() -> Location {
    Location::new("Sweden", "Stockholm", "SE").expect("fixture location is valid")
}
