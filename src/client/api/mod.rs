//! Provider trait definitions split by category
//!
//! Each remote source gets its own focused trait:
//! - [`CountryApi`] - country registry for a region
//! - [`CurrencyApi`] - latest exchange rates
//! - [`WeatherApi`] - current weather at a location
//! - [`NewsApi`] - latest news about a country
//!
//! Every method returns the raw payload untouched. `Ok(None)` means the
//! provider answered without usable data; `Err` is a transport failure.

mod country;
mod currency;
mod news;
mod weather;

pub use country::CountryApi;
pub use currency::CurrencyApi;
pub use news::NewsApi;
pub use weather::WeatherApi;

/// Raw response body as received from a provider
pub type Payload = Vec<u8>;
