//! Remote provider clients
//!
//! Providers are reached through the traits in [`api`]. The concrete HTTP
//! implementations live in [`providers`]; tests swap in the in-memory `MockProvider`.

pub mod api;
#[cfg(test)]
pub mod fixtures;
pub mod http;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod providers;

pub use api::{CountryApi, CurrencyApi, NewsApi, Payload, WeatherApi};
pub use http::HttpClient;
pub use providers::Providers;
