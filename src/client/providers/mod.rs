//! Concrete provider clients and their wiring from configuration

mod apilayer;
mod newsapi;
mod openweather;

use std::sync::Arc;

pub use apilayer::{CountryClient, CurrencyClient};
pub use newsapi::NewsClient;
pub use openweather::WeatherClient;

use super::HttpClient;
use super::api::{CountryApi, CurrencyApi, NewsApi, WeatherApi};
use crate::config::{Config, ProviderConfig};
use crate::error::Result;

pub const APILAYER_BASE_URL: &str = "https://api.apilayer.com";
pub const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";
pub const NEWSAPI_BASE_URL: &str = "https://newsapi.org";

/// One client per category, behind the provider traits
#[derive(Clone)]
pub struct Providers {
    pub country: Arc<dyn CountryApi>,
    pub currency: Arc<dyn CurrencyApi>,
    pub weather: Arc<dyn WeatherApi>,
    pub news: Arc<dyn NewsApi>,
}

impl Providers {
    /// Build the real HTTP providers. Missing API keys are not an error here;
    /// the affected client reports them on its first request.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = HttpClient::new(&config.http)?;
        let p = &config.providers;

        Ok(Self {
            country: Arc::new(CountryClient::new(
                http.clone(),
                base_url(&p.country, APILAYER_BASE_URL),
                p.country.api_key.clone(),
                config.collect.region.clone(),
            )),
            currency: Arc::new(CurrencyClient::new(
                http.clone(),
                base_url(&p.currency, APILAYER_BASE_URL),
                p.currency.api_key.clone(),
            )),
            weather: Arc::new(WeatherClient::new(
                http.clone(),
                base_url(&p.weather, OPENWEATHER_BASE_URL),
                p.weather.api_key.clone(),
            )),
            news: Arc::new(NewsClient::new(
                http,
                base_url(&p.news, NEWSAPI_BASE_URL),
                p.news.api_key.clone(),
            )),
        })
    }
}

fn base_url(provider: &ProviderConfig, default: &str) -> String {
    provider
        .base_url
        .as_deref()
        .unwrap_or(default)
        .trim_end_matches('/')
        .to_string()
}
