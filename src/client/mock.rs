//! Mock provider for testing
//!
//! Implements every provider trait from scripted replies so collectors and
//! the orchestrator can be tested without network access.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use super::Providers;
use super::api::{CountryApi, CurrencyApi, NewsApi, Payload, WeatherApi};
use super::fixtures::{COUNTRIES_PAYLOAD, NEWS_PAYLOAD, RATES_PAYLOAD, WEATHER_PAYLOAD};
use super::models::Location;
use crate::error::{ApiError, Result};

/// What a scripted endpoint answers with
#[derive(Debug, Clone)]
pub enum Reply {
    /// 200 with this body
    Body(Payload),
    /// Non-success status
    Absent,
    /// Transport failure
    Fail,
}

impl Reply {
    pub fn body(body: &str) -> Self {
        Reply::Body(body.as_bytes().to_vec())
    }

    fn into_result(self) -> Result<Option<Payload>> {
        match self {
            Reply::Body(body) => Ok(Some(body)),
            Reply::Absent => Ok(None),
            Reply::Fail => Err(ApiError::Network("mock transport failure".to_string()).into()),
        }
    }
}

/// Mock provider for testing.
///
/// Defaults to the recorded fixtures for every endpoint. Per-location replies
/// override the weather and news defaults.
///
/// # Example
/// ```ignore
/// let mock = Arc::new(MockProvider::new().with_countries(Reply::Absent).await);
/// let providers = mock.providers();
/// ```
pub struct MockProvider {
    countries: Arc<Mutex<Reply>>,
    rates: Arc<Mutex<Reply>>,
    /// Weather replies keyed by capital
    weather: Arc<Mutex<HashMap<String, Reply>>>,
    default_weather: Arc<Mutex<Reply>>,
    /// News replies keyed by country name
    news: Arc<Mutex<HashMap<String, Reply>>>,
    default_news: Arc<Mutex<Reply>>,
    /// Delay before the country list answers
    country_delay: Arc<Mutex<Option<Duration>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    call_count: Arc<Mutex<CallCounts>>,
    /// Every call in the order it started, e.g. `get_weather:Mariehamn,AX`
    call_log: Arc<Mutex<Vec<String>>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self {
            countries: Arc::new(Mutex::new(Reply::body(COUNTRIES_PAYLOAD))),
            rates: Arc::new(Mutex::new(Reply::body(RATES_PAYLOAD))),
            weather: Arc::new(Mutex::new(HashMap::new())),
            default_weather: Arc::new(Mutex::new(Reply::body(WEATHER_PAYLOAD))),
            news: Arc::new(Mutex::new(HashMap::new())),
            default_news: Arc::new(Mutex::new(Reply::body(NEWS_PAYLOAD))),
            country_delay: Arc::new(Mutex::new(None)),
            error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub get_countries: usize,
    pub get_rates: usize,
    pub get_weather: usize,
    pub get_news: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.get_countries + self.get_rates + self.get_weather + self.get_news
    }
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_countries(self, reply: Reply) -> Self {
        *self.countries.lock().await = reply;
        self
    }

    pub async fn with_rates(self, reply: Reply) -> Self {
        *self.rates.lock().await = reply;
        self
    }

    /// Reply for one capital only
    pub async fn with_weather_for(self, capital: &str, reply: Reply) -> Self {
        self.weather.lock().await.insert(capital.to_string(), reply);
        self
    }

    /// Reply for every capital without a specific one
    pub async fn with_default_weather(self, reply: Reply) -> Self {
        *self.default_weather.lock().await = reply;
        self
    }

    pub async fn with_news_for(self, country: &str, reply: Reply) -> Self {
        self.news.lock().await.insert(country.to_string(), reply);
        self
    }

    pub async fn with_default_news(self, reply: Reply) -> Self {
        *self.default_news.lock().await = reply;
        self
    }

    pub async fn with_country_delay(self, delay: Duration) -> Self {
        *self.country_delay.lock().await = Some(delay);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    pub async fn call_log(&self) -> Vec<String> {
        self.call_log.lock().await.clone()
    }

    /// Wire this mock into every provider slot
    pub fn providers(self: &Arc<Self>) -> Providers {
        Providers {
            country: self.clone(),
            currency: self.clone(),
            weather: self.clone(),
            news: self.clone(),
        }
    }

    async fn check_error(&self) -> Result<()> {
        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }
        Ok(())
    }

    async fn record(&self, call: String) {
        self.call_log.lock().await.push(call);
    }
}

#[async_trait]
impl CountryApi for MockProvider {
    async fn get_countries(&self) -> Result<Option<Payload>> {
        self.record("get_countries".to_string()).await;
        self.call_count.lock().await.get_countries += 1;
        self.check_error().await?;

        let delay = *self.country_delay.lock().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.record("get_countries:done".to_string()).await;

        self.countries.lock().await.clone().into_result()
    }
}

#[async_trait]
impl CurrencyApi for MockProvider {
    async fn get_rates(&self, base: &str) -> Result<Option<Payload>> {
        self.record(format!("get_rates:{}", base)).await;
        self.call_count.lock().await.get_rates += 1;
        self.check_error().await?;

        self.rates.lock().await.clone().into_result()
    }
}

#[async_trait]
impl WeatherApi for MockProvider {
    async fn get_weather(&self, location: &Location) -> Result<Option<Payload>> {
        self.record(format!("get_weather:{}", location.weather_query()))
            .await;
        self.call_count.lock().await.get_weather += 1;
        self.check_error().await?;

        let specific = self.weather.lock().await.get(location.capital()).cloned();
        let reply = match specific {
            Some(reply) => reply,
            None => self.default_weather.lock().await.clone(),
        };
        reply.into_result()
    }
}

#[async_trait]
impl NewsApi for MockProvider {
    async fn get_news(&self, country: &str) -> Result<Option<Payload>> {
        self.record(format!("get_news:{}", country)).await;
        self.call_count.lock().await.get_news += 1;
        self.check_error().await?;

        let specific = self.news.lock().await.get(country).cloned();
        let reply = match specific {
            Some(reply) => reply,
            None => self.default_news.lock().await.clone(),
        };
        reply.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::aland;

    #[tokio::test]
    async fn test_defaults_to_fixtures() {
        let mock = MockProvider::new();

        let countries = mock.get_countries().await.unwrap().unwrap();
        assert_eq!(countries, COUNTRIES_PAYLOAD.as_bytes());

        let weather = mock.get_weather(&aland()).await.unwrap().unwrap();
        assert_eq!(weather, WEATHER_PAYLOAD.as_bytes());
    }

    #[tokio::test]
    async fn test_error_consumed_after_one_call() {
        let mock = MockProvider::new()
            .with_error(ApiError::Network("down".to_string()))
            .await;

        assert!(mock.get_rates("rub").await.is_err());
        assert!(mock.get_rates("rub").await.is_ok());
        assert_eq!(mock.call_counts().await.get_rates, 2);
    }

    #[tokio::test]
    async fn test_per_location_overrides() {
        let mock = MockProvider::new()
            .with_weather_for("Mariehamn", Reply::Absent)
            .await
            .with_news_for("Aland", Reply::Fail)
            .await;

        assert!(mock.get_weather(&aland()).await.unwrap().is_none());
        assert!(mock.get_news("Aland").await.is_err());
        assert!(mock.get_news("Sweden").await.unwrap().is_some());

        let log = mock.call_log().await;
        assert_eq!(
            log,
            vec!["get_weather:Mariehamn,AX", "get_news:Aland", "get_news:Sweden"]
        );
    }
}
