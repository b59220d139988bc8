//! OpenWeatherMap current weather

use async_trait::async_trait;

use crate::client::HttpClient;
use crate::client::api::{Payload, WeatherApi};
use crate::client::models::Location;
use crate::error::{ApiError, Result};

pub struct WeatherClient {
    http: HttpClient,
    base_url: String,
    api_key: Option<String>,
}

impl WeatherClient {
    pub fn new(http: HttpClient, base_url: String, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl WeatherApi for WeatherClient {
    async fn get_weather(&self, location: &Location) -> Result<Option<Payload>> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(ApiError::MissingApiKey("weather"))?;
        let url = format!("{}/data/2.5/weather", self.base_url);
        let city = location.weather_query();
        let query = [("q", city.as_str()), ("units", "metric"), ("appid", key)];
        self.http.get(&url, &query, &[]).await
    }
}
