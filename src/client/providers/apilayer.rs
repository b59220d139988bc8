//! apilayer geo (countries) and fixer (exchange rates)

use async_trait::async_trait;
use log::warn;

use crate::client::HttpClient;
use crate::client::api::{CountryApi, CurrencyApi, Payload};
use crate::error::{ApiError, Result};

const KEY_HEADER: &str = "apikey";

pub struct CountryClient {
    http: HttpClient,
    base_url: String,
    api_key: Option<String>,
    region: String,
}

impl CountryClient {
    pub fn new(http: HttpClient, base_url: String, api_key: Option<String>, region: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
            region,
        }
    }
}

#[async_trait]
impl CountryApi for CountryClient {
    async fn get_countries(&self) -> Result<Option<Payload>> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(ApiError::MissingApiKey("country"))?;
        let url = format!("{}/geo/country/region/{}", self.base_url, self.region);
        self.http.get(&url, &[], &[(KEY_HEADER, key)]).await
    }
}

pub struct CurrencyClient {
    http: HttpClient,
    base_url: String,
    api_key: Option<String>,
}

impl CurrencyClient {
    pub fn new(http: HttpClient, base_url: String, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl CurrencyApi for CurrencyClient {
    async fn get_rates(&self, base: &str) -> Result<Option<Payload>> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(ApiError::MissingApiKey("currency"))?;
        let url = format!("{}/fixer/latest", self.base_url);
        let payload = self
            .http
            .get(&url, &[("base", base)], &[(KEY_HEADER, key)])
            .await?;

        Ok(payload.filter(|body| !reports_failure(body)))
    }
}

/// fixer answers some failures with 200 and `"success": false`
fn reports_failure(body: &[u8]) -> bool {
    let failed = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("success").and_then(|s| s.as_bool()))
        == Some(false);
    if failed {
        warn!("Currency provider reported failure: {}", String::from_utf8_lossy(body));
    }
    failed
}
