//! NewsAPI `everything` search

use async_trait::async_trait;

use crate::client::HttpClient;
use crate::client::api::{NewsApi, Payload};
use crate::error::{ApiError, Result};

pub struct NewsClient {
    http: HttpClient,
    base_url: String,
    api_key: Option<String>,
}

impl NewsClient {
    pub fn new(http: HttpClient, base_url: String, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl NewsApi for NewsClient {
    async fn get_news(&self, country: &str) -> Result<Option<Payload>> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(ApiError::MissingApiKey("news"))?;
        let url = format!("{}/v2/everything", self.base_url);
        let query = [("q", country), ("sortBy", "publishedAt"), ("apiKey", key)];
        self.http.get(&url, &query, &[]).await
    }
}
