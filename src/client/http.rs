//! Shared HTTP layer for every provider

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::{debug, warn};
use reqwest::{Client, StatusCode};

use super::api::Payload;
use crate::config::HttpConfig;
use crate::error::{ApiError, Result};

const USER_AGENT: &str = concat!("geobrief/", env!("CARGO_PKG_VERSION"));

/// Rate-limited GET client returning raw bodies.
///
/// Cheap to clone; all clones share one connection pool and one limiter.
#[derive(Clone)]
pub struct HttpClient {
    http: Client,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl HttpClient {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let rate = NonZeroU32::new(config.requests_per_second).unwrap_or(NonZeroU32::MIN);
        let rate_limiter = Arc::new(RateLimiter::direct(Quota::per_second(rate)));

        Ok(Self { http, rate_limiter })
    }

    /// GET `url` and hand back the body.
    ///
    /// Any non-success status is logged and reported as `Ok(None)`. Only
    /// transport failures (connect, timeout, body read) are errors.
    pub async fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> Result<Option<Payload>> {
        self.rate_limiter.until_ready().await;

        let mut request = self.http.get(url).query(query);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        debug!("GET {}", url);
        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    warn!("{} rejected the API key ({})", url, status)
                }
                StatusCode::TOO_MANY_REQUESTS => warn!("{} is rate limiting requests", url),
                _ => warn!("{} returned {}", url, status),
            }
            return Ok(None);
        }

        let body = response.bytes().await.map_err(ApiError::from)?;
        debug!("{} returned {} bytes", url, body.len());
        Ok(Some(body.to_vec()))
    }
}
