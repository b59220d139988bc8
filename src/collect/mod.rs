//! Cache-first collectors, one per category
//!
//! A collector refreshes its category's cache entries when they are stale and
//! reads typed records back out. Refresh failures never propagate: whatever
//! was cached before stays in place and the failure is logged.

mod country;
mod currency;
mod news;
mod orchestrator;
mod weather;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use log::{debug, info, warn};
use serde::Serialize;
use std::future::Future;

pub use country::CountryCollector;
pub use currency::CurrencyCollector;
pub use news::NewsCollector;
pub use orchestrator::{Orchestrator, RunSummary};
pub use weather::WeatherCollector;

use crate::cache::{CacheKey, CacheStore, Category, Ttl};
use crate::client::Payload;
use crate::client::models::FromPayload;
use crate::error::{CacheError, ReadError, Result};

/// Shared contract of every category collector
#[async_trait]
pub trait Collector: Send + Sync {
    /// What `collect` needs to know which keys exist
    type Input: Send + Sync;
    /// Identifies one record for `read`
    type Selector: Send + Sync;
    /// Decoded record type
    type Record;

    fn category(&self) -> Category;

    /// Refresh every stale key. Never fails.
    async fn collect(&self, input: &Self::Input) -> CollectSummary;

    /// Decode the cached record, without touching the network
    fn read(&self, selector: &Self::Selector) -> std::result::Result<Self::Record, ReadError>;
}

/// What happened to one key during `collect`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// Within TTL, provider not called
    Fresh,
    /// New payload written
    Refreshed,
    /// Stale but the provider gave nothing usable; previous entry untouched
    Kept,
}

/// Per-category tally of one `collect` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectSummary {
    pub category: Category,
    pub fresh: usize,
    pub refreshed: usize,
    pub kept: usize,
}

impl CollectSummary {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            fresh: 0,
            refreshed: 0,
            kept: 0,
        }
    }

    pub fn record(&mut self, outcome: Refresh) {
        match outcome {
            Refresh::Fresh => self.fresh += 1,
            Refresh::Refreshed => self.refreshed += 1,
            Refresh::Kept => self.kept += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.fresh + self.refreshed + self.kept
    }
}

/// Refresh `key` through `fetch` if the cache says it is stale.
///
/// Only a usable payload is written. Absent, empty and failed responses all
/// leave the cached entry as it was.
pub(crate) async fn refresh_if_stale<F, Fut>(
    store: &CacheStore,
    key: &CacheKey,
    ttl: Ttl,
    fetch: F,
) -> Refresh
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Option<Payload>>>,
{
    if !store.is_stale(key, ttl) {
        debug!("{} is fresh", key);
        return Refresh::Fresh;
    }
    if store.exists(key).unwrap_or(false) {
        let age = store.age(key).map(|a| a.num_seconds()).unwrap_or_default();
        debug!("{} is stale ({}s old), refreshing", key, age);
    } else {
        debug!("{} is not cached yet, fetching", key);
    }

    match fetch().await {
        Ok(Some(payload)) if is_usable_payload(&payload) => match store.write(key, &payload) {
            Ok(()) => {
                info!("Refreshed {}", key);
                Refresh::Refreshed
            }
            Err(e) => {
                warn!("Could not store {}: {}", key, e);
                Refresh::Kept
            }
        },
        Ok(Some(_)) => {
            warn!("Provider returned an empty payload for {}, keeping cached data", key);
            Refresh::Kept
        }
        Ok(None) => {
            warn!("Provider returned no data for {}, keeping cached data", key);
            Refresh::Kept
        }
        Err(e) => {
            warn!("Refresh of {} failed, keeping cached data: {}", key, e);
            Refresh::Kept
        }
    }
}

/// Run per-key refreshes with at most `max_concurrent` in flight
pub(crate) async fn refresh_all<I>(
    category: Category,
    refreshes: I,
    max_concurrent: usize,
) -> CollectSummary
where
    I: IntoIterator,
    I::Item: Future<Output = Refresh>,
{
    stream::iter(refreshes)
        .buffer_unordered(max_concurrent.max(1))
        .fold(CollectSummary::new(category), |mut summary, outcome| async move {
            summary.record(outcome);
            summary
        })
        .await
}

/// Decode the payload cached under `key`
pub(crate) fn read_record<T: FromPayload>(
    store: &CacheStore,
    key: &CacheKey,
) -> std::result::Result<T, ReadError> {
    let payload = store.read(key).map_err(|e| match e {
        CacheError::NotFound(_) => ReadError::CacheMissing(key.to_string()),
        other => ReadError::Storage(other),
    })?;

    T::from_payload(&payload).map_err(|source| ReadError::Decode {
        key: key.to_string(),
        source,
    })
}

/// JSON `null`, `[]`, `{}` and non-JSON bodies carry nothing worth caching
pub(crate) fn is_usable_payload(payload: &[u8]) -> bool {
    match serde_json::from_slice::<serde_json::Value>(payload) {
        Ok(serde_json::Value::Null) => false,
        Ok(serde_json::Value::Array(items)) => !items.is_empty(),
        Ok(serde_json::Value::Object(fields)) => !fields.is_empty(),
        Ok(_) => true,
        Err(_) => false,
    }
}
