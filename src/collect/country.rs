//! Country list collector

use async_trait::async_trait;
use std::sync::Arc;

use super::{CollectSummary, Collector, read_record, refresh_if_stale};
use crate::cache::{CacheKey, CacheStore, Category, Ttl};
use crate::client::CountryApi;
use crate::client::models::{Country, LocationSet, locations_of};
use crate::error::ReadError;

/// Caches the whole country list for the configured region under one key
pub struct CountryCollector {
    store: Arc<CacheStore>,
    ttl: Ttl,
    api: Arc<dyn CountryApi>,
}

impl CountryCollector {
    pub fn new(store: Arc<CacheStore>, ttl: Ttl, api: Arc<dyn CountryApi>) -> Self {
        Self { store, ttl, api }
    }

    pub fn key() -> CacheKey {
        CacheKey::global(Category::Country)
    }

    /// Locations derived from the cached country list
    pub fn locations(&self) -> Result<LocationSet, ReadError> {
        let countries = self.read(&())?;
        locations_of(&countries).map_err(|source| ReadError::Decode {
            key: Self::key().to_string(),
            source,
        })
    }

    /// First cached country matching a name, alpha-2 code or alternative spelling
    pub fn find(&self, query: &str) -> Result<Option<Country>, ReadError> {
        Ok(self.read(&())?.into_iter().find(|c| c.matches(query)))
    }
}

#[async_trait]
impl Collector for CountryCollector {
    type Input = ();
    type Selector = ();
    type Record = Vec<Country>;

    fn category(&self) -> Category {
        Category::Country
    }

    async fn collect(&self, _input: &()) -> CollectSummary {
        let mut summary = CollectSummary::new(self.category());
        let outcome =
            refresh_if_stale(&self.store, &Self::key(), self.ttl, || self.api.get_countries())
                .await;
        summary.record(outcome);
        summary
    }

    fn read(&self, _selector: &()) -> Result<Vec<Country>, ReadError> {
        read_record(&self.store, &Self::key())
    }
}
