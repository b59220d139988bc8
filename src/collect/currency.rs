//! Exchange rate collector

use async_trait::async_trait;
use std::sync::Arc;

use super::{CollectSummary, Collector, read_record, refresh_if_stale};
use crate::cache::{CacheKey, CacheStore, Category, Ttl};
use crate::client::CurrencyApi;
use crate::client::models::CurrencyRates;
use crate::error::ReadError;

/// Caches one rate table under a single key.
///
/// The base currency only shapes the request; changing it does not change
/// the key, so a table for the old base is served until it expires.
pub struct CurrencyCollector {
    store: Arc<CacheStore>,
    ttl: Ttl,
    api: Arc<dyn CurrencyApi>,
    base: String,
}

impl CurrencyCollector {
    pub fn new(
        store: Arc<CacheStore>,
        ttl: Ttl,
        api: Arc<dyn CurrencyApi>,
        base: impl Into<String>,
    ) -> Self {
        Self {
            store,
            ttl,
            api,
            base: base.into(),
        }
    }

    pub fn key() -> CacheKey {
        CacheKey::global(Category::CurrencyRates)
    }
}

#[async_trait]
impl Collector for CurrencyCollector {
    type Input = ();
    type Selector = ();
    type Record = CurrencyRates;

    fn category(&self) -> Category {
        Category::CurrencyRates
    }

    async fn collect(&self, _input: &()) -> CollectSummary {
        let mut summary = CollectSummary::new(self.category());
        let outcome = refresh_if_stale(&self.store, &Self::key(), self.ttl, || {
            self.api.get_rates(&self.base)
        })
        .await;
        summary.record(outcome);
        summary
    }

    fn read(&self, _selector: &()) -> Result<CurrencyRates, ReadError> {
        read_record(&self.store, &Self::key())
    }
}
