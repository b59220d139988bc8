//! Per-location weather collector

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;

use super::{CollectSummary, Collector, Refresh, read_record, refresh_all, refresh_if_stale};
use crate::cache::{CacheKey, CacheStore, Category, Ttl};
use crate::client::WeatherApi;
use crate::client::models::{Location, LocationSet, WeatherInfo};
use crate::error::ReadError;

/// One cache key per capital; each is refreshed on its own schedule
pub struct WeatherCollector {
    store: Arc<CacheStore>,
    ttl: Ttl,
    api: Arc<dyn WeatherApi>,
    max_concurrent: usize,
}

impl WeatherCollector {
    pub fn new(
        store: Arc<CacheStore>,
        ttl: Ttl,
        api: Arc<dyn WeatherApi>,
        max_concurrent: usize,
    ) -> Self {
        Self {
            store,
            ttl,
            api,
            max_concurrent,
        }
    }

    pub fn key(location: &Location) -> CacheKey {
        CacheKey::scoped(Category::Weather, &location.weather_id())
    }

    fn refresh_location<'a>(&'a self, location: &'a Location) -> BoxFuture<'a, Refresh> {
        async move {
            let key = Self::key(location);
            refresh_if_stale(&self.store, &key, self.ttl, || self.api.get_weather(location)).await
        }
        .boxed()
    }
}

#[async_trait]
impl Collector for WeatherCollector {
    type Input = LocationSet;
    type Selector = Location;
    type Record = WeatherInfo;

    fn category(&self) -> Category {
        Category::Weather
    }

    async fn collect(&self, locations: &LocationSet) -> CollectSummary {
        let refreshes: Vec<BoxFuture<'_, Refresh>> =
            locations.iter().map(|location| self.refresh_location(location)).collect();
        refresh_all(self.category(), refreshes, self.max_concurrent).await
    }

    fn read(&self, location: &Location) -> Result<WeatherInfo, ReadError> {
        read_record(&self.store, &Self::key(location))
    }
}
