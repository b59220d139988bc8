//! Per-location news collector

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;

use super::{CollectSummary, Collector, Refresh, read_record, refresh_all, refresh_if_stale};
use crate::cache::{CacheKey, CacheStore, Category, Ttl};
use crate::client::NewsApi;
use crate::client::models::{Location, LocationSet, NewsFeed};
use crate::error::ReadError;

/// One cache key per country name
pub struct NewsCollector {
    store: Arc<CacheStore>,
    ttl: Ttl,
    api: Arc<dyn NewsApi>,
    max_concurrent: usize,
}

impl NewsCollector {
    pub fn new(
        store: Arc<CacheStore>,
        ttl: Ttl,
        api: Arc<dyn NewsApi>,
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
        CacheKey::scoped(Category::News, location.news_id())
    }

    fn refresh_location<'a>(&'a self, location: &'a Location) -> BoxFuture<'a, Refresh> {
        async move {
            let key = Self::key(location);
            refresh_if_stale(&self.store, &key, self.ttl, || {
                self.api.get_news(location.news_id())
            })
            .await
        }
        .boxed()
    }
}

#[async_trait]
impl Collector for NewsCollector {
    type Input = LocationSet;
    type Selector = Location;
    type Record = NewsFeed;

    fn category(&self) -> Category {
        Category::News
    }

    async fn collect(&self, locations: &LocationSet) -> CollectSummary {
        let refreshes: Vec<BoxFuture<'_, Refresh>> =
            locations.iter().map(|location| self.refresh_location(location)).collect();
        refresh_all(self.category(), refreshes, self.max_concurrent).await
    }

    fn read(&self, location: &Location) -> Result<NewsFeed, ReadError> {
        read_record(&self.store, &Self::key(location))
    }
}
