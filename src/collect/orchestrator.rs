//! Two-stage collection run
//!
//! Stage 1 refreshes the country list and the exchange rates side by side.
//! The location set is then read back from the country cache, and stage 2
//! refreshes weather and news for every location side by side.

use log::{debug, info, warn};
use serde::Serialize;
use std::sync::Arc;

use super::{
    CollectSummary, Collector, CountryCollector, CurrencyCollector, NewsCollector,
    WeatherCollector,
};
use crate::cache::{CacheStore, Category};
use crate::client::Providers;
use crate::client::models::LocationSet;
use crate::config::{Config, TtlConfig};

/// Outcome of one [`Orchestrator::run`]
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub country: CollectSummary,
    pub currency_rates: CollectSummary,
    pub weather: CollectSummary,
    pub news: CollectSummary,
    /// Locations derived from the country list after stage 1
    pub locations: usize,
}

impl RunSummary {
    pub fn categories(&self) -> [&CollectSummary; 4] {
        [&self.country, &self.currency_rates, &self.weather, &self.news]
    }
}

/// Owns one collector per category
pub struct Orchestrator {
    country: CountryCollector,
    currency: CurrencyCollector,
    weather: WeatherCollector,
    news: NewsCollector,
}

impl Orchestrator {
    /// Build every collector from configuration.
    ///
    /// With `force_refresh` every TTL is zero for this orchestrator, so each
    /// key is stale and refetched.
    pub fn new(
        config: &Config,
        store: Arc<CacheStore>,
        providers: Providers,
        force_refresh: bool,
    ) -> Self {
        let ttl = if force_refresh {
            TtlConfig::expired()
        } else {
            config.ttl
        };
        let max_concurrent = config.http.max_concurrent;

        Self {
            country: CountryCollector::new(
                store.clone(),
                ttl.for_category(Category::Country),
                providers.country,
            ),
            currency: CurrencyCollector::new(
                store.clone(),
                ttl.for_category(Category::CurrencyRates),
                providers.currency,
                config.collect.base_currency.clone(),
            ),
            weather: WeatherCollector::new(
                store.clone(),
                ttl.for_category(Category::Weather),
                providers.weather,
                max_concurrent,
            ),
            news: NewsCollector::new(
                store,
                ttl.for_category(Category::News),
                providers.news,
                max_concurrent,
            ),
        }
    }

    /// Refresh everything that is stale. Never fails; see the logs for
    /// per-key problems.
    pub async fn run(&self) -> RunSummary {
        let (currency_rates, country) =
            tokio::join!(self.currency.collect(&()), self.country.collect(&()));

        let locations = self.locations();
        debug!("Collecting weather and news for {} locations", locations.len());

        let (weather, news) = tokio::join!(
            self.weather.collect(&locations),
            self.news.collect(&locations)
        );

        let summary = RunSummary {
            country,
            currency_rates,
            weather,
            news,
            locations: locations.len(),
        };
        info!(
            "Collection finished: {} refreshed, {} kept stale",
            summary.categories().iter().map(|s| s.refreshed).sum::<usize>(),
            summary.categories().iter().map(|s| s.kept).sum::<usize>()
        );
        summary
    }

    /// Locations from the country cache, empty when it cannot be read
    pub fn locations(&self) -> LocationSet {
        match self.country.locations() {
            Ok(locations) => locations,
            Err(e) => {
                warn!("No locations available: {}", e);
                LocationSet::new()
            }
        }
    }

    pub fn country(&self) -> &CountryCollector {
        &self.country
    }

    pub fn currency(&self) -> &CurrencyCollector {
        &self.currency
    }

    pub fn weather(&self) -> &WeatherCollector {
        &self.weather
    }

    pub fn news(&self) -> &NewsCollector {
        &self.news
    }
}
