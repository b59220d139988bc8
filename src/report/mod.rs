//! Per-country report assembled from the cache
//!
//! Nothing here touches the network. Each optional section is read from its
//! collector independently, so one missing or malformed entry only blanks
//! its own section.

use serde::Serialize;

use crate::client::models::{Country, CurrencyRates, Location, NewsItem, WeatherInfo};
use crate::collect::{Collector, Orchestrator};
use crate::error::{Error, ReadError, Result};

pub const DEFAULT_NEWS_LIMIT: usize = 3;

/// A section that is either available or explains why not
pub type Section<T> = std::result::Result<T, ReadError>;

/// Everything known about one country
#[derive(Debug)]
pub struct LocationReport {
    pub country: Country,
    /// `None` for countries without a capital
    pub location: Option<Location>,
    /// Rates for the country's own currencies only
    pub currency_rates: Section<CurrencyRates>,
    pub weather: Section<WeatherInfo>,
    pub news: Section<Vec<NewsItem>>,
}

impl LocationReport {
    /// Resolve `query` against the cached country list and read every section.
    ///
    /// A missing or unreadable country list is an error; so is an unknown
    /// country. Other sections degrade individually.
    pub fn assemble(orchestrator: &Orchestrator, query: &str, news_limit: usize) -> Result<Self> {
        let country = orchestrator
            .country()
            .find(query)?
            .ok_or_else(|| Error::UnknownCountry(query.to_string()))?;

        let location = country.location().map_err(|source| ReadError::Decode {
            key: crate::collect::CountryCollector::key().to_string(),
            source,
        })?;

        let currency_rates = orchestrator
            .currency()
            .read(&())
            .map(|rates| own_currencies(&country, &rates));

        let (weather, news) = match &location {
            Some(location) => (
                orchestrator.weather().read(location),
                orchestrator.news().read(location).map(|feed| {
                    feed.items.into_iter().take(news_limit).collect::<Vec<_>>()
                }),
            ),
            None => (
                Err(no_capital("weather", &country)),
                Err(no_capital("news", &country)),
            ),
        };

        Ok(Self {
            country,
            location,
            currency_rates,
            weather,
            news,
        })
    }

    /// Serializable form with `data`/`error` per section
    pub fn view(&self) -> ReportView<'_> {
        ReportView {
            country: &self.country,
            location: self.location.as_ref(),
            currency_rates: SectionView::from(&self.currency_rates),
            weather: SectionView::from(&self.weather),
            news: SectionView::from(&self.news),
        }
    }
}

fn own_currencies(country: &Country, rates: &CurrencyRates) -> CurrencyRates {
    let codes = country.currencies.iter().map(|c| c.code.as_str());
    CurrencyRates {
        base: rates.base.clone(),
        date: rates.date,
        rates: rates.select(codes).into_iter().collect(),
    }
}

fn no_capital(section: &str, country: &Country) -> ReadError {
    ReadError::CacheMissing(format!("{} for {} (no capital)", section, country.name))
}

#[derive(Debug, Serialize)]
pub struct ReportView<'a> {
    pub country: &'a Country,
    pub location: Option<&'a Location>,
    pub currency_rates: SectionView<'a, CurrencyRates>,
    pub weather: SectionView<'a, WeatherInfo>,
    pub news: SectionView<'a, Vec<NewsItem>>,
}

#[derive(Debug, Serialize)]
pub struct SectionView<'a, T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a, T> From<&'a Section<T>> for SectionView<'a, T> {
    fn from(section: &'a Section<T>) -> Self {
        match section {
            Ok(data) => Self {
                data: Some(data),
                error: None,
            },
            Err(e) => Self {
                data: None,
                error: Some(e.to_string()),
            },
        }
    }
}
