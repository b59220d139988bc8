//! Provider data models
//!
//! Typed records decoded from cached payloads. Only raw payloads are ever
//! persisted; these types are built on demand by a collector's `read` and
//! dropped by the caller.

mod country;
mod currency;
mod location;
mod news;
mod weather;

use thiserror::Error;

pub use country::{Country, locations_of};
pub use currency::CurrencyRates;
pub use location::{Location, LocationSet};
pub use news::{NewsFeed, NewsItem};
pub use weather::WeatherInfo;

/// A payload that does not match its category's schema
#[derive(Debug, Error)]
#[error("{0}")]
pub struct DecodeError(String);

impl DecodeError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self(err.to_string())
    }
}

/// Records that can be decoded from a raw provider payload
pub trait FromPayload: Sized {
    fn from_payload(payload: &[u8]) -> Result<Self, DecodeError>;
}
