//! Local cache for provider responses
//!
//! Payloads are kept on disk exactly as the provider returned them, one file
//! per cache key under a per-category directory. A small SQLite index records
//! when each key was last written, which is what staleness is measured from.

pub mod key;
pub mod storage;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An independent data domain with its own provider and cache namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Country,
    CurrencyRates,
    Weather,
    News,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Country,
        Category::CurrencyRates,
        Category::Weather,
        Category::News,
    ];

    /// Stable identifier, also the namespace directory name
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Country => "country",
            Category::CurrencyRates => "currency_rates",
            Category::Weather => "weather",
            Category::News => "news",
        }
    }

    /// Inverse of [`Category::as_str`]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time-to-live in whole seconds.
///
/// Zero or negative means the entry is always stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ttl(i64);

impl Ttl {
    pub const ZERO: Ttl = Ttl(0);

    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> i64 {
        self.0
    }

    /// Whether every entry under this TTL must be refetched
    pub fn always_stale(&self) -> bool {
        self.0 <= 0
    }

    /// `None` when the TTL is too large to represent, i.e. never expires
    pub fn as_delta(&self) -> Option<TimeDelta> {
        TimeDelta::try_seconds(self.0)
    }
}

// Re-export main types
pub use key::CacheKey;
pub use storage::CacheStore;
